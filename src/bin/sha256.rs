//! # sha256
//!
//! Prints the SHA-256 digest of a message argument or of a file's contents
//! as 64 lowercase hex characters.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sha256", version, about = "Compute the SHA-256 digest of a message")]
struct Cli {
    /// Message to hash, taken as its UTF-8 bytes.
    #[arg(required_unless_present = "file")]
    message: Option<String>,

    /// Hash the contents of this file instead of a message argument.
    #[arg(short, long, conflicts_with = "message")]
    file: Option<PathBuf>,
}

impl Cli {
    fn input(&self) -> anyhow::Result<Vec<u8>> {
        match (&self.message, &self.file) {
            (Some(message), _) => Ok(message.as_bytes().to_vec()),
            (None, Some(path)) => {
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))
            }
            (None, None) => anyhow::bail!("no message or file supplied"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let input = cli.input()?;
    tracing::debug!(len = input.len(), "hashing input");

    let hash = fips_sha256::try_digest(&input)?;
    println!("{}", hex::encode(hash));

    Ok(())
}
