//! SHA-256 as specified in FIPS 180-4.
//!
//! The whole message is hashed in one call; there is no incremental API.
//!
//! ```
//! let hash = fips_sha256::digest(b"abc");
//! assert_eq!(hash[..4], [0xba, 0x78, 0x16, 0xbf]);
//! ```

mod consts;
mod engine;
mod error;

pub use consts::{BLOCK_LEN, DIGEST_LEN, H_INIT as INITIAL_STATE, MAX_MESSAGE_LEN};
pub use engine::compress;
pub use error::Error;

use engine::{bit_length, Sha256};

/// Computes the SHA-256 digest of `message`.
///
/// # Panics
///
/// Panics if `message` is longer than [`MAX_MESSAGE_LEN`] bytes, which is
/// only reachable on targets with 64-bit (or wider) address spaces. Use
/// [`try_digest`] to get an error instead.
pub fn digest(message: &[u8]) -> [u8; DIGEST_LEN] {
    match try_digest(message) {
        Ok(hash) => hash,
        Err(err) => panic!("{}", err),
    }
}

/// Computes the SHA-256 digest of `message`, rejecting messages whose bit
/// length does not fit the 64-bit length field.
pub fn try_digest(message: &[u8]) -> Result<[u8; DIGEST_LEN], Error> {
    let bit_len = bit_length(message.len())?;

    let mut sha = Sha256::new();
    let remainder = sha.absorb(message);
    Ok(sha.finalize(remainder, bit_len))
}
