use thiserror::Error;

use crate::consts::MAX_MESSAGE_LEN;

/// Inputs the digest engine refuses to hash.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The bit length of the message does not fit the 64-bit length field.
    #[error("message of {len} bytes exceeds the SHA-256 input limit of {max} bytes", max = MAX_MESSAGE_LEN)]
    MessageTooLong { len: usize },
}
