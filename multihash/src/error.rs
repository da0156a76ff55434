// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use thiserror::Error;

/// Type alias to use this library's [`MultihashError`] type in a `Result`.
pub type Result<T> = std::result::Result<T, MultihashError>;

/// Errors generated from this library.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum MultihashError {
    /// A varint of the header is overlong or overflows.
    #[error("Invalid varint in multihash header")]
    InvalidVarint,
    /// The input ends before the header or the digest is complete.
    #[error("Input too short")]
    InputTooShort,
    /// The declared digest length disagrees with the digest bytes.
    #[error("Declared digest length {declared} but got {actual} bytes")]
    LengthMismatch {
        /// Length written in the header.
        declared: usize,
        /// Length of the digest bytes that follow the header.
        actual: usize,
    },
    /// No hasher exists for the hash code.
    #[error("Unsupported hash code: {0:#x}")]
    UnsupportedHash(u64),
}

impl From<unsigned_varint::decode::Error> for MultihashError {
    fn from(err: unsigned_varint::decode::Error) -> Self {
        match err {
            unsigned_varint::decode::Error::Insufficient => MultihashError::InputTooShort,
            _ => MultihashError::InvalidVarint,
        }
    }
}
