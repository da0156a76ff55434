// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use thiserror::Error;

/// Type alias to use this library's [`MultibaseError`] type in a `Result`.
pub type Result<T> = std::result::Result<T, MultibaseError>;

/// Errors generated from this library.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum MultibaseError {
    /// The byte sequence or text to convert is empty.
    #[error("Input is empty")]
    MissingInput,
    /// The leading character does not name any registered base.
    #[error("Unknown base code: {0:?}")]
    UnknownBase(char),
    /// The base is not part of the registry in use.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),
    /// A character outside the alphabet of the resolved base.
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the decoded payload.
        position: usize,
    },
    /// Length, padding or trailing bits do not form a valid base string.
    #[error("Invalid base string: {0}")]
    InvalidBaseString(String),
    /// Two registry entries claim the same prefix.
    #[error("Prefix {0:?} is registered more than once")]
    PrefixCollision(char),
    /// A base descriptor cannot be turned into a codec.
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),
}

impl MultibaseError {
    pub(crate) fn from_decode_error(input: &str, err: data_encoding::DecodeError) -> Self {
        if err.kind == data_encoding::DecodeKind::Symbol {
            if let Some(character) = input.get(err.position..).and_then(|rest| rest.chars().next()) {
                return MultibaseError::InvalidCharacter {
                    character,
                    position: err.position,
                };
            }
        }
        MultibaseError::InvalidBaseString(err.to_string())
    }
}
