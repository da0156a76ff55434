// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! Implementation of [multihash](https://github.com/multiformats/multihash) in Rust.
//!
//! A multihash frames a digest as `varint(code) || varint(size) || digest`.
//! [`Multihash`] only frames and unframes that triple; the hashers behind
//! [`encode`] are supplied for convenience.

#![deny(missing_docs)]

mod error;
mod hash;

use std::convert::TryFrom;

use unsigned_varint::{decode, encode as varint};

pub use self::error::{MultihashError, Result};
pub use self::hash::{encode, Hash};

/// The header of a multihash, read without the digest.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Header {
    /// Hash function code.
    pub code: u64,
    /// Declared digest length.
    pub size: usize,
    /// Number of bytes taken by the two varints.
    pub header_len: usize,
}

impl Header {
    /// Total length of the multihash this header announces.
    ///
    /// Headers from [`Multihash::inspect`] never overflow here; hand-built
    /// ones saturate at `usize::MAX`.
    pub fn total_len(&self) -> usize {
        self.header_len.saturating_add(self.size)
    }
}

/// A self-describing digest.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct Multihash {
    code: u64,
    header_len: usize,
    bytes: Vec<u8>,
}

impl Multihash {
    /// Frame `digest` produced by the hash function `code`.
    pub fn wrap(code: u64, digest: &[u8]) -> Multihash {
        let mut code_buf = varint::u64_buffer();
        let mut size_buf = varint::usize_buffer();
        let code_bytes = varint::u64(code, &mut code_buf);
        let size_bytes = varint::usize(digest.len(), &mut size_buf);

        let header_len = code_bytes.len() + size_bytes.len();
        let mut bytes = Vec::with_capacity(header_len + digest.len());
        bytes.extend_from_slice(code_bytes);
        bytes.extend_from_slice(size_bytes);
        bytes.extend_from_slice(digest);
        Multihash {
            code,
            header_len,
            bytes,
        }
    }

    /// Read the header at the front of `data`; the digest need not be present.
    pub fn inspect(data: &[u8]) -> Result<Header> {
        let (code, rest) = decode::u64(data)?;
        let (size, rest) = decode::u64(rest)?;
        let size = usize::try_from(size).map_err(|_| MultihashError::InvalidVarint)?;
        let header_len = data.len() - rest.len();
        // The announced total must be addressable.
        header_len
            .checked_add(size)
            .ok_or(MultihashError::InvalidVarint)?;
        Ok(Header {
            code,
            size,
            header_len,
        })
    }

    /// Read one multihash from the front of `data`, returning the rest.
    pub fn read(data: &[u8]) -> Result<(Multihash, &[u8])> {
        let header = Multihash::inspect(data)?;
        if data.len() < header.total_len() {
            return Err(MultihashError::InputTooShort);
        }
        let (bytes, rest) = data.split_at(header.total_len());
        let multihash = Multihash {
            code: header.code,
            header_len: header.header_len,
            bytes: bytes.to_vec(),
        };
        Ok((multihash, rest))
    }

    /// Parse a buffer holding exactly one multihash.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Multihash> {
        let header = Multihash::inspect(&bytes)?;
        let actual = bytes.len() - header.header_len;
        if actual != header.size {
            return Err(MultihashError::LengthMismatch {
                declared: header.size,
                actual,
            });
        }
        Ok(Multihash {
            code: header.code,
            header_len: header.header_len,
            bytes,
        })
    }

    /// Hash function code.
    pub fn code(&self) -> u64 {
        self.code
    }

    /// Digest length.
    pub fn size(&self) -> usize {
        self.bytes.len() - self.header_len
    }

    /// The digest without header.
    pub fn digest(&self) -> &[u8] {
        &self.bytes[self.header_len..]
    }

    /// The well-known hash function behind the code, if any.
    pub fn algorithm(&self) -> Option<Hash> {
        Hash::from_code(self.code)
    }

    /// The framed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the multihash, returning the framed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for Multihash {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<Vec<u8>> for Multihash {
    type Error = MultihashError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Multihash::from_bytes(bytes)
    }
}
