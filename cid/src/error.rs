// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use thiserror::Error;

use multibase::{Base, MultibaseError};
use multihash::MultihashError;

/// Type alias to use this library's [`CidError`] type in a `Result`.
pub type Result<T> = std::result::Result<T, CidError>;

/// Errors generated from this library.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum CidError {
    /// Text form could not be decoded.
    #[error("Multibase error: {0}")]
    Multibase(#[from] MultibaseError),
    /// Multihash could not be read.
    #[error("Multihash error: {0}")]
    Multihash(#[from] MultihashError),

    /// Input too short.
    #[error("Input too short")]
    InputTooShort,
    /// Unrecognized CID version.
    #[error("Unrecognized CID version: {0}")]
    InvalidCidVersion(u64),
    /// Unknown multicodec code.
    #[error("Unknown codec: {0:#x}")]
    UnknownCodec(u64),

    /// CIDv0 was built with a codec other than dag-pb.
    #[error("Version 0 CID must use dag-pb (code: 112) block encoding, got {0:#x}")]
    InvalidV0Codec(u64),
    /// A string taken for a CIDv0 is not valid base58btc.
    #[error("Malformed CIDv0 string: {0}")]
    MalformedV0(String),
    /// Conversion to CIDv0 of a CID whose codec is not dag-pb.
    #[error("Cannot convert a non dag-pb CID to CIDv0, codec {0:#x}")]
    NonDagPbCodec(u64),
    /// Conversion to CIDv0 of a CID whose multihash is not sha2-256.
    #[error("Cannot convert non sha2-256 multihash CID to CIDv0, hash code {0:#x}")]
    NonSha256Multihash(u64),
    /// Bytes remain after a complete CID.
    #[error("{0} trailing bytes after CID")]
    TrailingBytes(usize),
    /// Prefix cannot produce a CIDv0.
    #[error("Invalid v0 prefix")]
    InvalidV0Prefix,
    /// CIDv0 has no multibase form other than bare base58btc.
    #[error("CIDv0 can only be encoded in base58btc, not {0}")]
    V0Base(Base),
}
