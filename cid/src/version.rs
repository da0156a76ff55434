// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::error::{CidError, Result};

/// The version of the CID.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Version {
    /// CIDv0: a bare sha2-256 multihash, no version or codec framing.
    V0,
    /// CIDv1.
    V1,
}

impl Version {
    /// Convert a number to the matching version, or `Error` if no valid version is matching.
    pub fn from(raw: u64) -> Result<Version> {
        match raw {
            0 => Ok(Version::V0),
            1 => Ok(Version::V1),
            _ => Err(CidError::InvalidCidVersion(raw)),
        }
    }

    /// Check if the string looks like the text form of a CIDv0.
    pub fn is_v0_str(data: &str) -> bool {
        // v0 is a Base58Btc encoded sha hash, so it has
        // fixed length and always begins with "Qm"
        data.len() == 46 && data.starts_with("Qm")
    }

    /// Check if the bytes look like the binary form of a CIDv0.
    pub fn is_v0_binary(data: &[u8]) -> bool {
        data.len() == 34 && data.starts_with(&[0x12, 0x20])
    }
}

impl From<Version> for u64 {
    fn from(ver: Version) -> u64 {
        match ver {
            Version::V0 => 0,
            Version::V1 => 1,
        }
    }
}
