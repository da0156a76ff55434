// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use multihash::{Multihash, MultihashError};

use crate::cid::{Cid, DAG_PB, SHA2_256};
use crate::error::{CidError, Result};
use crate::varint;
use crate::version::Version;

/// Shape of a binary CID, read from its header alone.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct CidSpecs {
    /// The version of CID.
    pub version: Version,
    /// The codec code of CID.
    pub codec: u64,
    /// The hash code of the multihash.
    pub multihash_code: u64,
    /// Length of the whole multihash, header included.
    pub multihash_size: usize,
    /// Length of the digest.
    pub digest_size: usize,
    /// Length of the whole CID.
    pub size: usize,
}

impl Cid {
    /// Inspect the header of a binary CID.
    ///
    /// Only the leading varints are read, so the digest may still be missing
    /// from `data`; use it to check the announced size of a CID before the
    /// rest has arrived.
    pub fn inspect_bytes(data: &[u8]) -> Result<CidSpecs> {
        let (first, rest) = varint::read_u64(data)?;
        let (version, codec, rest) = if first == SHA2_256 {
            (Version::V0, DAG_PB, data)
        } else {
            if first != u64::from(Version::V1) {
                return Err(CidError::InvalidCidVersion(first));
            }
            let (codec, rest) = varint::read_u64(rest)?;
            (Version::V1, codec, rest)
        };

        let header = Multihash::inspect(rest)?;
        let prefix_len = data.len() - rest.len();
        let size = prefix_len
            .checked_add(header.total_len())
            .ok_or(MultihashError::InvalidVarint)?;
        Ok(CidSpecs {
            version,
            codec,
            multihash_code: header.code,
            multihash_size: header.total_len(),
            digest_size: header.size,
            size,
        })
    }
}
