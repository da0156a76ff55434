// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use std::convert::TryFrom;

use multihash::{Hash, MultihashError};

use crate::cid::{Cid, DAG_PB, SHA2_256, SHA2_256_SIZE};
use crate::error::{CidError, Result};
use crate::varint;
use crate::version::Version;

/// Prefix represents all metadata of a CID, without the actual content.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Prefix {
    /// The version of CID.
    pub version: Version,
    /// The codec of CID.
    pub codec: u64,
    /// The hash code of CID.
    pub mh_type: u64,
    /// The hash length of CID.
    pub mh_len: usize,
}

impl Prefix {
    /// Create a new prefix from bytes.
    pub fn new_from_bytes(data: &[u8]) -> Result<Prefix> {
        let (raw_version, rest) = varint::read_u64(data)?;
        let (codec, rest) = varint::read_u64(rest)?;
        let (mh_type, rest) = varint::read_u64(rest)?;
        let (mh_len, rest) = varint::read_u64(rest)?;
        if !rest.is_empty() {
            return Err(CidError::TrailingBytes(rest.len()));
        }

        let version = Version::from(raw_version)?;
        let mh_len =
            usize::try_from(mh_len).map_err(|_| CidError::Multihash(MultihashError::InvalidVarint))?;

        Ok(Prefix {
            version,
            codec,
            mh_type,
            mh_len,
        })
    }

    /// Convert the prefix to bytes.
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(8);
        varint::write_u64(&mut res, u64::from(self.version));
        varint::write_u64(&mut res, self.codec);
        varint::write_u64(&mut res, self.mh_type);
        varint::write_u64(&mut res, self.mh_len as u64);
        res
    }

    /// Sum uses the information in a prefix to perform a multihash.Sum()
    /// and return a newly constructed CID with the resulting multihash.
    pub fn sum(&self, data: &[u8]) -> Result<Cid> {
        if self.version == Version::V0
            && (self.codec != DAG_PB || self.mh_type != SHA2_256 || self.mh_len != SHA2_256_SIZE)
        {
            return Err(CidError::InvalidV0Prefix);
        }

        let hash =
            Hash::from_code(self.mh_type).ok_or(MultihashError::UnsupportedHash(self.mh_type))?;
        let mh = multihash::encode(hash, data)?;
        Cid::new(self.version, self.codec, mh)
    }
}

/// A helper function to create the prefix of CIDv0.
pub fn new_prefix_v0(hash: Hash) -> Prefix {
    Prefix {
        version: Version::V0,
        codec: DAG_PB,
        mh_type: hash.code(),
        mh_len: hash.size(),
    }
}

/// A helper function to create the prefix of CIDv1.
pub fn new_prefix_v1<C: Into<u64>>(codec: C, hash: Hash) -> Prefix {
    Prefix {
        version: Version::V1,
        codec: codec.into(),
        mh_type: hash.code(),
        mh_len: hash.size(),
    }
}
