// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use log::debug;
use multibase::Base;
use multihash::Multihash;

use crate::codec::Codec;
use crate::error::{CidError, Result};
use crate::prefix::Prefix;
use crate::to_cid::ToCid;
use crate::varint;
use crate::version::Version;
use crate::LOG_TARGET;

pub(crate) const DAG_PB: u64 = 0x70;
pub(crate) const SHA2_256: u64 = 0x12;
pub(crate) const SHA2_256_SIZE: usize = 32;

/// Representation of a CID.
///
/// Two CIDs are equal only if version, codec and multihash all are; a CIDv0
/// and its CIDv1 counterpart differ.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct Cid {
    /// The version of CID.
    version: Version,
    /// The codec of CID.
    codec: u64,
    /// The hash of CID.
    hash: Multihash,
}

impl Cid {
    /// Create a new CID.
    ///
    /// A CIDv0 must use the dag-pb codec.
    pub fn new<C: Into<u64>>(version: Version, codec: C, hash: Multihash) -> Result<Cid> {
        let codec = codec.into();
        if version == Version::V0 && codec != DAG_PB {
            return Err(CidError::InvalidV0Codec(codec));
        }
        Ok(Cid {
            version,
            codec,
            hash,
        })
    }

    /// A helper function to create CIDv0.
    pub fn new_v0(hash: Multihash) -> Result<Cid> {
        Cid::new(Version::V0, DAG_PB, hash)
    }

    /// A helper function to create CIDv1.
    pub fn new_v1<C: Into<u64>>(codec: C, hash: Multihash) -> Result<Cid> {
        Cid::new(Version::V1, codec, hash)
    }

    /// Create a new CID from raw data (binary or multibase encoded string)
    pub fn from<T: ToCid + ?Sized>(data: &T) -> Result<Cid> {
        data.to_cid()
    }

    /// Create a new CID from a prefix and some data.
    pub fn new_from_prefix(prefix: &Prefix, data: &[u8]) -> Result<Cid> {
        prefix.sum(data)
    }

    /// Decode a buffer holding exactly one CID.
    pub fn decode(data: &[u8]) -> Result<Cid> {
        let (cid, rest) = Cid::decode_first(data)?;
        if !rest.is_empty() {
            return Err(CidError::TrailingBytes(rest.len()));
        }
        Ok(cid)
    }

    /// Decode the CID at the front of `data`, returning it with the bytes after it.
    ///
    /// A leading sha2-256 code marks a CIDv0: the buffer starts with a bare
    /// multihash. Anything else must be a version 1 framing.
    pub fn decode_first(data: &[u8]) -> Result<(Cid, &[u8])> {
        let (first, rest) = varint::read_u64(data)?;
        if first == SHA2_256 {
            let (hash, rest) = Multihash::read(data)?;
            return Ok((Cid::new_v0(hash)?, rest));
        }

        if first != u64::from(Version::V1) {
            return Err(CidError::InvalidCidVersion(first));
        }
        let (codec, rest) = varint::read_u64(rest)?;
        let (hash, rest) = Multihash::read(rest)?;
        Ok((Cid::new_v1(codec, hash)?, rest))
    }

    /// Stringify the CID with the given base.
    ///
    /// A CIDv0 only has the bare base58btc form.
    pub fn to_string_of_base(&self, base: Base) -> Result<String> {
        match self.version {
            Version::V0 => {
                if base != Base::Base58Btc {
                    return Err(CidError::V0Base(base));
                }
                Ok(multibase::encode_base58btc(self.hash.as_bytes())?)
            }
            Version::V1 => Ok(multibase::encode(base, self.to_bytes())?),
        }
    }

    /// The base of the default text form.
    pub fn default_base(&self) -> Base {
        match self.version {
            Version::V0 => Base::Base58Btc,
            Version::V1 => Base::Base32Lower,
        }
    }

    /// Convert CID to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.version {
            Version::V0 => self.hash.as_bytes().to_vec(),
            Version::V1 => {
                let mut res = Vec::with_capacity(self.encoded_len());
                varint::write_u64(&mut res, u64::from(self.version));
                varint::write_u64(&mut res, self.codec);
                res.extend_from_slice(self.hash.as_bytes());
                res
            }
        }
    }

    /// Length of the binary form.
    pub fn encoded_len(&self) -> usize {
        match self.version {
            Version::V0 => self.hash.as_bytes().len(),
            Version::V1 => {
                varint::len_u64(u64::from(self.version))
                    + varint::len_u64(self.codec)
                    + self.hash.as_bytes().len()
            }
        }
    }

    /// Convert to CIDv0, which requires dag-pb and a sha2-256 multihash.
    pub fn to_v0(&self) -> Result<Cid> {
        if self.version == Version::V0 {
            return Ok(self.clone());
        }
        if self.codec != DAG_PB {
            debug!(target: LOG_TARGET, "refuse to convert {} to v0, codec {:#x}", self, self.codec);
            return Err(CidError::NonDagPbCodec(self.codec));
        }
        if self.hash.code() != SHA2_256 {
            debug!(target: LOG_TARGET, "refuse to convert {} to v0, hash code {:#x}", self, self.hash.code());
            return Err(CidError::NonSha256Multihash(self.hash.code()));
        }
        Cid::new_v0(self.hash.clone())
    }

    /// Convert to CIDv1, keeping codec and multihash.
    pub fn to_v1(&self) -> Cid {
        Cid {
            version: Version::V1,
            codec: self.codec,
            hash: self.hash.clone(),
        }
    }

    /// Return the prefix of the CID.
    pub fn prefix(&self) -> Prefix {
        Prefix {
            version: self.version,
            codec: self.codec,
            mh_type: self.hash.code(),
            mh_len: self.hash.size(),
        }
    }

    /// Return the version of CID.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Return the codec code of CID.
    pub fn codec(&self) -> u64 {
        self.codec
    }

    /// Return the well-known codec of CID, if the code is one.
    pub fn known_codec(&self) -> Result<Codec> {
        Codec::from(self.codec)
    }

    /// Return the multihash of CID.
    pub fn multihash(&self) -> &Multihash {
        &self.hash
    }
}

impl std::fmt::Display for Cid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let text = self
            .to_string_of_base(self.default_base())
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}
