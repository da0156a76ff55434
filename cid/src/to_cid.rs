// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use log::debug;
use multibase::Registry;
use multihash::Multihash;

use crate::cid::Cid;
use crate::error::{CidError, Result};
use crate::LOG_TARGET;

/// A trait for converting data into CID format.
pub trait ToCid {
    /// The only method for converting data into CID format in the trait.
    fn to_cid(&self) -> Result<Cid>;
}

impl ToCid for Vec<u8> {
    /// Create a Cid from a byte vector.
    #[inline]
    fn to_cid(&self) -> Result<Cid> {
        self.as_slice().to_cid()
    }
}

impl<'a> ToCid for &'a [u8] {
    #[inline]
    fn to_cid(&self) -> Result<Cid> {
        ToCid::to_cid(*self)
    }
}

impl ToCid for [u8] {
    /// Create a Cid from a byte slice.
    fn to_cid(&self) -> Result<Cid> {
        Cid::decode(self)
    }
}

impl ToCid for String {
    /// Create a Cid from an owned String.
    #[inline]
    fn to_cid(&self) -> Result<Cid> {
        self.as_str().to_cid()
    }
}

impl<'a> ToCid for &'a str {
    #[inline]
    fn to_cid(&self) -> Result<Cid> {
        ToCid::to_cid(*self)
    }
}

impl ToCid for str {
    fn to_cid(&self) -> Result<Cid> {
        static IPFS_DELIMETER: &str = "/ipfs/";

        let hash = match self.find(IPFS_DELIMETER) {
            Some(index) => &self[index + IPFS_DELIMETER.len()..],
            _ => self,
        };

        if hash.len() < 2 {
            return Err(CidError::InputTooShort);
        }

        let first = hash.chars().next().ok_or(CidError::InputTooShort)?;
        if Registry::global().base_of(first).is_ok() {
            debug!(target: LOG_TARGET, "parse {} as multibase CID", hash);
            let (_, bytes) = multibase::decode(hash)?;
            Cid::decode(&bytes)
        } else {
            // No multibase prefix, so it can only be the bare base58btc of a CIDv0.
            debug!(target: LOG_TARGET, "parse {} as CIDv0", hash);
            let bytes = multibase::decode_base58btc(hash)
                .map_err(|err| CidError::MalformedV0(err.to_string()))?;
            Cid::new_v0(Multihash::from_bytes(bytes)?)
        }
    }
}

impl std::str::FromStr for Cid {
    type Err = CidError;

    fn from_str(src: &str) -> Result<Self> {
        src.to_cid()
    }
}
