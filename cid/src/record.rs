// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use std::convert::TryFrom;

use serde::de::{Deserialize, Deserializer, Error as ErrorT};
use serde::ser::{Serialize, Serializer};

use multihash::Multihash;

use crate::cid::Cid;
use crate::error::CidError;
use crate::version::Version;

/// Plain projection of a CID for JSON and similar formats.
#[derive(PartialEq, Eq, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CidRecord {
    /// The version number.
    pub version: u64,
    /// The codec code.
    pub codec: u64,
    /// The multihash bytes.
    pub hash: Vec<u8>,
}

impl From<&Cid> for CidRecord {
    fn from(cid: &Cid) -> Self {
        CidRecord {
            version: u64::from(cid.version()),
            codec: cid.codec(),
            hash: cid.multihash().as_bytes().to_vec(),
        }
    }
}

impl TryFrom<CidRecord> for Cid {
    type Error = CidError;

    fn try_from(record: CidRecord) -> Result<Self, Self::Error> {
        let version = Version::from(record.version)?;
        let hash = Multihash::from_bytes(record.hash)?;
        Cid::new(version, record.codec, hash)
    }
}

impl Serialize for Cid {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CidRecord::from(self).serialize(s)
    }
}

impl<'de> Deserialize<'de> for Cid {
    fn deserialize<D>(deserializer: D) -> Result<Cid, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = CidRecord::deserialize(deserializer)?;
        Cid::try_from(record)
            .map_err(|e| D::Error::custom(format!("Cid deserialize failed: {:}", e)))
    }
}
