// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! Implementation of [cid](https://github.com/ipld/cid) in Rust.
//!
//! Both the legacy CIDv0 (a bare sha2-256 multihash, written in base58btc)
//! and CIDv1 (version and codec framing, written in any multibase) are
//! supported.

#![deny(missing_docs)]

mod cid;
mod codec;
mod error;
mod prefix;
#[cfg(feature = "json")]
mod record;
mod specs;
mod to_cid;
mod varint;
mod version;

pub use multibase;
pub use multihash;

pub use multibase::Base;
pub use multihash::{Hash, Multihash};

pub use self::cid::Cid;
pub use self::codec::Codec;
pub use self::error::{CidError, Result};
pub use self::prefix::{new_prefix_v0, new_prefix_v1, Prefix};
#[cfg(feature = "json")]
pub use self::record::CidRecord;
pub use self::specs::CidSpecs;
pub use self::to_cid::ToCid;
pub use self::version::Version;

/// Log target of this crate.
pub const LOG_TARGET: &str = "cid";
