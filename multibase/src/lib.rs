// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! # rust-multibase
//!
//! Implementation of [multibase](https://github.com/multiformats/multibase) in Rust.
//!
//! Every free function here runs against [`Registry::global`], the immutable
//! table holding every base of the multibase table.

#![deny(missing_docs)]

mod base;
mod encoding;
mod error;
mod radix;
mod registry;

pub use self::base::Base;
pub use self::encoding::{BaseSpec, Layout};
pub use self::error::{MultibaseError, Result};
pub use self::registry::Registry;

/// Log target of this crate.
pub const LOG_TARGET: &str = "multibase";

/// Decode the base string.
///
/// # Examples
///
/// ```
/// use rust_multibase::{Base, decode};
///
/// assert_eq!(
///     decode("zCn8eVZg").unwrap(),
///     (Base::Base58Btc, b"hello".to_vec()),
/// );
/// ```
pub fn decode<I: AsRef<str>>(input: I) -> Result<(Base, Vec<u8>)> {
    Registry::global().decode(input)
}

/// Decode the base string which carries no prefix, with the given base.
///
/// # Examples
///
/// ```
/// use rust_multibase::{Base, decode_raw};
///
/// assert_eq!(decode_raw(Base::Base16Lower, "68656c6c6f").unwrap(), b"hello".to_vec());
/// ```
pub fn decode_raw<I: AsRef<str>>(base: Base, input: I) -> Result<Vec<u8>> {
    Registry::global().decode_raw(base, input)
}

/// Encode the given byte slice to base string.
///
/// # Examples
///
/// ```
/// use rust_multibase::{Base, encode};
///
/// assert_eq!(encode(Base::Base58Btc, b"hello").unwrap(), "zCn8eVZg");
/// ```
pub fn encode<I: AsRef<[u8]>>(base: Base, input: I) -> Result<String> {
    Registry::global().encode(base, input)
}

/// Encode the given byte slice to base string, without prefix.
///
/// # Examples
///
/// ```
/// use rust_multibase::{Base, encode_raw};
///
/// assert_eq!(encode_raw(Base::Base58Btc, b"hello").unwrap(), "Cn8eVZg");
/// ```
pub fn encode_raw<I: AsRef<[u8]>>(base: Base, input: I) -> Result<String> {
    Registry::global().encode_raw(base, input)
}

/// Decode the base string, returning `None` instead of an error.
///
/// # Examples
///
/// ```
/// use rust_multibase::{Base, try_decode};
///
/// assert_eq!(try_decode("zCn8eVZg"), Some((Base::Base58Btc, b"hello".to_vec())));
/// assert_eq!(try_decode("Cn8eVZg"), None);
/// ```
pub fn try_decode<I: AsRef<str>>(input: I) -> Option<(Base, Vec<u8>)> {
    Registry::global().try_decode(input)
}

/// Decode the base string, with or without prefix, returning `None` if no
/// base accepts it.
///
/// # Examples
///
/// ```
/// use rust_multibase::{Base, try_decode_any};
///
/// assert_eq!(
///     try_decode_any("68656c6c6f"),
///     Some((Base::Base16Lower, b"hello".to_vec())),
/// );
/// ```
pub fn try_decode_any<I: AsRef<str>>(input: I) -> Option<(Base, Vec<u8>)> {
    Registry::global().try_decode_any(input)
}

/// Decode the base58btc string for CIDv0 specially.
///
/// # Examples
///
/// ```
/// use rust_multibase::decode_base58btc;
///
/// assert_eq!(
///     decode_base58btc("Cn8eVZg").unwrap(),
///     b"hello".to_vec(),
/// );
/// ```
pub fn decode_base58btc<I: AsRef<str>>(input: I) -> Result<Vec<u8>> {
    Base::Base58Btc.decode(input)
}

/// Encode the given byte slice to base58btc string for CIDv0 specially.
///
/// # Examples
///
/// ```
/// use rust_multibase::encode_base58btc;
///
/// assert_eq!(encode_base58btc(b"hello").unwrap(), "Cn8eVZg");
/// ```
pub fn encode_base58btc<I: AsRef<[u8]>>(input: I) -> Result<String> {
    Base::Base58Btc.encode(input)
}
