// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use std::fmt;
use std::str::FromStr;

use crate::error::{MultibaseError, Result};
use crate::registry::Registry;

macro_rules! base_enum {
    ( $(#[$attr:meta] $code:literal, $name:literal => $base:ident,)* ) => {
        /// List of types currently supported in the multibase spec.
        #[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
        pub enum Base {
            $( #[$attr] $base, )*
        }

        impl Base {
            /// Every base, in registry order.
            pub const ALL: &'static [Base] = &[ $( Base::$base, )* ];

            /// Get the default prefix character of the base.
            pub fn code(&self) -> char {
                match self {
                    $( Self::$base => $code, )*
                }
            }

            /// Get the official multibase name of the base.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Self::$base => $name, )*
                }
            }

            /// Returns the base whose official name is `name`.
            pub fn from_name(name: &str) -> Result<Self> {
                match name {
                    $( $name => Ok(Self::$base), )*
                    _ => Err(MultibaseError::UnsupportedEncoding(name.to_string())),
                }
            }
        }
    }
}

base_enum! {
    /// 8-bit binary (encoder and decoder keeps data unmodified).
    '\0', "identity" => Identity,
    /// Base2 (alphabet: 01).
    '0', "base2" => Base2,
    /// Base8 (alphabet: 01234567).
    '7', "base8" => Base8,
    /// Base10 (alphabet: 0123456789).
    '9', "base10" => Base10,
    /// Base16 lower hexadecimal (alphabet: 0123456789abcdef).
    'f', "base16" => Base16Lower,
    /// Base16 upper hexadecimal (alphabet: 0123456789ABCDEF).
    'F', "base16upper" => Base16Upper,
    /// Base32, rfc4648 no padding (alphabet: abcdefghijklmnopqrstuvwxyz234567).
    'b', "base32" => Base32Lower,
    /// Base32, rfc4648 no padding (alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZ234567).
    'B', "base32upper" => Base32Upper,
    /// Base32, rfc4648 with padding (alphabet: abcdefghijklmnopqrstuvwxyz234567).
    'c', "base32pad" => Base32PadLower,
    /// Base32, rfc4648 with padding (alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZ234567).
    'C', "base32padupper" => Base32PadUpper,
    /// Base32hex, rfc4648 no padding (alphabet: 0123456789abcdefghijklmnopqrstuv).
    'v', "base32hex" => Base32HexLower,
    /// Base32hex, rfc4648 no padding (alphabet: 0123456789ABCDEFGHIJKLMNOPQRSTUV).
    'V', "base32hexupper" => Base32HexUpper,
    /// Base32hex, rfc4648 with padding (alphabet: 0123456789abcdefghijklmnopqrstuv).
    't', "base32hexpad" => Base32HexPadLower,
    /// Base32hex, rfc4648 with padding (alphabet: 0123456789ABCDEFGHIJKLMNOPQRSTUV).
    'T', "base32hexpadupper" => Base32HexPadUpper,
    /// z-base-32 (used by Tahoe-LAFS) (alphabet: ybndrfg8ejkmcpqxot1uwisza345h769).
    'h', "base32z" => Base32Z,
    /// Base58 bitcoin (alphabet: 123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz).
    'z', "base58btc" => Base58Btc,
    /// Base58 flicker (alphabet: 123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ).
    'Z', "base58flickr" => Base58Flickr,
    /// Base64, rfc4648 no padding (alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/).
    'm', "base64" => Base64,
    /// Base64, rfc4648 with padding (alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/).
    'M', "base64pad" => Base64Pad,
    /// Base64 url, rfc4648 no padding (alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_).
    'u', "base64url" => Base64Url,
    /// Base64 url, rfc4648 with padding (alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_).
    'U', "base64urlpad" => Base64UrlPad,
}

impl Base {
    /// Returns the base registered under the prefix `code`, or `Error` if no base is matching.
    pub fn from_code(code: char) -> Result<Self> {
        Registry::global().base_of(code)
    }

    /// Encode the given byte slice to base string, without prefix.
    pub fn encode<I: AsRef<[u8]>>(&self, input: I) -> Result<String> {
        Registry::global().encode_raw(*self, input)
    }

    /// Decode the base string, which must not carry a prefix.
    pub fn decode<I: AsRef<str>>(&self, input: I) -> Result<Vec<u8>> {
        Registry::global().decode_raw(*self, input)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Base {
    type Err = MultibaseError;

    fn from_str(s: &str) -> Result<Self> {
        Base::from_name(s)
    }
}
