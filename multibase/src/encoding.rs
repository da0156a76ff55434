// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use data_encoding::{Encoding, Specification};

use crate::base::Base;
use crate::error::{MultibaseError, Result};
use crate::radix::RadixAlphabet;

/// How the symbols of a base are derived from the input bytes.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Layout {
    /// Bytes are copied through unchanged.
    Identity,
    /// Fixed-width bit groups, most significant bit first (rfc4648).
    Rfc4648,
    /// The input is converted as a big-endian integer.
    Radix,
}

/// Immutable description of one base encoding.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct BaseSpec {
    /// The base this description belongs to.
    pub base: Base,
    /// The prefix character written in front of the encoded text.
    pub prefix: char,
    /// Ordered symbols; the position of a symbol is its digit value.
    pub symbols: &'static str,
    /// Padding character, if the output is padded to whole blocks.
    pub padding: Option<char>,
    /// Whether symbols of the other letter case are rejected.
    pub case_sensitive: bool,
    /// Conversion family.
    pub layout: Layout,
}

impl BaseSpec {
    /// The official name of the base.
    pub fn name(&self) -> &'static str {
        self.base.name()
    }

    /// Number of distinct digits. Identity is a pass-through over bytes.
    pub fn radix(&self) -> usize {
        match self.layout {
            Layout::Identity => 256,
            _ => self.symbols.chars().count(),
        }
    }

    /// Whether every digit maps to a whole number of bits.
    pub fn is_power_of_two(&self) -> bool {
        self.radix().is_power_of_two()
    }
}

impl From<Base> for BaseSpec {
    fn from(base: Base) -> Self {
        let (symbols, padding, layout) = match base {
            Base::Identity => ("", None, Layout::Identity),
            Base::Base2 => ("01", None, Layout::Rfc4648),
            // Octal digits are right-aligned in the official vectors.
            Base::Base8 => ("01234567", None, Layout::Radix),
            Base::Base10 => ("0123456789", None, Layout::Radix),
            Base::Base16Lower => ("0123456789abcdef", None, Layout::Rfc4648),
            Base::Base16Upper => ("0123456789ABCDEF", None, Layout::Rfc4648),
            Base::Base32Lower => (BASE32_LOWER, None, Layout::Rfc4648),
            Base::Base32Upper => (BASE32_UPPER, None, Layout::Rfc4648),
            Base::Base32PadLower => (BASE32_LOWER, Some('='), Layout::Rfc4648),
            Base::Base32PadUpper => (BASE32_UPPER, Some('='), Layout::Rfc4648),
            Base::Base32HexLower => (BASE32HEX_LOWER, None, Layout::Rfc4648),
            Base::Base32HexUpper => (BASE32HEX_UPPER, None, Layout::Rfc4648),
            Base::Base32HexPadLower => (BASE32HEX_LOWER, Some('='), Layout::Rfc4648),
            Base::Base32HexPadUpper => (BASE32HEX_UPPER, Some('='), Layout::Rfc4648),
            Base::Base32Z => ("ybndrfg8ejkmcpqxot1uwisza345h769", None, Layout::Rfc4648),
            Base::Base58Btc => (BASE58_BTC, None, Layout::Radix),
            Base::Base58Flickr => (BASE58_FLICKR, None, Layout::Radix),
            Base::Base64 => (BASE64, None, Layout::Rfc4648),
            Base::Base64Pad => (BASE64, Some('='), Layout::Rfc4648),
            Base::Base64Url => (BASE64_URL, None, Layout::Rfc4648),
            Base::Base64UrlPad => (BASE64_URL, Some('='), Layout::Rfc4648),
        };
        BaseSpec {
            base,
            prefix: base.code(),
            symbols,
            padding,
            case_sensitive: true,
            layout,
        }
    }
}

const BASE32_LOWER: &str = "abcdefghijklmnopqrstuvwxyz234567";
const BASE32_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const BASE32HEX_LOWER: &str = "0123456789abcdefghijklmnopqrstuv";
const BASE32HEX_UPPER: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";
const BASE58_BTC: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BASE58_FLICKR: &str = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";
const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const BASE64_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// The conversion engine built from a [`BaseSpec`].
#[derive(Clone, Debug)]
pub(crate) enum Codec {
    Identity,
    Rfc4648(Encoding),
    Radix(RadixAlphabet),
}

impl Codec {
    pub(crate) fn new(spec: &BaseSpec) -> Result<Self> {
        match spec.layout {
            Layout::Identity => Ok(Codec::Identity),
            Layout::Rfc4648 => make_encoding(spec).map(Codec::Rfc4648),
            Layout::Radix => {
                if spec.padding.is_some() {
                    return Err(MultibaseError::InvalidAlphabet(format!(
                        "{} cannot be padded",
                        spec.name()
                    )));
                }
                RadixAlphabet::new(spec.symbols).map(Codec::Radix)
            }
        }
    }

    pub(crate) fn encode(&self, input: &[u8]) -> String {
        match self {
            Codec::Identity => input.iter().map(|&byte| char::from(byte)).collect(),
            Codec::Rfc4648(encoding) => encoding.encode(input),
            Codec::Radix(alphabet) => alphabet.encode(input),
        }
    }

    pub(crate) fn decode(&self, input: &str) -> Result<Vec<u8>> {
        match self {
            Codec::Identity => decode_identity(input),
            Codec::Rfc4648(encoding) => encoding
                .decode(input.as_bytes())
                .map_err(|err| MultibaseError::from_decode_error(input, err)),
            Codec::Radix(alphabet) => alphabet.decode(input),
        }
    }
}

fn make_encoding(spec: &BaseSpec) -> Result<Encoding> {
    let mut specification = Specification::new();
    specification.symbols.push_str(spec.symbols);
    specification.padding = spec.padding;
    if !spec.case_sensitive {
        let other_case: String = spec
            .symbols
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();
        for (from, to) in other_case.chars().zip(spec.symbols.chars()) {
            if from != to {
                specification.translate.from.push(from);
                specification.translate.to.push(to);
            }
        }
    }
    specification
        .encoding()
        .map_err(|err| MultibaseError::InvalidAlphabet(format!("{}: {}", spec.name(), err)))
}

// Identity text holds one code point per byte.
fn decode_identity(input: &str) -> Result<Vec<u8>> {
    input
        .char_indices()
        .map(|(position, character)| {
            if (character as u32) <= 0xff {
                Ok(character as u32 as u8)
            } else {
                Err(MultibaseError::InvalidCharacter {
                    character,
                    position,
                })
            }
        })
        .collect()
}
