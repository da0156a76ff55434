// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use std::collections::HashMap;

use log::{debug, trace};

use crate::base::Base;
use crate::encoding::{BaseSpec, Codec, Layout};
use crate::error::{MultibaseError, Result};
use crate::LOG_TARGET;

lazy_static::lazy_static! {
    static ref GLOBAL: Registry = {
        let specs = Base::ALL.iter().map(|&base| BaseSpec::from(base));
        let registry = Registry::new(specs).expect("default multibase table is consistent");
        debug!(target: LOG_TARGET, "multibase registry ready with {} encodings", registry.len());
        registry
    };
}

#[derive(Debug)]
struct Entry {
    spec: BaseSpec,
    codec: Codec,
}

/// Immutable table mapping prefixes and bases to their codecs.
///
/// Lookups never mutate the table, so one registry can serve any number of
/// threads at once.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<Entry>,
    by_base: HashMap<Base, usize>,
    by_prefix: HashMap<char, usize>,
}

impl Registry {
    /// Build a registry from base descriptors.
    ///
    /// Fails if two descriptors share a prefix or a base, or if a descriptor
    /// does not describe a valid alphabet.
    pub fn new<I: IntoIterator<Item = BaseSpec>>(specs: I) -> Result<Self> {
        let mut registry = Registry {
            entries: Vec::new(),
            by_base: HashMap::new(),
            by_prefix: HashMap::new(),
        };
        for spec in specs {
            if registry.by_prefix.contains_key(&spec.prefix) {
                return Err(MultibaseError::PrefixCollision(spec.prefix));
            }
            if registry.by_base.contains_key(&spec.base) {
                return Err(MultibaseError::InvalidAlphabet(format!(
                    "{} is registered more than once",
                    spec.name()
                )));
            }
            let codec = Codec::new(&spec)?;
            let index = registry.entries.len();
            registry.by_prefix.insert(spec.prefix, index);
            registry.by_base.insert(spec.base, index);
            registry.entries.push(Entry { spec, codec });
        }
        Ok(registry)
    }

    /// The registry holding every base of the multibase table.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Number of registered encodings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no encoding.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The registered descriptors, in registration order.
    pub fn specs(&self) -> impl Iterator<Item = &BaseSpec> {
        self.entries.iter().map(|entry| &entry.spec)
    }

    /// The descriptor registered for `base`.
    pub fn spec(&self, base: Base) -> Result<&BaseSpec> {
        self.entry(base).map(|entry| &entry.spec)
    }

    /// Returns the base registered under the prefix `code`.
    pub fn base_of(&self, code: char) -> Result<Base> {
        self.by_prefix
            .get(&code)
            .map(|&index| self.entries[index].spec.base)
            .ok_or(MultibaseError::UnknownBase(code))
    }

    fn entry(&self, base: Base) -> Result<&Entry> {
        self.by_base
            .get(&base)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| MultibaseError::UnsupportedEncoding(base.name().to_string()))
    }

    /// Encode `input` with `base` and put the prefix of `base` in front.
    pub fn encode<I: AsRef<[u8]>>(&self, base: Base, input: I) -> Result<String> {
        let input = input.as_ref();
        if input.is_empty() {
            return Err(MultibaseError::MissingInput);
        }
        let entry = self.entry(base)?;
        let mut encoded = entry.codec.encode(input);
        encoded.insert(0, entry.spec.prefix);
        Ok(encoded)
    }

    /// Encode `input` with `base`, without prefix.
    pub fn encode_raw<I: AsRef<[u8]>>(&self, base: Base, input: I) -> Result<String> {
        let input = input.as_ref();
        if input.is_empty() {
            return Err(MultibaseError::MissingInput);
        }
        Ok(self.entry(base)?.codec.encode(input))
    }

    /// Decode a prefixed base string, returning the matched base.
    pub fn decode<I: AsRef<str>>(&self, input: I) -> Result<(Base, Vec<u8>)> {
        let input = input.as_ref();
        let code = input.chars().next().ok_or(MultibaseError::MissingInput)?;
        let entry = self.entry(self.base_of(code)?)?;
        let payload = &input[code.len_utf8()..];
        if payload.is_empty() {
            return Err(MultibaseError::MissingInput);
        }
        let decoded = entry.codec.decode(payload)?;
        Ok((entry.spec.base, decoded))
    }

    /// Decode a base string that carries no prefix; the base is given out of band.
    pub fn decode_raw<I: AsRef<str>>(&self, base: Base, input: I) -> Result<Vec<u8>> {
        let input = input.as_ref();
        if input.is_empty() {
            return Err(MultibaseError::MissingInput);
        }
        self.entry(base)?.codec.decode(input)
    }

    /// Probe a prefixed base string without raising.
    ///
    /// Empty input, an unknown prefix or an invalid payload all yield `None`.
    pub fn try_decode<I: AsRef<str>>(&self, input: I) -> Option<(Base, Vec<u8>)> {
        self.decode(input).ok()
    }

    /// Probe a base string that may or may not carry a prefix.
    ///
    /// The prefixed reading wins when it decodes. Otherwise the whole string
    /// is tried against every registered encoding except identity, in
    /// registration order, and the first one that accepts it is returned.
    pub fn try_decode_any<I: AsRef<str>>(&self, input: I) -> Option<(Base, Vec<u8>)> {
        let input = input.as_ref();
        if let Some(decoded) = self.try_decode(input) {
            return Some(decoded);
        }
        self.entries
            .iter()
            .filter(|entry| entry.spec.layout != Layout::Identity)
            .find_map(|entry| match self.decode_raw(entry.spec.base, input) {
                Ok(decoded) => Some((entry.spec.base, decoded)),
                Err(err) => {
                    trace!(target: LOG_TARGET, "{} rejected unprefixed input: {}", entry.spec.name(), err);
                    None
                }
            })
    }
}
