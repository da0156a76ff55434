// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use blake2::digest::consts::{U16, U32};
use blake2::{Blake2b, Blake2s};
use sha2::{Digest, Sha256, Sha512};

use crate::error::{MultihashError, Result};
use crate::Multihash;

macro_rules! build_hash_enum {
    {$( #[$attr:meta] $code:literal, $size:literal, $name:literal => $hash:ident, )*} => {
        /// List of hash functions of the multihash table.
        #[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
        pub enum Hash {
            $( #[$attr] $hash, )*
        }

        impl Hash {
            /// Get the code corresponding to the hash function.
            pub fn code(&self) -> u64 {
                match self {
                    $( Self::$hash => $code, )*
                }
            }

            /// Get the default digest length in bytes; zero for identity,
            /// whose digest is the input itself.
            pub fn size(&self) -> usize {
                match self {
                    $( Self::$hash => $size, )*
                }
            }

            /// Get the name of the hash function in the multihash table.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Self::$hash => $name, )*
                }
            }

            /// Convert a code to the matching hash function.
            pub fn from_code(code: u64) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$hash), )*
                    _ => None,
                }
            }
        }
    }
}

build_hash_enum! {
    /// Identity (the digest is the input).
    0x00, 0, "identity" => Identity,
    /// SHA-1.
    0x11, 20, "sha1" => SHA1,
    /// SHA-256.
    0x12, 32, "sha2-256" => SHA2256,
    /// SHA-512.
    0x13, 64, "sha2-512" => SHA2512,
    /// SHA3-512.
    0x14, 64, "sha3-512" => SHA3512,
    /// SHA3-384.
    0x15, 48, "sha3-384" => SHA3384,
    /// SHA3-256.
    0x16, 32, "sha3-256" => SHA3256,
    /// SHA3-224.
    0x17, 28, "sha3-224" => SHA3224,
    /// Keccak-224.
    0x1a, 28, "keccak-224" => Keccak224,
    /// Keccak-256.
    0x1b, 32, "keccak-256" => Keccak256,
    /// Keccak-384.
    0x1c, 48, "keccak-384" => Keccak384,
    /// Keccak-512.
    0x1d, 64, "keccak-512" => Keccak512,
    /// BLAKE2b with 256 bit output.
    0xb220, 32, "blake2b-256" => Blake2b256,
    /// BLAKE2b with 512 bit output.
    0xb240, 64, "blake2b-512" => Blake2b512,
    /// BLAKE2s with 128 bit output.
    0xb250, 16, "blake2s-128" => Blake2s128,
    /// BLAKE2s with 256 bit output.
    0xb260, 32, "blake2s-256" => Blake2s256,
}

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Hash `input` with `hash` and frame the digest into a multihash.
///
/// Supported are identity, SHA2-256, SHA2-512, Blake2b-256 and Blake2s-128;
/// digests of any other function can be framed with [`Multihash::wrap`].
pub fn encode(hash: Hash, input: &[u8]) -> Result<Multihash> {
    let digest = match hash {
        Hash::Identity => input.to_vec(),
        Hash::SHA2256 => Sha256::digest(input).to_vec(),
        Hash::SHA2512 => Sha512::digest(input).to_vec(),
        Hash::Blake2b256 => Blake2b::<U32>::digest(input).to_vec(),
        Hash::Blake2s128 => Blake2s::<U16>::digest(input).to_vec(),
        _ => return Err(MultihashError::UnsupportedHash(hash.code())),
    };
    Ok(Multihash::wrap(hash.code(), &digest))
}
