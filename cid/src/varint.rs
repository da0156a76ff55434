// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use unsigned_varint::{decode, encode};

use crate::error::{CidError, Result};

pub(crate) fn write_u64(buf: &mut Vec<u8>, n: u64) {
    let mut scratch = encode::u64_buffer();
    buf.extend_from_slice(encode::u64(n, &mut scratch));
}

pub(crate) fn len_u64(n: u64) -> usize {
    let mut scratch = encode::u64_buffer();
    encode::u64(n, &mut scratch).len()
}

pub(crate) fn read_u64(data: &[u8]) -> Result<(u64, &[u8])> {
    decode::u64(data).map_err(|err| match err {
        decode::Error::Insufficient => CidError::InputTooShort,
        other => CidError::Multihash(other.into()),
    })
}
