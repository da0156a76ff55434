// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! Base conversion for alphabets whose digits are not aligned to whole bytes.
//!
//! The input is read as one unsigned big-endian integer. Leading zero bytes
//! carry no weight in that integer, so each of them is written as one leading
//! zero symbol and restored one-for-one on decode.

use crate::error::{MultibaseError, Result};

const INVALID: u8 = 0xff;

/// Alphabet of a radix encoding, with its reverse lookup table.
#[derive(Clone, Debug)]
pub(crate) struct RadixAlphabet {
    symbols: Vec<u8>,
    lookup: [u8; 128],
}

impl RadixAlphabet {
    pub(crate) fn new(symbols: &str) -> Result<Self> {
        let radix = symbols.len();
        if radix < 2 || radix > 128 || !symbols.is_ascii() {
            return Err(MultibaseError::InvalidAlphabet(format!(
                "radix alphabet must hold 2 to 128 ascii symbols: {:?}",
                symbols
            )));
        }

        let mut lookup = [INVALID; 128];
        for (digit, symbol) in symbols.bytes().enumerate() {
            let slot = &mut lookup[symbol as usize];
            if *slot != INVALID {
                return Err(MultibaseError::InvalidAlphabet(format!(
                    "duplicate symbol {:?} in {:?}",
                    symbol as char, symbols
                )));
            }
            *slot = digit as u8;
        }

        Ok(RadixAlphabet {
            symbols: symbols.as_bytes().to_vec(),
            lookup,
        })
    }

    fn radix(&self) -> u32 {
        self.symbols.len() as u32
    }

    fn zero(&self) -> u8 {
        self.symbols[0]
    }

    pub(crate) fn encode(&self, input: &[u8]) -> String {
        let radix = self.radix();
        let zeros = input.iter().take_while(|&&byte| byte == 0).count();

        // Long division of the big-endian number by the radix; remainders
        // come out least significant digit first.
        let mut digits = Vec::with_capacity(input.len() * 2);
        let mut number = input[zeros..].to_vec();
        while !number.is_empty() {
            let mut remainder = 0u32;
            let mut quotient = Vec::with_capacity(number.len());
            for &byte in &number {
                let acc = (remainder << 8) | u32::from(byte);
                let q = acc / radix;
                remainder = acc % radix;
                if q != 0 || !quotient.is_empty() {
                    quotient.push(q as u8);
                }
            }
            digits.push(self.symbols[remainder as usize]);
            number = quotient;
        }

        let mut output = Vec::with_capacity(zeros + digits.len());
        output.resize(zeros, self.zero());
        output.extend(digits.iter().rev());
        // Every symbol was checked to be ascii on construction.
        output.into_iter().map(char::from).collect()
    }

    pub(crate) fn decode(&self, input: &str) -> Result<Vec<u8>> {
        let radix = self.radix();
        let zero = self.zero();
        let bytes = input.as_bytes();
        let zeros = bytes.iter().take_while(|&&symbol| symbol == zero).count();

        // Little-endian accumulator, multiplied by the radix for every digit.
        let mut number: Vec<u8> = Vec::with_capacity(bytes.len());
        for (position, &symbol) in bytes.iter().enumerate().skip(zeros) {
            let digit = self.digit(input, position, symbol)?;
            let mut carry = u32::from(digit);
            for byte in number.iter_mut() {
                carry += u32::from(*byte) * radix;
                *byte = carry as u8;
                carry >>= 8;
            }
            while carry > 0 {
                number.push(carry as u8);
                carry >>= 8;
            }
        }

        let mut output = vec![0u8; zeros];
        output.extend(number.iter().rev());
        Ok(output)
    }

    fn digit(&self, input: &str, position: usize, symbol: u8) -> Result<u8> {
        let digit = if symbol < 128 {
            self.lookup[symbol as usize]
        } else {
            INVALID
        };
        if digit != INVALID {
            return Ok(digit);
        }
        let character = input[position..].chars().next().unwrap_or(symbol as char);
        Err(MultibaseError::InvalidCharacter {
            character,
            position,
        })
    }
}
