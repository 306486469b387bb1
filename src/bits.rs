/*!

Owned bit sequences. Used for single codes as well as for whole encoded outputs.

Bits are kept in write order, the first pushed bit is the first bit of the code. `to_bytes` packs
them MSB first, the last byte is padded with zeros.

*/

use std::fmt;
use std::str::FromStr;

use crate::HuffError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bits {
    bits: Vec<bool>,
}

impl Bits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_bits: usize) -> Self {
        Bits {
            bits: Vec::with_capacity(num_bits),
        }
    }

    #[inline]
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    #[inline]
    pub fn extend_from(&mut self, other: &Bits) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// true if `self` is a prefix of `other`. Equal sequences are prefixes of each other.
    pub fn is_prefix_of(&self, other: &Bits) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// packs the bits MSB first into bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        // number of bits + 7 >> 3 == number of bytes, rounded up
        let mut out = vec![0_u8; (self.bits.len() + 7) >> 3];
        for (pos, bit) in self.bits.iter().enumerate() {
            if *bit {
                out[pos >> 3] |= 0x80 >> (pos & 7);
            }
        }
        out
    }
}

impl From<&[bool]> for Bits {
    fn from(bits: &[bool]) -> Self {
        Bits {
            bits: bits.to_vec(),
        }
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Bits {
    type Err = HuffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Bits::with_capacity(s.len());
        for ch in s.chars() {
            match ch {
                '0' => bits.push(false),
                '1' => bits.push(true),
                other => return Err(HuffError::InvalidBit(other)),
            }
        }
        Ok(bits)
    }
}
