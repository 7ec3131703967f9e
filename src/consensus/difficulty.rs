//! Proof-of-work targets
//!
//! Conversion between the compact `bits` encoding and the 256-bit target a
//! header hash must not exceed.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Shr;
use thiserror::Error;
use crate::crypto::Hash;

/// Compact bits that cannot be expanded into a usable target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompactError {
    #[error("compact target 0x{0:08x} has the sign bit set")]
    Negative(u32),
    #[error("compact target 0x{0:08x} overflows 256 bits")]
    Overflow(u32),
}

/// 256-bit target, big-endian
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Target(pub [u8; 32]);

impl Target {
    pub const ZERO: Target = Target([0u8; 32]);
    pub const MAX: Target = Target([0xff; 32]);

    /// Expand compact `bits` into a full target
    pub fn from_compact(bits: u32) -> Result<Self, CompactError> {
        let exponent = (bits >> 24) as isize;
        let mut mantissa = bits & 0x007fffff;

        if mantissa != 0 && bits & 0x00800000 != 0 {
            return Err(CompactError::Negative(bits));
        }

        if mantissa != 0
            && (exponent > 34
                || (mantissa > 0xff && exponent > 33)
                || (mantissa > 0xffff && exponent > 32))
        {
            return Err(CompactError::Overflow(bits));
        }

        let mut target = [0u8; 32];

        if exponent <= 3 {
            mantissa >>= 8 * (3 - exponent);
            target[29] = ((mantissa >> 16) & 0xff) as u8;
            target[30] = ((mantissa >> 8) & 0xff) as u8;
            target[31] = (mantissa & 0xff) as u8;
            return Ok(Target(target));
        }

        let mantissa_bytes = [
            ((mantissa >> 16) & 0xff) as u8,
            ((mantissa >> 8) & 0xff) as u8,
            (mantissa & 0xff) as u8,
        ];
        let start = 32 - exponent;
        for (i, byte) in mantissa_bytes.iter().enumerate() {
            let pos = start + i as isize;
            if (0..32).contains(&pos) {
                target[pos as usize] = *byte;
            }
        }

        Ok(Target(target))
    }

    /// Compress into compact `bits`
    pub fn to_compact(&self) -> u32 {
        let first_nonzero = match self.0.iter().position(|&b| b != 0) {
            Some(i) => i,
            None => return 0,
        };

        let mut size = (32 - first_nonzero) as u32;
        // Reading past the end pads short targets, same as shifting left
        let mut mantissa: u32 = 0;
        for i in 0..3 {
            mantissa <<= 8;
            if let Some(byte) = self.0.get(first_nonzero + i) {
                mantissa |= *byte as u32;
            }
        }

        // The sign bit must stay clear
        if mantissa & 0x00800000 != 0 {
            mantissa >>= 8;
            size += 1;
        }

        (size << 24) | mantissa
    }

    /// `hash <= target`, reading the hash as a 256-bit integer
    pub fn is_met_by(&self, hash: &Hash) -> bool {
        hash.to_be_bytes() <= self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Shr<u32> for Target {
    type Output = Target;

    fn shr(self, bits: u32) -> Target {
        if bits >= 256 {
            return Target::ZERO;
        }
        let byte_shift = (bits / 8) as usize;
        let bit_shift = bits % 8;
        let mut out = [0u8; 32];
        for i in (byte_shift..32).rev() {
            let src = i - byte_shift;
            let mut value = self.0[src] >> bit_shift;
            if bit_shift > 0 && src > 0 {
                value |= self.0[src - 1] << (8 - bit_shift);
            }
            out[i] = value;
        }
        Target(out)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Target({})", self.to_hex())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Target {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
