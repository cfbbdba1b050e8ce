use std::fmt;
use std::str::FromStr;

use crate::error::ParseIntegerError;

/// Arbitrary-precision signed integer.
///
/// Stored as a sign plus a big-endian magnitude without leading zero bytes.
/// Zero has an empty magnitude and is never negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Integer {
    negative: bool,
    magnitude: Vec<u8>,
}

impl Integer {
    /// The integer zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build a non-negative integer from a big-endian byte string.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self::from_parts(false, bytes.to_vec())
    }

    fn from_parts(negative: bool, mut magnitude: Vec<u8>) -> Self {
        let leading = magnitude.iter().take_while(|b| **b == 0).count();
        magnitude.drain(..leading);
        let negative = negative && !magnitude.is_empty();
        Self {
            negative,
            magnitude,
        }
    }

    /// Returns true for values below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Big-endian magnitude, without leading zero bytes.
    pub fn magnitude(&self) -> &[u8] {
        &self.magnitude
    }

    /// Number of significant bits in the magnitude (0 for zero).
    pub fn bits(&self) -> usize {
        match self.magnitude.first() {
            Some(first) => (self.magnitude.len() - 1) * 8 + (8 - first.leading_zeros() as usize),
            None => 0,
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Self {
                    Self::from_parts(false, value.to_be_bytes().to_vec())
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Self {
                    Self::from_parts(value < 0, value.unsigned_abs().to_be_bytes().to_vec())
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl FromStr for Integer {
    type Err = ParseIntegerError;

    /// Parse a decimal literal, or a hex literal with a `0x` prefix.
    /// A leading `-` or `+` sign is accepted for both.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseIntegerError(input.to_string());

        let trimmed = input.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        if let Some(hex_digits) = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            if hex_digits.is_empty() {
                return Err(invalid());
            }
            let padded = if hex_digits.len() % 2 == 1 {
                format!("0{hex_digits}")
            } else {
                hex_digits.to_string()
            };
            let magnitude = hex::decode(padded).map_err(|_| invalid())?;
            return Ok(Self::from_parts(negative, magnitude));
        }

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let mut magnitude = Vec::with_capacity(digits.len() / 2 + 1);
        for digit in digits.bytes() {
            mul_add_small(&mut magnitude, 10, u32::from(digit - b'0'));
        }
        Ok(Self::from_parts(negative, magnitude))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.magnitude.is_empty() {
            return f.write_str("0");
        }

        // Base 10^4 chunks, least significant first.
        let mut chunks = Vec::new();
        let mut rest = self.magnitude.clone();
        while !rest.is_empty() {
            let (quotient, remainder) = div_rem_small(&rest, 10_000);
            chunks.push(remainder);
            rest = Self::from_parts(false, quotient).magnitude;
        }

        let mut out = String::with_capacity(chunks.len() * 4 + 1);
        if self.negative {
            out.push('-');
        }
        let mut iter = chunks.iter().rev();
        if let Some(first) = iter.next() {
            out.push_str(&first.to_string());
        }
        for chunk in iter {
            out.push_str(&format!("{chunk:04}"));
        }
        f.write_str(&out)
    }
}

fn mul_add_small(magnitude: &mut Vec<u8>, mul: u32, add: u32) {
    let mut carry = add;
    for byte in magnitude.iter_mut().rev() {
        let acc = u32::from(*byte) * mul + carry;
        *byte = (acc & 0xff) as u8;
        carry = acc >> 8;
    }
    while carry > 0 {
        magnitude.insert(0, (carry & 0xff) as u8);
        carry >>= 8;
    }
}

fn div_rem_small(magnitude: &[u8], divisor: u32) -> (Vec<u8>, u32) {
    let mut quotient = Vec::with_capacity(magnitude.len());
    let mut remainder = 0u32;
    for byte in magnitude {
        let acc = (remainder << 8) | u32::from(*byte);
        quotient.push((acc / divisor) as u8);
        remainder = acc % divisor;
    }
    (quotient, remainder)
}
