//! Cosmos SDK arbitrary precision numbers as they appear on the wire.
//!
//! `Int` is a signed integer of at most 255 bits. `Dec` is a signed fixed
//! point number with 18 fractional digits, transported as the integer
//! `value * 10^18`.

use primitive_types::{U256, U512};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fractional digits of a `Dec`.
pub const DEC_PRECISION: usize = 18;

/// Largest bit length accepted for the magnitude of an `Int`.
const MAX_INT_BIT_LEN: usize = 255;

/// Largest bit length accepted for the scaled integer of a `Dec`.
const MAX_DEC_BIT_LEN: usize = MAX_INT_BIT_LEN + 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("failed to parse integer {0:?}")]
    InvalidInteger(String),

    #[error("integer out of range: {0}")]
    IntegerOutOfRange(String),

    #[error("failed to parse decimal {0:?}")]
    InvalidDecimal(String),

    #[error("decimal out of range; bitLen: got {bits}, max {max}")]
    DecimalOutOfRange { bits: usize, max: usize },
}

/// Split an optional sign from a run of ASCII digits.
fn split_sign(s: &str) -> Option<(bool, &str)> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((negative, digits))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Int {
    negative: bool,
    magnitude: U256,
}

impl Int {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }
}

impl FromStr for Int {
    type Err = NumericError;

    /// An empty string decodes to zero, as an unset protobuf field does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::zero());
        }
        let (negative, digits) =
            split_sign(s).ok_or_else(|| NumericError::InvalidInteger(s.to_string()))?;
        let magnitude = U256::from_dec_str(digits)
            .map_err(|_| NumericError::IntegerOutOfRange(s.to_string()))?;
        if magnitude.bits() > MAX_INT_BIT_LEN {
            return Err(NumericError::IntegerOutOfRange(s.to_string()));
        }
        Ok(Self {
            negative,
            magnitude,
        })
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dec {
    negative: bool,
    scaled: U512,
}

impl Dec {
    /// Parse the wire form: the decimal value multiplied by 10^18.
    pub fn from_scaled_str(s: &str) -> Result<Self, NumericError> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        let (negative, digits) =
            split_sign(s).ok_or_else(|| NumericError::InvalidDecimal(s.to_string()))?;
        let scaled =
            U512::from_dec_str(digits).map_err(|_| NumericError::InvalidDecimal(s.to_string()))?;
        if scaled.bits() > MAX_DEC_BIT_LEN {
            return Err(NumericError::DecimalOutOfRange {
                bits: scaled.bits(),
                max: MAX_DEC_BIT_LEN,
            });
        }
        Ok(Self { negative, scaled })
    }

    pub fn is_negative(&self) -> bool {
        self.negative && !self.scaled.is_zero()
    }
}

impl fmt::Display for Dec {
    /// Always renders all 18 fractional digits, e.g. `1.500000000000000000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.scaled.to_string();
        let padded = format!("{:0>width$}", digits, width = DEC_PRECISION + 1);
        let (integer, fraction) = padded.split_at(padded.len() - DEC_PRECISION);
        if self.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}.{}", integer, fraction)
    }
}
