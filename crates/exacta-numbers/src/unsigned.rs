//! Bounded non-negative integers.
//!
//! `UnsignedInt` lives in a signed 64-bit register and keeps it
//! non-negative. Addition and multiplication use checked arithmetic, so a
//! result that would wrap is reported as [`NumberError::Overflow`].

use std::fmt;
use std::str::FromStr;

use crate::{NumberError, ToReal};

/// A non-negative integer bounded by `i64::MAX`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UnsignedInt(i64);

impl UnsignedInt {
    /// The value 0.
    pub const ZERO: Self = Self(0);

    /// The largest representable value.
    pub const MAX: Self = Self(i64::MAX);

    /// Creates a new unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::NegativeValue`] if `value` is negative.
    pub fn new(value: i64) -> Result<Self, NumberError> {
        if value < 0 {
            return Err(NumberError::NegativeValue);
        }
        Ok(Self(value))
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Adds two values.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::Overflow`] if the sum exceeds `i64::MAX`.
    pub fn add(self, other: Self) -> Result<Self, NumberError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(NumberError::Overflow)
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::Underflow`] if `other > self`.
    pub fn sub(self, other: Self) -> Result<Self, NumberError> {
        if other.0 > self.0 {
            return Err(NumberError::Underflow);
        }
        Ok(Self(self.0 - other.0))
    }

    /// Multiplies two values.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::Overflow`] if the product exceeds `i64::MAX`.
    pub fn mul(self, other: Self) -> Result<Self, NumberError> {
        self.0
            .checked_mul(other.0)
            .map(Self)
            .ok_or(NumberError::Overflow)
    }

    /// Truncating integer division.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DivisionByZero`] if `other` is zero.
    pub fn div(self, other: Self) -> Result<Self, NumberError> {
        if other.0 == 0 {
            return Err(NumberError::DivisionByZero);
        }
        Ok(Self(self.0 / other.0))
    }
}

impl ToReal for UnsignedInt {
    #[allow(clippy::cast_precision_loss)]
    fn to_real(&self) -> f64 {
        self.0 as f64
    }
}

impl TryFrom<i64> for UnsignedInt {
    type Error = NumberError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnsignedInt> for i64 {
    fn from(value: UnsignedInt) -> Self {
        value.0
    }
}

impl FromStr for UnsignedInt {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.starts_with('+') {
            return Err(NumberError::InvalidFormat(text.to_owned()));
        }
        let value = text
            .parse::<i64>()
            .map_err(|e| NumberError::from_parse_int(&e, text))?;
        Self::new(value)
    }
}

impl fmt::Debug for UnsignedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnsignedInt({})", self.0)
    }
}

impl fmt::Display for UnsignedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
