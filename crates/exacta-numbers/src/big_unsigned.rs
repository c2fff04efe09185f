//! Arbitrary precision non-negative integers.
//!
//! This module provides a wrapper around `dashu::UBig`. Addition and
//! multiplication can never overflow; subtraction and division are
//! checked and report failures as [`NumberError`].

use dashu::base::{Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use num_traits::ToPrimitive;
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::{NumberError, ToReal};

/// An arbitrary precision non-negative integer.
///
/// The magnitude grows as needed, so the only failing operations are
/// subtraction below zero and division by zero.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BigUnsignedInt(UBig);

impl BigUnsignedInt {
    /// The value 0.
    pub const ZERO: Self = Self(UBig::ZERO);

    /// The value 1.
    pub const ONE: Self = Self(UBig::ONE);

    /// Creates a new value from a signed magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::NegativeValue`] if `value` is negative.
    pub fn new(value: IBig) -> Result<Self, NumberError> {
        if DashuSigned::is_negative(&value) {
            return Err(NumberError::NegativeValue);
        }
        Ok(Self(value.unsigned_abs()))
    }

    /// Returns true if this value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == UBig::ZERO
    }

    /// Returns a reference to the inner `dashu::UBig`.
    #[must_use]
    pub fn value(&self) -> &UBig {
        &self.0
    }

    /// Returns the inner `dashu::UBig`.
    #[must_use]
    pub fn into_inner(self) -> UBig {
        self.0
    }

    /// Adds two values.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self(&self.0 + &other.0)
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::NegativeResult`] if `other > self`.
    pub fn sub(&self, other: &Self) -> Result<Self, NumberError> {
        if other.0 > self.0 {
            return Err(NumberError::NegativeResult);
        }
        Ok(Self(&self.0 - &other.0))
    }

    /// Multiplies two values.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self(&self.0 * &other.0)
    }

    /// Truncating integer division.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DivisionByZero`] if `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Ok(Self(&self.0 / &other.0))
    }
}

impl ToReal for BigUnsignedInt {
    fn to_real(&self) -> f64 {
        self.0.to_f64().value()
    }
}

impl fmt::Debug for BigUnsignedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUnsignedInt({})", self.0)
    }
}

impl fmt::Display for BigUnsignedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BigUnsignedInt {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.starts_with('+') {
            return Err(NumberError::InvalidFormat(text.to_owned()));
        }
        let value = IBig::from_str_radix(text, 10)
            .map_err(|_| NumberError::InvalidFormat(text.to_owned()))?;
        Self::new(value)
    }
}

// Operator forms, on references only.
impl Add for &BigUnsignedInt {
    type Output = BigUnsignedInt;

    fn add(self, rhs: Self) -> Self::Output {
        BigUnsignedInt(&self.0 + &rhs.0)
    }
}

impl Mul for &BigUnsignedInt {
    type Output = BigUnsignedInt;

    fn mul(self, rhs: Self) -> Self::Output {
        BigUnsignedInt(&self.0 * &rhs.0)
    }
}

impl ToPrimitive for BigUnsignedInt {
    fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.clone().try_into().ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.to_real())
    }
}

impl From<u64> for BigUnsignedInt {
    fn from(value: u64) -> Self {
        Self(UBig::from(value))
    }
}

impl From<UBig> for BigUnsignedInt {
    fn from(value: UBig) -> Self {
        Self(value)
    }
}

impl TryFrom<IBig> for BigUnsignedInt {
    type Error = NumberError;

    fn try_from(value: IBig) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
