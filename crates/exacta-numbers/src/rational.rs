//! Canonical rational numbers over bounded integers.
//!
//! Rationals are always stored in lowest terms with a positive
//! denominator. Intermediate cross-products are formed in `i128`, where
//! every product of two `i64` (and the sum of two such products) fits, and
//! reduced before being narrowed back to `i64`. A reduced result that
//! still does not fit is reported as [`NumberError::Overflow`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{NumberError, ToReal};

/// Greatest common divisor of `|a|` and `|b|`, by Euclid's algorithm.
///
/// `gcd(0, b) == |b|`, and `gcd(0, 0) == 0`.
#[must_use]
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// A rational number `numerator / denominator` in canonical form.
///
/// Invariants: `denominator > 0` and `gcd(|numerator|, denominator) == 1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// The rational 0/1.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// The rational 1/1.
    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a new rational from numerator and denominator, reduced to
    /// lowest terms with a positive denominator.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DivisionByZero`] if the denominator is zero,
    /// or [`NumberError::Overflow`] if the canonical form does not fit in
    /// `i64` (only `i64::MIN` with a negative denominator can do that).
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, NumberError> {
        Self::from_wide(i128::from(numerator), i128::from(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// Canonicalises a wide fraction and narrows it to `i64`.
    fn from_wide(mut n: i128, mut d: i128) -> Result<Self, NumberError> {
        if d == 0 {
            return Err(NumberError::DivisionByZero);
        }
        if d < 0 {
            n = -n;
            d = -d;
        }

        // d > 0, so g >= 1
        let g = gcd_u128(n.unsigned_abs(), d.unsigned_abs());
        let g = i128::try_from(g).map_err(|_| NumberError::Overflow)?;
        let n = n / g;
        let d = d / g;

        Ok(Self {
            numerator: i64::try_from(n).map_err(|_| NumberError::Overflow)?,
            denominator: i64::try_from(d).map_err(|_| NumberError::Overflow)?,
        })
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns true if this rational is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    fn wide(&self) -> (i128, i128) {
        (i128::from(self.numerator), i128::from(self.denominator))
    }

    /// Adds two rationals.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::Overflow`] if the reduced sum does not fit.
    pub fn add(&self, other: &Self) -> Result<Self, NumberError> {
        let (an, ad) = self.wide();
        let (bn, bd) = other.wide();
        Self::from_wide(an * bd + bn * ad, ad * bd)
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::Overflow`] if the reduced difference does not fit.
    pub fn sub(&self, other: &Self) -> Result<Self, NumberError> {
        let (an, ad) = self.wide();
        let (bn, bd) = other.wide();
        Self::from_wide(an * bd - bn * ad, ad * bd)
    }

    /// Multiplies two rationals.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::Overflow`] if the reduced product does not fit.
    pub fn mul(&self, other: &Self) -> Result<Self, NumberError> {
        let (an, ad) = self.wide();
        let (bn, bd) = other.wide();
        Self::from_wide(an * bn, ad * bd)
    }

    /// Divides `self` by `other`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DivisionByZero`] if `other` is zero, or
    /// [`NumberError::Overflow`] if the reduced quotient does not fit.
    pub fn div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.numerator == 0 {
            return Err(NumberError::DivisionByZero);
        }
        let (an, ad) = self.wide();
        let (bn, bd) = other.wide();
        Self::from_wide(an * bd, ad * bn)
    }

    /// Returns `-self / other`, negating in the wide intermediate so that
    /// only an unrepresentable quotient fails.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DivisionByZero`] if `other` is zero, or
    /// [`NumberError::Overflow`] if the reduced quotient does not fit.
    pub fn neg_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.numerator == 0 {
            return Err(NumberError::DivisionByZero);
        }
        let (an, ad) = self.wide();
        let (bn, bd) = other.wide();
        Self::from_wide(-(an * bd), ad * bn)
    }

    /// Returns `-self`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::Overflow`] for a numerator of `i64::MIN`.
    pub fn neg(&self) -> Result<Self, NumberError> {
        let numerator = self
            .numerator
            .checked_neg()
            .ok_or(NumberError::Overflow)?;
        Ok(Self {
            numerator,
            denominator: self.denominator,
        })
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl ToReal for Rational {
    #[allow(clippy::cast_precision_loss)]
    fn to_real(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying preserves order.
        let (an, ad) = self.wide();
        let (bn, bd) = other.wide();
        (an * bd).cmp(&(bn * ad))
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = NumberError;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

fn parse_segment(segment: &str) -> Result<i64, NumberError> {
    let text = segment.trim();
    text.parse::<i64>()
        .map_err(|e| NumberError::from_parse_int(&e, text))
}

impl FromStr for Rational {
    type Err = NumberError;

    /// Parses `"n"` or `"n/d"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut parts = text.split('/');
        let numerator = parse_segment(parts.next().unwrap_or_default())?;
        let denominator = match parts.next() {
            Some(d) => parse_segment(d)?,
            None => 1,
        };
        if parts.next().is_some() {
            return Err(NumberError::InvalidFormat(text.to_owned()));
        }
        Self::new(numerator, denominator)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
