//! Dense univariate polynomials over `f64`.
//!
//! Coefficients are stored in ascending degree order and kept canonical:
//! every constructing operation ends with a trim of near-zero trailing
//! coefficients, and the zero polynomial is exactly `[0.0]`.

use std::fmt;
use std::str::FromStr;

use exacta_numbers::ToReal;

use crate::PolyError;

/// Magnitude below which a coefficient is treated as zero when trimming
/// and when rendering.
pub const COEFF_TOLERANCE: f64 = 1e-12;

/// Drops trailing near-zero coefficients, keeping at least one entry.
fn trim(mut coeffs: Vec<f64>) -> Vec<f64> {
    let mut last = coeffs.len().saturating_sub(1);
    while last > 0 && coeffs[last].abs() < COEFF_TOLERANCE {
        last -= 1;
    }
    coeffs.truncate(last + 1);

    if coeffs.is_empty() {
        coeffs.push(0.0);
    } else if coeffs.len() == 1 && coeffs[0].abs() < COEFF_TOLERANCE {
        coeffs[0] = 0.0;
    }
    coeffs
}

/// A dense univariate polynomial with real coefficients.
///
/// `coeffs[i]` multiplies `x^i`. The leading coefficient is never
/// near-zero unless the polynomial is the constant zero.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending degree order.
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a new polynomial from coefficients in ascending degree order.
    #[must_use]
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self {
            coeffs: trim(coeffs),
        }
    }

    /// Creates a polynomial from any values convertible to reals.
    ///
    /// ```
    /// use exacta_numbers::Rational;
    /// use exacta_poly::Polynomial;
    ///
    /// let half = Rational::new(1, 2).unwrap();
    /// let p = Polynomial::from_reals(&[half, Rational::from(3)]);
    /// assert_eq!(p.coeffs(), &[0.5, 3.0]);
    /// ```
    #[must_use]
    pub fn from_reals<T: ToReal>(values: &[T]) -> Self {
        Self::new(values.iter().map(ToReal::to_real).collect())
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: vec![0.0] }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::new(vec![c])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: f64, n: usize) -> Self {
        let mut coeffs = vec![0.0; n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree of the polynomial (0 for the zero polynomial).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].abs() < COEFF_TOLERANCE
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Accumulates `coeffs[i] * x^i` in ascending order, carrying a running
    /// power of `x`.
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        let mut result = 0.0;
        let mut power = 1.0;
        for c in &self.coeffs {
            result += c * power;
            power *= x;
        }
        result
    }

    /// Computes the derivative.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let result = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c * i as f64)
            .collect();

        Self::new(result)
    }

    /// Computes the indefinite integral with a zero constant term.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn integral(&self) -> Self {
        let mut result = Vec::with_capacity(self.coeffs.len() + 1);
        result.push(0.0);
        for (i, c) in self.coeffs.iter().enumerate() {
            result.push(c / (i + 1) as f64);
        }

        Self::new(result)
    }

    /// Computes the definite integral over `[a, b]`.
    #[must_use]
    pub fn definite_integral(&self, a: f64, b: f64) -> f64 {
        let antiderivative = self.integral();
        antiderivative.value_at(b) - antiderivative.value_at(a)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len)
            .map(|i| op(self.coeff(i), other.coeff(i)))
            .collect();

        Self::new(result)
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtracts `other` from `self`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c).collect())
    }

    /// Multiplies two polynomials by full convolution.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![0.0; n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] += a * b;
            }
        }

        Self::new(result)
    }

    /// Renders the coefficient line: `x^0 .. x^n` separated by single spaces.
    ///
    /// This is the persisted text form; [`FromStr`] reads it back.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.coeffs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl ToReal for Polynomial {
    fn to_real(&self) -> f64 {
        self.value_at(1.0)
    }
}

impl FromIterator<f64> for Polynomial {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for Polynomial {
    type Err = PolyError;

    /// Parses a coefficient line. A blank line is the zero polynomial.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                let c = token
                    .parse::<f64>()
                    .map_err(|source| PolyError::InvalidCoefficient {
                        index,
                        token: token.to_owned(),
                        source,
                    })?;
                if c.is_finite() {
                    Ok(c)
                } else {
                    Err(PolyError::NonFiniteCoefficient {
                        index,
                        token: token.to_owned(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for (i, &c) in self.coeffs.iter().enumerate().rev() {
            if c.abs() < COEFF_TOLERANCE {
                continue;
            }

            if !first {
                f.write_str(if c >= 0.0 { " + " } else { " - " })?;
            } else if c < 0.0 {
                f.write_str("-")?;
            }
            first = false;

            let c = c.abs();
            let unit = (c - 1.0).abs() <= COEFF_TOLERANCE;
            match i {
                0 => write!(f, "{c}")?,
                1 if unit => f.write_str("x")?,
                1 => write!(f, "{c}x")?,
                _ if unit => write!(f, "x^{i}")?,
                _ => write!(f, "{c}x^{i}")?,
            }
        }

        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}
