//! Errors raised by the numeric value types.

use std::num::{IntErrorKind, ParseIntError};

use thiserror::Error;

/// Errors that can occur when constructing, parsing or combining numbers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumberError {
    /// A zero denominator or divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A negative value was given to an unsigned type.
    #[error("value must be non-negative")]
    NegativeValue,

    /// Subtracting two arbitrary precision values would go below zero.
    #[error("subtraction result is negative")]
    NegativeResult,

    /// Subtracting two bounded values would go below zero.
    #[error("subtraction underflows zero")]
    Underflow,

    /// The result does not fit the bounded integer register.
    #[error("arithmetic overflow")]
    Overflow,

    /// The text does not match the expected grammar.
    #[error("invalid number format: {0:?}")]
    InvalidFormat(String),
}

impl NumberError {
    /// Maps an integer parse failure on `text` to the matching error kind.
    pub(crate) fn from_parse_int(err: &ParseIntError, text: &str) -> Self {
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Self::Overflow,
            _ => Self::InvalidFormat(text.to_owned()),
        }
    }
}
