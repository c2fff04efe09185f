//! Errors raised by the equation solvers.

use exacta_numbers::NumberError;
use thiserror::Error;

/// Errors that can occur while solving an equation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The leading coefficient of a linear equation is zero.
    #[error("leading coefficient must not be zero")]
    ZeroCoefficient,

    /// Exact arithmetic on the coefficients failed.
    #[error("coefficient arithmetic failed: {0}")]
    Number(#[from] NumberError),
}
