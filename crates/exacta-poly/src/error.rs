//! Polynomial parsing errors.

use std::num::ParseFloatError;

use thiserror::Error;

/// Errors that can occur when reading a polynomial coefficient line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A token on the coefficient line is not a decimal real number.
    #[error("coefficient {index} ({token:?}) is not a real number")]
    InvalidCoefficient {
        /// Zero-based position of the token on the line (the power of x).
        index: usize,
        /// The offending token.
        token: String,
        /// The underlying float parse failure.
        #[source]
        source: ParseFloatError,
    },

    /// A token parsed as a float but is `NaN` or infinite.
    #[error("coefficient {index} ({token:?}) is not finite")]
    NonFiniteCoefficient {
        /// Zero-based position of the token on the line.
        index: usize,
        /// The offending token.
        token: String,
    },
}
