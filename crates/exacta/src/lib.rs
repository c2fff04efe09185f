//! # exacta
//!
//! A small exact-arithmetic numeric library.
//!
//! ## Features
//!
//! - **Rationals**: canonical fractions over `i64` with overflow detection
//! - **Unsigned integers**: bounded (`UnsignedInt`) with checked arithmetic,
//!   and arbitrary precision (`BigUnsignedInt`)
//! - **Polynomials**: real coefficients with evaluation, calculus and algebra
//! - **Equation solving**: exact linear and closed-form quadratic
//!
//! ## Quick Start
//!
//! ```rust
//! use exacta::prelude::*;
//!
//! let sum = Rational::new(1, 2)?.add(&Rational::new(3, 4)?)?;
//! assert_eq!(sum.to_string(), "5/4");
//!
//! let p: Polynomial = "1 -3 2".parse()?;
//! assert_eq!(p.to_string(), "2x^2 - 3x + 1");
//! assert_eq!(p.derivative().to_string(), "4x - 3");
//!
//! let roots = solve_quadratic(2.0, -3.0, 1.0);
//! assert_eq!(roots.as_slice(), &[1.0, 0.5]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exacta_numbers as numbers;
pub use exacta_poly as poly;
pub use exacta_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exacta_numbers::{BigUnsignedInt, NumberError, Rational, ToReal, UnsignedInt};
    pub use exacta_poly::{PolyError, Polynomial};
    pub use exacta_solve::{solve_linear, solve_quadratic, Roots, SolveError};
}
