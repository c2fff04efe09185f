//! Closed-form equation solving for exacta.
//!
//! This crate provides two stateless solvers:
//!
//! - **Linear**: `a*x + b = 0` over exact [`Rational`](exacta_numbers::Rational)s
//! - **Quadratic**: `a*x^2 + b*x + c = 0` over `f64`, by the quadratic formula
//!
//! # Example
//!
//! ```
//! use exacta_numbers::Rational;
//! use exacta_solve::{solve_linear, solve_quadratic};
//!
//! // 2x + 3 = 0
//! let x = solve_linear(&Rational::from(2), &Rational::from(3)).unwrap();
//! assert_eq!(x.to_string(), "-3/2");
//!
//! // x^2 - 3x + 2 = 0
//! let roots = solve_quadratic(1.0, -3.0, 2.0);
//! assert_eq!(roots.as_slice(), &[2.0, 1.0]);
//! ```
//!
//! Both solvers emit `tracing` events at trace level describing the branch
//! taken; nothing is recorded unless the caller installs a subscriber.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod linear;
pub mod quadratic;

#[cfg(test)]
mod proptests;

pub use error::SolveError;
pub use linear::solve_linear;
pub use quadratic::{solve_quadratic, Roots, DISCRIMINANT_TOLERANCE};
