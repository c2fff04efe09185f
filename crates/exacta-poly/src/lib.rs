//! # exacta-poly
//!
//! Single-variable polynomials with real (`f64`) coefficients.
//!
//! This crate provides:
//! - Evaluation, derivative, indefinite and definite integrals
//! - Addition, subtraction and schoolbook multiplication
//! - Human-readable rendering (`2x^2 - 3x + 1`) and a one-line
//!   coefficient format (`1 -3 2`) for persistence
//!
//! Coefficients can be seeded from any `exacta_numbers::ToReal` value.
//!
//! ## Canonical Form
//!
//! Trailing coefficients with magnitude below [`COEFF_TOLERANCE`] are
//! dropped after every operation, so two polynomials compare equal exactly
//! when their canonical coefficient vectors do.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod polynomial;


pub use error::PolyError;
pub use polynomial::{Polynomial, COEFF_TOLERANCE};
