//! # exacta-numbers
//!
//! Exact numeric value types for the exacta library.
//!
//! This crate provides:
//! - Bounded non-negative integers with checked arithmetic (`UnsignedInt`)
//! - Arbitrary precision non-negative integers (`BigUnsignedInt`), backed by `dashu`
//! - Canonical-form rationals over `i64` (`Rational`)
//! - The `ToReal` conversion shared by all of them
//!
//! ## Invariants
//!
//! Every value is immutable and canonical once constructed: a `Rational`
//! is always in lowest terms with a positive denominator, and the unsigned
//! types can never hold a negative value. Operations that would break an
//! invariant return a [`NumberError`] instead.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod big_unsigned;
pub mod error;
pub mod rational;
pub mod real;
pub mod unsigned;

#[cfg(test)]
mod proptests;

pub use big_unsigned::BigUnsignedInt;
pub use error::NumberError;
pub use rational::{gcd, Rational};
pub use real::ToReal;
pub use unsigned::UnsignedInt;
