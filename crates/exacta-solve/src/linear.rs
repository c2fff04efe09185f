//! Exact solution of linear equations.

use exacta_numbers::Rational;
use tracing::trace;

use crate::SolveError;

/// Solves `a*x + b = 0` exactly, returning `x = -b / a`.
///
/// # Errors
///
/// Returns [`SolveError::ZeroCoefficient`] if `a` is zero, or
/// [`SolveError::Number`] if the quotient is not representable.
pub fn solve_linear(a: &Rational, b: &Rational) -> Result<Rational, SolveError> {
    if a.is_zero() {
        trace!(%b, "linear equation has zero leading coefficient");
        return Err(SolveError::ZeroCoefficient);
    }

    let x = b.neg_div(a)?;
    trace!(%a, %b, %x, "solved linear equation");
    Ok(x)
}
