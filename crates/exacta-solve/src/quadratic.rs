//! Real roots of quadratic equations by the closed-form formula.

use smallvec::{smallvec, SmallVec};
use tracing::trace;

/// Magnitude below which the discriminant counts as zero (a repeated root).
pub const DISCRIMINANT_TOLERANCE: f64 = 1e-12;

/// The real roots of an equation, at most two, stored inline.
pub type Roots = SmallVec<[f64; 2]>;

/// Solves `a*x^2 + b*x + c = 0` over the reals.
///
/// - `a == 0` degrades to the linear equation `b*x + c = 0`: one root
///   `-c / b`, or none when `b == 0` as well.
/// - A negative discriminant gives no roots.
/// - A discriminant within [`DISCRIMINANT_TOLERANCE`] of zero gives the
///   single repeated root `-b / 2a`.
/// - Otherwise both roots are returned, the `+√d` branch first.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Roots {
    if a == 0.0 {
        if b == 0.0 {
            trace!(c, "degenerate equation has no unique solution");
            return Roots::new();
        }
        trace!(b, c, "leading coefficient is zero, solving linearly");
        return smallvec![-c / b];
    }

    let d = b * b - 4.0 * a * c;
    if d < 0.0 {
        trace!(discriminant = d, "no real roots");
        Roots::new()
    } else if d.abs() < DISCRIMINANT_TOLERANCE {
        trace!(discriminant = d, "repeated root");
        smallvec![-b / (2.0 * a)]
    } else {
        trace!(discriminant = d, "two real roots");
        let sqrt_d = d.sqrt();
        smallvec![(-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a)]
    }
}
