//! Conversion of exact values to `f64`.

/// A value that can be approximated by a real (`f64`) number.
///
/// Implemented by every numeric type in the library; polynomials use it
/// to take their coefficients from any of them.
pub trait ToReal {
    /// Returns the nearest `f64` approximation of this value.
    fn to_real(&self) -> f64;
}

impl ToReal for f64 {
    fn to_real(&self) -> f64 {
        *self
    }
}

impl<T: ToReal + ?Sized> ToReal for &T {
    fn to_real(&self) -> f64 {
        (**self).to_real()
    }
}
