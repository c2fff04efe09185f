//! Property-based tests for the equation solvers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use exacta_numbers::Rational;

    use crate::{solve_linear, solve_quadratic, SolveError};

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (-1000i64..1000i64, non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    proptest! {
        #[test]
        fn linear_solution_satisfies_equation(a in rational(), b in rational()) {
            match solve_linear(&a, &b) {
                Ok(x) => {
                    // a*x + b == 0 exactly
                    let lhs = a.mul(&x).unwrap().add(&b).unwrap();
                    prop_assert!(lhs.is_zero());
                }
                Err(e) => {
                    prop_assert_eq!(e, SolveError::ZeroCoefficient);
                    prop_assert!(a.is_zero());
                }
            }
        }

        #[test]
        fn quadratic_from_known_roots(r1 in -50i32..50i32, r2 in -50i32..50i32, k in 1i32..5i32) {
            // k(x - r1)(x - r2) = k x^2 - k(r1 + r2) x + k r1 r2
            let (r1, r2, k) = (f64::from(r1), f64::from(r2), f64::from(k));
            let roots = solve_quadratic(k, -k * (r1 + r2), k * r1 * r2);

            if r1 == r2 {
                prop_assert_eq!(roots.as_slice(), &[r1]);
            } else {
                prop_assert_eq!(roots.len(), 2);
                prop_assert!((roots[0] - r1.max(r2)).abs() < 1e-9);
                prop_assert!((roots[1] - r1.min(r2)).abs() < 1e-9);
            }
        }

        #[test]
        fn quadratic_roots_are_real_solutions(
            a in -10.0f64..10.0f64,
            b in -10.0f64..10.0f64,
            c in -10.0f64..10.0f64
        ) {
            for x in solve_quadratic(a, b, c) {
                let residual = a * x * x + b * x + c;
                let scale = 1.0 + (a * x * x).abs() + (b * x).abs() + c.abs();
                prop_assert!(residual.abs() < 1e-9 * scale, "residual {} at x = {}", residual, x);
            }
        }
    }
}
