//! Property-based tests for the numeric value types.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{gcd, BigUnsignedInt, NumberError, Rational, ToReal, UnsignedInt};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn unsigned() -> impl Strategy<Value = UnsignedInt> {
        (0i64..=i64::MAX).prop_map(|v| UnsignedInt::new(v).unwrap())
    }

    fn big_unsigned() -> impl Strategy<Value = BigUnsignedInt> {
        "[0-9]{1,60}".prop_map(|s| s.parse::<BigUnsignedInt>().unwrap())
    }

    proptest! {
        // Rational canonical form

        #[test]
        fn rational_is_canonical(n in any::<i64>(), d in any::<i64>()) {
            match Rational::new(n, d) {
                Ok(r) => {
                    prop_assert!(r.denominator() > 0);
                    prop_assert_eq!(gcd(r.numerator(), r.denominator()), 1);
                    // same value as n/d
                    prop_assert_eq!(
                        i128::from(r.numerator()) * i128::from(d),
                        i128::from(n) * i128::from(r.denominator())
                    );
                }
                Err(NumberError::DivisionByZero) => {
                    prop_assert_eq!(d, 0);
                }
                Err(NumberError::Overflow) => {
                    prop_assert_eq!(n, i64::MIN);
                    prop_assert!(d < 0);
                }
                Err(e) => {
                    prop_assert!(false, "unexpected error {:?}", e);
                }
            }
        }

        #[test]
        fn rational_text_round_trip(r in rational()) {
            prop_assert_eq!(r.to_string().parse::<Rational>(), Ok(r));
        }

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            let left = a.mul(&b.add(&c).unwrap()).unwrap();
            let right = a.mul(&b).unwrap().add(&a.mul(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn rational_sub_inverts_add(a in rational(), b in rational()) {
            prop_assert_eq!(a.add(&b).unwrap().sub(&b), Ok(a));
        }

        #[test]
        fn rational_div_inverts_mul(a in rational(), b in rational()) {
            if b.is_zero() {
                prop_assert_eq!(a.div(&b), Err(NumberError::DivisionByZero));
            } else {
                prop_assert_eq!(a.mul(&b).unwrap().div(&b), Ok(a));
            }
        }

        #[test]
        fn rational_order_matches_real(a in rational(), b in rational()) {
            if a < b {
                prop_assert!(a.to_real() < b.to_real());
            }
        }

        // UnsignedInt

        #[test]
        fn unsigned_add_matches_checked(a in unsigned(), b in unsigned()) {
            match a.value().checked_add(b.value()) {
                Some(v) => {
                    prop_assert_eq!(a.add(b).map(UnsignedInt::value), Ok(v));
                }
                None => {
                    prop_assert_eq!(a.add(b), Err(NumberError::Overflow));
                }
            }
        }

        #[test]
        fn unsigned_mul_matches_checked(a in unsigned(), b in 0i64..1_000_000i64) {
            let b = UnsignedInt::new(b).unwrap();
            match a.value().checked_mul(b.value()) {
                Some(v) => {
                    prop_assert_eq!(a.mul(b).map(UnsignedInt::value), Ok(v));
                }
                None => {
                    prop_assert_eq!(a.mul(b), Err(NumberError::Overflow));
                }
            }
        }

        #[test]
        fn unsigned_sub_never_negative(a in unsigned(), b in unsigned()) {
            match a.sub(b) {
                Ok(d) => {
                    prop_assert_eq!(d.add(b), Ok(a));
                }
                Err(e) => {
                    prop_assert_eq!(e, NumberError::Underflow);
                    prop_assert!(b > a);
                }
            }
        }

        #[test]
        fn unsigned_text_round_trip(a in unsigned()) {
            prop_assert_eq!(a.to_string().parse::<UnsignedInt>(), Ok(a));
        }

        // BigUnsignedInt

        #[test]
        fn big_add_commutative(a in big_unsigned(), b in big_unsigned()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn big_sub_inverts_add(a in big_unsigned(), b in big_unsigned()) {
            prop_assert_eq!(a.add(&b).sub(&b), Ok(a));
        }

        #[test]
        fn big_division_identity(a in big_unsigned(), b in big_unsigned()) {
            if b.is_zero() {
                prop_assert_eq!(a.div(&b), Err(NumberError::DivisionByZero));
            } else {
                // a = (a / b) * b + r with r < b
                let q = a.div(&b).unwrap();
                let r = a.sub(&q.mul(&b)).unwrap();
                prop_assert!(r < b);
            }
        }

        #[test]
        fn big_text_round_trip(a in big_unsigned()) {
            prop_assert_eq!(a.to_string().parse::<BigUnsignedInt>(), Ok(a));
        }
    }
}
