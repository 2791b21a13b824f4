//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use dashu::integer::IBig;

    use crate::Rational;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rat(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d).unwrap()
    }

    proptest! {
        // Normalization invariants

        #[test]
        fn denominator_always_positive(n in small_int(), d in non_zero_int()) {
            let r = rat(n, d);
            prop_assert!(r.denominator() > &IBig::ZERO);
        }

        #[test]
        fn reduced_to_lowest_terms(n in small_int(), d in non_zero_int()) {
            use dashu::base::Gcd;
            use dashu::integer::UBig;
            let r = rat(n, d);
            let g = r.numerator().clone().gcd(r.denominator().clone());
            if r.is_zero() {
                prop_assert_eq!(r.denominator(), &IBig::ONE);
            } else {
                prop_assert_eq!(g, UBig::ONE);
            }
        }

        #[test]
        fn normalization_idempotent(n in small_int(), d in non_zero_int()) {
            let r = rat(n, d);
            let again = Rational::new(r.numerator().clone(), r.denominator().clone()).unwrap();
            prop_assert_eq!(r, again);
        }

        // Field axioms

        #[test]
        fn add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = rat(num_a, den_a);
            let b = rat(num_b, den_b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn mul_distributes_over_add(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = rat(num_a, den_a);
            let b = rat(num_b, den_b);
            let c = rat(num_c, den_c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn sub_self_is_zero(n in small_int(), d in non_zero_int()) {
            let a = rat(n, d);
            prop_assert!((a.clone() - a).is_zero());
        }

        #[test]
        fn div_self_is_one(n in non_zero_int(), d in non_zero_int()) {
            let a = rat(n, d);
            prop_assert!((a.clone() / a).is_one());
        }

        #[test]
        fn double_negation(n in small_int(), d in non_zero_int()) {
            let a = rat(n, d);
            prop_assert_eq!(-(-a.clone()), a);
        }

        // Ordering totality: exactly one of <, ==, > holds

        #[test]
        fn ordering_total(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = rat(num_a, den_a);
            let b = rat(num_b, den_b);
            match a.cmp(&b) {
                Ordering::Less => prop_assert!(a < b && a != b && !(a > b)),
                Ordering::Equal => prop_assert!(a == b && !(a < b) && !(a > b)),
                Ordering::Greater => prop_assert!(a > b && a != b && !(a < b)),
            }
        }

        // Text round-trip

        #[test]
        fn display_parse_round_trip(n in small_int(), d in non_zero_int()) {
            let a = rat(n, d);
            let back: Rational = a.to_string().parse().unwrap();
            prop_assert_eq!(a, back);
        }
    }
}
