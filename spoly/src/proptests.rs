//! Property-based tests for the polynomial laws and the term invariant.

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use proptest::prelude::*;
    use num_traits::{Zero, One};

    use crate::SparsePoly;

    type P = SparsePoly<i64>;

    // Raw term lists, possibly unsorted, with repeated exponents and zeros.
    fn raw_terms() -> impl Strategy<Value = Vec<(i64, usize)>> {
        proptest::collection::vec((-50i64..50i64, 0usize..8usize), 0..=6)
    }

    fn small_poly() -> impl Strategy<Value = P> {
        raw_terms().prop_map(|ts: Vec<(i64, usize)>| P::from(ts))
    }

    // Dyadic points keep every evaluation exact in f64.
    fn point() -> impl Strategy<Value = f64> {
        proptest::sample::select(vec![-2.0, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0])
    }

    fn is_normal(p: &P) -> bool {
        p.terms().windows(2).all(|w| w[0].exp > w[1].exp) &&
        p.iter().all(|t| t.coeff != 0)
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
    }

    proptest! {
        #[test]
        fn add_term_keeps_invariant(ts in raw_terms(), c in -50i64..50i64, e in 0usize..8usize) {
            let mut p = P::from_iter(ts);
            prop_assert!(is_normal(&p));

            p.add_term(c, e);
            prop_assert!(is_normal(&p));
        }

        #[test]
        fn add_term_matches_coeff(ts in raw_terms(), e in 0usize..8usize) {
            let expected: i64 = ts.iter().filter(|(_, d)| *d == e).map(|(c, _)| c).sum();
            let p = P::from_iter(ts);
            prop_assert_eq!(p.coeff(e), expected);
        }

        #[test]
        fn ops_keep_invariant(a in small_poly(), b in small_poly()) {
            prop_assert!(is_normal(&(&a + &b)));
            prop_assert!(is_normal(&(&a - &b)));
            prop_assert!(is_normal(&(&a * &b)));
            prop_assert!(is_normal(&-&a));
        }

        #[test]
        fn add_identity(a in small_poly()) {
            prop_assert_eq!(&a + &P::zero(), a.clone());
            prop_assert_eq!(&P::zero() + &a, a);
        }

        #[test]
        fn mul_annihilator(a in small_poly()) {
            prop_assert!((&a * &P::zero()).is_zero());
            prop_assert!((&P::zero() * &a).is_zero());
        }

        #[test]
        fn mul_identity(a in small_poly()) {
            prop_assert_eq!(&a * &P::one(), a.clone());
            prop_assert_eq!(&P::one() * &a, a);
        }

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn sub_self(a in small_poly()) {
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn sub_is_add_neg(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn eval_add(a in small_poly(), b in small_poly(), x in point()) {
            let lhs = (&a + &b).evaluate(x);
            let rhs = a.evaluate(x) + b.evaluate(x);
            prop_assert!(approx_eq(lhs, rhs), "{} != {}", lhs, rhs);
        }

        #[test]
        fn eval_mul(a in small_poly(), b in small_poly(), x in point()) {
            let lhs = (&a * &b).evaluate(x);
            let rhs = a.evaluate(x) * b.evaluate(x);
            prop_assert!(approx_eq(lhs, rhs), "{} != {}", lhs, rhs);
        }

        #[test]
        fn input_string_roundtrip(a in small_poly()) {
            prop_assert_eq!(P::from_str(&a.to_input_string()), Ok(a));
        }
    }
}
