//! Property-based tests for divisor enumeration and factor extraction.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use secundus_core::Expr;

    use crate::{divisors, Factors};

    // Strategy for generating positive integers in the enumeration range
    fn positive_int() -> impl Strategy<Value = i64> {
        1i64..500i64
    }

    // Strategy for generating small factorable expressions
    fn small_expr() -> impl Strategy<Value = Expr> {
        let leaf = prop_oneof![
            Just(Expr::var("x")),
            Just(Expr::var("y")),
            (1i64..50i64).prop_map(Expr::integer),
        ];
        leaf.prop_recursive(3, 16, 3, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 1..4).prop_map(Expr::add),
                prop::collection::vec(inner, 1..4).prop_map(Expr::mul),
            ]
        })
    }

    proptest! {
        // Divisor enumeration

        #[test]
        fn every_divisor_divides(n in positive_int()) {
            for d in divisors(n) {
                prop_assert_eq!(n % d, 0);
            }
        }

        #[test]
        fn divisors_bracketed_by_one_and_n(n in positive_int()) {
            let ds = divisors(n);
            prop_assert_eq!(ds.first().copied(), Some(1));
            prop_assert_eq!(ds.last().copied(), Some(n));
        }

        #[test]
        fn divisors_strictly_increasing(n in positive_int()) {
            let ds = divisors(n);
            prop_assert!(ds.windows(2).all(|w| w[0] < w[1]));
        }

        // Factor extraction

        #[test]
        fn sum_factors_divide_every_term(terms in prop::collection::vec(small_expr(), 1..4)) {
            let sum = Expr::add(terms.clone());
            let common = sum.factors();
            for term in &terms {
                let own = term.factors();
                prop_assert!(common.is_subset(&own));
            }
        }

        #[test]
        fn product_factors_cover_every_factor(factors in prop::collection::vec(small_expr(), 1..4)) {
            let product = Expr::mul(factors.clone());
            let all = product.factors();
            for factor in &factors {
                prop_assert!(factor.factors().is_subset(&all));
            }
        }

        #[test]
        fn factor_extraction_is_deterministic(e in small_expr()) {
            prop_assert_eq!(e.factors(), e.factors());
        }
    }
}
