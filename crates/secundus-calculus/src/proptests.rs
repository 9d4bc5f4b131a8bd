//! Property-based tests for the differentiation rules.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use secundus_core::Expr;

    use crate::Derivative;

    // Strategy for generating leaf expressions over x and y
    fn leaf() -> impl Strategy<Value = Expr> {
        prop_oneof![
            Just(Expr::var("x")),
            Just(Expr::var("y")),
            (-100i64..100i64).prop_map(Expr::integer),
        ]
    }

    // Strategy for generating small differentiable trees
    fn small_expr() -> impl Strategy<Value = Expr> {
        leaf().prop_recursive(3, 24, 3, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 2..4).prop_map(Expr::add),
                prop::collection::vec(inner.clone(), 2..3).prop_map(Expr::mul),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::div(a, b)),
                inner.clone().prop_map(Expr::neg),
                inner.clone().prop_map(Expr::sin),
                inner.prop_map(Expr::exp),
            ]
        })
    }

    proptest! {
        // Linearity

        #[test]
        fn derivative_additive(a in small_expr(), b in small_expr()) {
            let x = Expr::var("x");
            let sum = Expr::add([a.clone(), b.clone()]);
            prop_assert_eq!(
                sum.derivative(&x),
                Expr::add([a.derivative(&x), b.derivative(&x)])
            );
        }

        #[test]
        fn derivative_commutes_with_neg(e in small_expr()) {
            let x = Expr::var("x");
            prop_assert_eq!(
                Expr::neg(e.clone()).derivative(&x),
                Expr::neg(e.derivative(&x))
            );
        }

        // Constants and variables

        #[test]
        fn constants_derive_to_zero(n in -1000i64..1000i64) {
            let x = Expr::var("x");
            prop_assert_eq!(Expr::integer(n).derivative(&x), Expr::integer(0));
        }

        // Differentiation never invents variables: every variable of the
        // derivative already occurs in the input.

        #[test]
        fn derivative_introduces_no_variables(e in small_expr()) {
            let x = Expr::var("x");
            let d = e.derivative(&x);
            prop_assert!(d.dependencies().is_subset(&e.dependencies()));
        }

        #[test]
        fn derivative_is_deterministic(e in small_expr()) {
            let x = Expr::var("x");
            prop_assert_eq!(e.derivative(&x), e.derivative(&x));
        }
    }
}
