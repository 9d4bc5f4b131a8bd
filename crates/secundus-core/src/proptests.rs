//! Property-based tests for the numeric tower and the expression model.

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use num_complex::Complex64;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Expr, ExprNode, Number};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating finite floats
    fn finite_float() -> impl Strategy<Value = f64> {
        -1.0e6f64..1.0e6f64
    }

    // Strategy for generating numbers across all three variants
    fn any_number() -> impl Strategy<Value = Number> {
        prop_oneof![
            small_int().prop_map(Number::Int),
            finite_float().prop_map(Number::Float),
            (finite_float(), finite_float())
                .prop_map(|(re, im)| Number::Complex(Complex64::new(re, im))),
        ]
    }

    // Strategy for generating leaf expressions
    fn leaf() -> impl Strategy<Value = Expr> {
        prop_oneof![
            "[a-z]{1,3}".prop_map(Expr::var),
            small_int().prop_map(Expr::integer),
        ]
    }

    // Strategy for generating small expression trees
    fn small_expr() -> impl Strategy<Value = Expr> {
        leaf().prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 2..4).prop_map(Expr::add),
                prop::collection::vec(inner.clone(), 2..4).prop_map(Expr::mul),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::div(a, b)),
                inner.clone().prop_map(Expr::neg),
                inner.prop_map(Expr::sin),
            ]
        })
    }

    fn hash_of(e: &Expr) -> u64 {
        let mut hasher = DefaultHasher::new();
        e.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        // Number arithmetic across variant promotion

        #[test]
        fn number_add_commutative(a in any_number(), b in any_number()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn number_mul_commutative(a in any_number(), b in any_number()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn number_add_identity(a in any_number()) {
            prop_assert_eq!(a + Number::zero(), a);
            prop_assert_eq!(Number::zero() + a, a);
        }

        #[test]
        fn number_mul_identity(a in any_number()) {
            prop_assert_eq!(a * Number::one(), a);
            prop_assert_eq!(Number::one() * a, a);
        }

        #[test]
        fn number_double_negation(a in any_number()) {
            prop_assert_eq!(-(-a), a);
        }

        // Exact ring axioms, restricted to the integer variant

        #[test]
        fn int_add_associative(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Number::Int(a), Number::Int(b), Number::Int(c));
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn int_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Number::Int(a), Number::Int(b), Number::Int(c));
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn int_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Number::Int(a), Number::Int(b), Number::Int(c));
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn int_additive_inverse(a in small_int()) {
            let a = Number::Int(a);
            prop_assert!((a + -a).is_zero());
        }

        // Expression model invariants

        #[test]
        fn equal_construction_equal_trees(e in small_expr()) {
            let copy = e.clone();
            prop_assert_eq!(&copy, &e);
            prop_assert_eq!(hash_of(&copy), hash_of(&e));
        }

        #[test]
        fn dependencies_are_variables(e in small_expr()) {
            for dep in e.dependencies() {
                prop_assert!(matches!(dep.node(), ExprNode::Var(_)));
            }
        }

        #[test]
        fn dependencies_union_over_children(e in small_expr()) {
            if !e.node().is_atom() {
                let mut union = hashbrown::HashSet::new();
                for child in e.node().children() {
                    union.extend(child.dependencies());
                }
                prop_assert_eq!(e.dependencies(), union);
            }
        }
    }
}
