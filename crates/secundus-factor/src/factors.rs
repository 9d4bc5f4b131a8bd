//! Factor extraction over expression trees.
//!
//! The rules are structural and shallow:
//! - an integer constant's factors are its positive divisors,
//! - a sum's factors are the intersection of its terms' factor sets,
//! - a product's factors are the union of its factors' factor sets,
//! - everything else is its own only factor.
//!
//! Factors are expression nodes, so the common factor of `6x + 9y` comes
//! out as `{1, 3}` and of `x + x` as `{x}`; nothing rewrites the tree
//! into factored form.

use hashbrown::HashSet;

use secundus_core::{Expr, ExprNode, Number};

use crate::divisors::divisors;

/// Structural factor extraction.
pub trait Factors {
    /// Returns the factor set of `self`.
    fn factors(&self) -> HashSet<Expr>;
}

impl Factors for Expr {
    fn factors(&self) -> HashSet<Expr> {
        match self.node() {
            // The name does not matter here, only the integer value; a
            // float or complex constant falls through to the atom case.
            ExprNode::Const {
                value: Some(Number::Int(n)),
                ..
            } => divisors(*n).into_iter().map(Expr::integer).collect(),
            ExprNode::Add(terms) => {
                let mut terms = terms.iter();
                let Some(first) = terms.next() else {
                    return HashSet::new();
                };
                let mut common = first.factors();
                for term in terms {
                    let other = term.factors();
                    common.retain(|f| other.contains(f));
                }
                common
            }
            ExprNode::Mul(factors) => factors.iter().flat_map(|f| f.factors()).collect(),
            _ => std::iter::once(self.clone()).collect(),
        }
    }
}
