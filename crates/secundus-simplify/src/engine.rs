//! The folding pass.
//!
//! Simplification is a single bottom-up sweep: children first, then the
//! current node. Sums and products fold their numeric constants into one
//! accumulator, splice directly nested sums/products one level (deeper
//! nesting is already gone because children were simplified first), and
//! drop the accumulator when it is the identity. Nothing reorders terms,
//! collects like terms, or cancels across `Div`/`Pow`/`Neg`, so `x + x`
//! and `x/x` come back unchanged.

use num_traits::{One, Zero};
use smallvec::SmallVec;

use secundus_core::{Expr, ExprNode, Number};

/// Bottom-up constant folding over an expression tree.
pub trait Simplify {
    /// Returns a simplified copy of `self`.
    ///
    /// The pass is idempotent: simplifying twice gives the same tree as
    /// simplifying once.
    fn simplified(&self) -> Expr;
}

impl Simplify for Expr {
    fn simplified(&self) -> Expr {
        match self.node() {
            ExprNode::Var(_) | ExprNode::Const { .. } => self.clone(),
            ExprNode::Add(terms) => simplify_add(terms),
            ExprNode::Mul(factors) => simplify_mul(factors),
            ExprNode::Div { num, den } => Expr::div(num.simplified(), den.simplified()),
            ExprNode::Pow { base, exp } => base.simplified().pow(exp.simplified()),
            ExprNode::Neg(arg) => Expr::neg(arg.simplified()),
            ExprNode::Func { name, arg } => Expr::func(name.clone(), arg.simplified()),
        }
    }
}

/// Folds a sum: numeric constants accumulate (a named constant with a
/// value folds by its value; one without a value stays symbolic), nested
/// sums splice in, and a nonzero accumulator lands at the end.
fn simplify_add(terms: &[Expr]) -> Expr {
    let mut args: SmallVec<[Expr; 4]> = SmallVec::new();
    let mut sum = Number::zero();

    for term in terms {
        let term = term.simplified();
        match term.node() {
            ExprNode::Add(inner) => {
                for sub in inner {
                    match sub.node() {
                        ExprNode::Const { value: Some(v), .. } => sum += *v,
                        _ => args.push(sub.clone()),
                    }
                }
            }
            ExprNode::Const { value: Some(v), .. } => sum += *v,
            _ => args.push(term.clone()),
        }
    }

    if !sum.is_zero() {
        args.push(Expr::constant(sum));
    }
    match args.len() {
        0 => Expr::integer(0),
        1 => args.remove(0),
        _ => Expr::add(args),
    }
}

/// Folds a product the same way a sum folds, with one extra rule: the
/// moment the accumulator becomes exactly zero the whole product is zero,
/// and the remaining factors are never visited.
fn simplify_mul(factors: &[Expr]) -> Expr {
    let mut args: SmallVec<[Expr; 4]> = SmallVec::new();
    let mut product = Number::one();

    for factor in factors {
        let factor = factor.simplified();
        match factor.node() {
            ExprNode::Mul(inner) => {
                for sub in inner {
                    match sub.node() {
                        ExprNode::Const { value: Some(v), .. } => {
                            product *= *v;
                            if product.is_zero() {
                                return Expr::integer(0);
                            }
                        }
                        _ => args.push(sub.clone()),
                    }
                }
            }
            ExprNode::Const { value: Some(v), .. } => {
                product *= *v;
                if product.is_zero() {
                    return Expr::integer(0);
                }
            }
            _ => args.push(factor.clone()),
        }
    }

    if !product.is_one() {
        args.push(Expr::constant(product));
    }
    match args.len() {
        0 => Expr::integer(1),
        1 => args.remove(0),
        _ => Expr::mul(args),
    }
}
