//! Symbolic differentiation of expression trees.
//!
//! Differentiation is structural: each node kind has exactly one rule, and
//! the rules recurse through [`Derivative::derivative`]. The laws:
//! - d/dx (a + b) = d/dx a + d/dx b  (additivity)
//! - d/dx (a·b) = (d/dx a)·b + a·(d/dx b)  (Leibniz rule; generalized to
//!   n factors below)
//! - d/dx f(g(x)) = f'(g(x)) · d/dx g(x)  (chain rule)
//!
//! Results come back raw, full of `·1` and `+0` noise; run simplification
//! afterwards to fold them.

use secundus_core::{functions, Expr, ExprNode};

/// Symbolic differentiation with respect to a variable.
pub trait Derivative {
    /// Returns the derivative of `self` with respect to `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var` is not a variable node.
    fn derivative(&self, var: &Expr) -> Expr;
}

impl Derivative for Expr {
    fn derivative(&self, var: &Expr) -> Expr {
        let ExprNode::Var(var_name) = var.node() else {
            panic!("derivative taken with respect to a non-variable: {var}");
        };

        match self.node() {
            ExprNode::Var(name) => {
                if name == var_name {
                    Expr::integer(1)
                } else {
                    Expr::integer(0)
                }
            }
            ExprNode::Const { .. } => Expr::integer(0),
            ExprNode::Add(terms) => Expr::add(terms.iter().map(|t| t.derivative(var))),
            ExprNode::Mul(factors) => product_rule(factors, var),
            ExprNode::Div { num, den } => {
                // (num/den)' = (den·num' - num·den') / den²
                let numerator =
                    den.clone() * num.derivative(var) - num.clone() * den.derivative(var);
                Expr::div(numerator, den.clone().pow(2))
            }
            ExprNode::Pow { base, exp } => {
                // a^b is rewritten as exp(log(a)·b) and differentiated in
                // that form. The rewrite assumes a positive base; see the
                // module docs in `lib.rs`.
                Expr::exp(Expr::log(base.clone()) * exp.clone()).derivative(var)
            }
            ExprNode::Neg(arg) => Expr::neg(arg.derivative(var)),
            ExprNode::Func { name, arg } => {
                let outer = match name.as_str() {
                    functions::SIN => Expr::cos(arg.clone()),
                    functions::COS => -Expr::sin(arg.clone()),
                    functions::EXP => Expr::exp(arg.clone()),
                    // log is the one rule shaped as a quotient: a'/a.
                    functions::LOG => return Expr::div(arg.derivative(var), arg.clone()),
                    // Unknown functions stay symbolic: f(g) differentiates
                    // to f'(g)·g' with a primed function symbol.
                    _ => Expr::func(format!("{name}'"), arg.clone()),
                };
                outer * arg.derivative(var)
            }
        }
    }
}

/// Generalized Leibniz rule: d(f₁·f₂·…·fₙ) = Σᵢ f₁·…·fᵢ'·…·fₙ.
///
/// Term i substitutes the differentiated factor in place, leaving every
/// other factor in its original position.
fn product_rule(factors: &[Expr], var: &Expr) -> Expr {
    let terms = (0..factors.len()).map(|i| {
        Expr::mul(factors.iter().enumerate().map(|(j, factor)| {
            if j == i {
                factor.derivative(var)
            } else {
                factor.clone()
            }
        }))
    });
    Expr::add(terms)
}
