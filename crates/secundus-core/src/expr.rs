//! Expression node types.
//!
//! This module defines the closed set of expression variants and the
//! `Expr` handle that owns them. Trees are immutable: every transformation
//! builds new nodes, and unrelated subtrees are shared through reference
//! counting rather than copied.

use std::rc::Rc;

use hashbrown::HashSet;
use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::number::Number;

/// An immutable expression tree.
///
/// `Expr` is a cheap-to-clone handle (a reference-counted pointer to an
/// [`ExprNode`]). Cloning shares the subtree; it never deep-copies.
/// Equality and hashing are structural, variant tag plus ordered children,
/// with the leaf exceptions documented on [`ExprNode`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Expr(Rc<ExprNode>);

/// An expression node.
///
/// This enum is the whole data model: each variant carries its children
/// inline (`SmallVec` for the variadic ones, named fields for fixed arity,
/// so the wrong arity is unrepresentable).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprNode {
    // === Atoms ===
    /// A variable, identified by name.
    Var(String),

    /// A constant.
    ///
    /// Invariant: at least one of `value`, `name` is set; the `Expr`
    /// constructors enforce this. A named constant without a value (for
    /// example `pi`) is a symbolic atom that simplification never folds.
    Const {
        /// The numeric value, if known.
        value: Option<Number>,
        /// The symbolic name, if any.
        name: Option<String>,
    },

    // === Compound expressions ===
    /// Sum of expressions: a + b + c + ...
    ///
    /// Associative; any number of terms, including zero.
    Add(SmallVec<[Expr; 4]>),

    /// Product of expressions: a * b * c * ...
    ///
    /// Associative; any number of factors, including zero.
    Mul(SmallVec<[Expr; 4]>),

    /// Division: numerator / denominator.
    Div {
        /// The numerator.
        num: Expr,
        /// The denominator.
        den: Expr,
    },

    /// Power expression: base^exp.
    Pow {
        /// The base of the power.
        base: Expr,
        /// The exponent.
        exp: Expr,
    },

    /// Negation: -expr.
    Neg(Expr),

    /// A named unary function application: f(arg).
    ///
    /// The names in [`functions`] get dedicated derivative rules; any
    /// other name is treated as an opaque function symbol.
    Func {
        /// The function name.
        name: String,
        /// The argument.
        arg: Expr,
    },
}

impl ExprNode {
    /// Returns true if this node is an atom (no children).
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(self, ExprNode::Var(_) | ExprNode::Const { .. })
    }

    /// Returns true if this node is a constant with a known value.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, ExprNode::Const { value: Some(_), .. })
    }

    /// Returns true if this is a constant that is numerically zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, ExprNode::Const { value: Some(v), .. } if v.is_zero())
    }

    /// Returns true if this is a constant that is numerically one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        matches!(self, ExprNode::Const { value: Some(v), .. } if v.is_one())
    }

    /// Returns the ordered children of this node.
    #[must_use]
    pub fn children(&self) -> SmallVec<[Expr; 4]> {
        match self {
            ExprNode::Var(_) | ExprNode::Const { .. } => SmallVec::new(),
            ExprNode::Add(args) | ExprNode::Mul(args) => args.clone(),
            ExprNode::Div { num, den } => smallvec::smallvec![num.clone(), den.clone()],
            ExprNode::Pow { base, exp } => smallvec::smallvec![base.clone(), exp.clone()],
            ExprNode::Neg(arg) => smallvec::smallvec![arg.clone()],
            ExprNode::Func { arg, .. } => smallvec::smallvec![arg.clone()],
        }
    }

    /// Returns the discriminator string used by the textual form.
    #[must_use]
    pub fn op(&self) -> &str {
        match self {
            ExprNode::Var(_) => "var",
            ExprNode::Const { .. } => "const",
            ExprNode::Add(_) => "+",
            ExprNode::Mul(_) => "*",
            ExprNode::Div { .. } => "/",
            ExprNode::Pow { .. } => "^",
            ExprNode::Neg(_) => "neg",
            ExprNode::Func { name, .. } => name,
        }
    }
}

impl Expr {
    pub(crate) fn from_node(node: ExprNode) -> Self {
        Expr(Rc::new(node))
    }

    /// Returns the node this handle points at.
    #[must_use]
    pub fn node(&self) -> &ExprNode {
        &self.0
    }

    // === Variant constructors ===

    /// Creates a variable.
    #[must_use]
    pub fn var(name: impl Into<String>) -> Self {
        Expr::from_node(ExprNode::Var(name.into()))
    }

    /// Creates a valued constant.
    #[must_use]
    pub fn constant(value: impl Into<Number>) -> Self {
        Expr::from_node(ExprNode::Const {
            value: Some(value.into()),
            name: None,
        })
    }

    /// Creates an integer constant.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Expr::constant(value)
    }

    /// Creates a named constant without a value (a symbolic atom such as
    /// `pi`; never folded by simplification).
    #[must_use]
    pub fn named_constant(name: impl Into<String>) -> Self {
        Expr::from_node(ExprNode::Const {
            value: None,
            name: Some(name.into()),
        })
    }

    /// Creates a named constant that also carries a value.
    ///
    /// It displays as its name, but simplification folds it by its value.
    #[must_use]
    pub fn named_value(name: impl Into<String>, value: impl Into<Number>) -> Self {
        Expr::from_node(ExprNode::Const {
            value: Some(value.into()),
            name: Some(name.into()),
        })
    }

    /// Creates a sum over any number of terms.
    ///
    /// The node keeps exactly the terms given: a one-term sum stays a sum
    /// (simplification unwraps it, construction does not).
    #[must_use]
    pub fn add(terms: impl IntoIterator<Item = Expr>) -> Self {
        Expr::from_node(ExprNode::Add(terms.into_iter().collect()))
    }

    /// Creates a product over any number of factors.
    #[must_use]
    pub fn mul(factors: impl IntoIterator<Item = Expr>) -> Self {
        Expr::from_node(ExprNode::Mul(factors.into_iter().collect()))
    }

    /// Creates a quotient.
    #[must_use]
    pub fn div(num: impl Into<Expr>, den: impl Into<Expr>) -> Self {
        Expr::from_node(ExprNode::Div {
            num: num.into(),
            den: den.into(),
        })
    }

    /// Creates a power expression.
    #[must_use]
    pub fn pow(self, exp: impl Into<Expr>) -> Self {
        Expr::from_node(ExprNode::Pow {
            base: self,
            exp: exp.into(),
        })
    }

    /// Creates a negation node.
    ///
    /// This always wraps, even around a valued constant; the unary minus
    /// operator is the one that folds `-Const(v)` to `Const(-v)`.
    #[must_use]
    pub fn neg(arg: impl Into<Expr>) -> Self {
        Expr::from_node(ExprNode::Neg(arg.into()))
    }

    /// Creates a named unary function application.
    #[must_use]
    pub fn func(name: impl Into<String>, arg: impl Into<Expr>) -> Self {
        Expr::from_node(ExprNode::Func {
            name: name.into(),
            arg: arg.into(),
        })
    }

    /// Creates a sine application.
    #[must_use]
    pub fn sin(arg: impl Into<Expr>) -> Self {
        Expr::func(functions::SIN, arg)
    }

    /// Creates a cosine application.
    #[must_use]
    pub fn cos(arg: impl Into<Expr>) -> Self {
        Expr::func(functions::COS, arg)
    }

    /// Creates a natural exponential application.
    #[must_use]
    pub fn exp(arg: impl Into<Expr>) -> Self {
        Expr::func(functions::EXP, arg)
    }

    /// Creates a natural logarithm application.
    #[must_use]
    pub fn log(arg: impl Into<Expr>) -> Self {
        Expr::func(functions::LOG, arg)
    }

    /// Returns the set of distinct variables this expression depends on.
    ///
    /// A variable depends on itself; constants depend on nothing; every
    /// other node takes the union over its children.
    #[must_use]
    pub fn dependencies(&self) -> HashSet<Expr> {
        match self.node() {
            ExprNode::Var(_) => std::iter::once(self.clone()).collect(),
            ExprNode::Const { .. } => HashSet::new(),
            node => node
                .children()
                .iter()
                .flat_map(Expr::dependencies)
                .collect(),
        }
    }
}

/// Reserved function names with dedicated derivative rules.
pub mod functions {
    /// Sine.
    pub const SIN: &str = "sin";
    /// Cosine.
    pub const COS: &str = "cos";
    /// Natural exponential.
    pub const EXP: &str = "exp";
    /// Natural logarithm.
    pub const LOG: &str = "log";
}
