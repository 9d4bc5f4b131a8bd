//! Arithmetic composition of expressions.
//!
//! The standard operators build composite nodes: `+` and `*` build binary
//! `Add`/`Mul` nodes, `-` builds `Add` of a negation, `/` builds `Div`.
//! Raw numeric operands are promoted to constant nodes through the `From`
//! impls below, so `x + 3` and `3 * x` both work. Exponentiation has no
//! Rust operator; use [`Expr::pow`].

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;

use crate::expr::{Expr, ExprNode};
use crate::number::Number;

impl From<Number> for Expr {
    fn from(value: Number) -> Self {
        Expr::constant(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::constant(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::constant(value)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::constant(value)
    }
}

impl From<Complex64> for Expr {
    fn from(value: Complex64) -> Self {
        Expr::constant(value)
    }
}

impl From<&Expr> for Expr {
    fn from(value: &Expr) -> Self {
        value.clone()
    }
}

impl<T: Into<Expr>> Add<T> for Expr {
    type Output = Expr;

    fn add(self, rhs: T) -> Expr {
        Expr::add([self, rhs.into()])
    }
}

impl<T: Into<Expr>> Add<T> for &Expr {
    type Output = Expr;

    fn add(self, rhs: T) -> Expr {
        Expr::add([self.clone(), rhs.into()])
    }
}

impl<T: Into<Expr>> Sub<T> for Expr {
    type Output = Expr;

    fn sub(self, rhs: T) -> Expr {
        Expr::add([self, Expr::neg(rhs.into())])
    }
}

impl<T: Into<Expr>> Sub<T> for &Expr {
    type Output = Expr;

    fn sub(self, rhs: T) -> Expr {
        Expr::add([self.clone(), Expr::neg(rhs.into())])
    }
}

impl<T: Into<Expr>> Mul<T> for Expr {
    type Output = Expr;

    fn mul(self, rhs: T) -> Expr {
        Expr::mul([self, rhs.into()])
    }
}

impl<T: Into<Expr>> Mul<T> for &Expr {
    type Output = Expr;

    fn mul(self, rhs: T) -> Expr {
        Expr::mul([self.clone(), rhs.into()])
    }
}

impl<T: Into<Expr>> Div<T> for Expr {
    type Output = Expr;

    fn div(self, rhs: T) -> Expr {
        Expr::div(self, rhs.into())
    }
}

impl<T: Into<Expr>> Div<T> for &Expr {
    type Output = Expr;

    fn div(self, rhs: T) -> Expr {
        Expr::div(self.clone(), rhs.into())
    }
}

impl Neg for Expr {
    type Output = Expr;

    /// Unary minus folds a valued, unnamed constant to its negated value;
    /// everything else (variables, composites, named constants) is wrapped
    /// in a `Neg` node.
    fn neg(self) -> Expr {
        if let ExprNode::Const {
            value: Some(v),
            name: None,
        } = self.node()
        {
            return Expr::constant(-*v);
        }
        Expr::neg(self)
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        -self.clone()
    }
}

// Scalar-on-the-left forms, so `3 - x` works like `x - 3` does.

macro_rules! scalar_lhs_ops {
    ($($t:ty),*) => {$(
        impl Add<Expr> for $t {
            type Output = Expr;

            fn add(self, rhs: Expr) -> Expr {
                Expr::add([Expr::constant(self), rhs])
            }
        }

        impl Sub<Expr> for $t {
            type Output = Expr;

            fn sub(self, rhs: Expr) -> Expr {
                Expr::add([Expr::constant(self), Expr::neg(rhs)])
            }
        }

        impl Mul<Expr> for $t {
            type Output = Expr;

            fn mul(self, rhs: Expr) -> Expr {
                Expr::mul([Expr::constant(self), rhs])
            }
        }

        impl Div<Expr> for $t {
            type Output = Expr;

            fn div(self, rhs: Expr) -> Expr {
                Expr::div(Expr::constant(self), rhs)
            }
        }
    )*};
}

scalar_lhs_ops!(i32, i64, f64);
