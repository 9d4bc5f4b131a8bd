//! # Secundus
//!
//! A small symbolic computation engine written in Rust.
//!
//! Secundus builds immutable expression trees, differentiates them
//! symbolically, folds their constant arithmetic, and extracts structural
//! factors. It trades algebraic ambition for predictability: every
//! operation is a deterministic structural recursion you can step through.
//!
//! ## Features
//!
//! - **Expression trees**: a closed node set with reference-counted sharing
//! - **Differentiation**: chain, product, and quotient rules per node kind
//! - **Constant folding**: one idempotent bottom-up pass
//! - **Factor extraction**: divisor sets through sums and products
//!
//! ## Quick Start
//!
//! ```rust
//! use secundus::prelude::*;
//!
//! let x = Expr::var("x");
//! let expr = x.clone() * 3 + 1;
//! assert_eq!(expr.derivative(&x).simplified(), Expr::integer(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use secundus_calculus as calculus;
pub use secundus_core as core;
pub use secundus_factor as factor;
pub use secundus_simplify as simplify;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use secundus_calculus::Derivative;
    pub use secundus_core::{functions, Expr, ExprNode, Number};
    pub use secundus_factor::{divisors, Factors};
    pub use secundus_simplify::Simplify;
}
