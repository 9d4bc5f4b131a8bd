//! # secundus-core
//!
//! Core expression representation for the Secundus Computer Algebra System.
//!
//! This crate provides:
//! - The closed [`ExprNode`] variant set and the [`Expr`] handle over it
//! - A construction layer: variant constructors plus promoting operators,
//!   so `x.clone() * 3 + 1` builds the tree you would expect
//! - Structural equality and hashing, variable dependency queries, and a
//!   one-directional textual form
//!
//! ## Design Principles
//!
//! - **Immutable trees**: every transformation allocates new nodes and
//!   shares untouched subtrees by reference counting
//! - **Unrepresentable arity errors**: fixed-arity operations use named
//!   fields, variadic ones carry a child vector
//! - **Fail fast**: contract violations panic instead of limping along

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::float_cmp)]

pub mod expr;
pub mod number;

mod display;
mod ops;

#[cfg(test)]
mod proptests;

pub use expr::{functions, Expr, ExprNode};
pub use number::Number;
