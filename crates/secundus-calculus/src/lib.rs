//! # secundus-calculus
//!
//! Symbolic differentiation for the Secundus Computer Algebra System.
//!
//! This crate provides the [`Derivative`] trait: one structural rule per
//! node kind, recursing bottom-up through the tree. Output is deliberately
//! unnormalized (`x'·y + y'·x` style) so the rules stay auditable; pair it
//! with `secundus-simplify` to fold the arithmetic noise away.
//!
//! ## Known limitation
//!
//! Powers differentiate through the `a^b = exp(log(a)·b)` rewrite, which
//! is only valid for positive bases. `x²` at negative `x` is out of the
//! rule's domain, even though the symbolic answer may look plausible.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod derivative;

#[cfg(test)]
mod proptests;

pub use derivative::Derivative;
