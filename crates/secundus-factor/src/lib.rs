//! # secundus-factor
//!
//! Factor extraction for the Secundus Computer Algebra System.
//!
//! This crate answers "what divides this expression?" without rewriting
//! it. An integer constant enumerates its divisors; a sum intersects the
//! factor sets of its terms while a product unites them. The result is a
//! set of candidate factors, each itself an expression.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod divisors;
pub mod factors;

#[cfg(test)]
mod proptests;

pub use divisors::divisors;
pub use factors::Factors;
