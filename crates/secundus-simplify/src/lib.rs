//! # secundus-simplify
//!
//! Constant folding for the Secundus Computer Algebra System.
//!
//! The [`Simplify`] trait performs one deterministic bottom-up pass:
//! numeric constants in sums and products fold together, nested sums and
//! products flatten, identities (`+0`, `·1`) drop out, and a zero factor
//! annihilates its product. That is the whole rule set. There is no
//! like-term collection or reordering, and no search for a smallest
//! form; the pass stays predictable and idempotent.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;


pub use engine::Simplify;
