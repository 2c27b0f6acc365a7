//! Builder pattern variations.
//!
//! The builder separates the construction of a complex value from its
//! representation. Each submodule is an independent example with its own
//! target type:
//!
//! - [`problem`]: the telescoping constructor builders replace
//! - [`simple`]: fluent (chained) builder plus a director
//! - [`faceted`]: one target, several sub-builders for disjoint field groups
//! - [`functional`]: deferred mutation steps folded over a fresh value
//! - [`stepwise`]: call order enforced by the type system

pub mod faceted;
pub mod functional;
pub mod problem;
pub mod simple;
pub mod stepwise;
