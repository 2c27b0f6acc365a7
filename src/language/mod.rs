//! Language-feature snippets.
//!
//! Short Rust counterparts of common type-system features: annotations and
//! inference, "classes" (structs, privacy, traits with default methods),
//! generics, narrowing through enums, and module exports.

pub mod classes;
pub mod generics;
pub mod modules;
pub mod narrowing;
pub mod types;
