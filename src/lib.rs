//! Design Patterns - Runnable Examples
//!
//! Builder, Factory and SOLID examples plus short language-feature
//! snippets. Each example is independent and writes its demonstration text
//! to a [`catalog::RunContext`].
//!
//! Run any example with:
//! ```bash
//! cargo run --bin patterns -- run <example_name>
//! ```
//!
//! Or list all examples:
//! ```bash
//! cargo run --bin patterns -- list
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod factories;
pub mod language;
pub mod logging;
pub mod solid;

pub use catalog::{catalog, find, Example, RunContext};
pub use config::RunnerConfig;
pub use error::{PatternError, Result};
