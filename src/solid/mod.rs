//! SOLID principles, each as a problem/solution pair.
//!
//! - [`srp`]: single responsibility (journal vs. persistence)
//! - [`ocp`]: open/closed via composable specifications
//! - [`lsp`]: Liskov substitution via a separate bonus capability
//! - [`isp`]: interface segregation for printers
//! - [`dip`]: dependency inversion via an injected logger

pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;
