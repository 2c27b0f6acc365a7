//! Tracing setup for the `patterns` binary.
//!
//! Logs go to stderr so they never mix with the demonstration text on
//! stdout. `RUST_LOG` overrides the level picked here.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Calling it twice is harmless; the second
/// call keeps the first subscriber.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(default_level(true), "debug");
        assert_eq!(default_level(false), "warn");
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
