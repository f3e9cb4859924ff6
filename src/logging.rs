//! Tracing setup for the `nutri_coach` binary.
//!
//! Logs go to stderr so that calculation output on stdout stays clean.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default level when neither `--verbose` nor `RUST_LOG` is given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize logging with the quiet default level.
pub fn init() {
    init_with_level(DEFAULT_LEVEL)
}

/// Initialize logging with a specific default level.
///
/// `RUST_LOG` still takes precedence when set.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Initialize logging for tests. Safe to call more than once.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
