//! tracing setup for the generator binary
//!
//! Diagnostics go to stderr; stdout is reserved for the status lines.

use tracing_subscriber::{EnvFilter, Registry, prelude::*};

use crate::constants::DEFAULT_LOG_FILTER;

/// Parse a filter directive, falling back to the default on a bad directive
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(directive: &str) {
    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(build_filter(directive));

    let _ = Registry::default().with(stderr).try_init();
}
