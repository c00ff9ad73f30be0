//! Log subscriber setup

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber; `RUST_LOG` overrides the level
/// derived from the verbosity flags
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    // A second install (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
