//! Logging setup for the binary
//!
//! The library only emits `tracing` events. Binaries call [init] once to install a stderr
//! subscriber so that stdout stays reserved for command output.

use tracing_subscriber::EnvFilter;

/// Resolve the filter: explicit level first, then `RUST_LOG`, then the configured fallback
pub fn filter(log_level: Option<&str>, fallback: &str) -> EnvFilter {
    match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
    }
}

/// Install the global stderr subscriber.
///
/// Returns whether this call installed it. Once a global subscriber is set, later calls
/// leave it in place and return `false` without output.
pub fn init(log_level: Option<&str>, fallback: &str, no_color: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(log_level, fallback))
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .try_init()
        .is_ok()
}
