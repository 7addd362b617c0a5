//! Tracing and logging setup shared by every catalog entry point.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&Config::from_env());
}

/// Logging configuration.
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{Config, ConfigError, LogFormat};
