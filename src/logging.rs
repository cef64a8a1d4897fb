//! Logging setup.
//!
//! Structured diagnostics via the `tracing` crate. Output goes to stderr so
//! scan diagnostics never interleave with redirected command output. The
//! `HASHWALK_LOG` environment variable overrides the configured level with a
//! full filter directive.

use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive.
const LOG_ENV_VAR: &str = "HASHWALK_LOG";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Master switch; when false nothing is emitted.
    pub enabled: bool,
    /// Log level: trace, debug, info, warn, error.
    pub level: String,
    /// Enable ANSI colors.
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            color: true,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Must be called at most once, before any diagnostics are emitted.
pub fn init_logging(config: &LoggingConfig) {
    fmt()
        .with_env_filter(env_filter(config))
        .with_target(false)
        .with_ansi(config.color)
        .with_writer(io::stderr)
        .init();
}

/// Filter from the environment when set, from the config otherwise.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    if !config.enabled {
        return EnvFilter::new("off");
    }
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level))
}
