//! Tracing integration for structured logging.
//!
//! The adapter only emits events; installing a subscriber is up to the
//! embedding process. `init_logging` is a convenience for binaries, tests and
//! the Python bindings.

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// Structured JSON output.
    Json,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to install global subscriber: {0}")]
    Init(String),
}

/// Map a verbosity count to a level name (0=error .. 4+=trace).
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

/// Install a global stderr subscriber.
///
/// `RUST_LOG` overrides `verbosity` when set. Fails if a global subscriber
/// is already installed.
pub fn init_logging(verbosity: u8, format: LogFormat) -> Result<(), LoggingError> {
    let level = level_for_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("s3_bridge_core={level},s3_bridge={level}"))
    });

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(verbosity >= 3)
                    .with_line_number(verbosity >= 3),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| LoggingError::Init(e.to_string()))
}

/// Initialize debug-level text logging for tests.
///
/// Returns `false` if a global subscriber was already installed, so several
/// tests in one process can call it.
pub fn init_test_logging() -> bool {
    init_logging(3, LogFormat::Text).is_ok()
}
