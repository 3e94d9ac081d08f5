//! Tracing subscriber initialization with structured logging.
//!
//! # Usage
//!
//! ```no_run
//! use leavebridge_infra::logging::{init_tracing, LogFormat};
//!
//! init_tracing(LogFormat::Json).unwrap();
//! ```

use leavebridge_domain::{LeaveBridgeError, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
///
/// # Errors
///
/// Returns `LeaveBridgeError::Config` if a global subscriber has already been
/// installed.
pub fn init_tracing(format: LogFormat) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
            .try_init(),
    };

    installed.map_err(|e| LeaveBridgeError::Config(format!("tracing already initialized: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected_without_panic() {
        let _ = init_tracing(LogFormat::Text);
        let second = init_tracing(LogFormat::Json);

        let err = second.expect_err("global subscriber can only be set once");
        assert!(matches!(err, LeaveBridgeError::Config(_)));
    }
}
