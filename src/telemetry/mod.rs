//! Logging initialization.
//!
//! Sets up tracing-subscriber with an env filter and a fmt layer on
//! stderr, so stdout stays free for command output.

use crate::error::{Error, Result};

/// Configuration for logging initialization.
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (e.g. "info", "loglens=debug").
    pub default_filter: String,
    /// Compact single-line output instead of the full format.
    pub compact: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            compact: false,
        }
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the fallback filter does not parse or a global
/// subscriber was already set.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.default_filter)
            .map_err(|e| Error::Logging(format!("bad log filter: {e}")))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.compact {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| Error::Logging(format!("failed to init tracing subscriber: {e}")))
}
