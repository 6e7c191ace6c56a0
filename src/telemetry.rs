//! Tracing setup and span constructors.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter. Logs go to stderr so they do
/// not interleave with command output on stdout.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, debug_span};

    /// Create a span for a front-end command execution.
    pub fn command(name: &str) -> Span {
        debug_span!("command", name = %name)
    }
}
