//! Logging setup
//!
//! Structured logging goes through `tracing`; the subscriber is installed
//! once by the binary.

use tracing_subscriber::EnvFilter;

/// Output format for the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Build the env filter, honouring `RUST_LOG` when set
pub fn build_filter(verbosity: u8) -> EnvFilter {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("batchdesk={}", default_level)))
}

/// Install the global tracing subscriber
///
/// Calling this twice is harmless; the second installation is ignored.
pub fn init_logging(verbosity: u8, format: LogFormat) {
    let filter = build_filter(verbosity);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
