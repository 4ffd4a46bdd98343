//! Diagnostic logging to stderr via `tracing-subscriber`.
//!
//! `RUST_LOG`, when set, takes precedence over `--log-level`.

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The filter directive in effect for `level` given the `RUST_LOG` value.
#[must_use]
pub fn filter_directive(level: LogLevel, rust_log: Option<&str>) -> String {
    rust_log
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .map_or_else(|| level.as_str().to_string(), str::to_string)
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(level: LogLevel) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(level, rust_log.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
