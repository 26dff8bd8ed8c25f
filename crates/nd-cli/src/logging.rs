//! Logging setup shared by every binary.
//!
//! Logs always go to stderr so that stdout carries program output only.

use crate::{CliError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Filter directive picked from the flags, or `None` to defer to `RUST_LOG`.
///
/// An explicit level beats `--quiet`, which beats `--verbose`.
pub fn filter_directive(
    verbose: u8,
    quiet: bool,
    log_level: Option<LogLevel>,
) -> Option<&'static str> {
    if let Some(level) = log_level {
        return Some(level.as_str());
    }
    if quiet {
        return Some("error");
    }
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

pub fn setup_logging(
    verbose: u8,
    quiet: bool,
    log_level: Option<LogLevel>,
    log_format: LogFormat,
) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = match filter_directive(verbose, quiet, log_level) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    let installed = match log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(formatter)
            .with(filter)
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(formatter.json())
            .with(filter)
            .try_init(),
    };

    installed.map_err(|e| CliError::Config(format!("Failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_level_wins() {
        assert_eq!(filter_directive(3, true, Some(LogLevel::Warn)), Some("warn"));
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(filter_directive(2, true, None), Some("error"));
    }

    #[test]
    fn verbosity_steps() {
        assert_eq!(filter_directive(0, false, None), None);
        assert_eq!(filter_directive(1, false, None), Some("info"));
        assert_eq!(filter_directive(2, false, None), Some("debug"));
        assert_eq!(filter_directive(9, false, None), Some("trace"));
    }
}
