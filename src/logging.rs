//! # Logging Module
//!
//! Structured logging setup for the `roadmap` binary and embedding programs.
//! The library itself only emits `tracing` events; nothing is printed until
//! a subscriber is installed with [`init_logging`].
//!
//! ## Environment Variables
//!
//! - `ROADMAP_LOG_LEVEL` - `trace`, `debug`, `info`, `warn` (default) or `error`
//! - `ROADMAP_LOG_FORMAT` - `pretty`, `compact` (default) or `json`
//! - `ROADMAP_LOG_FILTER` - extra comma-separated directives, e.g. `roadmap::store=debug`
//!
//! `RUST_LOG`, when set, takes precedence over `ROADMAP_LOG_LEVEL`.
//!
//! Log output goes to stderr so routed results on stdout stay clean.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line, human-oriented output
    Pretty,
    /// Single-line human-readable output
    #[default]
    Compact,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "unknown log format '{other}' (expected pretty, compact or json)"
            )),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Base level when `RUST_LOG` is not set
    pub log_level: String,
    /// Output format
    pub format: LogFormat,
    /// Extra filter directives, comma separated
    pub target_filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: LogFormat::default(),
            target_filter: None,
        }
    }
}

impl LogConfig {
    /// Load configuration from `ROADMAP_LOG_*` environment variables
    ///
    /// Unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: env::var("ROADMAP_LOG_LEVEL").unwrap_or(defaults.log_level),
            format: env::var("ROADMAP_LOG_FORMAT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.format),
            target_filter: env::var("ROADMAP_LOG_FILTER")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    /// Level parsed from `log_level`, defaulting to WARN
    #[must_use]
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "error" => Level::ERROR,
            _ => Level::WARN,
        }
    }

    /// Build the `EnvFilter` this configuration describes
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let mut env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level().as_str()));

        if let Some(target_filter) = &self.target_filter {
            for filter in target_filter.split(',') {
                let filter = filter.trim();
                if filter.is_empty() {
                    continue;
                }
                match filter.parse() {
                    Ok(directive) => env_filter = env_filter.add_directive(directive),
                    Err(_) => eprintln!("Warning: Invalid log filter directive: {}", filter),
                }
            }
        }
        env_filter
    }
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")
}
