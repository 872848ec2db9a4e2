//! Logging setup shared by the Statusmaker binaries
//!
//! Supports text, JSON and pretty output, `RUST_LOG`-style filtering, and
//! writing either to stderr or to a log file (the TUI owns the terminal, so
//! it can only log to a file).
//!
//! # Examples
//!
//! ```no_run
//! use libstatusmaker::logging::{LoggingConfig, LogFormat};
//!
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false);
//! config.init().unwrap();
//!
//! // Or use default settings (respects env vars)
//! libstatusmaker::logging::init_default();
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to, created if missing
    File(PathBuf),
}

/// Configuration for logging initialization
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    pub target: LogTarget,
}

impl LoggingConfig {
    /// Create a new logging configuration
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            target: LogTarget::Stderr,
        }
    }

    /// Send log lines to `target` instead of stderr
    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }

    fn make_writer(&self) -> std::io::Result<BoxMakeWriter> {
        match &self.target {
            LogTarget::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
            LogTarget::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
        }
    }

    /// Initialize logging with the configured settings
    ///
    /// This should be called once at the start of your program. Fails only
    /// when a log file target cannot be opened.
    ///
    /// # Panics
    ///
    /// Panics if the logging subscriber has already been initialized
    pub fn init(&self) -> std::io::Result<()> {
        use tracing_subscriber::EnvFilter;

        let writer = self.make_writer()?;
        let ansi = self.target == LogTarget::Stderr;

        // Determine the filter based on verbose flag and level
        let filter = if self.verbose {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
        };

        match self.format {
            LogFormat::Json => {
                // JSON output for machine parsing (production/monitoring)
                // One JSON object per line
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Pretty => {
                // Pretty output with colors for development
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Text => {
                // Plain text output for piping/basic usage
                // Less verbose for end users
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(false)
                    .with_level(true)
                    .init();
            }
        }

        Ok(())
    }
}

/// Initialize logging with default settings
///
/// Respects `STATUSMAKER_LOG_FORMAT` and `STATUSMAKER_LOG_LEVEL` environment
/// variables. Falls back to text format with info level if not set.
///
/// # Examples
///
/// ```bash
/// export STATUSMAKER_LOG_FORMAT=json
/// export STATUSMAKER_LOG_LEVEL=debug
/// status-fmt status.toml
/// ```
pub fn init_default() {
    let config = LoggingConfig::new(format_from_env(), level_from_env("info"), false);
    // Stderr target cannot fail to open
    let _ = config.init();
}

/// `STATUSMAKER_LOG_FORMAT`, or text
pub fn format_from_env() -> LogFormat {
    std::env::var("STATUSMAKER_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text)
}

/// `STATUSMAKER_LOG_LEVEL`, or `default`
pub fn level_from_env(default: &str) -> String {
    std::env::var("STATUSMAKER_LOG_LEVEL").unwrap_or_else(|_| default.to_string())
}
