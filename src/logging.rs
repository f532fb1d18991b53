//! Logging initialization for host applications.
//!
//! Configures the `tracing-subscriber` infrastructure for every crate in the
//! workspace. Hosts call [`init_logging`] once at startup; library crates
//! only ever emit through `tracing` and never install a subscriber
//! themselves.

use thiserror::Error;
use tracing_subscriber::{filter::EnvFilter, fmt, util::SubscriberInitExt};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),

    #[error("Invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors
    Pretty,
    /// Structured JSON format for machine parsing
    Json,
    /// Compact format for production
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Json;
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Base level for workspace crates when no custom filter is given
    pub level: tracing::Level,
    /// Custom filter string (e.g., "core_client=debug,core_bridge=trace")
    pub filter: Option<String>,
    /// Display target module in logs
    pub display_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: tracing::Level::INFO,
            filter: None,
            display_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_target(mut self, display: bool) -> Self {
        self.display_target = display;
        self
    }
}

/// Initialize the logging system.
///
/// Call once during application startup; subsequent calls fail.
pub fn init_logging(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(&config)?;
    let builder = fmt::fmt()
        .with_env_filter(filter)
        .with_target(config.display_target);

    let init_result = match config.format {
        LogFormat::Pretty => builder.pretty().finish().try_init(),
        LogFormat::Json => builder.json().finish().try_init(),
        LogFormat::Compact => builder.compact().finish().try_init(),
    };

    init_result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    let filter_string = if let Some(custom) = &config.filter {
        custom.clone()
    } else {
        // Workspace crates at the configured level, noisy dependencies at warn.
        let level = config.level.to_string().to_ascii_lowercase();
        format!(
            "social_kit={level},core_client={level},core_bridge={level},\
             bridge_traits={level},bridge_desktop={level},\
             h2=warn,hyper=warn,reqwest=warn"
        )
    };

    filter_string
        .parse::<EnvFilter>()
        .map_err(|e| LoggingError::InvalidFilter {
            filter: filter_string,
            message: e.to_string(),
        })
}
