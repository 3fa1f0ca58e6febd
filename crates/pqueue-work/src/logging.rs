//! Logging setup.
//!
//! The queue reports through `tracing`. Applications embedding it call
//! [`init_logging`] once to install a formatted subscriber.
//!
//! # Environment Variables
//!
//! - `PQUEUE_LOG`: filter directives (e.g. `pqueue_work=trace`), in the
//!   same syntax as `RUST_LOG`

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PQUEUE_LOG";

/// Filter used when none is configured.
const DEFAULT_FILTER: &str = "info";

/// Errors that can occur while installing the subscriber.
#[derive(Error, Debug)]
pub enum LogInitError {
    /// Filter directives could not be parsed.
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// A global subscriber is already installed.
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Subscriber configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives.
    pub filter: String,
    /// Whether to print the event target (module path).
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            with_target: true,
        }
    }
}

impl LogConfig {
    /// Reads the filter from `PQUEUE_LOG`, falling back to the default.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(LOG_ENV) {
            Ok(filter) if !filter.trim().is_empty() => config.with_filter(filter),
            _ => config,
        }
    }

    /// Sets the filter directives.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Sets whether event targets are printed.
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// Parses the filter directives.
    pub fn env_filter(&self) -> Result<EnvFilter, LogInitError> {
        EnvFilter::try_new(&self.filter).map_err(|e| LogInitError::InvalidFilter {
            filter: self.filter.clone(),
            reason: e.to_string(),
        })
    }
}

/// Installs a global `fmt` subscriber configured by `config`.
///
/// Returns [`LogInitError::AlreadyInitialized`] rather than panicking if a
/// subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), LogInitError> {
    let filter = config.env_filter()?;

    fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .try_init()
        .map_err(|e| LogInitError::AlreadyInitialized(e.to_string()))
}
