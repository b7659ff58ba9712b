//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - Console output on stderr
//! - Configurable log levels (`RUST_LOG` overrides)
//! - Optional local file logging with rotation, JSON by default
//!
//! # Example
//!
//! ```no_run
//! use tabscrub::logging::init_logging;
//! use tabscrub::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of an anonymization run
///
/// # Example
///
/// ```no_run
/// use tabscrub::log_run_start;
///
/// log_run_start!("people.csv", "people_anonymized.csv");
/// ```
#[macro_export]
macro_rules! log_run_start {
    ($input:expr, $output:expr) => {
        tracing::info!(input = %$input, output = %$output, "Starting anonymization");
    };
}

/// Log the completion of an anonymization run
///
/// # Example
///
/// ```no_run
/// use tabscrub::log_run_complete;
/// use std::time::Duration;
///
/// log_run_complete!(42, Duration::from_millis(15));
/// ```
#[macro_export]
macro_rules! log_run_complete {
    ($records:expr, $duration:expr) => {
        tracing::info!(
            records = $records,
            duration_ms = $duration.as_millis() as u64,
            "Anonymization completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use tabscrub::log_error_with_context;
/// use tabscrub::domain::TabscrubError;
///
/// let error = TabscrubError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(error = %$error, context = $context, "Error occurred");
    };
}
