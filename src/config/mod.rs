//! Configuration management for Tabscrub.
//!
//! Tabscrub reads an optional TOML file (`tabscrub.toml` by default) with
//! support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `TABSCRUB_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tabscrub::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("tabscrub.toml")?;
//!
//! println!("Email column: {}", config.anonymization.email_column);
//! println!("Delimiter: {:?}", config.csv.delimiter);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`AnonymizationConfig`](crate::anonymization::config::AnonymizationConfig) - Column designation, parallelism, audit
//! - [`CsvConfig`] - CSV dialect
//! - [`GeneratorConfig`] - Synthetic data defaults
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [anonymization]
//! email_column = "email"
//! phone_column = 3
//! parallel = true
//!
//! [anonymization.audit]
//! enabled = true
//! log_path = "${TABSCRUB_AUDIT_DIR}/anonymization.log"
//!
//! [csv]
//! delimiter = ";"
//!
//! [generator]
//! output_dir = "data"
//! seed = 42
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, parse_config};
pub use schema::{ApplicationConfig, CsvConfig, GeneratorConfig, LoggingConfig, TabscrubConfig};
