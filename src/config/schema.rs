//! Configuration schema types
//!
//! Every section has defaults, so an empty file (or no file at all) yields a
//! working configuration.

use crate::adapters::csv::CsvOptions;
use crate::anonymization::config::AnonymizationConfig;
use crate::domain::Result as TabscrubResult;
use crate::generator::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Tabscrub configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabscrubConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Anonymization settings
    #[serde(default)]
    pub anonymization: AnonymizationConfig,

    /// CSV dialect
    #[serde(default)]
    pub csv: CsvConfig,

    /// Synthetic data generation
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TabscrubConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.anonymization
            .validate()
            .map_err(|e| format!("anonymization: {e:#}"))?;
        self.csv.validate()?;
        self.generator.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// CSV dialect configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Field delimiter (a single ASCII character, or `tab`)
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

impl CsvConfig {
    /// Reader/writer options for this dialect
    pub fn options(&self) -> TabscrubResult<CsvOptions> {
        CsvOptions::from_delimiter(&self.delimiter)
    }

    fn validate(&self) -> Result<(), String> {
        self.options()
            .map(|_| ())
            .map_err(|e| format!("csv.delimiter: {e}"))
    }
}

/// Synthetic data generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory generated files are saved in
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Random seed
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Record count when none is given
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Output format when none is given (json, csv, sql)
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            seed: default_seed(),
            default_count: default_count(),
            default_format: default_format(),
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.as_os_str().is_empty() {
            return Err("generator.output_dir must not be empty".to_string());
        }

        if !(crate::generator::MIN_COUNT..=crate::generator::MAX_COUNT)
            .contains(&self.default_count)
        {
            return Err(format!(
                "generator.default_count must be between {} and {}",
                crate::generator::MIN_COUNT,
                crate::generator::MAX_COUNT
            ));
        }

        self.default_format
            .parse::<OutputFormat>()
            .map_err(|e| format!("generator.default_format: {e}"))?;

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,

    /// Write file logs as JSON
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path must not be empty".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
            json_format: true,
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_seed() -> u64 {
    42
}

fn default_count() -> usize {
    10
}

fn default_format() -> String {
    "json".to_string()
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ColumnRef;

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "DEBUG".to_string();
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_csv_config_validation() {
        let mut config = CsvConfig::default();
        assert_eq!(config.options().unwrap().delimiter, b',');

        config.delimiter = "tab".to_string();
        assert_eq!(config.options().unwrap().delimiter, b'\t');

        config.delimiter = "||".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_generator_config_validation() {
        let mut config = GeneratorConfig::default();
        assert!(config.validate().is_ok());

        config.default_count = 0;
        assert!(config.validate().is_err());

        config.default_count = 10;
        config.default_format = "xml".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("Unsupported format"));
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_values() {
        let config: TabscrubConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.application.log_level, "info");
        assert_eq!(
            config.anonymization.email_column,
            ColumnRef::Name("email".to_string())
        );
        assert_eq!(config.csv.delimiter, ",");
        assert_eq!(config.generator.seed, 42);
        assert_eq!(config.generator.output_dir, PathBuf::from("data"));
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_column_refs_from_toml() {
        let config: TabscrubConfig = toml::from_str(
            r#"
[anonymization]
email_column = 1
phone_column = "Mobile"
"#,
        )
        .unwrap();
        assert_eq!(config.anonymization.email_column, ColumnRef::Index(1));
        assert_eq!(
            config.anonymization.phone_column,
            ColumnRef::Name("Mobile".to_string())
        );
    }

    #[test]
    fn test_nested_validation_error_is_prefixed() {
        let mut config = TabscrubConfig::default();
        config.anonymization.email_column = ColumnRef::Name(" ".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("anonymization:"));
    }
}
