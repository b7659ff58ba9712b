//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::TabscrubConfig;
use crate::domain::errors::TabscrubError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into TabscrubConfig
/// 4. Applies environment variable overrides (TABSCRUB_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use tabscrub::config::loader::load_config;
///
/// let config = load_config("tabscrub.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<TabscrubConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TabscrubError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        TabscrubError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Loads configuration from a TOML file, or uses defaults if the file does not exist
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<TabscrubConfig> {
    let path = path.as_ref();

    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    finish(TabscrubConfig::default())
}

/// Parses configuration text: substitution, TOML, overrides, validation
pub fn parse_config(contents: &str) -> Result<TabscrubConfig> {
    let contents = substitute_env_vars(contents)?;

    let config: TabscrubConfig = toml::from_str(&contents)
        .map_err(|e| TabscrubError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

fn finish(mut config: TabscrubConfig) -> Result<TabscrubConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        TabscrubError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| TabscrubError::Other(format!("Invalid substitution pattern: {}", e)))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(TabscrubError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using TABSCRUB_* prefix
///
/// Environment variables follow the pattern: TABSCRUB_<SECTION>_<KEY>
/// For example: TABSCRUB_CSV_DELIMITER, TABSCRUB_GENERATOR_SEED
fn apply_env_overrides(config: &mut TabscrubConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("TABSCRUB_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Anonymization overrides
    config
        .anonymization
        .apply_env_overrides()
        .map_err(|e| TabscrubError::Configuration(format!("{e:#}")))?;

    // CSV overrides
    if let Ok(val) = std::env::var("TABSCRUB_CSV_DELIMITER") {
        config.csv.delimiter = val;
    }

    // Generator overrides
    if let Ok(val) = std::env::var("TABSCRUB_GENERATOR_OUTPUT_DIR") {
        config.generator.output_dir = val.into();
    }
    if let Ok(val) = std::env::var("TABSCRUB_GENERATOR_SEED") {
        config.generator.seed = parse_override("TABSCRUB_GENERATOR_SEED", &val)?;
    }
    if let Ok(val) = std::env::var("TABSCRUB_GENERATOR_DEFAULT_COUNT") {
        config.generator.default_count = parse_override("TABSCRUB_GENERATOR_DEFAULT_COUNT", &val)?;
    }
    if let Ok(val) = std::env::var("TABSCRUB_GENERATOR_DEFAULT_FORMAT") {
        config.generator.default_format = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("TABSCRUB_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("TABSCRUB_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("TABSCRUB_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("TABSCRUB_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
    if let Ok(val) = std::env::var("TABSCRUB_LOGGING_JSON_FORMAT") {
        config.logging.json_format = parse_override("TABSCRUB_LOGGING_JSON_FORMAT", &val)?;
    }

    Ok(())
}

fn parse_override<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        TabscrubError::Configuration(format!("Invalid {name} value '{value}': {e}"))
    })
}
