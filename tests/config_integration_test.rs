//! Integration tests for configuration loading and validation

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tabscrub::config::{load_config, load_config_or_default};
use tabscrub::domain::ColumnRef;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for var in [
        "TABSCRUB_APPLICATION_LOG_LEVEL",
        "TABSCRUB_ANONYMIZATION_EMAIL_COLUMN",
        "TABSCRUB_ANONYMIZATION_PHONE_COLUMN",
        "TABSCRUB_ANONYMIZATION_PARALLEL",
        "TABSCRUB_ANONYMIZATION_AUDIT_ENABLED",
        "TABSCRUB_CSV_DELIMITER",
        "TABSCRUB_GENERATOR_SEED",
        "TABSCRUB_GENERATOR_DEFAULT_COUNT",
        "TEST_TABSCRUB_AUDIT_DIR",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[anonymization]
email_column = 1
phone_column = "Phone Number"
parallel = true
dry_run = true

[anonymization.audit]
enabled = true
log_path = "./audit/test.log"
json_format = false

[csv]
delimiter = "tab"

[generator]
output_dir = "fixtures"
seed = 1234
default_count = 50
default_format = "sql"

[logging]
local_enabled = true
local_path = "./var/log"
local_rotation = "hourly"
json_format = false
"#,
    );

    let config = load_config(file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.anonymization.email_column, ColumnRef::Index(1));
    assert_eq!(
        config.anonymization.phone_column,
        ColumnRef::Name("Phone Number".to_string())
    );
    assert!(config.anonymization.parallel);
    assert!(config.anonymization.dry_run);
    assert!(config.anonymization.audit.enabled);
    assert!(!config.anonymization.audit.json_format);
    assert_eq!(config.csv.options().unwrap().delimiter, b'\t');
    assert_eq!(config.generator.output_dir, PathBuf::from("fixtures"));
    assert_eq!(config.generator.seed, 1234);
    assert_eq!(config.generator.default_count, 50);
    assert_eq!(config.generator.default_format, "sql");
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("");
    let config = load_config(file.path()).unwrap();

    assert_eq!(
        config.anonymization.email_column,
        ColumnRef::Name("email".to_string())
    );
    assert_eq!(
        config.anonymization.phone_column,
        ColumnRef::Name("phone".to_string())
    );
    assert!(!config.anonymization.parallel);
    assert_eq!(config.csv.delimiter, ",");
    assert_eq!(config.generator.default_format, "json");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_TABSCRUB_AUDIT_DIR", "/var/audit");

    let file = write_config(
        r#"
[anonymization.audit]
enabled = true
log_path = "${TEST_TABSCRUB_AUDIT_DIR}/runs.log"
"#,
    );

    let config = load_config(file.path()).expect("Failed to load config");
    assert_eq!(
        config.anonymization.audit.log_path,
        PathBuf::from("/var/audit/runs.log")
    );

    cleanup_env_vars();
}

#[test]
fn test_env_var_substitution_missing_var() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("[generator]\noutput_dir = \"${TEST_TABSCRUB_AUDIT_DIR}\"\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(err
        .to_string()
        .contains("Missing required environment variables: TEST_TABSCRUB_AUDIT_DIR"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TABSCRUB_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("TABSCRUB_ANONYMIZATION_EMAIL_COLUMN", "3");
    std::env::set_var("TABSCRUB_ANONYMIZATION_PARALLEL", "true");
    std::env::set_var("TABSCRUB_CSV_DELIMITER", ";");
    std::env::set_var("TABSCRUB_GENERATOR_SEED", "99");

    let file = write_config(
        r#"
[application]
log_level = "info"

[anonymization]
email_column = "email"

[generator]
seed = 1
"#,
    );

    let config = load_config(file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.anonymization.email_column, ColumnRef::Index(3));
    assert!(config.anonymization.parallel);
    assert_eq!(config.csv.delimiter, ";");
    assert_eq!(config.generator.seed, 99);

    cleanup_env_vars();
}

#[test]
fn test_invalid_env_override_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TABSCRUB_GENERATOR_DEFAULT_COUNT", "lots");

    let file = write_config("");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TABSCRUB_GENERATOR_DEFAULT_COUNT"));

    cleanup_env_vars();
}

#[test]
fn test_validation_errors() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    for content in [
        "[application]\nlog_level = \"loud\"\n",
        "[csv]\ndelimiter = \"||\"\n",
        "[generator]\ndefault_count = 0\n",
        "[generator]\ndefault_format = \"xml\"\n",
        "[anonymization]\nphone_column = \"\"\n",
        "[logging]\nlocal_rotation = \"size\"\n",
    ] {
        let file = write_config(content);
        let err = load_config(file.path()).unwrap_err();
        assert!(
            err.to_string().contains("Configuration validation failed"),
            "{content}: {err}"
        );
    }
}

#[test]
fn test_load_config_missing_file() {
    let err = load_config("definitely-missing-tabscrub.toml").unwrap_err();
    assert!(err.to_string().contains("Configuration file not found"));
}

#[test]
fn test_load_config_or_default_missing_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TABSCRUB_CSV_DELIMITER", "|");

    let config = load_config_or_default("definitely-missing-tabscrub.toml").unwrap();
    assert_eq!(config.csv.delimiter, "|");
    assert_eq!(config.application.log_level, "info");

    cleanup_env_vars();
}
