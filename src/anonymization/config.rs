//! Anonymization configuration

use crate::domain::ColumnRef;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Anonymization run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Column hashed as an identifier (index or header name)
    #[serde(default = "default_email_column")]
    pub email_column: ColumnRef,

    /// Column masked as a phone number (index or header name)
    #[serde(default = "default_phone_column")]
    pub phone_column: ColumnRef,

    /// Process records on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,

    /// Dry-run mode (anonymize and report, but write nothing)
    #[serde(default)]
    pub dry_run: bool,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

fn default_email_column() -> ColumnRef {
    ColumnRef::Name("email".to_string())
}

fn default_phone_column() -> ColumnRef {
    ColumnRef::Name("phone".to_string())
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            email_column: default_email_column(),
            phone_column: default_phone_column(),
            parallel: false,
            dry_run: false,
            audit: AuditConfig::default(),
        }
    }
}

impl AnonymizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (role, column) in [("email", &self.email_column), ("phone", &self.phone_column)] {
            if let ColumnRef::Name(name) = column {
                if name.trim().is_empty() {
                    anyhow::bail!("{role}_column must not be an empty name");
                }
            }
        }

        self.audit
            .validate()
            .context("Invalid audit configuration")?;

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TABSCRUB_ANONYMIZATION_EMAIL_COLUMN") {
            self.email_column = val
                .parse()
                .context("Invalid TABSCRUB_ANONYMIZATION_EMAIL_COLUMN value")?;
        }

        if let Ok(val) = std::env::var("TABSCRUB_ANONYMIZATION_PHONE_COLUMN") {
            self.phone_column = val
                .parse()
                .context("Invalid TABSCRUB_ANONYMIZATION_PHONE_COLUMN value")?;
        }

        if let Ok(val) = std::env::var("TABSCRUB_ANONYMIZATION_PARALLEL") {
            self.parallel = val
                .parse()
                .context("Invalid TABSCRUB_ANONYMIZATION_PARALLEL value")?;
        }

        if let Ok(val) = std::env::var("TABSCRUB_ANONYMIZATION_DRY_RUN") {
            self.dry_run = val
                .parse()
                .context("Invalid TABSCRUB_ANONYMIZATION_DRY_RUN value")?;
        }

        self.audit.apply_env_overrides()?;

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON lines for audit entries
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/anonymization.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            anyhow::bail!("audit log_path must not be empty when audit is enabled");
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TABSCRUB_ANONYMIZATION_AUDIT_ENABLED") {
            self.enabled = val
                .parse()
                .context("Invalid TABSCRUB_ANONYMIZATION_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("TABSCRUB_ANONYMIZATION_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("TABSCRUB_ANONYMIZATION_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse()
                .context("Invalid TABSCRUB_ANONYMIZATION_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}
