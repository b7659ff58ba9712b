//! Main anonymization engine
//!
//! This module provides the [`AnonymizationEngine`] that resolves the column
//! designation, runs the row pipeline and keeps the audit trail.
//!
//! # Examples
//!
//! ```
//! use tabscrub::anonymization::{AnonymizationEngine, config::AnonymizationConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//!
//! let rows = vec![
//!     vec!["name".to_string(), "email".to_string(), "phone".to_string()],
//!     vec!["Jane".to_string(), "Jane@x.com".to_string(), "555-000-1234".to_string()],
//! ];
//!
//! let result = engine.anonymize(&rows)?;
//! assert_eq!(result.rows[1][2], "XXX-XXX-1234");
//! println!("Processed {} records", result.report.records_processed);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::anonymization::{
    audit::AuditLogger,
    config::AnonymizationConfig,
    pipeline::{anonymize_dataset_parallel, anonymize_with},
    report::RunReport,
};
use crate::domain::{AnonymizationError, ColumnDesignation, Dataset, Record};
use anyhow::{Context, Result};
use std::time::Instant;

/// Anonymized rows together with the run report
#[derive(Debug, Clone)]
pub struct AnonymizedDataset {
    /// Anonymized dataset, header first
    pub rows: Dataset,

    /// Report for this run
    pub report: RunReport,
}

/// Main anonymization engine
///
/// The engine holds no per-run state and can be shared across threads.
pub struct AnonymizationEngine {
    config: AnonymizationConfig,
    audit_logger: Option<AuditLogger>,
}

impl AnonymizationEngine {
    /// Create a new anonymization engine
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails or the audit log
    /// directory cannot be created.
    pub fn new(config: AnonymizationConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid anonymization configuration")?;

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
            )?)
        } else {
            None
        };

        Ok(Self {
            config,
            audit_logger,
        })
    }

    /// Resolve the configured column references against the dataset header
    pub fn resolve_columns(&self, rows: &[Record]) -> Result<ColumnDesignation, AnonymizationError> {
        ColumnDesignation::resolve(
            &self.config.email_column,
            &self.config.phone_column,
            rows.first(),
        )
    }

    /// Anonymize a dataset
    ///
    /// The whole dataset is processed before anything is returned; any
    /// failing record aborts the run.
    ///
    /// # Errors
    ///
    /// Returns the [`AnonymizationError`] for the earliest failing record, or
    /// a resolution error when a named column is missing from the header.
    pub fn anonymize(&self, rows: &[Record]) -> Result<AnonymizedDataset, AnonymizationError> {
        let start = Instant::now();

        let designation = self.resolve_columns(rows)?;
        tracing::debug!(
            email_column = designation.email,
            phone_column = designation.phone,
            records = rows.len().saturating_sub(1),
            parallel = self.config.parallel,
            "Resolved column designation"
        );

        let result = if self.config.parallel {
            anonymize_dataset_parallel(rows, &designation)
        } else {
            anonymize_with(rows, &designation)
        };

        let anonymized = match result {
            Ok(anonymized) => anonymized,
            Err(e) => {
                tracing::error!(error = %e, "Anonymization aborted");
                return Err(e);
            }
        };

        let mut report = RunReport::new();
        report.columns = Some(designation);
        report.header_fields = rows.first().map(Vec::len).unwrap_or(0);
        report.parallel = self.config.parallel;
        report.dry_run = self.config.dry_run;
        for (original, out) in rows.iter().zip(anonymized.iter()).skip(1) {
            report.add_record(original, out, &designation);
        }
        report.processing_time_ms = start.elapsed().as_millis() as u64;
        report.finalize();

        tracing::info!(
            records = report.records_processed,
            digits_masked = report.digits_masked,
            duration_ms = report.processing_time_ms,
            "Dataset anonymized"
        );
        for warning in &report.warnings {
            tracing::warn!(warning = %warning, "Anonymization warning");
        }

        Ok(AnonymizedDataset {
            rows: anonymized,
            report,
        })
    }

    /// Record a completed run in the audit log (if enabled)
    pub fn record_run(&self, input: &str, output: &str, report: &RunReport) -> Result<()> {
        if let Some(ref logger) = self.audit_logger {
            let run_id = logger.log_run(input, output, report)?;
            tracing::debug!(run_id = %run_id, "Audit entry written");
        }
        Ok(())
    }

    /// Record an aborted run in the audit log (if enabled)
    pub fn record_failure(&self, input: &str, output: &str, error: &str) -> Result<()> {
        if let Some(ref logger) = self.audit_logger {
            logger.log_failure(input, output, &RunReport::new(), error)?;
        }
        Ok(())
    }

    /// Check if in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }

    /// Check if the parallel pipeline is used
    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }
}
