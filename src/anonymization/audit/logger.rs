//! Audit logger for anonymization runs

use crate::anonymization::report::RunReport;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Outcome of a run as recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Output written (or dry run finished)
    Completed,
    /// Run aborted, no output written
    Aborted,
}

/// Audit log entry; carries counts and labels, never field values
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    run_id: String,
    input: String,
    output: String,
    status: RunStatus,
    records_processed: usize,
    email_column: Option<usize>,
    phone_column: Option<usize>,
    values_hashed: usize,
    values_masked: usize,
    dry_run: bool,
    processing_time_ms: u64,
    error: Option<String>,
}

/// Audit logger for anonymization runs
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the log directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    /// Log a completed run
    pub fn log_run(&self, input: &str, output: &str, report: &RunReport) -> Result<Uuid> {
        self.write_run(input, output, RunStatus::Completed, report, None)
    }

    /// Log an aborted run
    pub fn log_failure(
        &self,
        input: &str,
        output: &str,
        report: &RunReport,
        error: &str,
    ) -> Result<Uuid> {
        self.write_run(input, output, RunStatus::Aborted, report, Some(error))
    }

    fn write_run(
        &self,
        input: &str,
        output: &str,
        status: RunStatus,
        report: &RunReport,
        error: Option<&str>,
    ) -> Result<Uuid> {
        let run_id = Uuid::new_v4();
        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            run_id: run_id.to_string(),
            input: input.to_string(),
            output: output.to_string(),
            status,
            records_processed: report.records_processed,
            email_column: report.columns.map(|c| c.email),
            phone_column: report.columns.map(|c| c.phone),
            values_hashed: report.values_hashed,
            values_masked: report.values_masked,
            dry_run: report.dry_run,
            processing_time_ms: report.processing_time_ms,
            error: error.map(str::to_string),
        };

        self.write_entry(&entry)?;
        Ok(run_id)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Run: {} | {} -> {} | Status: {:?} | Records: {} | Time: {}ms",
                entry.timestamp,
                entry.run_id,
                entry.input,
                entry.output,
                entry.status,
                entry.records_processed,
                entry.processing_time_ms
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}
