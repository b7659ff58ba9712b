//! Anonymize command implementation
//!
//! This module implements the `anonymize` command: read a CSV file, hash the
//! identifier column, mask the phone column and write the result.

use crate::adapters::csv::{
    read_dataset_from_path, write_dataset_to_path, CsvOptions, STDIO_PATH,
};
use crate::anonymization::AnonymizationEngine;
use crate::config::load_config_or_default;
use crate::domain::ColumnRef;
use crate::{log_error_with_context, log_run_complete, log_run_start};
use clap::Args;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Input CSV file (`-` for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output CSV file (`-` for stdout)
    #[arg(short, long)]
    pub output: String,

    /// Column to hash: zero-based index or header name
    #[arg(long, value_name = "COLUMN")]
    pub email_column: Option<ColumnRef>,

    /// Column to mask: zero-based index or header name
    #[arg(long, value_name = "COLUMN")]
    pub phone_column: Option<ColumnRef>,

    /// Process records in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Anonymize and report without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON run report to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Field delimiter (single character, or `tab`)
    #[arg(short, long)]
    pub delimiter: Option<String>,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting anonymize command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        // Apply CLI overrides
        if let Some(column) = &self.email_column {
            tracing::info!(column = %column, "Overriding email column from CLI");
            config.anonymization.email_column = column.clone();
        }
        if let Some(column) = &self.phone_column {
            tracing::info!(column = %column, "Overriding phone column from CLI");
            config.anonymization.phone_column = column.clone();
        }
        if self.parallel {
            config.anonymization.parallel = true;
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.anonymization.dry_run = true;
        }
        if let Some(delimiter) = &self.delimiter {
            config.csv.delimiter = delimiter.clone();
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let options: CsvOptions = match config.csv.options() {
            Ok(o) => o,
            Err(e) => {
                eprintln!("{e}");
                return Ok(2);
            }
        };

        let engine = match AnonymizationEngine::new(config.anonymization) {
            Ok(engine) => engine,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create anonymization engine");
                eprintln!("Failed to initialize anonymization: {e:#}");
                return Ok(2);
            }
        };

        // Human-readable output must not interleave with CSV on stdout
        let to_stdout = self.output == STDIO_PATH;
        let say = |line: &str| {
            if to_stdout {
                eprintln!("{line}");
            } else {
                println!("{line}");
            }
        };

        if engine.is_dry_run() {
            tracing::info!("Dry run mode enabled - no output will be written");
            say("🔍 DRY RUN MODE - No output file will be written");
            say("");
        }

        let start = Instant::now();
        log_run_start!(self.input, self.output);

        let rows = match read_dataset_from_path(Path::new(&self.input), &options) {
            Ok(rows) => rows,
            Err(e) => {
                log_error_with_context!(&e, "Failed to read input");
                eprintln!("Failed to read {}: {e}", self.input);
                self.audit_failure(&engine, &e.to_string());
                return Ok(1);
            }
        };

        let result = match engine.anonymize(&rows) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Anonymization failed: {e}");
                eprintln!("No output was written.");
                self.audit_failure(&engine, &e.to_string());
                return Ok(1);
            }
        };

        if !engine.is_dry_run() {
            if let Err(e) = write_dataset_to_path(Path::new(&self.output), &result.rows, &options) {
                log_error_with_context!(&e, "Failed to write output");
                eprintln!("Failed to write {}: {e}", self.output);
                self.audit_failure(&engine, &e.to_string());
                return Ok(5);
            }
        }

        if let Err(e) = engine.record_run(&self.input, &self.output, &result.report) {
            tracing::warn!(error = %e, "Failed to write audit entry");
        }

        if let Some(path) = &self.report {
            match result.report.write_to_file(path) {
                Ok(()) => tracing::info!(path = %path.display(), "Run report written"),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to write run report");
                    eprintln!("Failed to write report {}: {e}", path.display());
                }
            }
        }

        say(&result.report.format_console());
        if !engine.is_dry_run() && !to_stdout {
            say(&format!("✅ Anonymized data written to {}", self.output));
        }

        log_run_complete!(result.report.records_processed, start.elapsed());
        Ok(0)
    }

    fn audit_failure(&self, engine: &AnonymizationEngine, error: &str) {
        if let Err(e) = engine.record_failure(&self.input, &self.output, error) {
            tracing::warn!(error = %e, "Failed to write audit entry");
        }
    }
}
