//! Run reporting for anonymization
//!
//! A [`RunReport`] summarizes one pipeline run: how many records and fields
//! were touched, which phone values carried too few digits to keep a suffix,
//! and a handful of already-anonymized sample rows.

use crate::anonymization::anonymizer::{count_digits, KEEP_DIGITS};
use crate::domain::{ColumnDesignation, Record};
use serde::{Deserialize, Serialize};

/// Maximum number of sample rows kept in a report
pub const MAX_SAMPLES: usize = 5;

/// Summary of a single anonymization run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Data records processed (header excluded)
    pub records_processed: usize,

    /// Number of fields in the header record
    pub header_fields: usize,

    /// Resolved column indices
    pub columns: Option<ColumnDesignation>,

    /// Email values replaced by a digest
    pub values_hashed: usize,

    /// Phone values passed through the mask
    pub values_masked: usize,

    /// Digits replaced by the mask character
    pub digits_masked: usize,

    /// Phone values with fewer than four digits (masked completely)
    pub short_phone_values: usize,

    /// Phone values without any digit
    pub phone_values_without_digits: usize,

    /// Whether the parallel pipeline was used
    pub parallel: bool,

    /// Whether output writing was skipped
    pub dry_run: bool,

    /// Total processing time (ms)
    pub processing_time_ms: u64,

    /// Anonymized sample rows (never original values)
    pub samples: Vec<Record>,

    /// Warnings raised during the run
    pub warnings: Vec<String>,
}

impl RunReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one original data record and its anonymized counterpart
    pub fn add_record(
        &mut self,
        original: &[String],
        anonymized: &Record,
        designation: &ColumnDesignation,
    ) {
        self.records_processed += 1;
        self.values_hashed += 1;
        self.values_masked += 1;

        let digits = original
            .get(designation.phone)
            .map(|value| count_digits(value))
            .unwrap_or(0);
        match digits {
            0 => self.phone_values_without_digits += 1,
            d if d < KEEP_DIGITS => {
                self.short_phone_values += 1;
                self.digits_masked += d;
            }
            d => self.digits_masked += d - KEEP_DIGITS,
        }

        if self.samples.len() < MAX_SAMPLES {
            self.samples.push(anonymized.clone());
        }
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Derive warnings from the collected counters
    pub fn finalize(&mut self) {
        if self.short_phone_values > 0 {
            self.add_warning(format!(
                "{} phone value(s) had fewer than {KEEP_DIGITS} digits and were fully masked",
                self.short_phone_values
            ));
        }
        if self.phone_values_without_digits > 0 {
            self.add_warning(format!(
                "{} phone value(s) contained no digits and were left unchanged",
                self.phone_values_without_digits
            ));
        }
        if self.records_processed == 0 {
            self.add_warning("dataset contained no data records".to_string());
        }
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        if self.dry_run {
            output.push_str("                 ANONYMIZATION DRY-RUN REPORT                  \n");
        } else {
            output.push_str("                     ANONYMIZATION REPORT                      \n");
        }
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Records Processed:           {}\n",
            self.records_processed
        ));
        if let Some(columns) = self.columns {
            output.push_str(&format!(
                "  Email Column:                {}\n",
                columns.email
            ));
            output.push_str(&format!(
                "  Phone Column:                {}\n",
                columns.phone
            ));
        }
        output.push_str(&format!(
            "  Values Hashed:               {}\n",
            self.values_hashed
        ));
        output.push_str(&format!(
            "  Values Masked:               {}\n",
            self.values_masked
        ));
        output.push_str(&format!(
            "  Digits Masked:               {}\n",
            self.digits_masked
        ));
        output.push_str(&format!(
            "  Processing Time:             {} ms{}\n",
            self.processing_time_ms,
            if self.parallel { " (parallel)" } else { "" }
        ));
        output.push('\n');

        if !self.samples.is_empty() {
            output.push_str("📝 SAMPLE OUTPUT\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for (i, sample) in self.samples.iter().enumerate() {
                output.push_str(&format!("  #{} {}\n", i + 1, sample.join(" | ")));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {}\n", warning));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file as JSON
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.format_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}
