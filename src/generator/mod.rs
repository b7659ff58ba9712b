//! Synthetic test data generation
//!
//! Generates realistic-looking records for a handful of built-in domains
//! (employee, customer, business, product, transaction, iot) or a generic
//! schema for any other domain name, and renders them as JSON, CSV or SQL.
//!
//! Generated data converts into a [`Dataset`], so it can be fed straight into
//! the anonymization pipeline:
//!
//! ```
//! use tabscrub::anonymization::anonymize_dataset;
//! use tabscrub::generator::DataGenerator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let data = DataGenerator::new(42).generate("customer", 10);
//! let rows = data.to_dataset();
//! let anonymized = anonymize_dataset(&rows, 2, 3)?;
//! assert_eq!(anonymized.len(), 11);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod format;
pub mod schema;

pub use format::OutputFormat;
pub use schema::{Domain, FieldValue};

use crate::domain::{Dataset, Result, TabscrubError};
use chrono::{DateTime, Local, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};

/// Smallest accepted record count
pub const MIN_COUNT: usize = 1;

/// Largest accepted record count
pub const MAX_COUNT: usize = 1000;

/// Number of records shown in a preview
pub const PREVIEW_RECORDS: usize = 3;

/// Validated generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Trimmed domain name as given by the caller
    pub domain: String,
    /// Number of records
    pub count: usize,
    /// Output format
    pub format: OutputFormat,
}

impl GenerateRequest {
    /// Validate raw request parameters
    ///
    /// # Errors
    ///
    /// Returns [`TabscrubError::Validation`] for a blank domain, a count
    /// outside `1..=1000` or an unknown format.
    pub fn new(domain: &str, count: usize, format: &str) -> Result<Self> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(TabscrubError::Validation(
                "Domain parameter is required.".to_string(),
            ));
        }

        if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
            return Err(TabscrubError::Validation(format!(
                "Count must be between {MIN_COUNT} and {MAX_COUNT}."
            )));
        }

        Ok(Self {
            domain: domain.to_string(),
            count,
            format: format.parse()?,
        })
    }
}

/// Generated records for one domain
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedData {
    /// Domain the records belong to
    pub domain: Domain,
    /// Field names in output order
    pub fields: Vec<String>,
    /// Records, each aligned with `fields`
    pub records: Vec<Vec<FieldValue>>,
}

impl GeneratedData {
    /// Header plus stringified records
    pub fn to_dataset(&self) -> Dataset {
        let mut rows = Vec::with_capacity(self.records.len() + 1);
        rows.push(self.fields.clone());
        rows.extend(
            self.records
                .iter()
                .map(|record| record.iter().map(ToString::to_string).collect()),
        );
        rows
    }

    /// Copy of the first `n` records
    pub fn head(&self, n: usize) -> GeneratedData {
        GeneratedData {
            domain: self.domain.clone(),
            fields: self.fields.clone(),
            records: self.records.iter().take(n).cloned().collect(),
        }
    }

    /// Render the first few records in the given format
    pub fn preview(&self, format: OutputFormat) -> Result<String> {
        format.render(&self.head(PREVIEW_RECORDS))
    }
}

/// Seeded record generator
pub struct DataGenerator {
    rng: StdRng,
    as_of: DateTime<Utc>,
}

impl DataGenerator {
    /// Create a generator with a fixed seed; dates are relative to now
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            as_of: Utc::now(),
        }
    }

    /// Use a fixed reference time for date fields
    pub fn with_reference_time(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = as_of;
        self
    }

    /// Generate `count` records for a domain
    pub fn generate(&mut self, domain: &str, count: usize) -> GeneratedData {
        let domain = Domain::parse(domain);
        let fields = domain.fields();
        let records = (0..count)
            .map(|i| domain.generate_record(i, &mut self.rng, self.as_of))
            .collect();

        tracing::debug!(domain = domain.name(), count, "Generated synthetic records");

        GeneratedData {
            domain,
            fields,
            records,
        }
    }
}

/// File name for saved data: `{domain}_data_{YYYY-MM-DD_HHMM}.{ext}`
pub fn output_file_name(domain: &str, format: OutputFormat, at: DateTime<Local>) -> String {
    format!(
        "{}_data_{}.{}",
        domain,
        at.format("%Y-%m-%d_%H%M"),
        format.extension()
    )
}

/// Render and save data under `output_dir`, returning the written path
pub fn save(
    data: &GeneratedData,
    domain: &str,
    format: OutputFormat,
    output_dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| {
        TabscrubError::Generator(format!(
            "Failed to create output directory {}: {}",
            output_dir.display(),
            e
        ))
    })?;

    let path = output_dir.join(output_file_name(domain, format, Local::now()));
    let content = format.render(data)?;
    fs::write(&path, content).map_err(|e| {
        TabscrubError::Generator(format!("Failed to write {}: {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), records = data.records.len(), "Generated data saved");
    Ok(path)
}
