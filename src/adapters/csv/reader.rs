//! CSV dataset reader

use super::{CsvOptions, STDIO_PATH};
use crate::domain::context::ResultExt;
use crate::domain::{Dataset, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read every record from a CSV source
///
/// Blank lines are not records: the `csv` parser skips them, so they never
/// reach the pipeline and record positions count only non-blank lines. A
/// line holding just a quoted empty field (`""`) is a one-field record and is
/// range-checked like any other.
///
/// A field that is not valid UTF-8 fails with
/// [`AnonymizationError::InvalidInputType`](crate::domain::AnonymizationError::InvalidInputType).
pub fn read_dataset<R: Read>(reader: R, options: &CsvOptions) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Dataset::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(records = rows.len(), "CSV dataset read");
    Ok(rows)
}

/// Read a dataset from a file path, `-` meaning stdin
pub fn read_dataset_from_path(path: &Path, options: &CsvOptions) -> Result<Dataset> {
    if path == Path::new(STDIO_PATH) {
        return read_dataset(io::stdin().lock(), options);
    }

    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_dataset(file, options)
}
