//! CSV dataset writer

use super::{CsvOptions, STDIO_PATH};
use crate::domain::context::ResultExt;
use crate::domain::{Record, Result, TabscrubError};
use csv::WriterBuilder;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write records to a CSV sink, quoting fields as needed
pub fn write_dataset<W: Write>(writer: W, rows: &[Record], options: &CsvOptions) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_writer(writer);

    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a dataset to a file path, `-` meaning stdout
///
/// The file is first written to a temporary file in the destination
/// directory and then renamed into place, so the destination either holds the
/// complete dataset or is left untouched.
pub fn write_dataset_to_path(path: &Path, rows: &[Record], options: &CsvOptions) -> Result<()> {
    if path == Path::new(STDIO_PATH) {
        return write_dataset(io::stdout().lock(), rows, options);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let mut temp = NamedTempFile::new_in(dir)?;
    write_dataset(temp.as_file_mut(), rows, options)?;
    temp.persist(path).map_err(|e| {
        TabscrubError::Io(format!("Failed to write {}: {}", path.display(), e.error))
    })?;

    tracing::debug!(path = %path.display(), records = rows.len(), "CSV dataset written");
    Ok(())
}
