//! CSV reading and writing
//!
//! Rows are read without any header interpretation: the first record is
//! delivered like every other one and the anonymization layer decides what it
//! means. Ragged rows are accepted here so that short records are reported by
//! the pipeline with their position and the column they are missing.

pub mod reader;
pub mod writer;

pub use reader::{read_dataset, read_dataset_from_path};
pub use writer::{write_dataset, write_dataset_to_path};

use crate::domain::{Result, TabscrubError};

/// Path value meaning stdin (for input) or stdout (for output)
pub const STDIO_PATH: &str = "-";

/// CSV dialect options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvOptions {
    /// Build options from a delimiter given as text (`","`, `";"`, `"\t"` or `"tab"`)
    pub fn from_delimiter(delimiter: &str) -> Result<Self> {
        let delimiter = match delimiter {
            "\\t" | "tab" => b'\t',
            d if d.len() == 1 && d.is_ascii() => d.as_bytes()[0],
            d => {
                return Err(TabscrubError::Validation(format!(
                    "Invalid CSV delimiter '{d}': must be a single ASCII character"
                )))
            }
        };
        Ok(Self { delimiter })
    }
}
