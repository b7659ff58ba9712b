//! Domain error types
//!
//! This module defines the error hierarchy for Tabscrub. Anonymization failures
//! are always fatal for the whole run; nothing here is retryable.

use super::dataset::ColumnRole;
use thiserror::Error;

/// Main Tabscrub error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum TabscrubError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Anonymization pipeline errors
    #[error("Anonymization error: {0}")]
    Anonymization(#[from] AnonymizationError),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Synthetic data generation errors
    #[error("Generator error: {0}")]
    Generator(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Fatal anonymization errors
///
/// `record` is the zero-based position of the record in the dataset, the
/// header being record 0. `column` is a zero-based field index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnonymizationError {
    /// A field handed to a transformer was not text
    #[error("record {record}: field {column} is not valid UTF-8 text")]
    InvalidInputType { record: usize, column: usize },

    /// A designated column does not exist in a record
    #[error(
        "record {record}: {role} column index {column} is out of range (record has {field_count} fields)"
    )]
    ColumnIndexOutOfRange {
        record: usize,
        role: ColumnRole,
        column: usize,
        field_count: usize,
    },

    /// A column name is not present in the header
    #[error("{role} column '{name}' not found in header")]
    UnknownColumn { role: ColumnRole, name: String },

    /// A column was designated by name but the dataset has no header
    #[error("{role} column '{name}' designated by name but the dataset has no header")]
    MissingHeader { role: ColumnRole, name: String },
}

impl AnonymizationError {
    /// Record position the error refers to, if any
    pub fn record(&self) -> Option<usize> {
        match self {
            Self::InvalidInputType { record, .. } | Self::ColumnIndexOutOfRange { record, .. } => {
                Some(*record)
            }
            Self::UnknownColumn { .. } | Self::MissingHeader { .. } => None,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for TabscrubError {
    fn from(err: std::io::Error) -> Self {
        TabscrubError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TabscrubError {
    fn from(err: serde_json::Error) -> Self {
        TabscrubError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for TabscrubError {
    fn from(err: toml::de::Error) -> Self {
        TabscrubError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv errors; invalid UTF-8 is an anonymization failure
impl From<csv::Error> for TabscrubError {
    fn from(err: csv::Error) -> Self {
        if let csv::ErrorKind::Utf8 { pos, err: utf8 } = err.kind() {
            let record = pos.as_ref().map(|p| p.record() as usize).unwrap_or(0);
            return TabscrubError::Anonymization(AnonymizationError::InvalidInputType {
                record,
                column: utf8.field(),
            });
        }
        TabscrubError::Csv(err.to_string())
    }
}
