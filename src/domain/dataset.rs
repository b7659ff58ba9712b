//! Tabular dataset types
//!
//! Records are positionally addressed sequences of string fields. The first
//! record of a [`Dataset`] is the header and is never anonymized.

use super::errors::AnonymizationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of a tabular dataset
pub type Record = Vec<String>;

/// An ordered sequence of records, header first
pub type Dataset = Vec<Record>;

/// Semantic role of a designated column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    /// Email-like identifier, hashed
    Email,
    /// Phone-like number, masked
    Phone,
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
        }
    }
}

/// Reference to a column, either by zero-based position or by header name
///
/// Deserializes from either a TOML integer or a string:
///
/// ```toml
/// email_column = 1
/// phone_column = "phone"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    /// Zero-based field index
    Index(usize),
    /// Header field name (matched case-insensitively)
    Name(String),
}

impl FromStr for ColumnRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = trimmed.parse() {
                return Ok(Self::Index(index));
            }
        }
        Ok(Self::Name(trimmed.to_string()))
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{index}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Fixed mapping from column role to zero-based field index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDesignation {
    /// Index of the email column
    pub email: usize,
    /// Index of the phone column
    pub phone: usize,
}

impl ColumnDesignation {
    /// Creates a designation from explicit indices
    pub fn new(email: usize, phone: usize) -> Self {
        Self { email, phone }
    }

    /// Index designated for a role
    pub fn index_of(&self, role: ColumnRole) -> usize {
        match role {
            ColumnRole::Email => self.email,
            ColumnRole::Phone => self.phone,
        }
    }

    /// Resolves column references against an optional header record
    ///
    /// Indices are taken as-is; range checks happen per record in the
    /// pipeline. Names are matched against trimmed header fields ignoring
    /// case, first match wins.
    ///
    /// # Errors
    ///
    /// Returns [`AnonymizationError::MissingHeader`] when a name is used
    /// without a header, and [`AnonymizationError::UnknownColumn`] when no
    /// header field matches.
    pub fn resolve(
        email: &ColumnRef,
        phone: &ColumnRef,
        header: Option<&Record>,
    ) -> Result<Self, AnonymizationError> {
        Ok(Self {
            email: resolve_one(ColumnRole::Email, email, header)?,
            phone: resolve_one(ColumnRole::Phone, phone, header)?,
        })
    }
}

fn resolve_one(
    role: ColumnRole,
    column: &ColumnRef,
    header: Option<&Record>,
) -> Result<usize, AnonymizationError> {
    match column {
        ColumnRef::Index(index) => Ok(*index),
        ColumnRef::Name(name) => {
            let header = header.ok_or_else(|| AnonymizationError::MissingHeader {
                role,
                name: name.clone(),
            })?;
            header
                .iter()
                .position(|field| field.trim().eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| AnonymizationError::UnknownColumn {
                    role,
                    name: name.clone(),
                })
        }
    }
}
