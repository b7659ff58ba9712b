//! Domain models and types for Tabscrub.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Dataset types** ([`Record`], [`Dataset`])
//! - **Column designation** ([`ColumnRole`], [`ColumnRef`], [`ColumnDesignation`])
//! - **Error types** ([`TabscrubError`], [`AnonymizationError`])
//! - **Result type alias** ([`Result`])
//! - **Error context** ([`context::ResultExt`])
//!
//! # Column designation
//!
//! Columns are addressed by position. A [`ColumnRef`] may name a header field
//! instead, and is resolved to an index before any record is touched:
//!
//! ```rust
//! use tabscrub::domain::{ColumnDesignation, ColumnRef};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let header = vec!["name".to_string(), "email".to_string(), "phone".to_string()];
//! let designation = ColumnDesignation::resolve(
//!     &ColumnRef::Name("email".to_string()),
//!     &ColumnRef::Index(2),
//!     Some(&header),
//! )?;
//! assert_eq!(designation.email, 1);
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod dataset;
pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use dataset::{ColumnDesignation, ColumnRef, ColumnRole, Dataset, Record};
pub use errors::{AnonymizationError, TabscrubError};
pub use result::Result;
