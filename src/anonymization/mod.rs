//! Anonymization module for Tabscrub
//!
//! This module hashes identifier columns and masks phone columns of tabular
//! datasets while keeping their row and column structure.
//!
//! # Architecture
//!
//! The anonymization pipeline consists of:
//! - **Field strategies**: one-way hashing and format-preserving digit masking
//! - **Row pipeline**: header passthrough, per-record column replacement
//! - **Engine**: column resolution, sequential or parallel execution, reporting
//! - **Audit**: one log entry per run, without field values
//!
//! # Usage
//!
//! ```rust,ignore
//! use tabscrub::anonymization::{AnonymizationEngine, config::AnonymizationConfig};
//!
//! let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//! let anonymized = engine.anonymize(&rows)?;
//! ```

pub mod anonymizer;
pub mod audit;
pub mod config;
pub mod engine;
pub mod pipeline;
pub mod report;

// Re-export main types
pub use anonymizer::{hash_identifier, mask_digits_preserve_format};
pub use config::AnonymizationConfig;
pub use engine::{AnonymizationEngine, AnonymizedDataset};
pub use pipeline::anonymize_dataset;
pub use report::RunReport;
