// Tabscrub - CSV Anonymization and Test Data Tool
// Copyright (c) 2025 Tabscrub Contributors
// Licensed under the MIT License

//! # Tabscrub - CSV anonymization
//!
//! Tabscrub pseudonymizes personal data in tabular files so they can be
//! shared for testing and analytics without exposing identities.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Hashing** identifier fields (normalized, SHA-256, lowercase hex)
//! - **Masking** phone fields digit by digit, keeping the last four digits
//!   and every separator in place
//! - **Processing** whole datasets with the header passed through, failing
//!   the run on the first malformed record
//! - **Generating** synthetic datasets for test workflows
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`anonymization`] - Field strategies, row pipeline, engine, audit
//! - [`generator`] - Synthetic data generation and formatting
//! - [`adapters`] - CSV reading and writing
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use tabscrub::anonymization::anonymize_dataset;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rows = vec![
//!     vec!["name".to_string(), "email".to_string(), "phone".to_string()],
//!     vec!["Jane".to_string(), " Jane@Example.COM ".to_string(), "(555) 123-4567".to_string()],
//! ];
//!
//! let anonymized = anonymize_dataset(&rows, 1, 2)?;
//! assert_eq!(anonymized[0], rows[0]);
//! assert_eq!(anonymized[1][1].len(), 64);
//! assert_eq!(anonymized[1][2], "(XXX) XXX-4567");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Pipeline failures are [`domain::AnonymizationError`] values that name the
//! record and column at fault. Everything else is a [`domain::TabscrubError`]:
//!
//! ```rust,no_run
//! use tabscrub::domain::TabscrubError;
//!
//! fn example() -> Result<(), TabscrubError> {
//!     let config = tabscrub::config::load_config("tabscrub.toml")?;
//!     println!("{}", config.anonymization.email_column);
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Tabscrub uses structured logging with the `tracing` crate. Events carry
//! counts, positions and timings, never field values.

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod generator;
pub mod logging;
