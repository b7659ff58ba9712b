//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod anonymize;
pub mod generate;
pub mod init;
pub mod validate;
