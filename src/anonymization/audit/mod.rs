//! Audit logging module
//!
//! Records one entry per anonymization run.

pub mod logger;

pub use logger::{AuditLogger, RunStatus};
