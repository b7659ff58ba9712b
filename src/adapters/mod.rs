//! External integrations for Tabscrub.
//!
//! - [`csv`] - CSV reading and writing with atomic output
//!
//! Adapters convert between files and the in-memory [`Dataset`](crate::domain::Dataset)
//! so the anonymization core never touches I/O.

pub mod csv;
