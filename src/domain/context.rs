//! Error context extension trait
//!
//! A `.context()` / `.with_context()` pair like `anyhow::Context`, but
//! producing a [`TabscrubError`] so library code keeps its typed errors.
//!
//! # Examples
//!
//! ```rust
//! use tabscrub::domain::Result;
//! use tabscrub::domain::context::ResultExt;
//!
//! fn read_input(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
//! }
//! # assert!(read_input("/definitely/missing.csv").is_err());
//! ```

use crate::domain::errors::TabscrubError;
use crate::domain::result::Result;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static;

    /// Add context to an error, computing it only on failure
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

/// Context keeps the variant of the underlying error and prefixes its message
impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<TabscrubError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| wrap(e.into(), context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| wrap(e.into(), f()))
    }
}

fn wrap(error: TabscrubError, context: impl std::fmt::Display) -> TabscrubError {
    match error {
        TabscrubError::Configuration(msg) => {
            TabscrubError::Configuration(format!("{context}: {msg}"))
        }
        TabscrubError::Csv(msg) => TabscrubError::Csv(format!("{context}: {msg}")),
        TabscrubError::Generator(msg) => TabscrubError::Generator(format!("{context}: {msg}")),
        TabscrubError::Validation(msg) => TabscrubError::Validation(format!("{context}: {msg}")),
        TabscrubError::Serialization(msg) => {
            TabscrubError::Serialization(format!("{context}: {msg}"))
        }
        TabscrubError::Io(msg) => TabscrubError::Io(format!("{context}: {msg}")),
        TabscrubError::Other(msg) => TabscrubError::Other(format!("{context}: {msg}")),
        // Pipeline errors already name their record and column
        anonymization @ TabscrubError::Anonymization(_) => anonymization,
    }
}
