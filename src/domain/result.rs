//! Result type alias for Tabscrub
//!
//! This module provides a convenient Result type alias that uses TabscrubError
//! as the error type.

use super::errors::TabscrubError;

/// Result type alias for Tabscrub operations
///
/// # Examples
///
/// ```
/// use tabscrub::domain::result::Result;
/// use tabscrub::domain::errors::TabscrubError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(TabscrubError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, TabscrubError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::AnonymizationError;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_anonymization_error_propagates() {
        fn inner() -> std::result::Result<(), AnonymizationError> {
            Err(AnonymizationError::InvalidInputType {
                record: 2,
                column: 1,
            })
        }
        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
