//! Field anonymization strategies
//!
//! Each strategy maps one raw field value to one anonymized value. Strategies
//! hold no state, so a single instance can be shared across threads.

pub mod hashing;
pub mod masking;

pub use hashing::{hash_identifier, HashStrategy, DIGEST_HEX_LEN};
pub use masking::{count_digits, is_digit, mask_digits_preserve_format, MaskStrategy, KEEP_DIGITS, MASK_CHAR};

use crate::domain::ColumnRole;

/// Trait for field anonymization strategies
pub trait FieldAnonymizer: Send + Sync {
    /// Column role this strategy is applied to
    fn role(&self) -> ColumnRole;

    /// Anonymize a single field value
    fn anonymize_field(&self, value: &str) -> String;
}

/// Strategy responsible for a column role
pub fn strategy_for(role: ColumnRole) -> &'static dyn FieldAnonymizer {
    match role {
        ColumnRole::Email => &HashStrategy,
        ColumnRole::Phone => &MaskStrategy,
    }
}
