//! One-way hashing of identifier fields

use super::FieldAnonymizer;
use crate::domain::ColumnRole;
use sha2::{Digest, Sha256};

/// Length of a rendered digest in hex characters
pub const DIGEST_HEX_LEN: usize = 64;

/// Whitespace stripped from both ends before hashing: Unicode White_Space
/// plus the ASCII information separators `\x1c`-`\x1f`
fn is_edge_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Hash an identifier into a lowercase hex SHA-256 digest
///
/// The value is trimmed and lower-cased first, so `" Jane@X.com "` and
/// `"jane@x.com"` hash identically. Information separators (`\x1c`-`\x1f`)
/// count as whitespace when trimming.
///
/// # Examples
///
/// ```
/// use tabscrub::anonymization::anonymizer::hash_identifier;
///
/// let digest = hash_identifier("Jane.Doe@Example.com");
/// assert_eq!(digest.len(), 64);
/// assert_eq!(digest, hash_identifier("  jane.doe@example.com"));
/// ```
pub fn hash_identifier(value: &str) -> String {
    let normalized = value.trim_matches(is_edge_whitespace).to_lowercase();
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}

/// Hashing strategy for email columns
#[derive(Debug, Clone, Copy, Default)]
pub struct HashStrategy;

impl FieldAnonymizer for HashStrategy {
    fn role(&self) -> ColumnRole {
        ColumnRole::Email
    }

    fn anonymize_field(&self, value: &str) -> String {
        hash_identifier(value)
    }
}
