//! Format-preserving digit masking for phone-like fields

use super::FieldAnonymizer;
use crate::domain::ColumnRole;
use regex::Regex;
use std::sync::OnceLock;

/// Character written in place of a masked digit
pub const MASK_CHAR: char = 'X';

/// Number of trailing digits left visible
pub const KEEP_DIGITS: usize = 4;

fn digit_pattern() -> &'static Regex {
    static DIGIT: OnceLock<Regex> = OnceLock::new();
    // `\d` is Unicode-aware: any decimal digit (category Nd) in any script
    DIGIT.get_or_init(|| Regex::new(r"^\d$").expect("digit pattern is valid"))
}

/// Whether a character is a decimal digit in any script
///
/// ASCII `0-9`, fullwidth `０-９`, Arabic-Indic `٠-٩` and the other Unicode
/// decimal digits all count. Numeric characters that are not decimal digits
/// (superscripts, fractions, Roman numerals) do not.
pub fn is_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    digit_pattern().is_match(c.encode_utf8(&mut buf))
}

/// Count the decimal digits in a value
pub fn count_digits(value: &str) -> usize {
    value.chars().filter(|c| is_digit(*c)).count()
}

/// Mask every digit except the last four, keeping all other characters in place
///
/// Values with fewer than four digits are masked completely. The output has
/// the same number of characters as the input and every non-digit character
/// stays where it was, including anything after the final digit.
///
/// # Examples
///
/// ```
/// use tabscrub::anonymization::anonymizer::mask_digits_preserve_format;
///
/// assert_eq!(mask_digits_preserve_format("555-123-4567"), "XXX-XXX-4567");
/// assert_eq!(mask_digits_preserve_format("(12) 34"), "(12) 34");
/// assert_eq!(mask_digits_preserve_format("12"), "XX");
/// assert_eq!(mask_digits_preserve_format("+1 (555) 010-9999 ext."), "+X (XXX) XXX-9999 ext.");
/// ```
pub fn mask_digits_preserve_format(value: &str) -> String {
    // First pass: the global digit count decides which occurrences survive.
    let total = count_digits(value);
    let to_mask = if total < KEEP_DIGITS {
        total
    } else {
        total - KEEP_DIGITS
    };

    // Second pass: positions are walked in order; kept digits are emitted
    // from the input itself, which is the keep sequence in scan order.
    let mut seen = 0;
    value
        .chars()
        .map(|c| {
            if !is_digit(c) {
                return c;
            }
            let masked = seen < to_mask;
            seen += 1;
            if masked {
                MASK_CHAR
            } else {
                c
            }
        })
        .collect()
}

/// Masking strategy for phone columns
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskStrategy;

impl FieldAnonymizer for MaskStrategy {
    fn role(&self) -> ColumnRole {
        ColumnRole::Phone
    }

    fn anonymize_field(&self, value: &str) -> String {
        mask_digits_preserve_format(value)
    }
}
