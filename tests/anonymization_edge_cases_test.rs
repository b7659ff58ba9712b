//! Edge case tests for the field strategies and the row pipeline

use tabscrub::anonymization::anonymizer::{count_digits, DIGEST_HEX_LEN, MASK_CHAR};
use tabscrub::anonymization::pipeline::{anonymize_dataset_parallel, anonymize_with};
use tabscrub::anonymization::{anonymize_dataset, hash_identifier, mask_digits_preserve_format};
use tabscrub::domain::ColumnDesignation;
use test_case::test_case;

fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

#[test_case("" ; "empty")]
#[test_case("   " ; "whitespace only")]
#[test_case("Ünïcödé@exämple.de" ; "non ascii")]
#[test_case("a,b\n\"c\"" ; "csv metacharacters")]
fn test_hash_output_shape(input: &str) {
    let digest = hash_identifier(input);
    assert_eq!(digest.len(), DIGEST_HEX_LEN);
    assert!(digest
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn test_hash_empty_equals_whitespace() {
    assert_eq!(hash_identifier(""), hash_identifier(" \t\n"));
}

#[test]
fn test_hash_distinguishes_inner_whitespace() {
    assert_ne!(hash_identifier("a b@x.com"), hash_identifier("ab@x.com"));
}

#[test_case("", "" ; "empty")]
#[test_case("no digits here", "no digits here" ; "no digits")]
#[test_case("1", "X" ; "one digit")]
#[test_case("123", "XXX" ; "three digits")]
#[test_case("1234", "1234" ; "four digits")]
#[test_case("12345", "X2345" ; "five digits")]
#[test_case("555-123-4567 ", "XXX-XXX-4567 " ; "trailing space")]
#[test_case("555.123.4567 ext.", "XXX.XXX.4567 ext." ; "trailing text")]
#[test_case("tel:5551234567;", "tel:XXXXXX4567;" ; "prefix and suffix")]
#[test_case("+1-555-123-4567", "+X-XXX-XXX-4567" ; "country code")]
fn test_mask_cases(input: &str, expected: &str) {
    assert_eq!(mask_digits_preserve_format(input), expected);
}

#[test]
fn test_mask_preserves_char_count_with_unicode() {
    let input = "☎ 555–123–4567";
    let masked = mask_digits_preserve_format(input);
    assert_eq!(masked.chars().count(), input.chars().count());
    assert_eq!(masked, "☎ XXX–XXX–4567");
}

#[test]
fn test_mask_counts_digits_in_every_script() {
    let input = "٥٥٥-1234";
    assert_eq!(count_digits(input), 7);
    assert_eq!(mask_digits_preserve_format(input), "XXX-1234");
}

#[test]
fn test_fullwidth_phone_is_masked_in_dataset() {
    let rows = vec![
        row(&["name", "email", "phone"]),
        row(&["Jane", "j@x.com", "５５５-１２３-４５６７"]),
    ];
    let out = anonymize_dataset(&rows, 1, 2).unwrap();
    assert_eq!(out[1][2], "XXX-XXX-４５６７");
}

#[test]
fn test_mask_idempotent_on_own_output() {
    for input in ["555-123-4567", "12", "(12) 34", "+44 20 7946 0958", "x"] {
        let once = mask_digits_preserve_format(input);
        let twice = mask_digits_preserve_format(&once);
        assert_eq!(once, twice, "input {input:?}");
        assert!(count_digits(&once) <= 4);
    }
}

#[test]
fn test_mask_char_only_replaces_digits() {
    let input = "X1X2X3X4X5";
    let masked = mask_digits_preserve_format(input);
    assert_eq!(masked, format!("X{MASK_CHAR}X2X3X4X5"));
}

#[test]
fn test_empty_dataset() {
    let out = anonymize_dataset(&[], 1, 2).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_header_only_dataset() {
    let rows = vec![row(&["name", "email", "phone"])];
    assert_eq!(anonymize_dataset(&rows, 1, 2).unwrap(), rows);
}

#[test]
fn test_short_header_is_not_checked() {
    let rows = vec![row(&["only"]), row(&["Jane", "jane@x.com", "555-000-1234"])];
    let out = anonymize_dataset(&rows, 1, 2).unwrap();
    assert_eq!(out[0], row(&["only"]));
    assert_eq!(out[1][2], "XXX-XXX-1234");
}

#[test]
fn test_extra_fields_pass_through() {
    let rows = vec![
        row(&["name", "email", "phone", "note"]),
        row(&["Jane", "jane@x.com", "555-000-1234", "a,b", "extra"]),
    ];
    let out = anonymize_dataset(&rows, 1, 2).unwrap();
    assert_eq!(out[1][3], "a,b");
    assert_eq!(out[1][4], "extra");
}

#[test]
fn test_designation_in_reverse_order() {
    let rows = vec![
        row(&["phone", "email"]),
        row(&["555-000-1234", "Jane@x.com"]),
    ];
    let out = anonymize_dataset(&rows, 1, 0).unwrap();
    assert_eq!(out[1][0], "XXX-XXX-1234");
    assert_eq!(out[1][1], hash_identifier("jane@x.com"));
}

#[test]
fn test_same_column_for_both_roles() {
    let rows = vec![row(&["id"]), row(&["user-5551234567"])];
    let out = anonymize_dataset(&rows, 0, 0).unwrap();
    let digest = hash_identifier("user-5551234567");
    assert_eq!(out[1][0], mask_digits_preserve_format(&digest));
}

#[test]
fn test_input_is_not_modified() {
    let rows = vec![row(&["email", "phone"]), row(&["Jane@x.com", "555-000-1234"])];
    let snapshot = rows.clone();
    let _ = anonymize_dataset(&rows, 0, 1).unwrap();
    assert_eq!(rows, snapshot);
}

#[test]
fn test_parallel_preserves_order_on_large_dataset() {
    let mut rows = vec![row(&["n", "email", "phone"])];
    for i in 0..5_000 {
        rows.push(vec![
            i.to_string(),
            format!("User{i}@Example.com"),
            format!("555-{:03}-{:04}", i % 1000, i),
        ]);
    }
    let designation = ColumnDesignation::new(1, 2);

    let sequential = anonymize_with(&rows, &designation).unwrap();
    let parallel = anonymize_dataset_parallel(&rows, &designation).unwrap();

    assert_eq!(sequential, parallel);
    for (i, record) in parallel.iter().enumerate().skip(1) {
        assert_eq!(record[0], (i - 1).to_string());
    }
}
