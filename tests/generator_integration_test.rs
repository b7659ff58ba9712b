//! Integration tests for synthetic data generation

use chrono::{TimeZone, Utc};
use std::io::Cursor;
use tabscrub::adapters::csv::{read_dataset, CsvOptions};
use tabscrub::anonymization::{anonymize_dataset, hash_identifier};
use tabscrub::generator::{save, DataGenerator, Domain, GenerateRequest, OutputFormat};
use tempfile::TempDir;
use test_case::test_case;

fn generator() -> DataGenerator {
    DataGenerator::new(42).with_reference_time(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
}

#[test_case("employee", "employee_id", "EMP00001" ; "employee")]
#[test_case("customer", "customer_id", "CUST000001" ; "customer")]
#[test_case("transaction", "transaction_id", "TXN00000001" ; "transaction")]
fn test_sequential_ids(domain: &str, id_field: &str, first_id: &str) {
    let data = generator().generate(domain, 3);
    assert_eq!(data.fields[0], id_field);
    assert_eq!(data.records[0][0].to_string(), first_id);
}

#[test]
fn test_domains_are_case_insensitive() {
    assert_eq!(Domain::parse("CUSTOMER"), Domain::Customer);
    assert_eq!(generator().generate("Iot", 1).domain, Domain::Iot);
}

#[test]
fn test_generic_domain_schema() {
    let data = generator().generate("vehicle", 2);
    assert_eq!(
        data.fields,
        vec!["vehicle_id", "name", "description", "created_at", "status"]
    );
    assert!(data.records[0][0].to_string().starts_with("VEH"));
}

#[test]
fn test_every_record_matches_schema() {
    for domain in ["employee", "customer", "business", "product", "transaction", "iot", "widget"] {
        let data = generator().generate(domain, 20);
        assert_eq!(data.records.len(), 20);
        assert!(
            data.records.iter().all(|r| r.len() == data.fields.len()),
            "{domain}"
        );
    }
}

#[test]
fn test_same_seed_same_data() {
    assert_eq!(generator().generate("business", 10), generator().generate("business", 10));
}

#[test]
fn test_request_limits() {
    assert!(GenerateRequest::new("customer", 1, "json").is_ok());
    assert!(GenerateRequest::new("customer", 1000, "json").is_ok());

    let err = GenerateRequest::new("customer", 1001, "json").unwrap_err();
    assert_eq!(err.to_string(), "Validation error: Count must be between 1 and 1000.");

    let err = GenerateRequest::new("", 10, "json").unwrap_err();
    assert_eq!(err.to_string(), "Validation error: Domain parameter is required.");

    let err = GenerateRequest::new("customer", 10, "yaml").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation error: Unsupported format 'yaml'. Use 'json', 'csv', or 'sql'."
    );
}

#[test]
fn test_generated_customers_feed_the_anonymizer() {
    let data = generator().generate("customer", 25);
    let rows = data.to_dataset();

    let anonymized = anonymize_dataset(&rows, 2, 3).unwrap();
    assert_eq!(anonymized[0], rows[0]);
    for (original, out) in rows.iter().zip(&anonymized).skip(1) {
        assert_eq!(out[1], original[1]);
        assert_eq!(out[2], hash_identifier(&original[2]));
        assert_eq!(out[3].chars().count(), original[3].chars().count());
    }
}

#[test]
fn test_saved_csv_reads_back() {
    let dir = TempDir::new().unwrap();
    let data = generator().generate("employee", 7);

    let path = save(&data, "employee", OutputFormat::Csv, dir.path()).unwrap();
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("employee_data_"));
    assert!(name.ends_with(".csv"));

    let content = std::fs::read(&path).unwrap();
    let rows = read_dataset(Cursor::new(content), &CsvOptions::default()).unwrap();
    assert_eq!(rows, data.to_dataset());
}

#[test]
fn test_sql_output_one_insert_per_record() {
    let data = generator().generate("product", 4);
    let sql = OutputFormat::Sql.render(&data).unwrap();
    assert!(sql.starts_with("-- SQL INSERT statements for product"));
    assert_eq!(sql.matches("INSERT INTO product (").count(), 4);
}
