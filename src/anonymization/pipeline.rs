//! Row pipeline
//!
//! Applies the field strategies to the designated columns of every data
//! record. The header (record 0) is copied unchanged. Records are independent,
//! so the parallel variant only has to keep input order when reassembling.

use crate::anonymization::anonymizer::strategy_for;
use crate::domain::{AnonymizationError, ColumnDesignation, ColumnRole, Dataset, Record};
use rayon::prelude::*;

const ROLES: [ColumnRole; 2] = [ColumnRole::Email, ColumnRole::Phone];

/// Anonymize one data record
///
/// `record_index` is the record's position in the dataset and is only used
/// for error reporting.
///
/// # Errors
///
/// Returns [`AnonymizationError::ColumnIndexOutOfRange`] when the record is
/// too short for a designated column.
pub fn anonymize_record(
    record: &[String],
    record_index: usize,
    designation: &ColumnDesignation,
) -> Result<Record, AnonymizationError> {
    for role in ROLES {
        let column = designation.index_of(role);
        if column >= record.len() {
            return Err(AnonymizationError::ColumnIndexOutOfRange {
                record: record_index,
                role,
                column,
                field_count: record.len(),
            });
        }
    }

    let mut anonymized = record.to_vec();
    for role in ROLES {
        let column = designation.index_of(role);
        // A column designated for both roles is hashed, then masked.
        let value = strategy_for(role).anonymize_field(&anonymized[column]);
        anonymized[column] = value;
    }
    Ok(anonymized)
}

/// Anonymize a dataset sequentially
///
/// The first row is the header and is passed through. Every later row gets
/// its email column hashed and its phone column masked. An empty input
/// produces an empty output.
///
/// # Errors
///
/// Aborts on the first record that does not cover a designated column; no
/// partial dataset is returned.
///
/// # Examples
///
/// ```
/// use tabscrub::anonymization::pipeline::anonymize_dataset;
///
/// let rows = vec![
///     vec!["name".to_string(), "email".to_string(), "phone".to_string()],
///     vec!["Jane".to_string(), "Jane@x.com".to_string(), "555-000-1234".to_string()],
/// ];
/// let out = anonymize_dataset(&rows, 1, 2)?;
/// assert_eq!(out[0], rows[0]);
/// assert_eq!(out[1][2], "XXX-XXX-1234");
/// # Ok::<(), tabscrub::domain::AnonymizationError>(())
/// ```
pub fn anonymize_dataset(
    rows: &[Record],
    email_column: usize,
    phone_column: usize,
) -> Result<Dataset, AnonymizationError> {
    let designation = ColumnDesignation::new(email_column, phone_column);
    anonymize_with(rows, &designation)
}

/// Anonymize a dataset sequentially with a resolved designation
pub fn anonymize_with(
    rows: &[Record],
    designation: &ColumnDesignation,
) -> Result<Dataset, AnonymizationError> {
    let Some((header, records)) = rows.split_first() else {
        return Ok(Vec::new());
    };

    let mut output = Vec::with_capacity(rows.len());
    output.push(header.clone());
    for (offset, record) in records.iter().enumerate() {
        output.push(anonymize_record(record, offset + 1, designation)?);
    }
    Ok(output)
}

/// Anonymize a dataset across the rayon thread pool
///
/// Output order equals input order. When several records fail, the error for
/// the earliest one is reported so runs fail the same way as the sequential
/// pipeline.
pub fn anonymize_dataset_parallel(
    rows: &[Record],
    designation: &ColumnDesignation,
) -> Result<Dataset, AnonymizationError> {
    let Some((header, records)) = rows.split_first() else {
        return Ok(Vec::new());
    };

    let results: Vec<Result<Record, AnonymizationError>> = records
        .par_iter()
        .enumerate()
        .map(|(offset, record)| anonymize_record(record, offset + 1, designation))
        .collect();

    let mut output = Vec::with_capacity(rows.len());
    output.push(header.clone());
    for result in results {
        output.push(result?);
    }
    Ok(output)
}
