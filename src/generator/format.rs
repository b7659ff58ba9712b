//! Output formatters for generated data

use super::schema::FieldValue;
use super::GeneratedData;
use crate::domain::{Result, TabscrubError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    Sql,
}

impl OutputFormat {
    /// File extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Sql => "sql",
        }
    }

    /// Render data in this format
    pub fn render(&self, data: &GeneratedData) -> Result<String> {
        match self {
            Self::Json => format_as_json(data),
            Self::Csv => format_as_csv(data),
            Self::Sql => Ok(format_as_sql(data)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = TabscrubError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "sql" => Ok(Self::Sql),
            _ => Err(TabscrubError::Validation(format!(
                "Unsupported format '{s}'. Use 'json', 'csv', or 'sql'."
            ))),
        }
    }
}

/// Pretty JSON array of objects, keys in field order
pub fn format_as_json(data: &GeneratedData) -> Result<String> {
    let records: Vec<Value> = data
        .records
        .iter()
        .map(|record| {
            let object: Map<String, Value> = data
                .fields
                .iter()
                .cloned()
                .zip(record.iter().map(to_json_value))
                .collect();
            Value::Object(object)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&Value::Array(records))?)
}

fn to_json_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(s) => Value::String(s.clone()),
        FieldValue::Integer(n) => Value::from(*n),
        FieldValue::Decimal(x) => Value::from(*x),
    }
}

/// Header line plus one line per record; empty data renders as an empty string
pub fn format_as_csv(data: &GeneratedData) -> Result<String> {
    if data.records.is_empty() {
        return Ok(String::new());
    }

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(&data.fields)?;
    for record in &data.records {
        wtr.write_record(record.iter().map(|v| v.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| TabscrubError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TabscrubError::Csv(e.to_string()))
}

/// One `INSERT` statement per record; empty data renders as an empty string
pub fn format_as_sql(data: &GeneratedData) -> String {
    if data.records.is_empty() {
        return String::new();
    }

    let table = data.domain.name();
    let columns = data.fields.join(", ");
    let mut output = vec![format!("-- SQL INSERT statements for {table}\n")];

    for record in &data.records {
        let values: Vec<String> = record.iter().map(sql_literal).collect();
        output.push(format!(
            "INSERT INTO {table} ({columns}) VALUES ({});",
            values.join(", ")
        ));
    }

    output.join("\n")
}

fn sql_literal(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
        other => other.to_string(),
    }
}
