//! Input schema contract for the three dashboard tables.
//!
//! Every transform assumes its input table has already passed this contract;
//! violations are fatal and abort the run before any view-model is built.
//!
//! Two layers of checking, both against the parser's string-valued rows:
//!
//! 1. **Header check** - the required columns must be present
//!    ([`SchemaError::MissingColumn`]).
//! 2. **Row check** - each row is validated against a JSON Schema (Draft 7)
//!    that pins field presence and lexical shape: ISO date prefix, decimal
//!    number pattern ([`SchemaError::InvalidRows`]).
//!
//! Schemas are embedded at compile time from the `schemas/` directory:
//! - `sales-row.json` - {date, category, sales}
//! - `geo-row.json` - {latitude, longitude, region, sales}
//! - `feedback-row.json` - {date, category, rating, sentiment_score}

use once_cell::sync::Lazy;
use serde_json::Value;
use std::str::FromStr;

use crate::error::{SchemaError, SchemaResult};
use crate::parser::CsvTable;

// =============================================================================
// Tables
// =============================================================================

/// The three input tables consumed by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// Sales transactions (`sales_data.csv`).
    Sales,
    /// Geocoded regional sales (`geographic_data.csv`).
    Geo,
    /// Customer feedback (`customer_feedback.csv`).
    Feedback,
}

impl Table {
    /// Table name used in error messages and CLI arguments.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Sales => "sales",
            Table::Geo => "geo",
            Table::Feedback => "feedback",
        }
    }

    /// Columns that must be present in the header line.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Table::Sales => &["date", "category", "sales"],
            Table::Geo => &["latitude", "longitude", "region", "sales"],
            Table::Feedback => &["date", "category", "rating", "sentiment_score"],
        }
    }

    /// The embedded JSON Schema source for this table's rows.
    pub fn schema_json(&self) -> &'static str {
        match self {
            Table::Sales => include_str!("../../schemas/sales-row.json"),
            Table::Geo => include_str!("../../schemas/geo-row.json"),
            Table::Feedback => include_str!("../../schemas/feedback-row.json"),
        }
    }

    fn validator(&self) -> &'static jsonschema::Validator {
        match self {
            Table::Sales => &SALES_VALIDATOR,
            Table::Geo => &GEO_VALIDATOR,
            Table::Feedback => &FEEDBACK_VALIDATOR,
        }
    }
}

impl FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sales" => Ok(Table::Sales),
            "geo" | "geographic" => Ok(Table::Geo),
            "feedback" => Ok(Table::Feedback),
            other => Err(format!(
                "Unknown table '{}' (expected sales, geo or feedback)",
                other
            )),
        }
    }
}

// Validators compile once per process; embedded schemas are build assets,
// so a compile failure is a programming error.
static SALES_VALIDATOR: Lazy<jsonschema::Validator> = Lazy::new(|| compile(Table::Sales));
static GEO_VALIDATOR: Lazy<jsonschema::Validator> = Lazy::new(|| compile(Table::Geo));
static FEEDBACK_VALIDATOR: Lazy<jsonschema::Validator> = Lazy::new(|| compile(Table::Feedback));

fn compile(table: Table) -> jsonschema::Validator {
    let schema: Value =
        serde_json::from_str(table.schema_json()).expect("Invalid embedded schema");
    jsonschema::draft7::new(&schema).expect("Invalid embedded schema")
}

// =============================================================================
// Checks
// =============================================================================

/// Check that every required column is present in the header line.
pub fn check_columns(table: Table, headers: &[String]) -> SchemaResult<()> {
    for column in table.required_columns() {
        if !headers.iter().any(|h| h == column) {
            return Err(SchemaError::MissingColumn {
                table: table.name().to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Validate a single row against the table's JSON Schema.
///
/// Returns the full list of violation messages on failure.
pub fn validate_row(table: Table, row: &Value) -> Result<(), Vec<String>> {
    let errors: Vec<String> = table
        .validator()
        .iter_errors(row)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Quick check of a single row.
pub fn is_valid_row(table: Table, row: &Value) -> bool {
    table.validator().is_valid(row)
}

/// Validate all rows of a table. Row numbers count the header as line 1.
pub fn validate_rows(table: Table, rows: &[Value]) -> SchemaResult<()> {
    let mut count = 0;
    let mut first: Option<(usize, String)> = None;

    for (i, row) in rows.iter().enumerate() {
        if let Err(errors) = validate_row(table, row) {
            count += 1;
            if first.is_none() {
                let message = errors.into_iter().next().unwrap_or_default();
                first = Some((i + 2, message));
            }
        }
    }

    match first {
        None => Ok(()),
        Some((first_row, first_error)) => Err(SchemaError::InvalidRows {
            table: table.name().to_string(),
            count,
            first_row,
            first_error,
        }),
    }
}

/// Full contract check for a parsed table: headers, then rows.
pub fn check_table(table: Table, parsed: &CsvTable) -> SchemaResult<()> {
    check_columns(table, &parsed.headers)?;
    validate_rows(table, &parsed.records)
}
