//! Error types for the Salescope transformation pipeline.
//!
//! This module defines a hierarchy of error types, one per pipeline layer:
//!
//! - [`CsvError`] - CSV reading and decoding errors
//! - [`SchemaError`] - input contract violations (missing columns, bad rows)
//! - [`ParseError`] - typed record decoding errors (dates, numbers)
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! Fatal errors abort the run before any view-model is produced: a partially
//! valid input never yields a partial dashboard. Out-of-range coordinates and
//! sentiment scores are not errors at all; the pipeline logs them as warnings
//! and the transforms clamp or bucket them (see [`crate::transform::mercator`]
//! and [`crate::transform::sentiment`]).

use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading a CSV file into JSON rows.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to decode the detected encoding.
    #[error("Failed to decode content as {0}")]
    EncodingError(String),

    /// Malformed CSV record.
    #[error("Invalid CSV format: {0}")]
    ParseError(#[from] csv::Error),

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Schema Contract Errors
// =============================================================================

/// Input contract violations, detected before any transform runs.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A required column is absent from the header line.
    #[error("Table '{table}' is missing required column '{column}'")]
    MissingColumn { table: String, column: String },

    /// One or more rows failed JSON Schema validation.
    #[error("Table '{table}': {count} row(s) violate the schema (first: row {first_row}: {first_error})")]
    InvalidRows {
        table: String,
        count: usize,
        first_row: usize,
        first_error: String,
    },
}

// =============================================================================
// Record Decoding Errors
// =============================================================================

/// A field could not be interpreted as its expected type.
///
/// Decoding is all-or-nothing per run: a single bad date or number aborts the
/// pipeline rather than silently skipping the record and producing a
/// misleading partial aggregate.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A date field could not be parsed as a calendar date.
    #[error("Row {row}, field '{field}': cannot parse '{value}' as a date")]
    InvalidDate {
        row: usize,
        field: String,
        value: String,
    },

    /// A numeric field could not be parsed.
    #[error("Row {row}, field '{field}': cannot parse '{value}' as a number")]
    InvalidNumber {
        row: usize,
        field: String,
        value: String,
    },

    /// A field expected by the decoder is absent or not a string.
    #[error("Row {row}: missing field '{field}'")]
    MissingField { row: usize, field: String },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by
/// [`crate::transform::pipeline::load_dashboard`]. It wraps all lower-level
/// errors and adds output-side variants.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Schema contract violation.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Record decoding error.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Output serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV reading.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for schema checks.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for record decoding.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> PipelineError
        let csv_err = CsvError::EmptyFile;
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("empty"));

        // SchemaError -> PipelineError
        let schema_err = SchemaError::MissingColumn {
            table: "sales".into(),
            column: "date".into(),
        };
        let pipeline_err: PipelineError = schema_err.into();
        assert!(pipeline_err.to_string().contains("date"));

        // ParseError -> PipelineError
        let parse_err = ParseError::InvalidNumber {
            row: 3,
            field: "sales".into(),
            value: "abc".into(),
        };
        let pipeline_err: PipelineError = parse_err.into();
        assert!(pipeline_err.to_string().contains("abc"));
    }

    #[test]
    fn test_parse_error_format() {
        let err = ParseError::InvalidDate {
            row: 7,
            field: "date".into(),
            value: "not-a-date".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Row 7"));
        assert!(msg.contains("'date'"));
        assert!(msg.contains("not-a-date"));
    }

    #[test]
    fn test_schema_error_format() {
        let err = SchemaError::InvalidRows {
            table: "feedback".into(),
            count: 2,
            first_row: 4,
            first_error: "\"rating\" is a required property".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("feedback"));
        assert!(msg.contains("row 4"));
    }
}
