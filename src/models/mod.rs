//! Domain models for the Salescope transformation pipeline.
//!
//! This module contains the three input record types decoded from validated
//! CSV rows:
//!
//! - [`SalesRecord`] - one sales transaction (date, category, amount)
//! - [`GeoRecord`] - regional sales with WGS84 coordinates
//! - [`FeedbackRecord`] - customer feedback with a sentiment score
//!
//! Decoding works on the `serde_json::Value` rows produced by the parser.
//! Dates accept a plain calendar date or a timestamp; any time-of-day is
//! truncated to the calendar day, which is the only granularity the
//! aggregators ever use. A field that cannot be decoded aborts the run with a
//! [`ParseError`] - records are never silently skipped.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ParseError, ParseResult};

// =============================================================================
// Sales Transactions
// =============================================================================

/// A single sales transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Calendar day of the transaction.
    pub date: NaiveDate,
    /// Product category (open string domain, case-sensitive).
    pub category: String,
    /// Sales amount.
    pub sales: f64,
}

impl SalesRecord {
    /// Decode a parsed CSV row. `row_num` is the 1-based file line, used in
    /// error messages.
    pub fn from_row(row: &Value, row_num: usize) -> ParseResult<Self> {
        Ok(Self {
            date: parse_date_field(row, "date", row_num)?,
            category: string_field(row, "category", row_num)?,
            sales: parse_number_field(row, "sales", row_num)?,
        })
    }
}

// =============================================================================
// Geographic Sales
// =============================================================================

/// Regional sales with a WGS84 (EPSG:4326) coordinate pair in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    /// Latitude in degrees, nominally in [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, nominally in [-180, 180].
    pub longitude: f64,
    /// Region name.
    pub region: String,
    /// Sales amount for the region.
    pub sales: f64,
}

impl GeoRecord {
    /// Decode a parsed CSV row.
    pub fn from_row(row: &Value, row_num: usize) -> ParseResult<Self> {
        Ok(Self {
            latitude: parse_number_field(row, "latitude", row_num)?,
            longitude: parse_number_field(row, "longitude", row_num)?,
            region: string_field(row, "region", row_num)?,
            sales: parse_number_field(row, "sales", row_num)?,
        })
    }

    /// Whether the coordinate pair is inside the valid geographic range.
    /// Out-of-range pairs are a non-fatal domain warning, not an error.
    pub fn in_geographic_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

// =============================================================================
// Customer Feedback
// =============================================================================

/// A customer feedback entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Calendar day of the feedback.
    pub date: NaiveDate,
    /// Product category the feedback refers to.
    pub category: String,
    /// Ordinal rating.
    pub rating: i64,
    /// Continuous sentiment score, ideally in [0, 1] but not enforced.
    pub sentiment_score: f64,
}

impl FeedbackRecord {
    /// Decode a parsed CSV row.
    pub fn from_row(row: &Value, row_num: usize) -> ParseResult<Self> {
        Ok(Self {
            date: parse_date_field(row, "date", row_num)?,
            category: string_field(row, "category", row_num)?,
            rating: parse_integer_field(row, "rating", row_num)?,
            sentiment_score: parse_number_field(row, "sentiment_score", row_num)?,
        })
    }

    /// Whether the score is inside the nominal [0, 1] range. Scores outside
    /// still get classified; the pipeline only logs a warning.
    pub fn score_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.sentiment_score)
    }
}

// =============================================================================
// Batch Decoding
// =============================================================================

/// Decode all sales rows. Row numbers in errors count the header as line 1.
pub fn decode_sales_rows(rows: &[Value]) -> ParseResult<Vec<SalesRecord>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| SalesRecord::from_row(row, i + 2))
        .collect()
}

/// Decode all geographic rows.
pub fn decode_geo_rows(rows: &[Value]) -> ParseResult<Vec<GeoRecord>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| GeoRecord::from_row(row, i + 2))
        .collect()
}

/// Decode all feedback rows.
pub fn decode_feedback_rows(rows: &[Value]) -> ParseResult<Vec<FeedbackRecord>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| FeedbackRecord::from_row(row, i + 2))
        .collect()
}

// =============================================================================
// Field Helpers
// =============================================================================

fn raw_field<'a>(row: &'a Value, field: &str, row_num: usize) -> ParseResult<&'a Value> {
    row.get(field).ok_or_else(|| ParseError::MissingField {
        row: row_num,
        field: field.to_string(),
    })
}

fn string_field(row: &Value, field: &str, row_num: usize) -> ParseResult<String> {
    let value = raw_field(row, field, row_num)?;
    match value.as_str() {
        Some(s) => Ok(s.to_string()),
        None => Err(ParseError::MissingField {
            row: row_num,
            field: field.to_string(),
        }),
    }
}

/// Parse a calendar date, truncating any time-of-day component.
fn parse_date_field(row: &Value, field: &str, row_num: usize) -> ParseResult<NaiveDate> {
    let raw = string_field(row, field, row_num)?;
    let s = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }

    Err(ParseError::InvalidDate {
        row: row_num,
        field: field.to_string(),
        value: raw,
    })
}

/// Parse a decimal field. Accepts lexical strings (the parser's output) and
/// native JSON numbers (rows fed in programmatically).
fn parse_number_field(row: &Value, field: &str, row_num: usize) -> ParseResult<f64> {
    let value = raw_field(row, field, row_num)?;
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| ParseError::InvalidNumber {
            row: row_num,
            field: field.to_string(),
            value: n.to_string(),
        }),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| ParseError::InvalidNumber {
            row: row_num,
            field: field.to_string(),
            value: s.clone(),
        }),
        other => Err(ParseError::InvalidNumber {
            row: row_num,
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}

fn parse_integer_field(row: &Value, field: &str, row_num: usize) -> ParseResult<i64> {
    let value = raw_field(row, field, row_num)?;
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| ParseError::InvalidNumber {
            row: row_num,
            field: field.to_string(),
            value: n.to_string(),
        }),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| ParseError::InvalidNumber {
            row: row_num,
            field: field.to_string(),
            value: s.clone(),
        }),
        other => Err(ParseError::InvalidNumber {
            row: row_num,
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sales_record_from_row() {
        let row = json!({ "date": "2024-01-01", "category": "Electronics", "sales": "100.5" });
        let record = SalesRecord::from_row(&row, 2).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(record.category, "Electronics");
        assert_eq!(record.sales, 100.5);
    }

    #[test]
    fn test_time_of_day_truncated() {
        let row = json!({ "date": "2024-03-15 13:45:00", "category": "A", "sales": "1" });
        let record = SalesRecord::from_row(&row, 2).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

        let row = json!({ "date": "2024-03-15T13:45:00", "category": "A", "sales": "1" });
        let record = SalesRecord::from_row(&row, 2).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_invalid_date_is_fatal() {
        let row = json!({ "date": "15/03/2024", "category": "A", "sales": "1" });
        let err = SalesRecord::from_row(&row, 5).unwrap_err();
        assert!(matches!(err, ParseError::InvalidDate { row: 5, .. }));
    }

    #[test]
    fn test_invalid_number_is_fatal() {
        let row = json!({ "date": "2024-01-01", "category": "A", "sales": "lots" });
        let err = SalesRecord::from_row(&row, 3).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { row: 3, .. }));
    }

    #[test]
    fn test_missing_field() {
        let row = json!({ "date": "2024-01-01", "sales": "1" });
        let err = SalesRecord::from_row(&row, 2).unwrap_err();
        assert!(matches!(err, ParseError::MissingField { .. }));
    }

    #[test]
    fn test_geo_record_from_row() {
        let row = json!({
            "latitude": "48.8566",
            "longitude": "2.3522",
            "region": "Paris",
            "sales": "1200"
        });
        let record = GeoRecord::from_row(&row, 2).unwrap();
        assert_eq!(record.region, "Paris");
        assert!(record.in_geographic_range());
    }

    #[test]
    fn test_geo_out_of_range_is_not_an_error() {
        let row = json!({
            "latitude": "95.0",
            "longitude": "2.0",
            "region": "Nowhere",
            "sales": "0"
        });
        let record = GeoRecord::from_row(&row, 2).unwrap();
        assert!(!record.in_geographic_range());
    }

    #[test]
    fn test_feedback_record_from_row() {
        let row = json!({
            "date": "2024-02-01",
            "category": "Books",
            "rating": "4",
            "sentiment_score": "0.82"
        });
        let record = FeedbackRecord::from_row(&row, 2).unwrap();
        assert_eq!(record.rating, 4);
        assert!(record.score_in_range());
    }

    #[test]
    fn test_native_json_numbers_accepted() {
        let row = json!({ "date": "2024-01-01", "category": "A", "sales": 42.5 });
        let record = SalesRecord::from_row(&row, 2).unwrap();
        assert_eq!(record.sales, 42.5);
    }

    #[test]
    fn test_decode_rows_reports_first_bad_row() {
        let rows = vec![
            json!({ "date": "2024-01-01", "category": "A", "sales": "1" }),
            json!({ "date": "bad", "category": "A", "sales": "1" }),
        ];
        let err = decode_sales_rows(&rows).unwrap_err();
        assert!(matches!(err, ParseError::InvalidDate { row: 3, .. }));
    }
}
