//! Day-of-week × category sales matrix.
//!
//! Two-stage grouping: derive the weekday from each record's date
//! (ISO/Gregorian calendar, English names), then sum sales per
//! (weekday, category) pair. The output is a dense grid over the full cross
//! product of the 7 canonical weekdays and every observed category.
//!
//! The zero-fill is a correctness requirement, not a convenience: downstream
//! color-scale rendering needs a value at every grid coordinate, so a
//! (day, category) pair with no contributing records is materialized with
//! `total_sales = 0`, never omitted. This is the opposite policy from the
//! sentiment histogram, which omits empty buckets.

use chrono::Datelike;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::SalesRecord;

/// Canonical weekday row order, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One cell of the dense weekday × category grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub day_of_week: &'static str,
    pub category: String,
    pub total_sales: f64,
}

/// Build the dense weekday × category matrix.
///
/// Cells are emitted weekday-major: all categories (sorted) for Monday, then
/// Tuesday, and so on. With `k` observed categories the output always has
/// exactly `7 * k` cells; with no records it has none (7 rows × 0 columns).
pub fn weekday_matrix(records: &[SalesRecord]) -> Vec<HeatmapCell> {
    let mut totals: BTreeMap<(usize, &str), f64> = BTreeMap::new();
    let mut categories: BTreeSet<&str> = BTreeSet::new();

    for record in records {
        let day = record.date.weekday().num_days_from_monday() as usize;
        categories.insert(record.category.as_str());
        *totals.entry((day, record.category.as_str())).or_insert(0.0) += record.sales;
    }

    let mut cells = Vec::with_capacity(WEEKDAYS.len() * categories.len());
    for (day, day_name) in WEEKDAYS.into_iter().enumerate() {
        for &category in &categories {
            let total_sales = totals.get(&(day, category)).copied().unwrap_or(0.0);
            cells.push(HeatmapCell {
                day_of_week: day_name,
                category: category.to_string(),
                total_sales,
            });
        }
    }

    cells
}
