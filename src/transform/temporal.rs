//! Daily sales time series.
//!
//! Groups sales records by calendar date and sums the amounts. Dates carry no
//! time-of-day at this point (truncated at decode time), so grouping is exact
//! date equality.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::SalesRecord;

/// Total sales for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub total_sales: f64,
}

/// Aggregate sales per day, ascending by date.
///
/// Every record contributes; empty input yields an empty series.
pub fn daily_sales(records: &[SalesRecord]) -> Vec<TimeSeriesPoint> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for record in records {
        *totals.entry(record.date).or_insert(0.0) += record.sales;
    }

    totals
        .into_iter()
        .map(|(date, total_sales)| TimeSeriesPoint { date, total_sales })
        .collect()
}
