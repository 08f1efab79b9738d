//! Per-category sales totals.
//!
//! Groups sales records by category and sums the amounts. Matching is
//! case-sensitive and exact; the category domain is an open set of strings,
//! not an enum. Output is sorted by category name so repeated runs over the
//! same input serialize identically.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::SalesRecord;

/// Total sales for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total_sales: f64,
}

/// Aggregate sales per category, sorted by category name.
pub fn category_totals(records: &[SalesRecord]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();

    for record in records {
        *totals.entry(record.category.as_str()).or_insert(0.0) += record.sales;
    }

    totals
        .into_iter()
        .map(|(category, total_sales)| CategoryTotal {
            category: category.to_string(),
            total_sales,
        })
        .collect()
}
