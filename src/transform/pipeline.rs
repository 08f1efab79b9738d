//! High-level pipeline API: three CSV tables in, five view-models out.
//!
//! Two entry points:
//!
//! - [`build_dashboard`] - the pure core. Takes already-decoded records and
//!   runs the five independent transforms. No I/O, no shared mutable state,
//!   deterministic: the same input always produces the same [`Dashboard`].
//! - [`load_dashboard`] - the orchestration wrapper. Reads the three CSV
//!   files, enforces the schema contract, decodes rows to typed records,
//!   logs domain warnings, then calls [`build_dashboard`].
//!
//! Failure is all-or-nothing per run: a schema violation or an undecodable
//! field aborts before any view-model exists, so a partially valid input can
//! never produce a partial dashboard.
//!
//! # Example
//!
//! ```rust,ignore
//! use salescope::{load_dashboard, DashboardPaths, PipelineOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let paths = DashboardPaths {
//!         sales: "sales_data.csv".into(),
//!         geo: "geographic_data.csv".into(),
//!         feedback: "customer_feedback.csv".into(),
//!     };
//!     let dashboard = load_dashboard(&paths, &PipelineOptions::default())?;
//!     println!("{} categories", dashboard.category_totals.len());
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::PipelineResult;
use crate::logs::{log_info, log_success, log_warning};
use crate::models::{
    decode_feedback_rows, decode_geo_rows, decode_sales_rows, FeedbackRecord, GeoRecord,
    SalesRecord,
};
use crate::parser::{read_csv_file, CsvTable};
use crate::schema::{check_table, Table};

use super::categorical::{category_totals, CategoryTotal};
use super::matrix::{weekday_matrix, HeatmapCell};
use super::mercator::{project_points, ProjectedPoint};
use super::sentiment::{sentiment_counts, SentimentBucket};
use super::temporal::{daily_sales, TimeSeriesPoint};

// =============================================================================
// Inputs
// =============================================================================

/// The three decoded input tables, owned by one pipeline invocation.
#[derive(Debug, Clone, Default)]
pub struct DashboardInput {
    pub sales: Vec<SalesRecord>,
    pub geo: Vec<GeoRecord>,
    pub feedback: Vec<FeedbackRecord>,
}

/// Paths to the three input CSV files.
#[derive(Debug, Clone)]
pub struct DashboardPaths {
    pub sales: PathBuf,
    pub geo: PathBuf,
    pub feedback: PathBuf,
}

/// Options for the loading pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Skip the row-level JSON Schema check (header check always runs).
    /// Decoding still rejects untypable fields.
    pub skip_schema_check: bool,
}

// =============================================================================
// Output
// =============================================================================

/// The five chart-ready view-models, rebuilt fresh on every run.
///
/// Serializes as five flat JSON arrays with no nested structure, suitable for
/// direct tabular consumption by a rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// Daily sales time series, ascending by date.
    pub daily_sales: Vec<TimeSeriesPoint>,
    /// Per-category totals, sorted by category.
    pub category_totals: Vec<CategoryTotal>,
    /// Dense weekday × category matrix, zero-filled.
    pub heatmap: Vec<HeatmapCell>,
    /// Web Mercator projected sales points, input order.
    pub geo_points: Vec<ProjectedPoint>,
    /// Sentiment histogram, absent labels omitted.
    pub sentiment: Vec<SentimentBucket>,
}

// =============================================================================
// Pure core
// =============================================================================

/// Run the five transforms over decoded input tables.
///
/// The transforms read disjoint projections of the input and have no data
/// dependencies on each other; they run here as a single sequential pass
/// because each is O(n) and memory-bound.
pub fn build_dashboard(input: &DashboardInput) -> Dashboard {
    Dashboard {
        daily_sales: daily_sales(&input.sales),
        category_totals: category_totals(&input.sales),
        heatmap: weekday_matrix(&input.sales),
        geo_points: project_points(&input.geo),
        sentiment: sentiment_counts(&input.feedback),
    }
}

// =============================================================================
// Orchestration
// =============================================================================

/// Load the three CSV files, enforce the contract, and build the dashboard.
///
/// Steps per table:
/// 1. Read with encoding/delimiter auto-detection
/// 2. Header + row schema check (fatal before any transform runs)
/// 3. Decode rows into typed records (fatal, all-or-nothing)
///
/// Then domain warnings are counted (out-of-range coordinates, sentiment
/// scores outside [0, 1]) and the pure core runs.
pub fn load_dashboard(
    paths: &DashboardPaths,
    options: &PipelineOptions,
) -> PipelineResult<Dashboard> {
    let sales_table = load_table(Table::Sales, &paths.sales, options)?;
    let geo_table = load_table(Table::Geo, &paths.geo, options)?;
    let feedback_table = load_table(Table::Feedback, &paths.feedback, options)?;

    log_info("Decoding records...");
    let input = DashboardInput {
        sales: decode_sales_rows(&sales_table.records)?,
        geo: decode_geo_rows(&geo_table.records)?,
        feedback: decode_feedback_rows(&feedback_table.records)?,
    };
    log_success(format!(
        "{} sales, {} geo, {} feedback records",
        input.sales.len(),
        input.geo.len(),
        input.feedback.len()
    ));

    report_domain_warnings(&input);

    log_info("Building view-models...");
    let dashboard = build_dashboard(&input);
    log_success(format!(
        "{} days, {} categories, {} heatmap cells, {} points, {} sentiment buckets",
        dashboard.daily_sales.len(),
        dashboard.category_totals.len(),
        dashboard.heatmap.len(),
        dashboard.geo_points.len(),
        dashboard.sentiment.len()
    ));

    Ok(dashboard)
}

fn load_table(table: Table, path: &Path, options: &PipelineOptions) -> PipelineResult<CsvTable> {
    log_info(format!("Reading {} table: {}", table.name(), path.display()));
    let parsed = read_csv_file(path)?;
    log_success(format!(
        "{} rows ({}, '{}')",
        parsed.records.len(),
        parsed.encoding,
        match parsed.delimiter {
            '\t' => "\\t".to_string(),
            c => c.to_string(),
        }
    ));

    if options.skip_schema_check {
        crate::schema::check_columns(table, &parsed.headers)?;
        log_info("(row schema check skipped)");
    } else {
        check_table(table, &parsed)?;
    }

    Ok(parsed)
}

fn report_domain_warnings(input: &DashboardInput) {
    let bad_coords = input
        .geo
        .iter()
        .filter(|r| !r.in_geographic_range())
        .count();
    if bad_coords > 0 {
        log_warning(format!(
            "{} geographic point(s) outside valid range; latitudes will be clamped",
            bad_coords
        ));
    }

    let bad_scores = input
        .feedback
        .iter()
        .filter(|r| !r.score_in_range())
        .count();
    if bad_scores > 0 {
        log_warning(format!(
            "{} sentiment score(s) outside [0, 1]; bucketed as-is",
            bad_scores
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sales(date: &str, category: &str, amount: f64) -> SalesRecord {
        SalesRecord {
            date: date.parse().unwrap(),
            category: category.to_string(),
            sales: amount,
        }
    }

    fn sample_input() -> DashboardInput {
        DashboardInput {
            sales: vec![
                sales("2024-01-01", "A", 100.0),
                sales("2024-01-01", "B", 50.0),
                sales("2024-01-02", "A", 30.0),
            ],
            geo: vec![GeoRecord {
                latitude: 48.8566,
                longitude: 2.3522,
                region: "Paris".to_string(),
                sales: 1200.0,
            }],
            feedback: [0.1, 0.5, 0.9, 0.7, 0.3]
                .iter()
                .map(|&score| FeedbackRecord {
                    date: "2024-01-01".parse().unwrap(),
                    category: "A".to_string(),
                    rating: 4,
                    sentiment_score: score,
                })
                .collect(),
        }
    }

    #[test]
    fn test_build_dashboard_shapes() {
        let dashboard = build_dashboard(&sample_input());

        assert_eq!(dashboard.daily_sales.len(), 2);
        assert_eq!(dashboard.category_totals.len(), 2);
        assert_eq!(dashboard.heatmap.len(), 14); // 7 weekdays x 2 categories
        assert_eq!(dashboard.geo_points.len(), 1);
        assert_eq!(dashboard.sentiment.len(), 3);
    }

    #[test]
    fn test_sum_conservation_across_views() {
        let input = sample_input();
        let dashboard = build_dashboard(&input);

        let input_total: f64 = input.sales.iter().map(|r| r.sales).sum();
        let series_total: f64 = dashboard.daily_sales.iter().map(|p| p.total_sales).sum();
        let category_total: f64 = dashboard.category_totals.iter().map(|t| t.total_sales).sum();
        let grid_total: f64 = dashboard.heatmap.iter().map(|c| c.total_sales).sum();

        assert!((input_total - series_total).abs() < 1e-9);
        assert!((input_total - category_total).abs() < 1e-9);
        assert!((input_total - grid_total).abs() < 1e-9);
    }

    #[test]
    fn test_idempotence() {
        let input = sample_input();
        let first = serde_json::to_string(&build_dashboard(&input)).unwrap();
        let second = serde_json::to_string(&build_dashboard(&input)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_yields_empty_views() {
        let dashboard = build_dashboard(&DashboardInput::default());

        assert!(dashboard.daily_sales.is_empty());
        assert!(dashboard.category_totals.is_empty());
        assert!(dashboard.heatmap.is_empty());
        assert!(dashboard.geo_points.is_empty());
        assert!(dashboard.sentiment.is_empty());
    }

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_dashboard_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DashboardPaths {
            sales: write_csv(
                &dir,
                "sales.csv",
                "date,category,sales\n2024-01-01,A,100\n2024-01-01,B,50\n2024-01-02,A,30\n",
            ),
            geo: write_csv(
                &dir,
                "geo.csv",
                "latitude,longitude,region,sales\n48.8566,2.3522,Paris,1200\n",
            ),
            feedback: write_csv(
                &dir,
                "feedback.csv",
                "date,category,rating,sentiment_score\n2024-01-05,A,4,0.9\n2024-01-06,B,2,0.2\n",
            ),
        };

        let dashboard = load_dashboard(&paths, &PipelineOptions::default()).unwrap();

        assert_eq!(dashboard.daily_sales[0].total_sales, 150.0);
        assert_eq!(dashboard.geo_points[0].region, "Paris");
        assert_eq!(dashboard.sentiment.len(), 2);
    }

    #[test]
    fn test_load_dashboard_header_only_tables() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DashboardPaths {
            sales: write_csv(&dir, "sales.csv", "date,category,sales\n"),
            geo: write_csv(&dir, "geo.csv", "latitude,longitude,region,sales\n"),
            feedback: write_csv(&dir, "feedback.csv", "date,category,rating,sentiment_score\n"),
        };

        // Empty tables are valid input, not an error
        let dashboard = load_dashboard(&paths, &PipelineOptions::default()).unwrap();
        assert!(dashboard.daily_sales.is_empty());
        assert!(dashboard.heatmap.is_empty());
    }

    #[test]
    fn test_missing_column_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DashboardPaths {
            sales: write_csv(&dir, "sales.csv", "date,sales\n2024-01-01,100\n"),
            geo: write_csv(&dir, "geo.csv", "latitude,longitude,region,sales\n"),
            feedback: write_csv(&dir, "feedback.csv", "date,category,rating,sentiment_score\n"),
        };

        let err = load_dashboard(&paths, &PipelineOptions::default()).unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_bad_value_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DashboardPaths {
            sales: write_csv(
                &dir,
                "sales.csv",
                "date,category,sales\n2024-01-01,A,100\n2024-01-02,B,oops\n",
            ),
            geo: write_csv(&dir, "geo.csv", "latitude,longitude,region,sales\n"),
            feedback: write_csv(&dir, "feedback.csv", "date,category,rating,sentiment_score\n"),
        };

        // No partial dashboard from partially valid input
        assert!(load_dashboard(&paths, &PipelineOptions::default()).is_err());
    }
}
