//! # Salescope - sales dashboard data transformation pipeline
//!
//! Salescope ingests three tabular CSV datasets (sales transactions,
//! geocoded regional sales, customer feedback) and derives five independent,
//! chart-ready view-models for a rendering layer to consume.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV Files  │────▶│   Parser    │────▶│   Schema +  │────▶│  Transforms │
//! │  (3 tables) │     │ (auto-enc)  │     │   Decode    │     │  (5 views)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! The five transforms are pure and independent: daily sales time series,
//! per-category totals, a dense weekday × category matrix, Web Mercator
//! reprojection of geographic points, and a sentiment histogram. Rendering,
//! chart layout and HTML emission are out of scope; the output is flat JSON
//! tables.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use salescope::{load_dashboard, DashboardPaths, PipelineOptions};
//!
//! fn main() {
//!     let paths = DashboardPaths {
//!         sales: "sales_data.csv".into(),
//!         geo: "geographic_data.csv".into(),
//!         feedback: "customer_feedback.csv".into(),
//!     };
//!     let dashboard = load_dashboard(&paths, &PipelineOptions::default()).unwrap();
//!     println!("{} heatmap cells", dashboard.heatmap.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Input record types and row decoding
//! - [`parser`] - CSV parsing with auto-detection
//! - [`schema`] - Input schema contract
//! - [`transform`] - The five transforms and the pipeline
//! - [`logs`] - Console progress logging

// Core modules
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Schema contract
pub mod schema;

// Transformation
pub mod transform;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, ParseError, PipelineError, SchemaError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    decode_feedback_rows, decode_geo_rows, decode_sales_rows, FeedbackRecord, GeoRecord,
    SalesRecord,
};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    detect_delimiter, detect_encoding, read_csv_bytes, read_csv_file, CsvTable,
};

// =============================================================================
// Re-exports - Schema
// =============================================================================

pub use schema::{check_columns, check_table, is_valid_row, validate_row, validate_rows, Table};

// =============================================================================
// Re-exports - Transforms
// =============================================================================

pub use transform::{
    category_totals, daily_sales, project, project_points, sentiment_counts, weekday_matrix,
    CategoryTotal, HeatmapCell, ProjectedPoint, Sentiment, SentimentBucket, TimeSeriesPoint,
    EARTH_RADIUS_M, MAX_LATITUDE, WEEKDAYS,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    build_dashboard, load_dashboard, Dashboard, DashboardInput, DashboardPaths, PipelineOptions,
};
