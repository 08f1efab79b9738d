//! Transformation module.
//!
//! The five independent transforms plus the pipeline that runs them:
//! - Temporal: sales grouped by date
//! - Categorical: sales grouped by category
//! - Matrix: dense weekday × category grid
//! - Mercator: WGS84 → Web Mercator reprojection
//! - Sentiment: score bucketing and histogram
//! - Pipeline: load, validate, decode, transform

pub mod categorical;
pub mod matrix;
pub mod mercator;
pub mod pipeline;
pub mod sentiment;
pub mod temporal;

pub use categorical::{category_totals, CategoryTotal};
pub use matrix::{weekday_matrix, HeatmapCell, WEEKDAYS};
pub use mercator::{project, project_points, ProjectedPoint, EARTH_RADIUS_M, MAX_LATITUDE};
pub use pipeline::*;
pub use sentiment::{sentiment_counts, Sentiment, SentimentBucket};
pub use temporal::{daily_sales, TimeSeriesPoint};
