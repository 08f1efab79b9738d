//! WGS84 to Web Mercator reprojection.
//!
//! Converts geographic coordinates (EPSG:4326, degrees) into the planar
//! Web Mercator projection (EPSG:3857, meters) used by web tile services,
//! with the standard spherical forward formulas:
//!
//! ```text
//! x = R * λ                      λ = longitude in radians
//! y = R * ln(tan(π/4 + φ/2))     φ = latitude in radians, R = 6378137 m
//! ```
//!
//! A closed-form, stateless, per-point transform: no iterative solving, no
//! datum shift beyond the spherical approximation standard to this projection
//! family. The tangent term diverges toward the poles, so latitude is clamped
//! to ±[`MAX_LATITUDE`] before transforming; the output is always finite.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

use crate::models::GeoRecord;

/// Earth's equatorial radius in meters (WGS84 semi-major axis).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Latitude clamp bound in degrees. Keeps `y` finite near the poles.
pub const MAX_LATITUDE: f64 = 89.9999;

/// A geographic sales point with planar map coordinates attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub region: String,
    pub sales: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub mercator_x: f64,
    pub mercator_y: f64,
}

/// Project a single (longitude, latitude) pair in degrees to Web Mercator
/// meters. Latitude is clamped to ±[`MAX_LATITUDE`] first.
pub fn project(longitude: f64, latitude: f64) -> (f64, f64) {
    let lambda = longitude.to_radians();
    let phi = latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = EARTH_RADIUS_M * lambda;
    let y = EARTH_RADIUS_M * (FRAC_PI_4 + phi / 2.0).tan().ln();

    (x, y)
}

/// Project every record, preserving input order and all original fields.
pub fn project_points(records: &[GeoRecord]) -> Vec<ProjectedPoint> {
    records
        .iter()
        .map(|record| {
            let (mercator_x, mercator_y) = project(record.longitude, record.latitude);
            ProjectedPoint {
                region: record.region.clone(),
                sales: record.sales,
                latitude: record.latitude,
                longitude: record.longitude,
                mercator_x,
                mercator_y,
            }
        })
        .collect()
}
