//! Spherical and planar helpers for lat/lon coordinates on the central body.
//!
//! All angles are taken and returned in degrees.

use super::math::fmod_f64;
use std::fmt::Display;

/// A latitude/longitude pair on the surface of the central body, in degrees.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct GeoCoordinate {
    /// Latitude in degrees, `[-90, 90]`.
    lat: f64,
    /// Longitude in degrees.
    lon: f64,
}

impl GeoCoordinate {
    pub const fn new(lat: f64, lon: f64) -> Self { Self { lat, lon } }
    pub const fn lat(&self) -> f64 { self.lat }
    pub const fn lon(&self) -> f64 { self.lon }

    /// Great-circle distance to `other` on a sphere of the given `radius`.
    pub fn distance_to(&self, other: &GeoCoordinate, radius: f64) -> f64 {
        great_circle_distance(self.lat, self.lon, other.lat, other.lon, radius)
    }

    /// Planar bearing from `self` towards `other`, see [`bearing`].
    pub fn bearing_to(&self, other: &GeoCoordinate) -> f64 {
        bearing(self.lat, self.lon, other.lat, other.lon)
    }
}

impl Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

/// Calculates the great-circle distance between two points using the haversine formula.
///
/// # Arguments
/// - `lat1`, `lon1`: The first point in degrees.
/// - `lat2`, `lon2`: The second point in degrees.
/// - `radius`: The sphere radius.
///
/// # Returns
/// - The arc distance in the unit of `radius`.
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = phi2 - phi1;
    let d_lambda = (lon2 - lon1).to_radians();
    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // rounding can push `a` marginally above 1 for antipodal points
    let c = 2.0 * a.min(1.0).sqrt().asin();
    c * radius
}

/// Calculates the heading from point 1 towards point 2 by treating lat/lon as a flat grid.
///
/// This is `(90 - atan2(Δlat, Δlon)) mod 360`, not a geodesic initial bearing.
/// Boostback thresholds are tuned against exactly this approximation.
///
/// # Returns
/// - A heading in degrees in `[0, 360)`.
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dy = lat2 - lat1;
    let dx = lon2 - lon1;
    fmod_f64(90.0 - dy.atan2(dx).to_degrees(), 360.0)
}

/// Circular distance between two headings.
///
/// # Returns
/// - The smallest angle between `a` and `b` in degrees, `[0, 180]`.
pub fn heading_distance(a: f64, b: f64) -> f64 {
    let d = fmod_f64(a - b, 360.0);
    if d > 180.0 { 360.0 - d } else { d }
}
