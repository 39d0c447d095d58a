//! Spherical-Earth geodesy primitives.
//!
//! All functions are pure and take angles in decimal degrees with latitude
//! first. Distances are in meters unless a [`DistanceUnit`] says otherwise.
//!
//! The Earth is modelled as a sphere with a mean radius of 6371 km, which is
//! accurate to roughly 0.5% against the WGS84 ellipsoid.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::LinrefError;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Meters per kilometer.
const METERS_PER_KM: f64 = 1000.0;

/// Unit for distances reported by [`geodesic_length_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    Kilometers,
    #[default]
    Meters,
}

impl DistanceUnit {
    /// Convert a distance in meters into this unit.
    pub fn convert_from_meters(&self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => meters / METERS_PER_KM,
            DistanceUnit::Meters => meters,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = LinrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kilometers" | "kilometres" | "km" => Ok(DistanceUnit::Kilometers),
            "meters" | "metres" | "m" => Ok(DistanceUnit::Meters),
            _ => Err(LinrefError::UnknownUnit {
                unit: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceUnit::Kilometers => write!(f, "km"),
            DistanceUnit::Meters => write!(f, "m"),
        }
    }
}

/// Convert decimal degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert radians to decimal degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Great-circle distance in meters between two points (haversine formula).
///
/// # Examples
///
/// ```
/// use linref::geo_math::geodesic_length;
///
/// // One degree of latitude on the 6371 km sphere
/// let d = geodesic_length(0.0, 0.0, 1.0, 0.0);
/// assert!((d - 111_194.93).abs() < 0.01);
/// ```
pub fn geodesic_length(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = degrees_to_radians(lat1);
    let lon1_rad = degrees_to_radians(lon1);
    let lat2_rad = degrees_to_radians(lat2);
    let lon2_rad = degrees_to_radians(lon2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin() * (dlon / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c * METERS_PER_KM
}

/// Great-circle distance between two points in the requested unit.
pub fn geodesic_length_in(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: DistanceUnit) -> f64 {
    unit.convert_from_meters(geodesic_length(lat1, lon1, lat2, lon2))
}

/// Initial bearing in degrees `[0, 360)` from point 1 towards point 2.
///
/// 0° is north, 90° is east. Coincident points give 0°.
///
/// # Examples
///
/// ```
/// use linref::geo_math::calculate_bearing_to;
///
/// let east = calculate_bearing_to(0.0, 0.0, 0.0, 1.0);
/// assert!((east - 90.0).abs() < 1e-9);
/// ```
pub fn calculate_bearing_to(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = degrees_to_radians(lat1);
    let lon1_rad = degrees_to_radians(lon1);
    let lat2_rad = degrees_to_radians(lat2);
    let lon2_rad = degrees_to_radians(lon2);

    let dlon = lon2_rad - lon1_rad;

    let y = dlon.sin() * lat2_rad.cos();
    let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * dlon.cos();

    let bearing_deg = radians_to_degrees(y.atan2(x));
    (bearing_deg + 360.0) % 360.0
}

/// Destination `(lat, lon)` after travelling `distance` meters from a start
/// point along an initial `bearing` in degrees.
///
/// Longitude is normalized to the `(-180, 180]` range.
///
/// # Examples
///
/// ```
/// use linref::geo_math::calculate_destination;
///
/// let (lat, lon) = calculate_destination(0.0, 0.0, 0.0, 111_194.93);
/// assert!((lat - 1.0).abs() < 1e-6);
/// assert!(lon.abs() < 1e-9);
/// ```
pub fn calculate_destination(lat: f64, lon: f64, bearing: f64, distance: f64) -> (f64, f64) {
    // Angular distance in radians
    let delta = distance / METERS_PER_KM / EARTH_RADIUS_KM;

    let lat_rad = degrees_to_radians(lat);
    let lon_rad = degrees_to_radians(lon);
    let bearing_rad = degrees_to_radians(bearing);

    let lat2_rad =
        (lat_rad.sin() * delta.cos() + lat_rad.cos() * delta.sin() * bearing_rad.cos()).asin();

    let lon2_rad = lon_rad
        + (bearing_rad.sin() * delta.sin() * lat_rad.cos())
            .atan2(delta.cos() - lat_rad.sin() * lat2_rad.sin());

    let lon2_rad = ((lon2_rad + 3.0 * PI) % (2.0 * PI)) - PI;

    let mut lon2 = radians_to_degrees(lon2_rad);
    // The antimeridian is reported as +180
    if lon2 <= -180.0 {
        lon2 += 360.0;
    }

    (radians_to_degrees(lat2_rad), lon2)
}
