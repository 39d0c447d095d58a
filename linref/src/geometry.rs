//! Route geometry: points, paths and lines.
//!
//! Coordinates are decimal degrees with `x` as longitude and `y` as latitude.
//! A [`Line`] is the route handed to the locator; its [`Path`]s are walked in
//! order as if they were one continuous polyline.

use serde::{Deserialize, Serialize};

use crate::geo_math::geodesic_length;

/// A vertex with an optional linear measure.
///
/// `m` is the cumulative distance along the route at this vertex, in whatever
/// unit the caller uses. An absent `m` means the vertex is not measured; zero
/// is a valid measure and is kept distinct from "absent".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Point {
    /// Longitude in decimal degrees.
    pub x: f64,
    /// Latitude in decimal degrees.
    pub y: f64,
    /// Measure at this vertex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<f64>,
}

impl Point {
    /// Create an unmeasured point from longitude and latitude.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, m: None }
    }

    /// Create a measured point.
    pub fn with_m(x: f64, y: f64, m: f64) -> Self {
        Self { x, y, m: Some(m) }
    }

    /// Whether this vertex carries a usable (non-negative) measure.
    pub fn is_measured(&self) -> bool {
        matches!(self.m, Some(m) if m >= 0.0)
    }

    /// Great-circle distance in meters to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        geodesic_length(self.y, self.x, other.y, other.x)
    }
}

/// An ordered sequence of points forming a polyline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Path {
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Path {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Consecutive `(start, end)` vertex pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&Point, &Point)> {
        self.points.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

/// A route made of one or more paths.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Line {
    #[serde(default)]
    pub paths: Vec<Path>,
}

impl Line {
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    /// Whether every vertex of every path carries a non-negative measure.
    ///
    /// A single unmeasured vertex turns the whole route into an unmeasured
    /// one. An empty line is trivially measured.
    ///
    /// # Examples
    ///
    /// ```
    /// use linref::{Line, Path, Point};
    ///
    /// let measured = Line::new(vec![Path::new(vec![
    ///     Point::with_m(0.0, 0.0, 0.0),
    ///     Point::with_m(0.0, 1.0, 10.0),
    /// ])]);
    /// assert!(measured.has_m());
    ///
    /// let mixed = Line::new(vec![Path::new(vec![
    ///     Point::with_m(0.0, 0.0, 0.0),
    ///     Point::new(0.0, 1.0),
    /// ])]);
    /// assert!(!mixed.has_m());
    /// ```
    pub fn has_m(&self) -> bool {
        self.paths
            .iter()
            .all(|path| path.points.iter().all(Point::is_measured))
    }

    /// Number of segments across all paths.
    pub fn segment_count(&self) -> usize {
        self.paths
            .iter()
            .map(|path| path.points.len().saturating_sub(1))
            .sum()
    }

    /// Sum of the great-circle lengths of all segments, in meters.
    pub fn geodesic_length(&self) -> f64 {
        self.paths
            .iter()
            .flat_map(Path::segments)
            .map(|(start, end)| start.distance_to(end))
            .sum()
    }

    /// Largest measure carried by any vertex, if any vertex is measured.
    pub fn max_measure(&self) -> Option<f64> {
        self.paths
            .iter()
            .flat_map(|path| path.points.iter())
            .filter_map(|point| point.m)
            .fold(None, |max, m| Some(max.map_or(m, |max: f64| max.max(m))))
    }
}
