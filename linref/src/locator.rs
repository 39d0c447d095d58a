//! Locate a point along a route by measure.
//!
//! The locator walks the route's segments in order, keeping a running
//! [`Walker`] total of either the vertices' measures (measured routes) or the
//! accumulated great-circle length (unmeasured routes). The first segment whose
//! cumulative end distance reaches the target measure is interpolated along the
//! great circle from its start vertex.
//!
//! # Example
//!
//! ```
//! use linref::{locate_point_along_route, Line, Path, Point};
//!
//! let route = Line::new(vec![Path::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//! ])]);
//!
//! // 1 km east of the start, along the equator
//! let point = locate_point_along_route(&route, 1_000.0).unwrap();
//! assert!(point.y.abs() < 1e-9);
//! assert!((point.x - 0.008993).abs() < 1e-6);
//! ```

use tokio_util::sync::CancellationToken;

use crate::error::{LinrefError, Result};
use crate::geo_math::{calculate_bearing_to, calculate_destination, geodesic_length};
use crate::geometry::{Line, Point};
use crate::walker::Walker;

/// Find the point at `measure` along `line`.
///
/// Returns `None` when the route is empty or `measure` lies beyond its end.
/// `measure` is compared against vertex measures if every vertex has one (see
/// [`Line::has_m`]), otherwise against the accumulated length in meters.
pub fn locate_point_along_route(line: &Line, measure: f64) -> Option<Point> {
    walk(line, measure, None).unwrap_or_default()
}

/// Like [`locate_point_along_route`], but stops early when `token` is
/// cancelled.
///
/// The token is checked before every path and every segment.
///
/// # Returns
///
/// - `Ok(Some(point))` - the located point (without a measure)
/// - `Ok(None)` - the route was exhausted without reaching `measure`
/// - `Err(LinrefError::Cancelled)` - cancellation was observed
pub fn locate_point_along_route_cancellable(
    line: &Line,
    measure: f64,
    token: &CancellationToken,
) -> Result<Option<Point>> {
    walk(line, measure, Some(token))
}

fn walk(line: &Line, measure: f64, token: Option<&CancellationToken>) -> Result<Option<Point>> {
    let is_cancelled = || token.is_some_and(CancellationToken::is_cancelled);

    let has_m = line.has_m();
    let mut walker = Walker::default();

    tracing::debug!(
        measure = measure,
        has_m = has_m,
        paths = line.paths.len(),
        "Locating point along route"
    );

    for path in &line.paths {
        if is_cancelled() {
            return Err(LinrefError::Cancelled);
        }

        for (start, end) in path.segments() {
            if is_cancelled() {
                return Err(LinrefError::Cancelled);
            }

            let length = geodesic_length(start.y, start.x, end.y, end.x);
            let end_measure = if has_m { end.m } else { None };
            walker = walker.step(end_measure, length);

            tracing::debug!(
                length = length,
                distance = walker.distance,
                "Segment walked"
            );

            if walker.reaches(measure) {
                let distance = walker.offset_into_segment(measure);
                let bearing = calculate_bearing_to(start.y, start.x, end.y, end.x);
                let (lat, lon) = calculate_destination(start.y, start.x, bearing, distance);
                return Ok(Some(Point::new(lon, lat)));
            }
        }
    }

    tracing::debug!(
        measure = measure,
        distance = walker.distance,
        "Measure beyond end of route"
    );

    Ok(None)
}
