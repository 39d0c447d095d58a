//! GeoJSON route conversion.
//!
//! This module converts GeoJSON geometries into [`Line`] routes and located
//! [`Point`]s back into GeoJSON. Enable the `geojson` feature to use it.
//!
//! # Example
//!
//! ```ignore
//! use linref::geojson::line_from_geometry;
//! use linref::locate_point_along_route;
//! use geojson::Geometry;
//!
//! let geometry: Geometry = r#"{
//!     "type": "LineString",
//!     "coordinates": [[138.5, 35.5], [138.6, 35.6]]
//! }"#.parse().unwrap();
//!
//! let route = line_from_geometry(&geometry)?;
//! let point = locate_point_along_route(&route, 5_000.0);
//! ```

use geojson::{Geometry, Value as GeoJsonValue};

use crate::error::{LinrefError, Result};
use crate::geometry::{Line, Path, Point};

/// Convert a GeoJSON geometry into a route.
///
/// Supported geometry types:
/// - LineString (one path)
/// - MultiLineString (one path per line)
///
/// Positions are read as `[lon, lat]`, `[lon, lat, z]` or `[lon, lat, z, m]`.
/// The fourth ordinate, when present, becomes the vertex measure; `z` is
/// ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The geometry is not a LineString or MultiLineString
/// - A position has fewer than 2 elements
pub fn line_from_geometry(geometry: &Geometry) -> Result<Line> {
    let paths = match &geometry.value {
        GeoJsonValue::LineString(coords) => vec![path_from_positions(coords)?],
        GeoJsonValue::MultiLineString(lines) => lines
            .iter()
            .map(|line| path_from_positions(line))
            .collect::<Result<Vec<_>>>()?,
        other => {
            return Err(LinrefError::UnsupportedGeometry {
                kind: geometry_kind(other).to_string(),
            })
        }
    };

    Ok(Line::new(paths))
}

fn geometry_kind(value: &GeoJsonValue) -> &'static str {
    match value {
        GeoJsonValue::Point(_) => "Point",
        GeoJsonValue::MultiPoint(_) => "MultiPoint",
        GeoJsonValue::LineString(_) => "LineString",
        GeoJsonValue::MultiLineString(_) => "MultiLineString",
        GeoJsonValue::Polygon(_) => "Polygon",
        GeoJsonValue::MultiPolygon(_) => "MultiPolygon",
        GeoJsonValue::GeometryCollection(_) => "GeometryCollection",
    }
}

/// Convert a list of GeoJSON positions into a path.
pub fn path_from_positions(coords: &[Vec<f64>]) -> Result<Path> {
    coords
        .iter()
        .map(|coord| point_from_position(coord))
        .collect::<Result<Vec<_>>>()
        .map(Path::new)
}

/// Convert a single GeoJSON position into a point.
///
/// # Errors
///
/// Returns an error if the position has fewer than 2 elements.
pub fn point_from_position(coord: &[f64]) -> Result<Point> {
    match coord {
        [lon, lat, _z, m, ..] => Ok(Point::with_m(*lon, *lat, *m)),
        [lon, lat, ..] => Ok(Point::new(*lon, *lat)),
        _ => Err(LinrefError::InvalidCoordinate {
            message: "Coordinate must have at least 2 elements (lon, lat)".to_string(),
        }),
    }
}

/// Convert a located point into a GeoJSON `Point` geometry `[lon, lat]`.
pub fn point_to_geometry(point: &Point) -> Geometry {
    Geometry::new(GeoJsonValue::Point(vec![point.x, point.y]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate_point_along_route;

    #[test]
    fn test_point_from_position() {
        assert_eq!(point_from_position(&[138.5, 35.5]).unwrap(), Point::new(138.5, 35.5));
        // Altitude is ignored
        assert_eq!(
            point_from_position(&[138.5, 35.5, 1200.0]).unwrap(),
            Point::new(138.5, 35.5)
        );
        // Fourth ordinate is the measure
        assert_eq!(
            point_from_position(&[138.5, 35.5, 0.0, 42.0]).unwrap(),
            Point::with_m(138.5, 35.5, 42.0)
        );
    }

    #[test]
    fn test_point_from_position_invalid() {
        assert!(point_from_position(&[138.5]).is_err());
        assert!(point_from_position(&[]).is_err());
    }

    #[test]
    fn test_line_from_linestring() {
        let geometry = Geometry::new(GeoJsonValue::LineString(vec![
            vec![138.5, 35.5],
            vec![138.6, 35.6],
        ]));
        let line = line_from_geometry(&geometry).unwrap();

        assert_eq!(line.paths.len(), 1);
        assert_eq!(line.paths[0].points.len(), 2);
        assert!(!line.has_m());
    }

    #[test]
    fn test_line_from_multilinestring_with_measures() {
        let geometry = Geometry::new(GeoJsonValue::MultiLineString(vec![
            vec![vec![0.0, 0.0, 0.0, 0.0], vec![0.0, 1.0, 0.0, 100.0]],
            vec![vec![0.0, 1.0, 0.0, 100.0], vec![1.0, 1.0, 0.0, 200.0]],
        ]));
        let line = line_from_geometry(&geometry).unwrap();

        assert_eq!(line.paths.len(), 2);
        assert!(line.has_m());
        assert_eq!(line.max_measure(), Some(200.0));
    }

    #[test]
    fn test_line_from_unsupported_geometry() {
        let geometry = Geometry::new(GeoJsonValue::Point(vec![138.5, 35.5]));
        let err = line_from_geometry(&geometry).unwrap_err();
        assert!(err.to_string().contains("Point"));

        let geometry = Geometry::new(GeoJsonValue::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![0.0, 0.0],
        ]]));
        assert!(matches!(
            line_from_geometry(&geometry),
            Err(LinrefError::UnsupportedGeometry { .. })
        ));
    }

    #[test]
    fn test_line_from_invalid_position() {
        let geometry = Geometry::new(GeoJsonValue::LineString(vec![vec![138.5, 35.5], vec![1.0]]));
        assert!(matches!(
            line_from_geometry(&geometry),
            Err(LinrefError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_locate_and_convert_back() {
        let geometry = Geometry::new(GeoJsonValue::LineString(vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
        ]));
        let line = line_from_geometry(&geometry).unwrap();
        let point = locate_point_along_route(&line, 0.0).unwrap();

        let result = point_to_geometry(&point);
        if let GeoJsonValue::Point(coord) = result.value {
            assert_eq!(coord.len(), 2);
            assert!(coord[0].abs() < 1e-9);
            assert!(coord[1].abs() < 1e-9);
        } else {
            panic!("Expected Point geometry");
        }
    }
}
