//! # linref - Linear Referencing Library
//!
//! Locate geographic points along polyline routes by a scalar measure
//! (distance along the route), using great-circle math on a spherical Earth.
//!
//! ## Features
//!
//! - **Measured or unmeasured routes**: uses per-vertex `m` values when every
//!   vertex carries one, otherwise accumulates haversine segment lengths
//! - **Cancellable**: traversal polls a [`CancellationToken`] between segments
//! - **GeoJSON**: convert `LineString`/`MultiLineString` geometries into routes
//!   (enable the `geojson` feature)
//!
//! ## Quick Start
//!
//! ```
//! use linref::{locate_point_along_route, Line, Path, Point};
//!
//! let route = Line::new(vec![Path::new(vec![
//!     Point::with_m(0.0, 0.0, 0.0),
//!     Point::with_m(0.0, 1.0, 111_320.0),
//! ])]);
//!
//! let halfway = locate_point_along_route(&route, 55_660.0).unwrap();
//! assert!((halfway.y - 0.5).abs() < 0.01);
//!
//! // Past the last measure there is nothing to find
//! assert!(locate_point_along_route(&route, 200_000.0).is_none());
//! ```
//!
//! ## Coordinate Order
//!
//! Points follow the GIS convention: `x` is longitude and `y` is latitude, both
//! in decimal degrees. The math helpers in [`geo_math`] take `(lat, lon)`.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

pub mod error;
pub mod geo_math;
pub mod geometry;
pub mod locator;
pub mod walker;

#[cfg(feature = "geojson")]
pub mod geojson;

// Re-export main types at crate root for convenience
pub use error::{LinrefError, Result};
pub use geo_math::DistanceUnit;
pub use geometry::{Line, Path, Point};
pub use locator::{locate_point_along_route, locate_point_along_route_cancellable};
pub use walker::Walker;
