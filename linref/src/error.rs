//! Error types for the linref library.

use thiserror::Error;

/// Errors that can occur while locating points or converting geometries.
///
/// A measure that lies beyond the end of a route is not an error: the locator
/// reports it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinrefError {
    /// The traversal observed a cancellation request and stopped early.
    #[error("Operation was cancelled")]
    Cancelled,

    /// A distance unit name could not be recognised.
    #[error("Unknown distance unit: {unit} (expected kilometers or meters)")]
    UnknownUnit { unit: String },

    /// A geometry type that cannot be used as a route.
    #[error("Unsupported geometry type: {kind} (expected LineString or MultiLineString)")]
    UnsupportedGeometry { kind: String },

    /// A coordinate could not be interpreted.
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },
}

/// Result type alias using [`LinrefError`].
pub type Result<T> = std::result::Result<T, LinrefError>;
