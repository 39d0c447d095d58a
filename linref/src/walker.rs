//! Progress state for a single route traversal.

/// Cumulative progress along a route.
///
/// A `Walker` is a plain value: each call to [`Walker::step`] consumes the
/// previous state and returns the state after one more segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Walker {
    /// Cumulative measure (or length) at the end of the current segment.
    pub distance: f64,
    /// Cumulative measure (or length) at the start of the current segment.
    pub pre_distance: f64,
}

impl Walker {
    /// Advance over one segment.
    ///
    /// For measured routes `end_measure` is the measure of the segment's end
    /// vertex and becomes the new distance. Otherwise the segment `length` is
    /// added to the running total.
    pub fn step(self, end_measure: Option<f64>, length: f64) -> Self {
        Self {
            pre_distance: self.distance,
            distance: end_measure.unwrap_or(self.distance + length),
        }
    }

    /// Whether `measure` falls at or before the end of the current segment.
    pub fn reaches(&self, measure: f64) -> bool {
        measure <= self.distance
    }

    /// Distance to walk from the start of the current segment to reach
    /// `measure`.
    ///
    /// While the cumulative distance before the segment is exactly zero the
    /// raw measure is used. Since traversal starts at zero rather than at the
    /// first vertex's measure, a measured route whose first vertex is not at
    /// zero walks its first segment by the full measure.
    pub fn offset_into_segment(&self, measure: f64) -> f64 {
        if self.pre_distance == 0.0 {
            measure
        } else {
            measure - self.pre_distance
        }
    }
}
