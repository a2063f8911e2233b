//! Tour type: an ordered walk through a set of points.

use super::Point;

/// An ordered, immutable sequence of points.
///
/// A closed tour returns from the last point to the first; an open tour
/// stops at the last point. [`Tour::new`] builds a closed tour.
///
/// # Examples
///
/// ```
/// use tour_heuristics::models::{Point, Tour};
///
/// let square = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// assert!((Tour::new(square.clone()).length() - 40.0).abs() < 1e-10);
/// assert!((Tour::open(square).length() - 30.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    vertices: Vec<Point>,
    closed: bool,
}

impl Tour {
    /// Creates a closed tour.
    pub fn new(vertices: Vec<Point>) -> Self {
        Self {
            vertices,
            closed: true,
        }
    }

    /// Creates an open tour (no edge from the last point back to the first).
    pub fn open(vertices: Vec<Point>) -> Self {
        Self {
            vertices,
            closed: false,
        }
    }

    /// The points in visiting order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Consumes the tour and returns its points.
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Whether the tour wraps from the last point back to the first.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the tour has no points.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Total length, recomputed on every call.
    pub fn length(&self) -> f64 {
        total_length(&self.vertices, self.closed)
    }
}

/// Sum of consecutive edge lengths, plus the closing edge when `closed`.
///
/// Zero for fewer than two points.
pub fn total_length(vertices: &[Point], closed: bool) -> f64 {
    let open: f64 = vertices.windows(2).map(|w| w[0].distance_to(w[1])).sum();
    match (closed, vertices.first(), vertices.last()) {
        (true, Some(&first), Some(&last)) if vertices.len() > 1 => open + last.distance_to(first),
        _ => open,
    }
}
