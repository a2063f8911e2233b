//! Circle type used by the radius-expansion search.

use super::Point;

/// A circle with a center and a non-negative radius.
///
/// # Examples
///
/// ```
/// use tour_heuristics::models::{Circle, Point};
///
/// let circle = Circle::new(Point::ORIGIN, 5.0);
/// assert!(circle.contains(Point::new(3.0, 3.0)));
/// assert!(!circle.contains(Point::new(3.0, 4.0))); // on the boundary
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Center point.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns `true` if `point` lies strictly inside the circle.
    ///
    /// Points on the boundary are excluded.
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance_squared_to(point) < self.radius * self.radius
    }
}
