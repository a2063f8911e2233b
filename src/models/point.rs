//! Two-dimensional point / vector type.

use serde::{Deserialize, Serialize};

/// A point in the plane, also used as a displacement vector.
///
/// Points are immutable values: every operation returns a new value.
/// Equality is by coordinates, so two distinct input entries at the same
/// location compare equal. Algorithms that must tell such entries apart work
/// on indices into the input slice instead.
///
/// # Sign convention
///
/// [`Point::cross`] is the determinant `self.x * other.y - self.y * other.x`.
/// It is positive when `other` lies counter-clockwise of `self` (in a
/// y-up frame), and [`Point::signed_angle_with`] takes its sign from it.
///
/// # Examples
///
/// ```
/// use tour_heuristics::models::Point;
///
/// let a = Point::new(1.0, 1.0);
/// let b = Point::new(4.0, 5.0);
/// assert_eq!(a.to(b), Point::new(3.0, 4.0));
/// assert!((a.distance_to(b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The vector from `self` to `target`, i.e. `target - self`.
    pub fn to(self, target: Point) -> Point {
        Point::new(target.x - self.x, target.y - self.y)
    }

    /// Squared Euclidean length of this vector.
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length of this vector.
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Dot product.
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (determinant). Positive when `other` turns
    /// counter-clockwise from `self`.
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Squared distance between two points.
    pub fn distance_squared_to(self, other: Point) -> f64 {
        self.to(other).length_squared()
    }

    /// Euclidean distance between two points.
    pub fn distance_to(self, other: Point) -> f64 {
        self.to(other).length()
    }

    /// Unsigned angle between two vectors, in `[0, π]`.
    ///
    /// NaN when either vector has zero length.
    pub fn angle_with(self, other: Point) -> f64 {
        let cosine = self.dot(other) / (self.length() * other.length());
        // Rounding can push the ratio just outside [-1, 1]; NaN stays NaN.
        cosine.clamp(-1.0, 1.0).acos()
    }

    /// Signed angle from `self` to `other`, in `(-π, π]`.
    ///
    /// Positive when `other` is counter-clockwise of `self` (positive
    /// [`cross`](Point::cross)), negative when clockwise. Collinear vectors
    /// yield `0` or `π`. NaN when either vector has zero length.
    ///
    /// ```
    /// use tour_heuristics::models::Point;
    ///
    /// let east = Point::new(1.0, 0.0);
    /// let north = Point::new(0.0, 1.0);
    /// assert!(east.signed_angle_with(north) > 0.0);
    /// assert!(north.signed_angle_with(east) < 0.0);
    /// ```
    pub fn signed_angle_with(self, other: Point) -> f64 {
        let angle = self.angle_with(other);
        if self.cross(other) < 0.0 {
            -angle
        } else {
            angle
        }
    }
}

/// ```
/// use tour_heuristics::models::Point;
///
/// let p: Point = (2.5, -1.0).into();
/// assert_eq!(p, Point::new(2.5, -1.0));
/// ```
impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
