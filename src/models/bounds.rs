//! Coordinate bounds and random point generation.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::Point;

/// The rectangle `[0, width) × [0, height)` random points are drawn from.
///
/// # Examples
///
/// ```
/// use tour_heuristics::models::Bounds;
///
/// let b = Bounds::default();
/// assert_eq!((b.width, b.height), (1000.0, 1000.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    /// Extent along the x-axis.
    pub width: f64,
    /// Extent along the y-axis.
    pub height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
        }
    }
}

impl Bounds {
    /// Creates new bounds.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The bounding box of a point set, anchored at its minimum corner.
    ///
    /// Returns zero bounds for an empty set.
    pub fn enclosing(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self::new(0.0, 0.0);
        };
        let (mut min_x, mut max_x) = (first.x(), first.x());
        let (mut min_y, mut max_y) = (first.y(), first.y());
        for p in &points[1..] {
            min_x = min_x.min(p.x());
            max_x = max_x.max(p.x());
            min_y = min_y.min(p.y());
            max_y = max_y.max(p.y());
        }
        Self::new(max_x - min_x, max_y - min_y)
    }

    /// The larger of width and height.
    pub fn span(&self) -> f64 {
        self.width.max(self.height)
    }
}

/// Draws `count` points uniformly from `bounds`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tour_heuristics::models::{random_points, Bounds};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let points = random_points(25, &Bounds::new(100.0, 50.0), &mut rng);
/// assert_eq!(points.len(), 25);
/// assert!(points.iter().all(|p| p.x() < 100.0 && p.y() < 50.0));
/// ```
pub fn random_points(count: usize, bounds: &Bounds, rng: &mut dyn RngCore) -> Vec<Point> {
    (0..count)
        .map(|_| {
            let x = rng.random::<f64>() * bounds.width;
            let y = rng.random::<f64>() * bounds.height;
            Point::new(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_enclosing() {
        let pts = vec![
            Point::new(-5.0, 2.0),
            Point::new(15.0, 4.0),
            Point::new(3.0, -1.0),
        ];
        let b = Bounds::enclosing(&pts);
        assert_eq!(b.width, 20.0);
        assert_eq!(b.height, 5.0);
        assert_eq!(b.span(), 20.0);
    }

    #[test]
    fn test_enclosing_empty_and_single() {
        assert_eq!(Bounds::enclosing(&[]).span(), 0.0);
        assert_eq!(Bounds::enclosing(&[Point::new(4.0, 4.0)]).span(), 0.0);
    }

    #[test]
    fn test_random_points_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = Bounds::new(10.0, 20.0);
        let pts = random_points(200, &bounds, &mut rng);
        assert_eq!(pts.len(), 200);
        for p in &pts {
            assert!((0.0..10.0).contains(&p.x()));
            assert!((0.0..20.0).contains(&p.y()));
        }
    }

    #[test]
    fn test_random_points_reproducible() {
        let a = random_points(10, &Bounds::default(), &mut StdRng::seed_from_u64(1));
        let b = random_points(10, &Bounds::default(), &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_bounds_deserialize_defaults() {
        let b: Bounds = serde_json::from_str(r#"{"width": 500.0}"#).expect("valid json");
        assert_eq!(b, Bounds::new(500.0, 1000.0));
    }
}
