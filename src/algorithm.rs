//! The strategy interface shared by heuristics and optimizers.

use rand::RngCore;

use crate::models::Point;

/// Name of the no-op strategy in both the heuristic and optimizer registries.
pub const IDENTITY_NAME: &str = "none";

/// A named strategy mapping a point sequence to a reordering of it.
///
/// Construction heuristics build a tour from raw points; optimizers improve
/// an existing tour's order. Both share this shape so the harness can run
/// either. The output is read as an open walk; the closing edge belongs to
/// [`Tour`](crate::models::Tour).
///
/// Implementations must not add or duplicate points. Randomized strategies
/// draw from the supplied `rng`; deterministic ones ignore it.
///
/// # Examples
///
/// ```
/// use rand::RngCore;
/// use tour_heuristics::algorithm::TourAlgorithm;
/// use tour_heuristics::models::Point;
///
/// struct Reverse;
///
/// impl TourAlgorithm for Reverse {
///     fn name(&self) -> &str { "reverse" }
///     fn solve(&self, points: &[Point], _rng: &mut dyn RngCore) -> Vec<Point> {
///         points.iter().rev().copied().collect()
///     }
/// }
/// ```
pub trait TourAlgorithm: Send + Sync {
    /// Unique name within a registry.
    fn name(&self) -> &str;

    /// Returns the points in visiting order.
    fn solve(&self, points: &[Point], rng: &mut dyn RngCore) -> Vec<Point>;
}

impl std::fmt::Debug for dyn TourAlgorithm + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TourAlgorithm({:?})", self.name())
    }
}

/// Returns its input unchanged. The "no transformation" baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl TourAlgorithm for Identity {
    fn name(&self) -> &str {
        IDENTITY_NAME
    }

    fn solve(&self, points: &[Point], _rng: &mut dyn RngCore) -> Vec<Point> {
        points.to_vec()
    }
}

/// Maps positions back to the points they index.
pub(crate) fn gather(points: &[Point], order: &[usize]) -> Vec<Point> {
    order.iter().map(|&i| points[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_identity_returns_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let pts = vec![Point::new(3.0, 1.0), Point::new(0.0, 0.0), Point::new(2.0, 2.0)];
        assert_eq!(Identity.solve(&pts, &mut rng), pts);
    }

    #[test]
    fn test_identity_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(Identity.solve(&[], &mut rng).is_empty());
        let one = [Point::new(1.0, 1.0)];
        assert_eq!(Identity.solve(&one, &mut rng), one.to_vec());
    }

    #[test]
    fn test_identity_name() {
        assert_eq!(Identity.name(), IDENTITY_NAME);
    }

    #[test]
    fn test_gather() {
        let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        assert_eq!(gather(&pts, &[2, 0, 1]), vec![pts[2], pts[0], pts[1]]);
    }
}
