//! Radius-expansion nearest-neighbor heuristic.
//!
//! # Algorithm
//!
//! Like nearest-neighbor, but each step only considers points strictly
//! inside a circle around the current point. The circle starts small and
//! grows by a fixed step each time it is empty. When the radius reaches the
//! configured maximum with the circle still empty, the walk stops and the
//! remaining points are dropped from the tour.
//!
//! The maximum radius is derived from the input's bounding box unless a
//! fixed one is configured, so the search behaves the same at any scale.
//!
//! # Complexity
//!
//! O(n² · rounds) where n = number of points.

use rand::RngCore;

use crate::algorithm::{gather, TourAlgorithm};
use crate::config::RadiusConfig;
use crate::error::Result;
use crate::models::{Circle, Point};

use super::MIN_POINTS;

/// Nearest-neighbor restricted to an expanding search circle.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tour_heuristics::algorithm::TourAlgorithm;
/// use tour_heuristics::config::RadiusConfig;
/// use tour_heuristics::constructive::RadiusNearestNeighbor;
/// use tour_heuristics::models::Point;
///
/// let heuristic = RadiusNearestNeighbor::new(RadiusConfig::default()).unwrap();
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(30.0, 0.0),
///     Point::new(10.0, 0.0),
/// ];
/// let tour = heuristic.solve(&points, &mut StdRng::seed_from_u64(0));
/// assert_eq!(tour, vec![points[0], points[2], points[1]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RadiusNearestNeighbor {
    config: RadiusConfig,
}

impl RadiusNearestNeighbor {
    pub const NAME: &'static str = "radius";

    /// Creates the heuristic, rejecting invalid search parameters.
    pub fn new(config: RadiusConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RadiusConfig {
        &self.config
    }
}

impl TourAlgorithm for RadiusNearestNeighbor {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn solve(&self, points: &[Point], _rng: &mut dyn RngCore) -> Vec<Point> {
        if points.len() < MIN_POINTS {
            return points.to_vec();
        }
        gather(points, &self.order(points))
    }
}

impl RadiusNearestNeighbor {
    /// Visiting order (positions into `points`). May be a truncated prefix.
    fn order(&self, points: &[Point]) -> Vec<usize> {
        let max_radius = self.config.max_radius_for(points);
        let step = self.config.step(points);

        let mut order = vec![0];
        let mut pool: Vec<usize> = (1..points.len()).collect();
        let mut current = 0;

        while !pool.is_empty() {
            match self.find_within(points, current, &pool, max_radius, step) {
                Some(slot) => {
                    current = pool.remove(slot);
                    order.push(current);
                }
                None => {
                    log::warn!(
                        "radius search found nothing within {max_radius} of {}; dropping {} points",
                        points[current],
                        pool.len()
                    );
                    break;
                }
            }
        }
        order
    }

    /// Slot in `pool` of the nearest point inside the smallest non-empty
    /// search circle, or `None` once the radius reaches `max_radius`.
    fn find_within(
        &self,
        points: &[Point],
        from: usize,
        pool: &[usize],
        max_radius: f64,
        step: f64,
    ) -> Option<usize> {
        let center = points[from];
        let mut radius = self.config.start_radius;

        loop {
            let circle = Circle::new(center, radius);
            let nearest = pool
                .iter()
                .enumerate()
                .filter(|&(_, &i)| circle.contains(points[i]))
                .map(|(slot, &i)| (slot, center.distance_squared_to(points[i])))
                .fold(None, |best: Option<(usize, f64)>, (slot, d)| match best {
                    Some((_, best_d)) if d >= best_d => best,
                    _ => Some((slot, d)),
                });
            if let Some((slot, _)) = nearest {
                return Some(slot);
            }

            radius += step;
            if radius >= max_radius {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn solve(heuristic: &RadiusNearestNeighbor, points: &[Point]) -> Vec<Point> {
        heuristic.solve(points, &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_radius_visits_all_with_derived_bound() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let tour = solve(&RadiusNearestNeighbor::default(), &pts);
        assert_eq!(tour, pts);
    }

    #[test]
    fn test_radius_matches_nearest_neighbor_on_spread_input() {
        let pts = vec![
            Point::new(500.0, 500.0),
            Point::new(0.0, 0.0),
            Point::new(990.0, 10.0),
            Point::new(480.0, 530.0),
            Point::new(20.0, 900.0),
        ];
        let tour = solve(&RadiusNearestNeighbor::default(), &pts);
        let nn = gather(&pts, &super::super::nearest_neighbor::nearest_neighbor_order(&pts));
        assert_eq!(tour, nn);
    }

    #[test]
    fn test_radius_truncates_when_out_of_reach() {
        let config = RadiusConfig::default().with_max_radius(50.0).with_rounds(5);
        let heuristic = RadiusNearestNeighbor::new(config).expect("valid config");
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(12.0, 0.0),
            Point::new(500.0, 0.0), // never inside a circle of radius < 50
        ];
        let tour = solve(&heuristic, &pts);
        assert_eq!(tour, vec![pts[0], pts[1], pts[2]]);
    }

    #[test]
    fn test_radius_truncated_tour_is_prefix_without_duplicates() {
        let config = RadiusConfig::default().with_max_radius(30.0);
        let heuristic = RadiusNearestNeighbor::new(config).expect("valid config");
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(200.0, 0.0),
            Point::new(6.0, 8.0),
        ];
        let tour = solve(&heuristic, &pts);
        assert_eq!(tour, vec![pts[0], pts[2], pts[4]]);
    }

    #[test]
    fn test_radius_boundary_point_needs_next_round() {
        // Start radius 1 excludes the point at distance exactly 1; it is found
        // once the circle grows.
        let config = RadiusConfig::default().with_max_radius(100.0);
        let heuristic = RadiusNearestNeighbor::new(config).expect("valid config");
        let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        assert_eq!(solve(&heuristic, &pts), pts);
    }

    #[test]
    fn test_radius_coincident_points() {
        let pts = vec![Point::new(1.0, 1.0); 4];
        let tour = solve(&RadiusNearestNeighbor::default(), &pts);
        assert_eq!(tour.len(), 4);
    }

    #[test]
    fn test_radius_keeps_validated_config() {
        let config = RadiusConfig::default().with_rounds(4).with_max_radius(80.0);
        let heuristic = RadiusNearestNeighbor::new(config).expect("valid config");
        assert_eq!(heuristic.config(), &config);
        assert_eq!(RadiusNearestNeighbor::default().config(), &RadiusConfig::default());
    }

    #[test]
    fn test_radius_rejects_invalid_config() {
        assert!(RadiusNearestNeighbor::new(RadiusConfig::default().with_rounds(0)).is_err());
    }

    #[test]
    fn test_radius_small_inputs_unchanged() {
        let two = vec![Point::new(0.0, 0.0), Point::new(1000.0, 0.0)];
        let config = RadiusConfig::default().with_max_radius(5.0);
        let heuristic = RadiusNearestNeighbor::new(config).expect("valid config");
        assert_eq!(solve(&heuristic, &two), two);
    }
}
