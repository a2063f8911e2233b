//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from the first input point, always move
//! to the nearest point not yet visited.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for TSP. Tours are typically
//! around 25% above optimal, but it provides a fast baseline.

use rand::RngCore;

use crate::algorithm::{gather, TourAlgorithm};
use crate::models::Point;

use super::MIN_POINTS;

/// Greedy nearest-neighbor heuristic.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tour_heuristics::algorithm::TourAlgorithm;
/// use tour_heuristics::constructive::NearestNeighbor;
/// use tour_heuristics::models::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
///     Point::new(0.0, 10.0),
/// ];
/// let mut rng = StdRng::seed_from_u64(0);
/// let tour = NearestNeighbor.solve(&points, &mut rng);
/// assert_eq!(tour[1], Point::new(10.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl NearestNeighbor {
    pub const NAME: &'static str = "nearest_neighbor";
}

impl TourAlgorithm for NearestNeighbor {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn solve(&self, points: &[Point], _rng: &mut dyn RngCore) -> Vec<Point> {
        if points.len() < MIN_POINTS {
            return points.to_vec();
        }
        gather(points, &nearest_neighbor_order(points))
    }
}

/// Visiting order (positions into `points`) produced by nearest-neighbor.
///
/// Ties go to the earliest remaining position.
pub(crate) fn nearest_neighbor_order(points: &[Point]) -> Vec<usize> {
    let mut order = Vec::with_capacity(points.len());
    let mut pool: Vec<usize> = (1..points.len()).collect();
    let mut current = 0;
    order.push(current);

    while let Some(slot) = nearest_in_pool(points, current, &pool) {
        current = pool.remove(slot);
        order.push(current);
    }
    order
}

/// Slot in `pool` of the point closest to `points[from]`, by squared distance.
fn nearest_in_pool(points: &[Point], from: usize, pool: &[usize]) -> Option<usize> {
    let origin = points[from];
    let mut best: Option<(usize, f64)> = None;
    for (slot, &i) in pool.iter().enumerate() {
        let d = origin.distance_squared_to(points[i]);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((slot, d)),
        }
    }
    best.map(|(slot, _)| slot)
}
