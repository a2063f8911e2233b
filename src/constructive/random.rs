//! Random-order baseline heuristic.

use rand::{Rng, RngCore};

use crate::algorithm::TourAlgorithm;
use crate::models::Point;

/// Visits the points in a uniformly random order.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tour_heuristics::algorithm::TourAlgorithm;
/// use tour_heuristics::constructive::RandomOrder;
/// use tour_heuristics::models::Point;
///
/// let points: Vec<Point> = (0..5).map(|i| Point::new(i as f64, 0.0)).collect();
/// let tour = RandomOrder.solve(&points, &mut StdRng::seed_from_u64(3));
/// assert_eq!(tour.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOrder;

impl RandomOrder {
    pub const NAME: &'static str = "random";
}

impl TourAlgorithm for RandomOrder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn solve(&self, points: &[Point], rng: &mut dyn RngCore) -> Vec<Point> {
        let mut shuffled = points.to_vec();
        shuffle(&mut shuffled, rng);
        shuffled
    }
}

/// Fisher-Yates shuffle.
pub(crate) fn shuffle<T>(items: &mut [T], rng: &mut dyn RngCore) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i as u64) as usize;
        items.swap(i, j);
    }
}
