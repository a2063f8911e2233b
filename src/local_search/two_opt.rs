//! 2-opt local search over a closed tour.
//!
//! # Algorithm
//!
//! For each pair of positions `i < j`, reversing the segment `[i..=j]`
//! replaces the edges entering `r[i]` and leaving `r[j]`:
//!
//! ```text
//! delta = d(r[i-1], r[j]) + d(r[i], r[j+1]) - d(r[i-1], r[i]) - d(r[j], r[j+1])
//! ```
//!
//! with indices wrapping around the tour. The first pair with `delta < 0`
//! is applied and the scan restarts from `i = 0` (first improvement with
//! restart). The search stops after a full pass without an improving move.
//!
//! # Complexity
//!
//! O(n²) per pass. The number of passes is not bounded in advance.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use rand::RngCore;

use crate::algorithm::{gather, TourAlgorithm};
use crate::distance::DistanceMatrix;
use crate::models::Point;

/// Moves must shorten the tour by more than this to be accepted.
const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// 2-opt optimizer.
///
/// Never returns a tour longer than its input.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tour_heuristics::algorithm::TourAlgorithm;
/// use tour_heuristics::local_search::TwoOpt;
/// use tour_heuristics::models::{Point, Tour};
///
/// // Self-intersecting order around a square
/// let crossed = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
///     Point::new(0.0, 10.0),
/// ];
/// let improved = TwoOpt.solve(&crossed, &mut StdRng::seed_from_u64(0));
/// assert!((Tour::new(improved).length() - 40.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoOpt;

impl TwoOpt {
    pub const NAME: &'static str = "two_opt";
}

impl TourAlgorithm for TwoOpt {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn solve(&self, points: &[Point], _rng: &mut dyn RngCore) -> Vec<Point> {
        // Every order of three or fewer points has the same closed length.
        if points.len() < 4 {
            return points.to_vec();
        }
        let distances = DistanceMatrix::from_points(points);
        let initial: Vec<usize> = (0..points.len()).collect();
        let (route, _) = two_opt_improve(&initial, &distances);
        gather(points, &route)
    }
}

/// Applies 2-opt to a closed tour given as positions into `distances`.
///
/// Returns the improved order and its closed length.
///
/// # Examples
///
/// ```
/// use tour_heuristics::distance::DistanceMatrix;
/// use tour_heuristics::local_search::two_opt_improve;
/// use tour_heuristics::models::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let initial = [0, 4, 2, 3, 1, 5];
/// let (improved, dist) = two_opt_improve(&initial, &dm);
/// assert_eq!(improved.len(), 6);
/// assert!(dist <= dm.tour_length(&initial));
/// ```
pub fn two_opt_improve(route: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();
    let n = current.len();
    if n < 4 {
        let dist = distances.tour_length(&current);
        return (current, dist);
    }

    let mut scans = 0usize;
    let mut moves = 0usize;

    'scan: loop {
        scans += 1;
        for i in 0..n - 1 {
            for j in i + 1..n {
                let delta = two_opt_delta(&current, distances, i, j);
                if delta < -IMPROVEMENT_EPSILON {
                    current[i..=j].reverse();
                    moves += 1;
                    continue 'scan;
                }
            }
        }
        break;
    }

    let dist = distances.tour_length(&current);
    log::debug!("2-opt: {moves} improving moves over {scans} scans, length {dist:.3}");
    (current, dist)
}

/// Change in closed-tour length from reversing `route[i..=j]`.
///
/// Reversing the whole tour (or everything but one point) only changes
/// direction, so those moves report zero.
fn two_opt_delta(route: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = route.len();
    if j - i + 1 >= n - 1 {
        return 0.0;
    }
    let prev_i = route[(i + n - 1) % n];
    let next_j = route[(j + 1) % n];

    let old_cost = distances.get(prev_i, route[i]) + distances.get(route[j], next_j);
    let new_cost = distances.get(prev_i, route[j]) + distances.get(route[i], next_j);

    new_cost - old_cost
}
