//! Convex hull + greatest-angle insertion heuristic.
//!
//! # Algorithm
//!
//! 1. Wrap the convex hull (Jarvis march): start at the leftmost point and
//!    repeatedly step to the candidate that lies furthest counter-clockwise
//!    as seen from the current hull vertex, until the walk returns to the
//!    start. Candidates are compared by signed angle against a running
//!    choice seeded with a random candidate; the winner does not depend on
//!    the seed.
//! 2. While points remain off the tour, consider every tour edge `(v, w)`
//!    (including the closing edge) and every remaining point `c`, and insert
//!    the point subtending the largest angle `∠vcw` right after `v`.
//!
//! A wide angle at `c` means the detour `v → c → w` is nearly straight, so
//! the insertion rule approximates cheapest insertion without measuring
//! lengths.
//!
//! # Degenerate input
//!
//! Hull vertices are strict corners: among collinear candidates the farther
//! one wins, so an all-collinear input wraps to its two extreme points.
//! Points coincident with the current hull vertex are skipped while
//! wrapping, and an all-coincident input wraps to a single point.
//!
//! # Complexity
//!
//! O(nh) for the hull (h = hull size), O(n³) for the insertion phase.

use rand::{Rng, RngCore};

use crate::algorithm::{gather, TourAlgorithm};
use crate::models::Point;

use super::MIN_POINTS;

/// Convex hull seed tour grown by greatest-angle insertion.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tour_heuristics::algorithm::TourAlgorithm;
/// use tour_heuristics::constructive::GreatestAngle;
/// use tour_heuristics::models::{Point, Tour};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(5.0, 1.0),
///     Point::new(10.0, 0.0),
///     Point::new(0.0, 10.0),
/// ];
/// let tour = GreatestAngle.solve(&points, &mut StdRng::seed_from_u64(1));
/// assert_eq!(tour.len(), 5);
/// assert!(Tour::new(tour).length() < 42.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreatestAngle;

impl GreatestAngle {
    pub const NAME: &'static str = "greatest_angle";
}

impl TourAlgorithm for GreatestAngle {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn solve(&self, points: &[Point], rng: &mut dyn RngCore) -> Vec<Point> {
        if points.len() < MIN_POINTS {
            return points.to_vec();
        }

        let mut route = hull_order(points, rng);
        log::debug!("convex hull has {} of {} points", route.len(), points.len());

        let mut on_route = vec![false; points.len()];
        for &i in &route {
            on_route[i] = true;
        }
        let mut remaining: Vec<usize> = (0..points.len()).filter(|&i| !on_route[i]).collect();

        while !remaining.is_empty() {
            let (edge, slot) = greatest_angle_insertion(points, &route, &remaining);
            let item = remaining.remove(slot);
            route.insert(edge + 1, item);
        }

        gather(points, &route)
    }
}

/// Computes the convex hull by gift wrapping.
///
/// The hull starts at the leftmost point (lowest on ties) and runs
/// clockwise in a y-up frame. Collinear boundary points are not included.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tour_heuristics::constructive::convex_hull;
/// use tour_heuristics::models::Point;
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(10.0, 0.0)];
/// let hull = convex_hull(&points, &mut StdRng::seed_from_u64(0));
/// assert_eq!(hull, vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
/// ```
pub fn convex_hull(points: &[Point], rng: &mut dyn RngCore) -> Vec<Point> {
    gather(points, &hull_order(points, rng))
}

/// Hull vertices as positions into `points`.
fn hull_order(points: &[Point], rng: &mut dyn RngCore) -> Vec<usize> {
    let Some(start) = leftmost(points) else {
        return Vec::new();
    };
    let mut hull = vec![start];

    // A hull has at most n vertices; the bound also guards against
    // floating-point cycles.
    for _ in 0..points.len() {
        let cursor = hull[hull.len() - 1];
        let candidates: Vec<usize> = (0..points.len())
            .filter(|&i| points[i] != points[cursor])
            .collect();
        if candidates.is_empty() {
            break;
        }

        let next = furthest_counter_clockwise(points, cursor, &candidates, rng);
        if points[next] == points[start] || hull.contains(&next) {
            break;
        }
        hull.push(next);
    }
    hull
}

/// Position of the minimum-x point, minimum y on ties.
fn leftmost(points: &[Point]) -> Option<usize> {
    (0..points.len()).reduce(|best, i| {
        let (p, b) = (points[i], points[best]);
        if p.x() < b.x() || (p.x() == b.x() && p.y() < b.y()) {
            i
        } else {
            best
        }
    })
}

/// The candidate no other candidate lies counter-clockwise of, seen from
/// `points[cursor]`.
fn furthest_counter_clockwise(
    points: &[Point],
    cursor: usize,
    candidates: &[usize],
    rng: &mut dyn RngCore,
) -> usize {
    let origin = points[cursor];
    let mut chosen = candidates[rng.random_range(0..candidates.len() as u64) as usize];

    for &candidate in candidates {
        let chosen_edge = origin.to(points[chosen]);
        let candidate_edge = origin.to(points[candidate]);
        // Coincident candidates resolve to the lowest position.
        let same_spot = points[candidate] == points[chosen] && candidate < chosen;
        if same_spot || turns_further(chosen_edge, candidate_edge) {
            chosen = candidate;
        }
    }
    chosen
}

/// Whether `candidate` should replace `chosen` while wrapping.
fn turns_further(chosen: Point, candidate: Point) -> bool {
    if chosen.cross(candidate) == 0.0 {
        // Collinear: keep the farther point in the same direction.
        return chosen.dot(candidate) > 0.0 && candidate.length_squared() > chosen.length_squared();
    }
    chosen.signed_angle_with(candidate) > 0.0
}

/// Returns `(edge, slot)`: the route position after which to insert, and
/// the slot in `remaining` of the point to insert.
///
/// Ties keep the first pair found. NaN angles from coincident points never
/// win; if every angle is NaN the first remaining point goes after the
/// first route vertex.
fn greatest_angle_insertion(points: &[Point], route: &[usize], remaining: &[usize]) -> (usize, usize) {
    let mut chosen = (0, 0);
    let mut greatest = 0.0;

    for edge in 0..route.len() {
        let v = points[route[edge]];
        let w = points[route[(edge + 1) % route.len()]];
        for (slot, &c) in remaining.iter().enumerate() {
            let candidate = points[c];
            let angle = candidate.to(v).angle_with(candidate.to(w));
            if angle > greatest {
                greatest = angle;
                chosen = (edge, slot);
            }
        }
    }
    chosen
}
