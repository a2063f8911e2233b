//! Property-based tests across all strategies.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tour_heuristics::algorithm::{Identity, TourAlgorithm};
use tour_heuristics::config::{AlgorithmConfig, RadiusConfig};
use tour_heuristics::constructive::{GreatestAngle, NearestNeighbor, RadiusNearestNeighbor, RandomOrder};
use tour_heuristics::local_search::TwoOpt;
use tour_heuristics::models::{Point, Tour};
use tour_heuristics::registry::Registry;

fn points_strategy(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    // Small integer grid so duplicates and collinear runs show up.
    prop::collection::vec((0i32..40, 0i32..40), 0..max_len)
        .prop_map(|coords| coords.into_iter().map(|(x, y)| Point::new(x as f64, y as f64)).collect())
}

fn sorted(points: &[Point]) -> Vec<(f64, f64)> {
    let mut v: Vec<(f64, f64)> = points.iter().map(|p| (p.x(), p.y())).collect();
    v.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    v
}

/// Whether every point of `sub` can be matched to a distinct point of `all`.
fn is_sub_multiset(sub: &[Point], all: &[Point]) -> bool {
    let mut pool = sorted(all);
    for p in sorted(sub) {
        match pool.iter().position(|q| *q == p) {
            Some(i) => {
                pool.remove(i);
            }
            None => return false,
        }
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every full-tour heuristic returns a permutation of its input.
    #[test]
    fn prop_heuristics_are_permutations(points in points_strategy(25), seed in 0u64..1000) {
        let heuristics = Registry::heuristics(&AlgorithmConfig::default()).expect("valid config");
        for heuristic in heuristics.iter() {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = heuristic.solve(&points, &mut rng);
            prop_assert_eq!(sorted(&out), sorted(&points), "{} lost or duplicated points", heuristic.name());
        }
    }

    /// Property: with a tight search bound, radius output is a duplicate-free
    /// subset starting at the first point.
    #[test]
    fn prop_radius_truncation_never_adds_points(points in points_strategy(25), max_radius in 2.0f64..30.0) {
        let config = RadiusConfig::default().with_max_radius(max_radius);
        let heuristic = RadiusNearestNeighbor::new(config).expect("valid config");
        let out = heuristic.solve(&points, &mut StdRng::seed_from_u64(0));
        prop_assert!(out.len() <= points.len());
        prop_assert!(is_sub_multiset(&out, &points));
        if points.len() >= 3 {
            prop_assert_eq!(out[0], points[0]);
        }
    }

    /// Property: identity returns its exact input.
    #[test]
    fn prop_identity_is_exact(points in points_strategy(20)) {
        let out = Identity.solve(&points, &mut StdRng::seed_from_u64(0));
        prop_assert_eq!(out, points);
    }

    /// Property: 2-opt never lengthens a tour and keeps every point.
    #[test]
    fn prop_two_opt_not_longer(points in points_strategy(30), seed in 0u64..1000) {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = RandomOrder.solve(&points, &mut rng);
        let improved = TwoOpt.solve(&start, &mut rng);
        prop_assert_eq!(sorted(&improved), sorted(&points));
        prop_assert!(Tour::new(improved).length() <= Tour::new(start).length() + 1e-9);
    }

    /// Property: 2-opt output is a fixed point.
    #[test]
    fn prop_two_opt_idempotent(points in points_strategy(25)) {
        let mut rng = StdRng::seed_from_u64(0);
        let once = TwoOpt.solve(&points, &mut rng);
        let twice = TwoOpt.solve(&once, &mut rng);
        prop_assert_eq!(twice, once);
    }

    /// Property: closed length = open length + closing edge.
    #[test]
    fn prop_closed_length_adds_closing_edge(points in points_strategy(20)) {
        let closed = Tour::new(points.clone()).length();
        let open = Tour::open(points.clone()).length();
        let closing = match (points.first(), points.last()) {
            (Some(&first), Some(&last)) if points.len() > 1 => last.distance_to(first),
            _ => 0.0,
        };
        prop_assert!((closed - (open + closing)).abs() < 1e-9);
    }

    /// Property: nearest-neighbor then 2-opt is never longer than nearest-neighbor.
    #[test]
    fn prop_pipeline_improves(points in points_strategy(30)) {
        let mut rng = StdRng::seed_from_u64(1);
        let constructed = NearestNeighbor.solve(&points, &mut rng);
        let optimized = TwoOpt.solve(&constructed, &mut rng);
        prop_assert!(Tour::new(optimized).length() <= Tour::new(constructed).length() + 1e-9);
    }

    /// Property: the greatest-angle tour does not depend on the hull seed.
    #[test]
    fn prop_greatest_angle_deterministic(points in points_strategy(20), a in 0u64..1000, b in 0u64..1000) {
        let first = GreatestAngle.solve(&points, &mut StdRng::seed_from_u64(a));
        let second = GreatestAngle.solve(&points, &mut StdRng::seed_from_u64(b));
        prop_assert_eq!(first, second);
    }
}

#[test]
fn scenario_square_nearest_neighbor_then_two_opt() {
    let square = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let heuristics = Registry::heuristics(&AlgorithmConfig::default()).expect("valid config");
    let optimizers = Registry::optimizers().expect("unique names");
    let mut rng = StdRng::seed_from_u64(42);

    let nn = heuristics.lookup("nearest_neighbor").expect("registered");
    let tour = nn.solve(&square, &mut rng);
    assert_eq!(tour, square);
    assert!((Tour::new(tour).length() - 40.0).abs() < 1e-10);

    let crossed = vec![square[0], square[2], square[1], square[3]];
    let two_opt = optimizers.lookup("two_opt").expect("registered");
    let fixed = two_opt.solve(&crossed, &mut rng);
    assert!((Tour::new(fixed).length() - 40.0).abs() < 1e-10);
}
