//! Timing harness for heuristics and optimizers.

use std::time::{Duration, Instant};

use rand::RngCore;

use crate::algorithm::TourAlgorithm;
use crate::models::{Point, Tour};

/// The outcome of one timed strategy invocation.
#[derive(Debug, Clone)]
pub struct TestResult<'a> {
    /// The strategy that ran.
    pub algorithm: &'a dyn TourAlgorithm,
    /// Closed tour built from the strategy's output.
    pub tour: Tour,
    /// Wall-clock time spent inside `solve`.
    pub elapsed: Duration,
}

impl TestResult<'_> {
    /// Elapsed time in milliseconds.
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Runs `algorithm` on `points` once and times it.
///
/// Panics raised by the strategy propagate to the caller.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tour_heuristics::constructive::NearestNeighbor;
/// use tour_heuristics::evaluation::perform_test;
/// use tour_heuristics::models::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let result = perform_test(&NearestNeighbor, &points, &mut StdRng::seed_from_u64(0));
/// assert_eq!(result.algorithm.name(), "nearest_neighbor");
/// assert!((result.tour.length() - 40.0).abs() < 1e-10);
/// ```
pub fn perform_test<'a>(
    algorithm: &'a dyn TourAlgorithm,
    points: &[Point],
    rng: &mut dyn RngCore,
) -> TestResult<'a> {
    let before = Instant::now();
    let solved = algorithm.solve(points, rng);
    let elapsed = before.elapsed();

    log::trace!(
        "{} on {} points took {:?}",
        algorithm.name(),
        points.len(),
        elapsed
    );

    TestResult {
        algorithm,
        tour: Tour::new(solved),
        elapsed,
    }
}

/// One heuristic run followed by one optimizer run on its output.
#[derive(Debug, Clone)]
pub struct Trial<'a> {
    pub constructed: TestResult<'a>,
    pub optimized: TestResult<'a>,
}

impl Trial<'_> {
    /// Relative length saved by the optimizer: `1 - optimized / constructed`.
    ///
    /// Zero when the constructed tour has no length.
    pub fn gain(&self) -> f64 {
        let constructed = self.constructed.tour.length();
        if constructed == 0.0 {
            return 0.0;
        }
        1.0 - self.optimized.tour.length() / constructed
    }
}

/// Results of repeated heuristic + optimizer runs on one point set.
#[derive(Debug, Clone)]
pub struct TrialSummary<'a> {
    pub trials: Vec<Trial<'a>>,
}

impl TrialSummary<'_> {
    /// The first trial, whose tours a caller would display.
    pub fn representative(&self) -> Option<&Trial<'_>> {
        self.trials.first()
    }

    /// Heuristic timings in run order.
    pub fn construction_times(&self) -> Vec<Duration> {
        self.trials.iter().map(|t| t.constructed.elapsed).collect()
    }

    /// Optimizer timings in run order.
    pub fn optimization_times(&self) -> Vec<Duration> {
        self.trials.iter().map(|t| t.optimized.elapsed).collect()
    }
}

/// Runs `heuristic` then `optimizer` on `points`, `count` times in sequence.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tour_heuristics::constructive::RandomOrder;
/// use tour_heuristics::evaluation::run_trials;
/// use tour_heuristics::local_search::TwoOpt;
/// use tour_heuristics::models::{random_points, Bounds};
///
/// let mut rng = StdRng::seed_from_u64(11);
/// let points = random_points(30, &Bounds::default(), &mut rng);
/// let summary = run_trials(&RandomOrder, &TwoOpt, &points, 3, &mut rng);
/// assert_eq!(summary.trials.len(), 3);
/// assert!(summary.trials.iter().all(|t| t.gain() >= 0.0));
/// ```
pub fn run_trials<'a>(
    heuristic: &'a dyn TourAlgorithm,
    optimizer: &'a dyn TourAlgorithm,
    points: &[Point],
    count: usize,
    rng: &mut dyn RngCore,
) -> TrialSummary<'a> {
    let trials: Vec<Trial<'a>> = (0..count)
        .map(|_| {
            let constructed = perform_test(heuristic, points, rng);
            let optimized = perform_test(optimizer, constructed.tour.vertices(), rng);
            Trial {
                constructed,
                optimized,
            }
        })
        .collect();

    if let Some(first) = trials.first() {
        log::info!(
            "{} + {} on {} points: length {:.1} -> {:.1} ({:.1}% gain) over {} trials",
            heuristic.name(),
            optimizer.name(),
            points.len(),
            first.constructed.tour.length(),
            first.optimized.tour.length(),
            first.gain() * 100.0,
            trials.len()
        );
    }

    TrialSummary { trials }
}
