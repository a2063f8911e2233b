//! # tour-heuristics
//!
//! Heuristic and local-search algorithms for the Euclidean traveling
//! salesman problem, with a small harness for timing and comparing them.
//!
//! ## Modules
//!
//! - [`models`] — Geometric and tour types (Point, Circle, Tour, Bounds)
//! - [`distance`] — Distance matrix over a point set
//! - [`algorithm`] — The strategy trait shared by heuristics and optimizers
//! - [`constructive`] — Construction heuristics (Nearest Neighbor, Radius, Greatest Angle, Random)
//! - [`local_search`] — Tour improvement (2-opt)
//! - [`registry`] — Name-to-strategy lookup
//! - [`evaluation`] — Timed runs and repeated trials
//! - [`config`] — Algorithm configuration
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tour_heuristics::config::AlgorithmConfig;
//! use tour_heuristics::evaluation::perform_test;
//! use tour_heuristics::models::random_points;
//! use tour_heuristics::registry::Registry;
//!
//! let config = AlgorithmConfig::default();
//! let heuristics = Registry::heuristics(&config)?;
//! let optimizers = Registry::optimizers()?;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let points = random_points(50, &config.bounds, &mut rng);
//!
//! let initial = perform_test(heuristics.lookup("nearest_neighbor")?, &points, &mut rng);
//! let improved = perform_test(optimizers.lookup("two_opt")?, initial.tour.vertices(), &mut rng);
//! assert!(improved.tour.length() <= initial.tour.length() + 1e-9);
//! # Ok::<(), tour_heuristics::Error>(())
//! ```

pub mod algorithm;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod registry;

pub use error::{Error, Result};
