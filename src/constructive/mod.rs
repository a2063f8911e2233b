//! Constructive heuristics for building an initial tour.
//!
//! - [`RandomOrder`] — Uniform random permutation (Fisher-Yates), O(n)
//! - [`NearestNeighbor`] — Greedy nearest-neighbor walk, O(n²)
//! - [`RadiusNearestNeighbor`] — Nearest-neighbor within an expanding search circle, O(n² · rounds)
//! - [`GreatestAngle`] — Convex hull seed + greatest-angle insertion, O(n³)
//!
//! Inputs with fewer than three points are returned unchanged by every
//! heuristic except [`RandomOrder`].

mod greatest_angle;
mod nearest_neighbor;
mod radius;
mod random;

pub use greatest_angle::{convex_hull, GreatestAngle};
pub use nearest_neighbor::NearestNeighbor;
pub use radius::RadiusNearestNeighbor;
pub use random::RandomOrder;

/// Inputs shorter than this are returned unchanged.
pub(crate) const MIN_POINTS: usize = 3;
