//! Geometric and tour model types.
//!
//! Provides the immutable building blocks every strategy works with:
//! points doubling as vectors, circles for containment queries, tours with
//! a derived length, and bounds for random point generation.

mod bounds;
mod circle;
mod point;
mod tour;

pub use bounds::{random_points, Bounds};
pub use circle::Circle;
pub use point::Point;
pub use tour::{total_length, Tour};
