//! Distance matrices.
//!
//! Provides a dense Euclidean distance matrix indexed by point position.

mod matrix;

pub use matrix::DistanceMatrix;
