//! Local search operators for improving a tour.
//!
//! - [`TwoOpt`] — 2-opt segment reversal, first improvement with restart

mod two_opt;

pub use two_opt::{two_opt_improve, TwoOpt};
