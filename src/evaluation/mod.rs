//! Running and timing strategies.

mod harness;

pub use harness::{perform_test, run_trials, TestResult, Trial, TrialSummary};
