//! Algorithm configuration.
//!
//! All types deserialize with defaults for missing fields, so a host can
//! keep a partial configuration file and override only what it needs.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Bounds, Point};

/// Search parameters for the radius-expansion nearest-neighbor heuristic.
///
/// The search circle starts at `start_radius` and grows by
/// `max_radius / rounds` until a candidate is found or the radius reaches
/// the maximum. The maximum is `max_radius` when set, otherwise
/// `span_factor` times the larger side of the input's bounding box.
///
/// # Examples
///
/// ```
/// use tour_heuristics::config::RadiusConfig;
///
/// let config = RadiusConfig::default().with_rounds(20).with_max_radius(500.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.step(&[]), 25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusConfig {
    pub start_radius: f64,
    pub rounds: usize,
    pub span_factor: f64,
    pub max_radius: Option<f64>,
}

impl Default for RadiusConfig {
    fn default() -> Self {
        Self {
            start_radius: 1.0,
            rounds: 10,
            span_factor: 2.0,
            max_radius: None,
        }
    }
}

impl RadiusConfig {
    pub fn with_start_radius(mut self, radius: f64) -> Self {
        self.start_radius = radius;
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_span_factor(mut self, factor: f64) -> Self {
        self.span_factor = factor;
        self
    }

    /// Fixes the maximum radius instead of deriving it from the input.
    pub fn with_max_radius(mut self, radius: f64) -> Self {
        self.max_radius = Some(radius);
        self
    }

    /// Checks that every parameter is finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !(self.start_radius.is_finite() && self.start_radius > 0.0) {
            return Err(Error::invalid_config(format!(
                "start_radius must be positive and finite, got {}",
                self.start_radius
            )));
        }
        if self.rounds == 0 {
            return Err(Error::invalid_config("rounds must be at least 1"));
        }
        if !(self.span_factor.is_finite() && self.span_factor > 0.0) {
            return Err(Error::invalid_config(format!(
                "span_factor must be positive and finite, got {}",
                self.span_factor
            )));
        }
        if let Some(max) = self.max_radius {
            if !(max.is_finite() && max > 0.0) {
                return Err(Error::invalid_config(format!(
                    "max_radius must be positive and finite, got {max}"
                )));
            }
        }
        Ok(())
    }

    /// The radius at which the search gives up, for this point set.
    pub fn max_radius_for(&self, points: &[Point]) -> f64 {
        self.max_radius
            .unwrap_or_else(|| self.span_factor * Bounds::enclosing(points).span())
    }

    /// Growth per round, for this point set.
    pub fn step(&self, points: &[Point]) -> f64 {
        self.max_radius_for(points) / self.rounds as f64
    }
}

/// Configuration for the default strategy registries.
///
/// # Examples
///
/// ```
/// use tour_heuristics::config::AlgorithmConfig;
///
/// let config = AlgorithmConfig::default();
/// assert_eq!(config.bounds.width, 1000.0);
/// assert_eq!(config.radius.rounds, 10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmConfig {
    pub radius: RadiusConfig,
    pub bounds: Bounds,
}

impl AlgorithmConfig {
    pub fn with_radius(mut self, radius: RadiusConfig) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.radius.validate()?;
        if !(self.bounds.width >= 0.0 && self.bounds.height >= 0.0) {
            return Err(Error::invalid_config(format!(
                "bounds must be non-negative, got {} x {}",
                self.bounds.width, self.bounds.height
            )));
        }
        Ok(())
    }
}
