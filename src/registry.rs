//! Name-to-strategy registries.
//!
//! A registry is built once at startup, then only read. Heuristics and
//! optimizers live in separate registries that share one type.

use rand::RngCore;

use crate::algorithm::{Identity, TourAlgorithm};
use crate::config::AlgorithmConfig;
use crate::constructive::{GreatestAngle, NearestNeighbor, RadiusNearestNeighbor, RandomOrder};
use crate::error::{Error, Result};
use crate::local_search::TwoOpt;
use crate::models::Point;

/// Label used in messages about the heuristic registry.
pub const HEURISTICS: &str = "heuristic";
/// Label used in messages about the optimizer registry.
pub const OPTIMIZERS: &str = "optimizer";

/// An ordered collection of uniquely named strategies.
///
/// Iteration follows registration order.
///
/// # Examples
///
/// ```
/// use tour_heuristics::algorithm::IDENTITY_NAME;
/// use tour_heuristics::config::AlgorithmConfig;
/// use tour_heuristics::registry::Registry;
///
/// let heuristics = Registry::heuristics(&AlgorithmConfig::default()).unwrap();
/// assert!(heuristics.get("nearest_neighbor").is_some());
/// assert!(heuristics.get(IDENTITY_NAME).is_some());
/// assert!(heuristics.lookup("simulated_annealing").is_err());
/// ```
pub struct Registry {
    kind: &'static str,
    entries: Vec<Box<dyn TourAlgorithm>>,
}

impl Registry {
    /// Creates an empty registry. `kind` names it in errors and logs.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// All built-in construction heuristics.
    pub fn heuristics(config: &AlgorithmConfig) -> Result<Self> {
        config.validate()?;
        let mut registry = Self::new(HEURISTICS);
        registry.register(Identity)?;
        registry.register(GreatestAngle)?;
        registry.register(NearestNeighbor)?;
        registry.register(RandomOrder)?;
        registry.register(RadiusNearestNeighbor::new(config.radius)?)?;
        Ok(registry)
    }

    /// All built-in optimizers.
    pub fn optimizers() -> Result<Self> {
        let mut registry = Self::new(OPTIMIZERS);
        registry.register(Identity)?;
        registry.register(TwoOpt)?;
        Ok(registry)
    }

    /// Which registry this is.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Adds a strategy. Fails if its name is already taken.
    pub fn register(&mut self, algorithm: impl TourAlgorithm + 'static) -> Result<()> {
        self.register_boxed(Box::new(algorithm))
    }

    /// Adds a boxed strategy. Fails if its name is already taken.
    pub fn register_boxed(&mut self, algorithm: Box<dyn TourAlgorithm>) -> Result<()> {
        if self.get(algorithm.name()).is_some() {
            return Err(Error::DuplicateName {
                registry: self.kind,
                name: algorithm.name().to_string(),
            });
        }
        log::debug!("registered {} {:?}", self.kind, algorithm.name());
        self.entries.push(algorithm);
        Ok(())
    }

    /// Adds a strategy given as a plain function.
    ///
    /// ```
    /// use tour_heuristics::registry::{Registry, HEURISTICS};
    ///
    /// let mut registry = Registry::new(HEURISTICS);
    /// registry
    ///     .register_fn("reverse", |points, _rng| points.iter().rev().copied().collect())
    ///     .unwrap();
    /// assert_eq!(registry.names().collect::<Vec<_>>(), vec!["reverse"]);
    /// ```
    pub fn register_fn<F>(&mut self, name: impl Into<String>, solve: F) -> Result<()>
    where
        F: Fn(&[Point], &mut dyn RngCore) -> Vec<Point> + Send + Sync + 'static,
    {
        self.register(FnAlgorithm {
            name: name.into(),
            solve,
        })
    }

    /// Looks up a strategy by name.
    pub fn get(&self, name: &str) -> Option<&dyn TourAlgorithm> {
        self.entries
            .iter()
            .find(|a| a.name() == name)
            .map(|a| &**a)
    }

    /// Looks up a strategy by name, failing with [`Error::UnknownAlgorithm`].
    pub fn lookup(&self, name: &str) -> Result<&dyn TourAlgorithm> {
        self.get(name).ok_or_else(|| Error::UnknownAlgorithm {
            registry: self.kind,
            name: name.to_string(),
        })
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|a| a.name())
    }

    /// Registered strategies, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn TourAlgorithm> {
        self.entries.iter().map(|a| &**a)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &self.kind)
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

/// A strategy backed by a closure.
struct FnAlgorithm<F> {
    name: String,
    solve: F,
}

impl<F> TourAlgorithm for FnAlgorithm<F>
where
    F: Fn(&[Point], &mut dyn RngCore) -> Vec<Point> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn solve(&self, points: &[Point], rng: &mut dyn RngCore) -> Vec<Point> {
        (self.solve)(points, rng)
    }
}
