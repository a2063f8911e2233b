//! Error type shared by the registry and configuration layers.

use thiserror::Error as ThisError;

/// Errors raised outside the algorithms themselves.
///
/// Heuristics and optimizers never fail; a truncated or degenerate tour is
/// a normal result. Errors only come from looking up strategies by name and
/// from validating configuration.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error("no {registry} named {name:?}")]
    UnknownAlgorithm { registry: &'static str, name: String },
    #[error("{registry} {name:?} is already registered")]
    DuplicateName { registry: &'static str, name: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
