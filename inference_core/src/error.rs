//! Error types for inference and rule-based utilities.

use state_model::ModelError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the callers of the inference engine.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// A component was built over something it cannot handle.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The evidence has no probability mass, so nothing can be normalised.
    #[error("Degenerate query: {0}")]
    DegenerateQuery(String),

    #[error("Enumerating {count} assignments exceeds the limit of {limit}")]
    TooManyAssignments { count: usize, limit: usize },

    #[error("Unknown variable {0:?}")]
    UnknownVariable(String),

    #[error("Network error: {0}")]
    Model(#[from] ModelError),

    #[error("Failed to read config file {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Errors raised while matching a rule or evaluating its parameters.
///
/// These never reach the callers of a utility distribution: the failing
/// assignment is logged and contributes a utility of 0.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuleError {
    #[error("Rule matching failed: {0}")]
    Matching(String),

    #[error("Parameter {0:?} has no numeric value in the input")]
    UnboundParameter(String),

    #[error("Utility {0} is not a finite number")]
    NonFiniteUtility(f64),
}

/// Result type for inference operations.
pub type Result<T> = std::result::Result<T, InferenceError>;
