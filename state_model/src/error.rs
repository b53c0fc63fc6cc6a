//! Error types for building the network.

use thiserror::Error;

/// Errors raised while building or querying the structure of a network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Node {0:?} is already in the network")]
    DuplicateNode(String),

    #[error("Node {node:?} refers to input {input:?}, which is not in the network")]
    UnknownInput { node: String, input: String },

    #[error("Unknown node {0:?}")]
    UnknownNode(String),
}

/// Result type for network operations.
pub type Result<T> = std::result::Result<T, ModelError>;
