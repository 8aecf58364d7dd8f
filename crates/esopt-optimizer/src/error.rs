//! Optimizer error types

use esopt_core::CoreError;
use thiserror::Error;

/// Optimizer error
///
/// Every variant is fatal: the pipeline never returns a partially rewritten
/// tree.
#[derive(Error, Debug)]
pub enum OptimizeError {
    /// Input tree outside the supported grammar
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    /// A stage received a tree that breaks an earlier stage's postcondition
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Unsupported feature
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(String),

    /// The scope oracle has no record for a scope-introducing node
    #[error("Missing scope record for scope #{0}")]
    MissingScope(usize),

    /// Error raised by the node model
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for optimizer operations
pub type Result<T> = std::result::Result<T, OptimizeError>;
