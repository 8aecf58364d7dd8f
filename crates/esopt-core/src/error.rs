//! Error types for esopt core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// A node does not have the shape its position requires
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
