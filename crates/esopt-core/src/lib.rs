//! esopt core - node model and value semantics for the esopt optimizer
//!
//! This crate provides the fundamental types shared by the optimizer and its
//! front ends:
//! - AST (ESTree) node definitions
//! - Literal values with the source language's coercion rules
//! - Error types

pub mod ast;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use ast::{Node, NodeKind};
pub use error::CoreError;
pub use types::Value;
