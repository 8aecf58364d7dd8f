//! Abstract Syntax Tree (AST) definitions
//!
//! The tree follows the ESTree shape for the ES5 grammar, so that documents
//! produced by an external parser deserialize directly:
//! - Nodes (statements, expressions and their helpers)
//! - Operators
//! - Node kinds, used where only the shape of a node matters

pub mod kind;
pub mod node;
pub mod operator;

pub use kind::NodeKind;
pub use node::{DeclarationKind, Node, PropertyKind};
pub use operator::{
    AssignmentOperator, BinaryOperator, LogicalOperator, UnaryOperator, UpdateOperator,
};
