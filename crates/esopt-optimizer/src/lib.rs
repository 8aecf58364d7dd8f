//! esopt optimizer - AST to AST optimizing transformer
//!
//! This crate rewrites an ESTree program into a smaller, semantically
//! equivalent one. The pipeline runs four stages, each a single traversal
//! of the tree rewrite engine:
//!
//! 1. canonicalize: reduce the grammar surface
//! 2. simplify: fold constants and push negations
//! 3. eliminate dead code: prune and flatten statements
//! 4. decanonicalize: restore surface syntax

pub mod error;
pub mod optimizer;
pub mod pipeline;
pub mod scope;
pub mod semantic;
pub mod traverse;

// Re-export main types
pub use error::{OptimizeError, Result};
pub use pipeline::{optimize, Optimizer, OptimizerOptions};

// Re-export the stages
pub use optimizer::{
    canonicalize, decanonicalize, eliminate_dead_code, simplify, Canonicalizer,
    DeadCodeEliminator, Decanonicalizer, Simplifier,
};

// Re-export scope and analysis types
pub use scope::{Scope, ScopeId, ScopeMap, ScopeOracle, VarScopeCollector};
pub use semantic::{has_side_effects, is_valid_identifier};
pub use traverse::{rewrite, Ancestry, Visitor};
