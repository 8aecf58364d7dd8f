//! Scope analysis
//!
//! The canonicalizer consumes scope records through the [`ScopeOracle`]
//! trait, so any binding resolver can be plugged in. [`VarScopeCollector`]
//! is the default one and resolves ES5 `var` hoisting.

pub mod collector;
pub mod oracle;

pub use collector::VarScopeCollector;
pub use oracle::{Scope, ScopeId, ScopeKind, ScopeMap, ScopeOracle};
