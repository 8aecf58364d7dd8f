//! Optimizer facade
//!
//! Runs the four stages in their fixed order. Canonicalization and
//! decanonicalization always run; the stages in between can be switched off.

use esopt_core::Node;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::optimizer::{canonicalize, decanonicalize, eliminate_dead_code, simplify};
use crate::scope::{ScopeOracle, VarScopeCollector};

/// Optimizer options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerOptions {
    /// Enable constant folding and algebraic simplification
    pub enable_simplification: bool,
    /// Enable dead code elimination
    pub enable_dead_code_elimination: bool,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            enable_simplification: true,
            enable_dead_code_elimination: true,
        }
    }
}

/// The esopt optimizer
pub struct Optimizer {
    /// Optimizer options
    options: OptimizerOptions,
    /// Source of per-scope variable records
    oracle: Box<dyn ScopeOracle + Send + Sync>,
}

impl Optimizer {
    /// Create a new optimizer with default options
    pub fn new() -> Self {
        Self::with_options(OptimizerOptions::default())
    }

    /// Create a new optimizer with custom options
    pub fn with_options(options: OptimizerOptions) -> Self {
        Self {
            options,
            oracle: Box::new(VarScopeCollector::new()),
        }
    }

    /// Replace the default scope collector
    pub fn with_scope_oracle(mut self, oracle: impl ScopeOracle + Send + Sync + 'static) -> Self {
        self.oracle = Box::new(oracle);
        self
    }

    /// Get the optimizer options
    pub fn options(&self) -> &OptimizerOptions {
        &self.options
    }

    /// Optimize a program.
    ///
    /// Either the whole tree is rewritten or an error is returned; there is
    /// no partial result.
    pub fn optimize(&self, root: Node) -> Result<Node> {
        debug!(nodes = root.size(), "optimizing");

        let mut tree = canonicalize(root, self.oracle.as_ref())?;
        debug!(nodes = tree.size(), "canonicalized");

        if self.options.enable_simplification {
            tree = simplify(tree)?;
            debug!(nodes = tree.size(), "simplified");
        }

        if self.options.enable_dead_code_elimination {
            tree = eliminate_dead_code(tree)?;
            debug!(nodes = tree.size(), "eliminated dead code");
        }

        let tree = decanonicalize(tree)?;
        debug!(nodes = tree.size(), "decanonicalized");
        Ok(tree)
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Optimize a program with the default options
pub fn optimize(root: Node) -> Result<Node> {
    Optimizer::new().optimize(root)
}
