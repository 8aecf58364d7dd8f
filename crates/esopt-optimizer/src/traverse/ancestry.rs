//! Parent tracking for the rewrite engine

use esopt_core::NodeKind;

/// Kinds of the nodes enclosing the node being visited, outermost first.
///
/// Ancestors are recorded by kind because the ancestors themselves are being
/// rebuilt while their children are visited.
#[derive(Debug, Clone, Default)]
pub struct Ancestry {
    stack: Vec<NodeKind>,
}

impl Ancestry {
    /// Create an empty ancestry (visiting the root)
    pub fn new() -> Self {
        Self::default()
    }

    /// Immediate syntactic parent of the current node, `None` at the root
    pub fn parent(&self) -> Option<NodeKind> {
        self.stack.last().copied()
    }

    /// Returns true if any enclosing node is of the given kind
    pub fn is_within(&self, kind: NodeKind) -> bool {
        self.stack.contains(&kind)
    }

    pub(crate) fn push(&mut self, kind: NodeKind) {
        self.stack.push(kind);
    }

    pub(crate) fn pop(&mut self) {
        self.stack.pop();
    }
}
