//! Depth-first rewriting traversal
//!
//! `enter` runs top-down before a node's children are visited; whatever it
//! returns is the node whose children get visited. `leave` runs bottom-up
//! once all children have been rewritten, and its result is placed in the
//! parent's slot without being visited again.

use esopt_core::Node;

use super::ancestry::Ancestry;
use crate::error::Result;

/// Enter/leave hooks of a rewrite
pub trait Visitor {
    /// Called before the node's children are visited
    fn enter(&mut self, node: Node, _ancestry: &Ancestry) -> Result<Node> {
        Ok(node)
    }

    /// Called after the node's children were visited
    fn leave(&mut self, node: Node, _ancestry: &Ancestry) -> Result<Node> {
        Ok(node)
    }
}

/// Rewrite the tree rooted at `root` with `visitor`.
///
/// The first error aborts the traversal and is returned as is.
pub fn rewrite<V>(root: Node, visitor: &mut V) -> Result<Node>
where
    V: Visitor + ?Sized,
{
    let mut ancestry = Ancestry::new();
    visit(root, visitor, &mut ancestry)
}

fn visit<V>(node: Node, visitor: &mut V, ancestry: &mut Ancestry) -> Result<Node>
where
    V: Visitor + ?Sized,
{
    let node = visitor.enter(node, ancestry)?;

    ancestry.push(node.kind());
    let rebuilt = node.try_map_children(&mut |child| visit(child, visitor, ancestry));
    ancestry.pop();

    visitor.leave(rebuilt?, ancestry)
}
