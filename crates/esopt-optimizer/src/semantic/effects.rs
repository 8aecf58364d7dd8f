//! Side-effect analysis
//!
//! This predicate is the only basis on which an operand or a statement may
//! be discarded. It is conservative: anything not known to be inert counts
//! as effectful.
//!
//! Property reads are treated as inert even though a getter could run
//! arbitrary code.

use esopt_core::Node;

/// Returns true unless evaluating `node` is known to have no observable
/// effect.
pub fn has_side_effects(node: &Node) -> bool {
    match node {
        Node::Literal { .. }
        | Node::Identifier { .. }
        | Node::FunctionExpression { .. }
        // `this` is a binding read like an identifier and cannot throw
        | Node::ThisExpression => false,

        Node::MemberExpression {
            object, property, ..
        } => has_side_effects(object) || has_side_effects(property),

        Node::SequenceExpression { expressions } => expressions.iter().any(has_side_effects),

        Node::ArrayExpression { elements } => elements.iter().flatten().any(has_side_effects),

        Node::ObjectExpression { properties } => properties.iter().any(|property| match property {
            Node::Property { value, .. } => has_side_effects(value),
            _ => true,
        }),

        _ => true,
    }
}
