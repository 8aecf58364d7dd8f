//! Dead code elimination
//!
//! Prunes statements that cannot affect execution and flattens nested
//! statement lists. Expects canonical input: `var` declarations only remain
//! as the initializer-less declaration at the top of each scope.

use esopt_core::ast::NodeKind;
use esopt_core::Node;
use tracing::trace;

use crate::error::Result;
use crate::semantic::has_side_effects;
use crate::traverse::{rewrite, Ancestry, Visitor};

/// Remove dead code from a canonical tree
pub fn eliminate_dead_code(root: Node) -> Result<Node> {
    rewrite(root, &mut DeadCodeEliminator::new())
}

/// Dead code eliminating visitor
#[derive(Debug, Default)]
pub struct DeadCodeEliminator;

impl DeadCodeEliminator {
    /// Create a new dead code eliminator
    pub fn new() -> Self {
        Self
    }
}

impl Visitor for DeadCodeEliminator {
    fn leave(&mut self, node: Node, ancestry: &Ancestry) -> Result<Node> {
        let node = match node {
            Node::Program { body } => Node::program(clean_statements(body)),

            Node::BlockStatement { body } => {
                collapse_block(clean_statements(body), ancestry)
            }

            Node::IfStatement {
                test,
                consequent,
                alternate,
            } => prune_if(*test, *consequent, alternate.map(|alternate| *alternate)),

            Node::ForStatement {
                init,
                test: Some(test),
                ..
            } if is_falsy_literal(&test) => {
                trace!("removed for loop with falsy test");
                match init.map(|init| *init) {
                    None => Node::empty(),
                    Some(init @ Node::VariableDeclaration { .. }) => init,
                    Some(init) => Node::expression_statement(init),
                }
            }

            Node::WhileStatement { test, .. } if is_falsy_literal(&test) => {
                trace!("removed while loop with falsy test");
                Node::empty()
            }

            Node::WithStatement { object, body } if body.is_empty_statement() => {
                Node::expression_statement(*object)
            }

            other => other,
        };
        Ok(node)
    }
}

fn is_falsy_literal(node: &Node) -> bool {
    matches!(node.as_literal(), Some(value) if !value.to_boolean())
}

/// Flatten, filter, then hoist the `"use strict"` directive
fn clean_statements(statements: Vec<Node>) -> Vec<Node> {
    let mut flat = Vec::with_capacity(statements.len());
    flatten_into(statements, &mut flat);

    let kept: Vec<Node> = flat.into_iter().filter(is_live).collect();
    hoist_use_strict(kept)
}

fn flatten_into(statements: Vec<Node>, out: &mut Vec<Node>) {
    for statement in statements {
        match statement {
            Node::BlockStatement { body } => out.extend(body),
            Node::ExpressionStatement { expression } => match *expression {
                Node::SequenceExpression { expressions } => flatten_sequence(expressions, out),
                expression => out.push(Node::expression_statement(expression)),
            },
            Node::SequenceExpression { expressions } => flatten_sequence(expressions, out),
            other => out.push(other),
        }
    }
}

fn flatten_sequence(expressions: Vec<Node>, out: &mut Vec<Node>) {
    for expression in expressions {
        match expression {
            Node::SequenceExpression { expressions } => flatten_sequence(expressions, out),
            other => out.push(Node::expression_statement(other)),
        }
    }
}

fn is_live(statement: &Node) -> bool {
    match statement {
        Node::EmptyStatement => false,
        Node::ExpressionStatement { expression } => {
            has_side_effects(expression) || statement.is_use_strict_directive()
        }
        _ => true,
    }
}

fn hoist_use_strict(statements: Vec<Node>) -> Vec<Node> {
    let (directives, mut rest): (Vec<Node>, Vec<Node>) = statements
        .into_iter()
        .partition(|statement| statement.is_use_strict_directive());

    if !directives.is_empty() {
        rest.insert(0, Node::expression_statement(Node::string("use strict")));
    }
    rest
}

/// A block is replaced by its only statement, or by an empty statement,
/// unless its parent requires a block.
fn collapse_block(body: Vec<Node>, ancestry: &Ancestry) -> Node {
    let parent = ancestry.parent();
    let keeps_block = matches!(
        parent,
        Some(
            NodeKind::FunctionDeclaration
                | NodeKind::FunctionExpression
                | NodeKind::TryStatement
                | NodeKind::CatchClause
        )
    );
    if keeps_block {
        return Node::block(body);
    }

    match body.len() {
        0 => Node::empty(),
        1 if may_capture_else(ancestry) && ends_with_open_if(&body[0]) => Node::block(body),
        1 => body.into_iter().next().unwrap_or_else(Node::empty),
        _ => Node::block(body),
    }
}

/// Returns true if an `else` could follow the block being collapsed, either
/// directly or through a chain of statement bodies under an `if`
fn may_capture_else(ancestry: &Ancestry) -> bool {
    match ancestry.parent() {
        Some(NodeKind::IfStatement) => true,
        Some(
            NodeKind::ForStatement
            | NodeKind::ForInStatement
            | NodeKind::WhileStatement
            | NodeKind::WithStatement
            | NodeKind::LabeledStatement,
        ) => ancestry.is_within(NodeKind::IfStatement),
        _ => false,
    }
}

/// Returns true if an `else` following this statement would bind to an
/// `if` inside it
fn ends_with_open_if(statement: &Node) -> bool {
    match statement {
        Node::IfStatement {
            alternate: None, ..
        } => true,
        Node::IfStatement {
            alternate: Some(alternate),
            ..
        } => ends_with_open_if(alternate),
        Node::ForStatement { body, .. }
        | Node::ForInStatement { body, .. }
        | Node::WhileStatement { body, .. }
        | Node::WithStatement { body, .. }
        | Node::LabeledStatement { body, .. } => ends_with_open_if(body),
        _ => false,
    }
}

fn prune_if(test: Node, consequent: Node, alternate: Option<Node>) -> Node {
    if let Some(value) = test.as_literal() {
        trace!("removed if with literal test");
        return if value.to_boolean() {
            consequent
        } else {
            alternate.unwrap_or_else(Node::empty)
        };
    }

    let alternate = alternate.filter(|alternate| !alternate.is_empty_statement());
    if consequent.is_empty_statement() && alternate.is_none() {
        return Node::expression_statement(test);
    }
    Node::if_statement(test, consequent, alternate)
}
