//! Decanonicalization
//!
//! Turns canonical form back into something a printer can emit:
//! literals the surface syntax cannot spell are re-encoded as expressions,
//! and identifier-shaped keys regain their shorthand.
//!
//! Negative zero is written as plain `0`; its sign is not preserved.

use esopt_core::ast::{BinaryOperator, UnaryOperator};
use esopt_core::{Node, Value};

use crate::error::{OptimizeError, Result};
use crate::semantic::is_valid_identifier;
use crate::traverse::{rewrite, Ancestry, Visitor};

/// Restore surface syntax
pub fn decanonicalize(root: Node) -> Result<Node> {
    rewrite(root, &mut Decanonicalizer::new())
}

/// Decanonicalizing visitor
#[derive(Debug, Default)]
pub struct Decanonicalizer;

impl Decanonicalizer {
    /// Create a new decanonicalizer
    pub fn new() -> Self {
        Self
    }
}

impl Visitor for Decanonicalizer {
    fn leave(&mut self, node: Node, _ancestry: &Ancestry) -> Result<Node> {
        match node {
            Node::Literal {
                value: Value::Undefined,
            } => Ok(Node::unary(UnaryOperator::Void, Node::number(0.0))),

            Node::Literal {
                value: Value::Number(n),
            } => Ok(encode_number(n)),

            Node::Property { key, value, kind } => Ok(Node::Property {
                key: Box::new(shorthand_key(*key)?),
                value,
                kind,
            }),

            Node::MemberExpression {
                object,
                property,
                computed: true,
            } => Ok(match identifier_key(&property) {
                Some(name) => Node::member(*object, name),
                None => Node::MemberExpression {
                    object,
                    property,
                    computed: true,
                },
            }),

            other => Ok(other),
        }
    }
}

fn encode_number(n: f64) -> Node {
    let quotient = |dividend: f64| {
        Node::binary(
            Node::number(dividend),
            BinaryOperator::Div,
            Node::number(0.0),
        )
    };

    if n.is_nan() {
        quotient(0.0)
    } else if n == f64::INFINITY {
        quotient(1.0)
    } else if n == f64::NEG_INFINITY {
        Node::unary(UnaryOperator::Minus, quotient(1.0))
    } else if n == 0.0 {
        // also drops the sign of -0
        Node::number(0.0)
    } else if n < 0.0 {
        Node::unary(UnaryOperator::Minus, Node::number(-n))
    } else {
        Node::number(n)
    }
}

fn identifier_key(key: &Node) -> Option<&str> {
    match key.as_literal() {
        Some(Value::String(name)) if is_valid_identifier(name) => Some(name),
        _ => None,
    }
}

fn shorthand_key(key: Node) -> Result<Node> {
    match key {
        // already restored
        Node::Identifier { .. } => Ok(key),
        Node::Literal { .. } => Ok(match identifier_key(&key) {
            Some(name) => Node::identifier(name),
            None => key,
        }),
        other => Err(OptimizeError::InvariantViolation(format!(
            "property key must be a Literal, found {}",
            other.kind()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> Node {
        Node::identifier(name)
    }

    #[test]
    fn test_encode_special_numbers() {
        let div = |a: f64| Node::binary(Node::number(a), BinaryOperator::Div, Node::number(0.0));

        assert_eq!(decanonicalize(Node::number(f64::NAN)).unwrap(), div(0.0));
        assert_eq!(decanonicalize(Node::number(f64::INFINITY)).unwrap(), div(1.0));
        assert_eq!(
            decanonicalize(Node::number(f64::NEG_INFINITY)).unwrap(),
            Node::unary(UnaryOperator::Minus, div(1.0))
        );
        assert_eq!(
            decanonicalize(Node::number(-2.5)).unwrap(),
            Node::unary(UnaryOperator::Minus, Node::number(2.5))
        );
        assert_eq!(decanonicalize(Node::number(-0.0)).unwrap(), Node::number(0.0));
        assert_eq!(decanonicalize(Node::number(7.0)).unwrap(), Node::number(7.0));
    }

    #[test]
    fn test_encode_undefined() {
        assert_eq!(
            decanonicalize(Node::undefined()).unwrap(),
            Node::unary(UnaryOperator::Void, Node::number(0.0))
        );
    }

    #[test]
    fn test_member_shorthand() {
        let dot = Node::computed_member(id("b"), Node::string("c"));
        assert_eq!(decanonicalize(dot).unwrap(), Node::member(id("b"), "c"));

        let spaced = Node::computed_member(id("b"), Node::string("c d"));
        assert_eq!(decanonicalize(spaced.clone()).unwrap(), spaced);

        let reserved = Node::computed_member(id("b"), Node::string("class"));
        assert_eq!(decanonicalize(reserved.clone()).unwrap(), reserved);

        let dynamic = Node::computed_member(id("b"), id("k"));
        assert_eq!(decanonicalize(dynamic.clone()).unwrap(), dynamic);
    }

    #[test]
    fn test_property_shorthand() {
        let object = Node::object(vec![
            Node::property(Node::string("1"), Node::number(2.0)),
            Node::property(Node::string("b"), Node::string("c")),
        ]);
        assert_eq!(
            decanonicalize(object).unwrap(),
            Node::object(vec![
                Node::property(Node::string("1"), Node::number(2.0)),
                Node::property(id("b"), Node::string("c")),
            ])
        );
    }

    #[test]
    fn test_invalid_property_key() {
        let object = Node::object(vec![Node::property(Node::this(), Node::number(2.0))]);
        assert!(matches!(
            decanonicalize(object),
            Err(OptimizeError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_idempotent() {
        let tree = Node::program(vec![Node::expression_statement(Node::sequence(vec![
            Node::number(f64::NEG_INFINITY),
            Node::number(-3.0),
            Node::undefined(),
            Node::computed_member(id("a"), Node::string("b")),
            Node::object(vec![Node::property(Node::string("k"), Node::number(f64::NAN))]),
        ]))]);
        let once = decanonicalize(tree).unwrap();
        let twice = decanonicalize(once.clone()).unwrap();
        assert_eq!(once, twice);
    }
}
