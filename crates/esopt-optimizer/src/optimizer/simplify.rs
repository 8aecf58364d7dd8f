//! Constant folding and algebraic simplification
//!
//! Negations are pushed down on enter so the rewritten operands are visited
//! (and simplified) afterwards. Everything else folds on leave, bottom-up,
//! and only ever looks at direct literal operands.

use esopt_core::ast::{PropertyKind, UnaryOperator};
use esopt_core::{Node, Value};
use tracing::trace;

use crate::error::{OptimizeError, Result};
use crate::semantic::has_side_effects;
use crate::traverse::{rewrite, Ancestry, Visitor};

const ARRAY_INDEX_LIMIT: f64 = 4_294_967_296.0;

/// Simplify a canonical tree
pub fn simplify(root: Node) -> Result<Node> {
    rewrite(root, &mut Simplifier::new())
}

/// Simplifying visitor
#[derive(Debug, Default)]
pub struct Simplifier;

impl Simplifier {
    /// Create a new simplifier
    pub fn new() -> Self {
        Self
    }
}

impl Visitor for Simplifier {
    fn enter(&mut self, node: Node, _ancestry: &Ancestry) -> Result<Node> {
        Ok(push_negation(node))
    }

    fn leave(&mut self, node: Node, _ancestry: &Ancestry) -> Result<Node> {
        match node {
            Node::SequenceExpression { expressions } => Ok(fold_sequence(expressions)),

            Node::UnaryExpression { operator, argument } => {
                let folded = argument.as_literal().and_then(|v| v.apply_unary(operator));
                Ok(match folded {
                    Some(value) => Node::literal(value),
                    None => Node::UnaryExpression { operator, argument },
                })
            }

            Node::BinaryExpression {
                operator,
                left,
                right,
            } => {
                let folded = match (left.as_literal(), right.as_literal()) {
                    (Some(lhs), Some(rhs)) => lhs.apply_binary(operator, rhs),
                    _ => None,
                };
                Ok(match folded {
                    Some(value) => Node::literal(value),
                    None => Node::BinaryExpression {
                        operator,
                        left,
                        right,
                    },
                })
            }

            Node::LogicalExpression {
                operator,
                left,
                right,
            } => Ok(match (left.as_literal(), right.as_literal()) {
                (Some(lhs), Some(rhs)) => Node::literal(lhs.apply_logical(operator, rhs)),
                _ => Node::LogicalExpression {
                    operator,
                    left,
                    right,
                },
            }),

            Node::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => Ok(match test.as_literal().map(Value::to_boolean) {
                Some(true) => *consequent,
                Some(false) => *alternate,
                None => Node::ConditionalExpression {
                    test,
                    consequent,
                    alternate,
                },
            }),

            Node::MemberExpression {
                object,
                property,
                computed,
            } => fold_member(*object, *property, computed),

            other => Ok(other),
        }
    }
}

/// `!(a < b)` to `a >= b`, `!(a && b)` to `!a || !b`
fn push_negation(node: Node) -> Node {
    let argument = match node {
        Node::UnaryExpression {
            operator: UnaryOperator::Not,
            argument,
        } => *argument,
        other => return other,
    };

    match argument {
        Node::BinaryExpression {
            operator,
            left,
            right,
        } => match operator.inverse() {
            Some(inverse) => {
                trace!(from = %operator, to = %inverse, "inverted comparison");
                Node::BinaryExpression {
                    operator: inverse,
                    left,
                    right,
                }
            }
            None => Node::not(Node::BinaryExpression {
                operator,
                left,
                right,
            }),
        },
        Node::LogicalExpression {
            operator,
            left,
            right,
        } => Node::logical(Node::not(*left), operator.complement(), Node::not(*right)),
        other => Node::not(other),
    }
}

/// Flatten nested sequences one level and drop inert non-final operands
fn fold_sequence(expressions: Vec<Node>) -> Node {
    let mut flat = Vec::with_capacity(expressions.len());
    for expression in expressions {
        match expression {
            Node::SequenceExpression { expressions } => flat.extend(expressions),
            other => flat.push(other),
        }
    }

    let last = match flat.pop() {
        Some(last) => last,
        None => return Node::sequence(flat),
    };

    let mut kept: Vec<Node> = flat.into_iter().filter(has_side_effects).collect();
    if kept.is_empty() {
        return last;
    }
    kept.push(last);
    Node::sequence(kept)
}

fn member(object: Node, property: Node, computed: bool) -> Node {
    Node::MemberExpression {
        object: Box::new(object),
        property: Box::new(property),
        computed,
    }
}

/// Integer-valued index below 2^32, as an array index lookup accepts
fn array_index(n: f64) -> Option<usize> {
    if n >= 0.0 && n < ARRAY_INDEX_LIMIT && n.fract() == 0.0 {
        Some(n as usize)
    } else {
        None
    }
}

fn is_length(key: &Value) -> bool {
    matches!(key, Value::String(s) if s == "length")
}

/// Read a literal key out of an inert object, string or array literal
fn fold_member(object: Node, property: Node, computed: bool) -> Result<Node> {
    let key = match property.as_literal() {
        Some(key) if !has_side_effects(&object) => key.clone(),
        _ => return Ok(member(object, property, computed)),
    };
    if !computed {
        return Err(OptimizeError::InvariantViolation(
            "literal key on a non-computed member access".to_string(),
        ));
    }

    match object {
        Node::ObjectExpression { properties } => read_property(properties, &key, property),
        Node::Literal {
            value: Value::String(s),
        } => Ok(read_string(s, &key, property)),
        Node::ArrayExpression { elements } => Ok(read_element(elements, &key, property)),
        other => Ok(member(other, property, true)),
    }
}

/// The last matching property wins, as in object literal evaluation. Getters
/// and setters block folding.
fn read_property(properties: Vec<Node>, key: &Value, property: Node) -> Result<Node> {
    let name = key.to_js_string();
    let mut found = None;
    let mut foldable = true;

    for (index, entry) in properties.iter().enumerate() {
        let (entry_key, kind) = match entry {
            Node::Property { key, kind, .. } => (key, kind),
            other => {
                return Err(OptimizeError::InvalidNode(format!(
                    "expected Property, found {}",
                    other.kind()
                )))
            }
        };
        match entry_key.as_literal() {
            Some(Value::String(s)) if *s == name => {
                found = Some(index);
                foldable &= *kind == PropertyKind::Init;
            }
            Some(Value::String(_)) => {}
            _ => {
                return Err(OptimizeError::InvariantViolation(
                    "object literal key is not a string literal".to_string(),
                ))
            }
        }
    }

    match found {
        Some(index) if foldable => match properties.into_iter().nth(index) {
            Some(Node::Property { value, .. }) => {
                trace!(key = %name, "folded object literal read");
                Ok(*value)
            }
            _ => Err(OptimizeError::InvariantViolation(
                "matched property vanished".to_string(),
            )),
        },
        _ => Ok(member(Node::object(properties), property, true)),
    }
}

/// Index into a string literal by UTF-16 code unit
fn read_string(s: String, key: &Value, property: Node) -> Node {
    if is_length(key) {
        return Node::number(s.encode_utf16().count() as f64);
    }

    let n = match key {
        Value::Number(n) => *n,
        _ => return member(Node::literal(s), property, true),
    };

    let unit = array_index(n).and_then(|index| s.encode_utf16().nth(index));
    match unit {
        Some(unit) => match char::decode_utf16([unit]).next() {
            Some(Ok(c)) => Node::literal(c.to_string()),
            // A lone surrogate has no `String` representation
            _ => member(Node::literal(s), property, true),
        },
        // May still hit a numeric property of String.prototype
        None => member(Node::string(""), property, true),
    }
}

/// Index into an array literal; holes read as `undefined`
fn read_element(elements: Vec<Option<Node>>, key: &Value, property: Node) -> Node {
    if is_length(key) {
        return Node::number(elements.len() as f64);
    }

    let n = match key {
        Value::Number(n) => *n,
        _ => return member(Node::ArrayExpression { elements }, property, true),
    };

    match array_index(n).filter(|index| *index < elements.len()) {
        Some(index) => elements
            .into_iter()
            .nth(index)
            .flatten()
            .unwrap_or_else(Node::undefined),
        // May still hit a numeric property of Array.prototype
        None => member(Node::array(vec![]), property, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esopt_core::ast::{BinaryOperator, LogicalOperator};

    fn id(name: &str) -> Node {
        Node::identifier(name)
    }

    fn index(object: Node, key: Node) -> Node {
        Node::computed_member(object, key)
    }

    #[test]
    fn test_push_negation_comparison() {
        let tree = Node::not(Node::binary(id("b"), BinaryOperator::Lt, id("c")));
        assert_eq!(
            simplify(tree).unwrap(),
            Node::binary(id("b"), BinaryOperator::GtEq, id("c"))
        );
    }

    #[test]
    fn test_push_negation_keeps_non_invertible() {
        let tree = Node::not(Node::binary(id("b"), BinaryOperator::In, id("c")));
        assert_eq!(simplify(tree.clone()).unwrap(), tree);
    }

    #[test]
    fn test_push_negation_de_morgan_nested() {
        // !(b < c && d || e > f)  =>  (b >= c || !d) && e <= f
        let tree = Node::not(Node::logical(
            Node::logical(
                Node::binary(id("b"), BinaryOperator::Lt, id("c")),
                LogicalOperator::And,
                id("d"),
            ),
            LogicalOperator::Or,
            Node::binary(id("e"), BinaryOperator::Gt, id("f")),
        ));
        let expected = Node::logical(
            Node::logical(
                Node::binary(id("b"), BinaryOperator::GtEq, id("c")),
                LogicalOperator::Or,
                Node::not(id("d")),
            ),
            LogicalOperator::And,
            Node::binary(id("e"), BinaryOperator::LtEq, id("f")),
        );
        assert_eq!(simplify(tree).unwrap(), expected);
    }

    #[test]
    fn test_fold_sequence() {
        let numbers = Node::sequence(vec![Node::number(1.0), Node::number(2.0), Node::number(3.0)]);
        assert_eq!(simplify(numbers).unwrap(), Node::number(3.0));

        let mixed = Node::sequence(vec![
            Node::number(1.0),
            Node::call_named("x", vec![]),
            Node::number(2.0),
            Node::call_named("y", vec![]),
            Node::number(3.0),
        ]);
        assert_eq!(
            simplify(mixed).unwrap(),
            Node::sequence(vec![
                Node::call_named("x", vec![]),
                Node::call_named("y", vec![]),
                Node::number(3.0),
            ])
        );
    }

    #[test]
    fn test_fold_nested_sequence() {
        let tree = Node::sequence(vec![
            Node::sequence(vec![Node::call_named("a", vec![]), Node::number(1.0)]),
            id("b"),
        ]);
        assert_eq!(
            simplify(tree).unwrap(),
            Node::sequence(vec![Node::call_named("a", vec![]), id("b")])
        );
    }

    #[test]
    fn test_fold_numeric_edge_cases() {
        // 0/0 * 2
        let nan = Node::binary(
            Node::binary(Node::number(0.0), BinaryOperator::Div, Node::number(0.0)),
            BinaryOperator::Mul,
            Node::number(2.0),
        );
        assert_eq!(simplify(nan).unwrap(), Node::number(f64::NAN));

        // 100/0 * -2
        let negative_infinity = Node::binary(
            Node::binary(Node::number(100.0), BinaryOperator::Div, Node::number(0.0)),
            BinaryOperator::Mul,
            Node::unary(UnaryOperator::Minus, Node::number(2.0)),
        );
        assert_eq!(
            simplify(negative_infinity).unwrap(),
            Node::number(f64::NEG_INFINITY)
        );

        let negative_zero = Node::unary(UnaryOperator::Minus, Node::number(0.0));
        assert_eq!(simplify(negative_zero).unwrap(), Node::number(-0.0));
    }

    #[test]
    fn test_fold_unary_and_logical() {
        assert_eq!(
            simplify(Node::unary(UnaryOperator::TypeOf, Node::null())).unwrap(),
            Node::string("object")
        );
        assert_eq!(
            simplify(Node::unary(UnaryOperator::Void, Node::number(0.0))).unwrap(),
            Node::undefined()
        );
        assert_eq!(
            simplify(Node::logical(Node::number(0.0), LogicalOperator::Or, Node::string("x")))
                .unwrap(),
            Node::string("x")
        );
        // Only direct literal operands fold
        let partial = Node::logical(Node::boolean(true), LogicalOperator::And, id("x"));
        assert_eq!(simplify(partial.clone()).unwrap(), partial);
    }

    #[test]
    fn test_fold_string_concatenation() {
        let tree = Node::binary(Node::string("a"), BinaryOperator::Add, Node::number(1.5));
        assert_eq!(simplify(tree).unwrap(), Node::string("a1.5"));
    }

    #[test]
    fn test_fold_conditional() {
        let tree = Node::conditional(Node::string(""), Node::call_named("a", vec![]), id("b"));
        assert_eq!(simplify(tree).unwrap(), id("b"));

        let dynamic = Node::conditional(id("t"), id("a"), id("b"));
        assert_eq!(simplify(dynamic.clone()).unwrap(), dynamic);
    }

    #[test]
    fn test_fold_array_member() {
        let array = || Node::array(vec![Node::number(1.0), Node::number(2.0)]);

        assert_eq!(simplify(index(array(), Node::number(0.0))).unwrap(), Node::number(1.0));
        assert_eq!(
            simplify(index(array(), Node::string("length"))).unwrap(),
            Node::number(2.0)
        );
        assert_eq!(
            simplify(index(array(), Node::number(-1.0))).unwrap(),
            index(Node::array(vec![]), Node::number(-1.0))
        );
        assert_eq!(
            simplify(index(array(), Node::number(0.5))).unwrap(),
            index(Node::array(vec![]), Node::number(0.5))
        );
        assert_eq!(
            simplify(index(array(), Node::string("x"))).unwrap(),
            index(array(), Node::string("x"))
        );
    }

    #[test]
    fn test_array_member_with_effects_is_kept() {
        let tree = index(
            Node::array(vec![Node::number(1.0), Node::call_named("c", vec![])]),
            Node::number(0.0),
        );
        assert_eq!(simplify(tree.clone()).unwrap(), tree);
    }

    #[test]
    fn test_array_hole_reads_undefined() {
        let holey = Node::ArrayExpression {
            elements: vec![None, Some(Node::number(1.0))],
        };
        assert_eq!(
            simplify(index(holey.clone(), Node::number(0.0))).unwrap(),
            Node::undefined()
        );
        assert_eq!(
            simplify(index(holey, Node::string("length"))).unwrap(),
            Node::number(2.0)
        );
    }

    #[test]
    fn test_fold_string_member() {
        assert_eq!(
            simplify(index(Node::string("abc"), Node::string("length"))).unwrap(),
            Node::number(3.0)
        );
        assert_eq!(
            simplify(index(Node::string("abc"), Node::number(1.0))).unwrap(),
            Node::string("b")
        );
        assert_eq!(
            simplify(index(Node::string("abc"), Node::number(3.0))).unwrap(),
            index(Node::string(""), Node::number(3.0))
        );
        // UTF-16 length
        assert_eq!(
            simplify(index(Node::string("a\u{1F600}"), Node::string("length"))).unwrap(),
            Node::number(3.0)
        );
        // Half of a surrogate pair stays unfolded
        let surrogate = index(Node::string("\u{1F600}"), Node::number(0.0));
        assert_eq!(simplify(surrogate.clone()).unwrap(), surrogate);
    }

    #[test]
    fn test_fold_object_member() {
        let object = Node::object(vec![
            Node::property(Node::string("x"), Node::number(0.0)),
            Node::property(Node::string("y"), Node::number(1.0)),
            Node::property(Node::string("x"), Node::number(2.0)),
        ]);
        assert_eq!(
            simplify(index(object.clone(), Node::string("y"))).unwrap(),
            Node::number(1.0)
        );
        assert_eq!(
            simplify(index(object.clone(), Node::string("x"))).unwrap(),
            Node::number(2.0)
        );
        assert_eq!(
            simplify(index(object.clone(), Node::string("z"))).unwrap(),
            index(object, Node::string("z"))
        );
    }

    #[test]
    fn test_object_member_numeric_key() {
        let object = Node::object(vec![Node::property(Node::string("1"), Node::number(2.0))]);
        assert_eq!(
            simplify(index(object, Node::number(1.0))).unwrap(),
            Node::number(2.0)
        );
    }

    #[test]
    fn test_object_member_accessor_blocks_folding() {
        let object = Node::object(vec![
            Node::property(Node::string("x"), Node::number(0.0)),
            Node::Property {
                key: Box::new(Node::string("x")),
                value: Box::new(Node::function_expression(vec![], vec![])),
                kind: PropertyKind::Get,
            },
        ]);
        let tree = index(object, Node::string("x"));
        assert_eq!(simplify(tree.clone()).unwrap(), tree);
    }

    #[test]
    fn test_non_computed_literal_member_is_invariant_violation() {
        let tree = Node::MemberExpression {
            object: Box::new(Node::array(vec![])),
            property: Box::new(Node::string("length")),
            computed: false,
        };
        assert!(matches!(
            simplify(tree),
            Err(OptimizeError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_object_identifier_key_is_invariant_violation() {
        let object = Node::object(vec![Node::property(id("x"), Node::number(0.0))]);
        assert!(matches!(
            simplify(index(object, Node::string("x"))),
            Err(OptimizeError::InvariantViolation(_))
        ));
    }
}
