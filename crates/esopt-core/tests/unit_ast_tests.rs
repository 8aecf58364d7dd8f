//! Unit tests for AST (Abstract Syntax Tree) types
//!
//! Tests the ESTree node model and its JSON form

use esopt_core::ast::*;
use esopt_core::types::Value;
use serde_json::json;

// =============================================================================
// Builder Tests
// =============================================================================

#[test]
fn test_node_literal_number() {
    match Node::number(42.0) {
        Node::Literal {
            value: Value::Number(n),
        } => assert_eq!(n, 42.0),
        _ => panic!("Expected literal number"),
    }
}

#[test]
fn test_node_member_is_not_computed() {
    match Node::member(Node::identifier("user"), "name") {
        Node::MemberExpression {
            object,
            property,
            computed,
        } => {
            assert!(!computed);
            assert_eq!(object.identifier_name().unwrap(), "user");
            assert_eq!(property.identifier_name().unwrap(), "name");
        }
        _ => panic!("Expected member expression"),
    }
}

#[test]
fn test_node_var_declaration() {
    let node = Node::var_declaration(vec![("a", Some(Node::number(1.0))), ("b", None)]);
    match node {
        Node::VariableDeclaration { declarations, kind } => {
            assert_eq!(kind, DeclarationKind::Var);
            assert_eq!(declarations.len(), 2);
            assert_eq!(declarations[1], Node::declarator("b", None));
        }
        _ => panic!("Expected variable declaration"),
    }
}

#[test]
fn test_node_function_expression_has_block_body() {
    let node = Node::function_expression(vec!["a", "b"], vec![Node::empty()]);
    assert_eq!(node.kind(), NodeKind::FunctionExpression);
    assert!(node.kind().is_scope());
    assert_eq!(node.children().len(), 3);
}

// =============================================================================
// ESTree JSON Tests
// =============================================================================

#[test]
fn test_deserialize_estree_program() {
    // if (a.b) { var c = [1, , 'x']; } else c = -1;
    let document = json!({
        "type": "Program",
        "body": [{
            "type": "IfStatement",
            "test": {
                "type": "MemberExpression",
                "computed": false,
                "object": { "type": "Identifier", "name": "a" },
                "property": { "type": "Identifier", "name": "b" }
            },
            "consequent": {
                "type": "BlockStatement",
                "body": [{
                    "type": "VariableDeclaration",
                    "kind": "var",
                    "declarations": [{
                        "type": "VariableDeclarator",
                        "id": { "type": "Identifier", "name": "c" },
                        "init": {
                            "type": "ArrayExpression",
                            "elements": [
                                { "type": "Literal", "value": 1, "raw": "1" },
                                null,
                                { "type": "Literal", "value": "x", "raw": "'x'" }
                            ]
                        }
                    }]
                }]
            },
            "alternate": {
                "type": "ExpressionStatement",
                "expression": {
                    "type": "AssignmentExpression",
                    "operator": "=",
                    "left": { "type": "Identifier", "name": "c" },
                    "right": {
                        "type": "UnaryExpression",
                        "operator": "-",
                        "prefix": true,
                        "argument": { "type": "Literal", "value": 1, "raw": "1" }
                    }
                }
            }
        }]
    });

    let program: Node = serde_json::from_value(document).unwrap();

    let expected = Node::program(vec![Node::if_statement(
        Node::member(Node::identifier("a"), "b"),
        Node::block(vec![Node::var_declaration(vec![(
            "c",
            Some(Node::ArrayExpression {
                elements: vec![Some(Node::number(1.0)), None, Some(Node::string("x"))],
            }),
        )])]),
        Some(Node::expression_statement(Node::assign(
            Node::identifier("c"),
            Node::unary(UnaryOperator::Minus, Node::number(1.0)),
        ))),
    )]);
    assert_eq!(program, expected);
}

#[test]
fn test_deserialize_optional_fields() {
    // return; with an absent `argument` and a for loop with null clauses
    let document = json!({
        "type": "BlockStatement",
        "body": [
            { "type": "ReturnStatement" },
            {
                "type": "ForStatement",
                "init": null,
                "test": null,
                "update": null,
                "body": { "type": "EmptyStatement" }
            }
        ]
    });

    let block: Node = serde_json::from_value(document).unwrap();
    assert_eq!(
        block,
        Node::block(vec![
            Node::return_statement(None),
            Node::for_statement(None, None, None, Node::empty()),
        ])
    );
}

#[test]
fn test_serialize_operators_as_tokens() {
    let node = Node::logical(
        Node::binary(Node::identifier("a"), BinaryOperator::StrictNotEq, Node::null()),
        LogicalOperator::Or,
        Node::update(UpdateOperator::Increment, Node::identifier("i"), false),
    );
    let value = serde_json::to_value(&node).unwrap();

    assert_eq!(value["type"], "LogicalExpression");
    assert_eq!(value["operator"], "||");
    assert_eq!(value["left"]["operator"], "!==");
    assert_eq!(value["left"]["right"]["value"], serde_json::Value::Null);
    assert_eq!(value["right"]["operator"], "++");
    assert_eq!(value["right"]["prefix"], false);
}

#[test]
fn test_property_kind_round_trip() {
    let document = json!({
        "type": "Property",
        "key": { "type": "Identifier", "name": "x" },
        "value": {
            "type": "FunctionExpression",
            "id": null,
            "params": [],
            "body": { "type": "BlockStatement", "body": [] }
        },
        "kind": "get"
    });

    let property: Node = serde_json::from_value(document.clone()).unwrap();
    match &property {
        Node::Property { kind, .. } => assert_eq!(*kind, PropertyKind::Get),
        _ => panic!("Expected property"),
    }
    assert_eq!(serde_json::to_value(&property).unwrap(), document);
}

#[test]
fn test_unknown_node_type_is_rejected() {
    let document = json!({ "type": "ClassDeclaration", "id": null, "body": [] });
    assert!(serde_json::from_value::<Node>(document).is_err());
}
