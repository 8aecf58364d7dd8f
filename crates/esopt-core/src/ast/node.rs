//! ESTree node definitions
//!
//! All nodes live in one tagged enum so that a single traversal can visit and
//! replace any of them. Children are exclusively owned by their parent; a
//! rewrite builds new node values instead of mutating shared ones.

use serde::{Deserialize, Serialize};

use super::kind::NodeKind;
use super::operator::{
    AssignmentOperator, BinaryOperator, LogicalOperator, UnaryOperator, UpdateOperator,
};
use crate::error::{CoreError, Result};
use crate::types::Value;

/// AST node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Script root
    Program { body: Vec<Node> },

    FunctionDeclaration {
        #[serde(default)]
        id: Option<Box<Node>>,
        params: Vec<Node>,
        body: Box<Node>,
    },

    FunctionExpression {
        #[serde(default)]
        id: Option<Box<Node>>,
        params: Vec<Node>,
        body: Box<Node>,
    },

    // Statements
    BlockStatement {
        body: Vec<Node>,
    },

    ExpressionStatement {
        expression: Box<Node>,
    },

    EmptyStatement,

    DebuggerStatement,

    IfStatement {
        test: Box<Node>,
        consequent: Box<Node>,
        #[serde(default)]
        alternate: Option<Box<Node>>,
    },

    LabeledStatement {
        label: Box<Node>,
        body: Box<Node>,
    },

    BreakStatement {
        #[serde(default)]
        label: Option<Box<Node>>,
    },

    ContinueStatement {
        #[serde(default)]
        label: Option<Box<Node>>,
    },

    WithStatement {
        object: Box<Node>,
        body: Box<Node>,
    },

    SwitchStatement {
        discriminant: Box<Node>,
        cases: Vec<Node>,
    },

    /// `case test:` or `default:` when `test` is absent
    SwitchCase {
        #[serde(default)]
        test: Option<Box<Node>>,
        consequent: Vec<Node>,
    },

    ReturnStatement {
        #[serde(default)]
        argument: Option<Box<Node>>,
    },

    ThrowStatement {
        argument: Box<Node>,
    },

    TryStatement {
        block: Box<Node>,
        #[serde(default)]
        handler: Option<Box<Node>>,
        #[serde(default)]
        finalizer: Option<Box<Node>>,
    },

    CatchClause {
        param: Box<Node>,
        body: Box<Node>,
    },

    WhileStatement {
        test: Box<Node>,
        body: Box<Node>,
    },

    DoWhileStatement {
        body: Box<Node>,
        test: Box<Node>,
    },

    /// `for (init; test; update) body`; `init` is an expression or a declaration
    ForStatement {
        #[serde(default)]
        init: Option<Box<Node>>,
        #[serde(default)]
        test: Option<Box<Node>>,
        #[serde(default)]
        update: Option<Box<Node>>,
        body: Box<Node>,
    },

    ForInStatement {
        left: Box<Node>,
        right: Box<Node>,
        body: Box<Node>,
    },

    VariableDeclaration {
        declarations: Vec<Node>,
        kind: DeclarationKind,
    },

    VariableDeclarator {
        id: Box<Node>,
        #[serde(default)]
        init: Option<Box<Node>>,
    },

    // Expressions
    ThisExpression,

    /// Array literal; `None` elements are holes (`[1, , 2]`)
    ArrayExpression {
        elements: Vec<Option<Node>>,
    },

    ObjectExpression {
        properties: Vec<Node>,
    },

    /// Object literal entry
    Property {
        key: Box<Node>,
        value: Box<Node>,
        kind: PropertyKind,
    },

    SequenceExpression {
        expressions: Vec<Node>,
    },

    UnaryExpression {
        operator: UnaryOperator,
        argument: Box<Node>,
    },

    BinaryExpression {
        operator: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },

    AssignmentExpression {
        operator: AssignmentOperator,
        left: Box<Node>,
        right: Box<Node>,
    },

    UpdateExpression {
        operator: UpdateOperator,
        argument: Box<Node>,
        prefix: bool,
    },

    LogicalExpression {
        operator: LogicalOperator,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// Ternary conditional (`test ? consequent : alternate`)
    ConditionalExpression {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Box<Node>,
    },

    NewExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },

    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },

    /// `object.property` when not computed, `object[property]` when computed
    MemberExpression {
        object: Box<Node>,
        property: Box<Node>,
        computed: bool,
    },

    Identifier {
        name: String,
    },

    Literal {
        value: Value,
    },
}

/// Variable declaration keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
}

/// Object literal entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Data property (`key: value`)
    Init,
    /// Getter (`get key() {}`)
    Get,
    /// Setter (`set key(v) {}`)
    Set,
}

impl Node {
    /// Kind of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Program { .. } => NodeKind::Program,
            Node::FunctionDeclaration { .. } => NodeKind::FunctionDeclaration,
            Node::FunctionExpression { .. } => NodeKind::FunctionExpression,
            Node::BlockStatement { .. } => NodeKind::BlockStatement,
            Node::ExpressionStatement { .. } => NodeKind::ExpressionStatement,
            Node::EmptyStatement => NodeKind::EmptyStatement,
            Node::DebuggerStatement => NodeKind::DebuggerStatement,
            Node::IfStatement { .. } => NodeKind::IfStatement,
            Node::LabeledStatement { .. } => NodeKind::LabeledStatement,
            Node::BreakStatement { .. } => NodeKind::BreakStatement,
            Node::ContinueStatement { .. } => NodeKind::ContinueStatement,
            Node::WithStatement { .. } => NodeKind::WithStatement,
            Node::SwitchStatement { .. } => NodeKind::SwitchStatement,
            Node::SwitchCase { .. } => NodeKind::SwitchCase,
            Node::ReturnStatement { .. } => NodeKind::ReturnStatement,
            Node::ThrowStatement { .. } => NodeKind::ThrowStatement,
            Node::TryStatement { .. } => NodeKind::TryStatement,
            Node::CatchClause { .. } => NodeKind::CatchClause,
            Node::WhileStatement { .. } => NodeKind::WhileStatement,
            Node::DoWhileStatement { .. } => NodeKind::DoWhileStatement,
            Node::ForStatement { .. } => NodeKind::ForStatement,
            Node::ForInStatement { .. } => NodeKind::ForInStatement,
            Node::VariableDeclaration { .. } => NodeKind::VariableDeclaration,
            Node::VariableDeclarator { .. } => NodeKind::VariableDeclarator,
            Node::ThisExpression => NodeKind::ThisExpression,
            Node::ArrayExpression { .. } => NodeKind::ArrayExpression,
            Node::ObjectExpression { .. } => NodeKind::ObjectExpression,
            Node::Property { .. } => NodeKind::Property,
            Node::SequenceExpression { .. } => NodeKind::SequenceExpression,
            Node::UnaryExpression { .. } => NodeKind::UnaryExpression,
            Node::BinaryExpression { .. } => NodeKind::BinaryExpression,
            Node::AssignmentExpression { .. } => NodeKind::AssignmentExpression,
            Node::UpdateExpression { .. } => NodeKind::UpdateExpression,
            Node::LogicalExpression { .. } => NodeKind::LogicalExpression,
            Node::ConditionalExpression { .. } => NodeKind::ConditionalExpression,
            Node::NewExpression { .. } => NodeKind::NewExpression,
            Node::CallExpression { .. } => NodeKind::CallExpression,
            Node::MemberExpression { .. } => NodeKind::MemberExpression,
            Node::Identifier { .. } => NodeKind::Identifier,
            Node::Literal { .. } => NodeKind::Literal,
        }
    }

    /// Borrow the children of this node in declared field order.
    ///
    /// Must list children in the same order as `try_map_children`.
    pub fn children(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        match self {
            Node::Program { body } | Node::BlockStatement { body } => out.extend(body),
            Node::FunctionDeclaration { id, params, body }
            | Node::FunctionExpression { id, params, body } => {
                out.extend(id.as_deref());
                out.extend(params);
                out.push(body);
            }
            Node::ExpressionStatement { expression } => out.push(expression),
            Node::IfStatement {
                test,
                consequent,
                alternate,
            } => {
                out.push(test);
                out.push(consequent);
                out.extend(alternate.as_deref());
            }
            Node::LabeledStatement { label, body } => {
                out.push(label);
                out.push(body);
            }
            Node::BreakStatement { label } | Node::ContinueStatement { label } => {
                out.extend(label.as_deref())
            }
            Node::WithStatement { object, body } => {
                out.push(object);
                out.push(body);
            }
            Node::SwitchStatement {
                discriminant,
                cases,
            } => {
                out.push(discriminant);
                out.extend(cases);
            }
            Node::SwitchCase { test, consequent } => {
                out.extend(test.as_deref());
                out.extend(consequent);
            }
            Node::ReturnStatement { argument } => out.extend(argument.as_deref()),
            Node::ThrowStatement { argument } => out.push(argument),
            Node::TryStatement {
                block,
                handler,
                finalizer,
            } => {
                out.push(block);
                out.extend(handler.as_deref());
                out.extend(finalizer.as_deref());
            }
            Node::CatchClause { param, body } => {
                out.push(param);
                out.push(body);
            }
            Node::WhileStatement { test, body } => {
                out.push(test);
                out.push(body);
            }
            Node::DoWhileStatement { body, test } => {
                out.push(body);
                out.push(test);
            }
            Node::ForStatement {
                init,
                test,
                update,
                body,
            } => {
                out.extend(init.as_deref());
                out.extend(test.as_deref());
                out.extend(update.as_deref());
                out.push(body);
            }
            Node::ForInStatement { left, right, body } => {
                out.push(left);
                out.push(right);
                out.push(body);
            }
            Node::VariableDeclaration { declarations, .. } => out.extend(declarations),
            Node::VariableDeclarator { id, init } => {
                out.push(id);
                out.extend(init.as_deref());
            }
            Node::ArrayExpression { elements } => out.extend(elements.iter().flatten()),
            Node::ObjectExpression { properties } => out.extend(properties),
            Node::Property { key, value, .. } => {
                out.push(key);
                out.push(value);
            }
            Node::SequenceExpression { expressions } => out.extend(expressions),
            Node::UnaryExpression { argument, .. } | Node::UpdateExpression { argument, .. } => {
                out.push(argument)
            }
            Node::BinaryExpression { left, right, .. }
            | Node::AssignmentExpression { left, right, .. }
            | Node::LogicalExpression { left, right, .. } => {
                out.push(left);
                out.push(right);
            }
            Node::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => {
                out.push(test);
                out.push(consequent);
                out.push(alternate);
            }
            Node::NewExpression { callee, arguments }
            | Node::CallExpression { callee, arguments } => {
                out.push(callee);
                out.extend(arguments);
            }
            Node::MemberExpression {
                object, property, ..
            } => {
                out.push(object);
                out.push(property);
            }
            Node::EmptyStatement
            | Node::DebuggerStatement
            | Node::ThisExpression
            | Node::Identifier { .. }
            | Node::Literal { .. } => {}
        }
        out
    }

    /// Rebuild this node with every child passed through `f`, in declared
    /// field order.
    pub fn try_map_children<E, F>(self, f: &mut F) -> std::result::Result<Node, E>
    where
        F: FnMut(Node) -> std::result::Result<Node, E>,
    {
        let node = match self {
            Node::Program { body } => Node::Program {
                body: map_vec(body, f)?,
            },
            Node::FunctionDeclaration { id, params, body } => Node::FunctionDeclaration {
                id: map_opt(id, f)?,
                params: map_vec(params, f)?,
                body: map_box(body, f)?,
            },
            Node::FunctionExpression { id, params, body } => Node::FunctionExpression {
                id: map_opt(id, f)?,
                params: map_vec(params, f)?,
                body: map_box(body, f)?,
            },
            Node::BlockStatement { body } => Node::BlockStatement {
                body: map_vec(body, f)?,
            },
            Node::ExpressionStatement { expression } => Node::ExpressionStatement {
                expression: map_box(expression, f)?,
            },
            Node::IfStatement {
                test,
                consequent,
                alternate,
            } => Node::IfStatement {
                test: map_box(test, f)?,
                consequent: map_box(consequent, f)?,
                alternate: map_opt(alternate, f)?,
            },
            Node::LabeledStatement { label, body } => Node::LabeledStatement {
                label: map_box(label, f)?,
                body: map_box(body, f)?,
            },
            Node::BreakStatement { label } => Node::BreakStatement {
                label: map_opt(label, f)?,
            },
            Node::ContinueStatement { label } => Node::ContinueStatement {
                label: map_opt(label, f)?,
            },
            Node::WithStatement { object, body } => Node::WithStatement {
                object: map_box(object, f)?,
                body: map_box(body, f)?,
            },
            Node::SwitchStatement {
                discriminant,
                cases,
            } => Node::SwitchStatement {
                discriminant: map_box(discriminant, f)?,
                cases: map_vec(cases, f)?,
            },
            Node::SwitchCase { test, consequent } => Node::SwitchCase {
                test: map_opt(test, f)?,
                consequent: map_vec(consequent, f)?,
            },
            Node::ReturnStatement { argument } => Node::ReturnStatement {
                argument: map_opt(argument, f)?,
            },
            Node::ThrowStatement { argument } => Node::ThrowStatement {
                argument: map_box(argument, f)?,
            },
            Node::TryStatement {
                block,
                handler,
                finalizer,
            } => Node::TryStatement {
                block: map_box(block, f)?,
                handler: map_opt(handler, f)?,
                finalizer: map_opt(finalizer, f)?,
            },
            Node::CatchClause { param, body } => Node::CatchClause {
                param: map_box(param, f)?,
                body: map_box(body, f)?,
            },
            Node::WhileStatement { test, body } => Node::WhileStatement {
                test: map_box(test, f)?,
                body: map_box(body, f)?,
            },
            Node::DoWhileStatement { body, test } => Node::DoWhileStatement {
                body: map_box(body, f)?,
                test: map_box(test, f)?,
            },
            Node::ForStatement {
                init,
                test,
                update,
                body,
            } => Node::ForStatement {
                init: map_opt(init, f)?,
                test: map_opt(test, f)?,
                update: map_opt(update, f)?,
                body: map_box(body, f)?,
            },
            Node::ForInStatement { left, right, body } => Node::ForInStatement {
                left: map_box(left, f)?,
                right: map_box(right, f)?,
                body: map_box(body, f)?,
            },
            Node::VariableDeclaration { declarations, kind } => Node::VariableDeclaration {
                declarations: map_vec(declarations, f)?,
                kind,
            },
            Node::VariableDeclarator { id, init } => Node::VariableDeclarator {
                id: map_box(id, f)?,
                init: map_opt(init, f)?,
            },
            Node::ArrayExpression { elements } => Node::ArrayExpression {
                elements: elements
                    .into_iter()
                    .map(|element| element.map(|node| f(node)).transpose())
                    .collect::<std::result::Result<_, _>>()?,
            },
            Node::ObjectExpression { properties } => Node::ObjectExpression {
                properties: map_vec(properties, f)?,
            },
            Node::Property { key, value, kind } => Node::Property {
                key: map_box(key, f)?,
                value: map_box(value, f)?,
                kind,
            },
            Node::SequenceExpression { expressions } => Node::SequenceExpression {
                expressions: map_vec(expressions, f)?,
            },
            Node::UnaryExpression { operator, argument } => Node::UnaryExpression {
                operator,
                argument: map_box(argument, f)?,
            },
            Node::BinaryExpression {
                operator,
                left,
                right,
            } => Node::BinaryExpression {
                operator,
                left: map_box(left, f)?,
                right: map_box(right, f)?,
            },
            Node::AssignmentExpression {
                operator,
                left,
                right,
            } => Node::AssignmentExpression {
                operator,
                left: map_box(left, f)?,
                right: map_box(right, f)?,
            },
            Node::UpdateExpression {
                operator,
                argument,
                prefix,
            } => Node::UpdateExpression {
                operator,
                argument: map_box(argument, f)?,
                prefix,
            },
            Node::LogicalExpression {
                operator,
                left,
                right,
            } => Node::LogicalExpression {
                operator,
                left: map_box(left, f)?,
                right: map_box(right, f)?,
            },
            Node::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => Node::ConditionalExpression {
                test: map_box(test, f)?,
                consequent: map_box(consequent, f)?,
                alternate: map_box(alternate, f)?,
            },
            Node::NewExpression { callee, arguments } => Node::NewExpression {
                callee: map_box(callee, f)?,
                arguments: map_vec(arguments, f)?,
            },
            Node::CallExpression { callee, arguments } => Node::CallExpression {
                callee: map_box(callee, f)?,
                arguments: map_vec(arguments, f)?,
            },
            Node::MemberExpression {
                object,
                property,
                computed,
            } => Node::MemberExpression {
                object: map_box(object, f)?,
                property: map_box(property, f)?,
                computed,
            },
            leaf @ (Node::EmptyStatement
            | Node::DebuggerStatement
            | Node::ThisExpression
            | Node::Identifier { .. }
            | Node::Literal { .. }) => leaf,
        };
        Ok(node)
    }

    /// Total number of nodes in this subtree, including itself
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(|child| child.size()).sum::<usize>()
    }

    /// Literal payload, if this node is a literal
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Node::Literal { value } => Some(value),
            _ => None,
        }
    }

    /// Identifier name, failing on any other node shape
    pub fn identifier_name(&self) -> Result<&str> {
        match self {
            Node::Identifier { name } => Ok(name),
            other => Err(CoreError::InvalidNode(format!(
                "expected Identifier, found {}",
                other.kind()
            ))),
        }
    }

    pub fn is_empty_statement(&self) -> bool {
        matches!(self, Node::EmptyStatement)
    }

    /// Returns true for the `"use strict"` directive statement
    pub fn is_use_strict_directive(&self) -> bool {
        match self {
            Node::ExpressionStatement { expression } => matches!(
                expression.as_literal(),
                Some(Value::String(s)) if s == "use strict"
            ),
            _ => false,
        }
    }
}

fn map_box<E, F>(node: Box<Node>, f: &mut F) -> std::result::Result<Box<Node>, E>
where
    F: FnMut(Node) -> std::result::Result<Node, E>,
{
    f(*node).map(Box::new)
}

fn map_opt<E, F>(node: Option<Box<Node>>, f: &mut F) -> std::result::Result<Option<Box<Node>>, E>
where
    F: FnMut(Node) -> std::result::Result<Node, E>,
{
    node.map(|node| map_box(node, f)).transpose()
}

fn map_vec<E, F>(nodes: Vec<Node>, f: &mut F) -> std::result::Result<Vec<Node>, E>
where
    F: FnMut(Node) -> std::result::Result<Node, E>,
{
    nodes.into_iter().map(|node| f(node)).collect()
}

// Constructors
impl Node {
    /// Create a program
    pub fn program(body: Vec<Node>) -> Self {
        Node::Program { body }
    }

    /// Create a block statement
    pub fn block(body: Vec<Node>) -> Self {
        Node::BlockStatement { body }
    }

    /// Wrap an expression into an expression statement
    pub fn expression_statement(expression: Node) -> Self {
        Node::ExpressionStatement {
            expression: Box::new(expression),
        }
    }

    pub fn empty() -> Self {
        Node::EmptyStatement
    }

    /// Create an if statement
    pub fn if_statement(test: Node, consequent: Node, alternate: Option<Node>) -> Self {
        Node::IfStatement {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
        }
    }

    /// Create a for statement
    pub fn for_statement(
        init: Option<Node>,
        test: Option<Node>,
        update: Option<Node>,
        body: Node,
    ) -> Self {
        Node::ForStatement {
            init: init.map(Box::new),
            test: test.map(Box::new),
            update: update.map(Box::new),
            body: Box::new(body),
        }
    }

    pub fn for_in_statement(left: Node, right: Node, body: Node) -> Self {
        Node::ForInStatement {
            left: Box::new(left),
            right: Box::new(right),
            body: Box::new(body),
        }
    }

    pub fn while_statement(test: Node, body: Node) -> Self {
        Node::WhileStatement {
            test: Box::new(test),
            body: Box::new(body),
        }
    }

    pub fn with_statement(object: Node, body: Node) -> Self {
        Node::WithStatement {
            object: Box::new(object),
            body: Box::new(body),
        }
    }

    pub fn return_statement(argument: Option<Node>) -> Self {
        Node::ReturnStatement {
            argument: argument.map(Box::new),
        }
    }

    pub fn try_statement(block: Node, handler: Option<Node>, finalizer: Option<Node>) -> Self {
        Node::TryStatement {
            block: Box::new(block),
            handler: handler.map(Box::new),
            finalizer: finalizer.map(Box::new),
        }
    }

    pub fn catch_clause(param: &str, body: Node) -> Self {
        Node::CatchClause {
            param: Box::new(Node::identifier(param)),
            body: Box::new(body),
        }
    }

    /// Create a `var` declaration from `(name, init)` pairs
    pub fn var_declaration(declarators: Vec<(&str, Option<Node>)>) -> Self {
        Node::VariableDeclaration {
            declarations: declarators
                .into_iter()
                .map(|(name, init)| Node::declarator(name, init))
                .collect(),
            kind: DeclarationKind::Var,
        }
    }

    pub fn declarator(name: &str, init: Option<Node>) -> Self {
        Node::VariableDeclarator {
            id: Box::new(Node::identifier(name)),
            init: init.map(Box::new),
        }
    }

    /// Create a function declaration
    pub fn function_declaration(name: &str, params: Vec<&str>, body: Vec<Node>) -> Self {
        Node::FunctionDeclaration {
            id: Some(Box::new(Node::identifier(name))),
            params: params.into_iter().map(Node::identifier).collect(),
            body: Box::new(Node::block(body)),
        }
    }

    /// Create an anonymous function expression
    pub fn function_expression(params: Vec<&str>, body: Vec<Node>) -> Self {
        Node::FunctionExpression {
            id: None,
            params: params.into_iter().map(Node::identifier).collect(),
            body: Box::new(Node::block(body)),
        }
    }

    /// Create a literal
    pub fn literal(value: impl Into<Value>) -> Self {
        Node::Literal {
            value: value.into(),
        }
    }

    pub fn number(n: f64) -> Self {
        Node::literal(Value::Number(n))
    }

    pub fn string(s: &str) -> Self {
        Node::literal(Value::string(s))
    }

    pub fn boolean(b: bool) -> Self {
        Node::literal(Value::Bool(b))
    }

    pub fn null() -> Self {
        Node::literal(Value::Null)
    }

    pub fn undefined() -> Self {
        Node::literal(Value::Undefined)
    }

    pub fn identifier(name: &str) -> Self {
        Node::Identifier {
            name: name.to_string(),
        }
    }

    pub fn this() -> Self {
        Node::ThisExpression
    }

    /// Create a dot access (`object.name`)
    pub fn member(object: Node, name: &str) -> Self {
        Node::MemberExpression {
            object: Box::new(object),
            property: Box::new(Node::identifier(name)),
            computed: false,
        }
    }

    /// Create a bracket access (`object[property]`)
    pub fn computed_member(object: Node, property: Node) -> Self {
        Node::MemberExpression {
            object: Box::new(object),
            property: Box::new(property),
            computed: true,
        }
    }

    pub fn sequence(expressions: Vec<Node>) -> Self {
        Node::SequenceExpression { expressions }
    }

    /// Create an array literal without holes
    pub fn array(elements: Vec<Node>) -> Self {
        Node::ArrayExpression {
            elements: elements.into_iter().map(Some).collect(),
        }
    }

    pub fn object(properties: Vec<Node>) -> Self {
        Node::ObjectExpression { properties }
    }

    /// Create a data property
    pub fn property(key: Node, value: Node) -> Self {
        Node::Property {
            key: Box::new(key),
            value: Box::new(value),
            kind: PropertyKind::Init,
        }
    }

    /// Create a unary expression
    pub fn unary(operator: UnaryOperator, argument: Node) -> Self {
        Node::UnaryExpression {
            operator,
            argument: Box::new(argument),
        }
    }

    /// Create `!argument`
    pub fn not(argument: Node) -> Self {
        Node::unary(UnaryOperator::Not, argument)
    }

    /// Create a binary expression
    pub fn binary(left: Node, operator: BinaryOperator, right: Node) -> Self {
        Node::BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a logical expression
    pub fn logical(left: Node, operator: LogicalOperator, right: Node) -> Self {
        Node::LogicalExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a plain assignment (`left = right`)
    pub fn assign(left: Node, right: Node) -> Self {
        Node::AssignmentExpression {
            operator: AssignmentOperator::Assign,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn update(operator: UpdateOperator, argument: Node, prefix: bool) -> Self {
        Node::UpdateExpression {
            operator,
            argument: Box::new(argument),
            prefix,
        }
    }

    /// Create a ternary expression
    pub fn conditional(test: Node, consequent: Node, alternate: Node) -> Self {
        Node::ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    /// Create a call expression
    pub fn call(callee: Node, arguments: Vec<Node>) -> Self {
        Node::CallExpression {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// Create a call to a named function (`name(arguments)`)
    pub fn call_named(name: &str, arguments: Vec<Node>) -> Self {
        Node::call(Node::identifier(name), arguments)
    }

    pub fn new_expression(callee: Node, arguments: Vec<Node>) -> Self {
        Node::NewExpression {
            callee: Box::new(callee),
            arguments,
        }
    }
}
