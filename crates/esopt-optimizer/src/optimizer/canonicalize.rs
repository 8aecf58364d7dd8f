//! Canonicalization
//!
//! Shrinks the grammar the later stages have to handle:
//! - member access is always computed, with a literal key
//! - property keys are always string literals
//! - every scope starts with one declaration of all its hoisted variables
//!   (or an empty statement), so `var` declarations turn into assignments
//! - `for` init clauses hold a bare expression or a declaration

use esopt_core::ast::DeclarationKind;
use esopt_core::Node;
use tracing::trace;

use crate::error::{OptimizeError, Result};
use crate::scope::{ScopeId, ScopeKind, ScopeMap, ScopeOracle};
use crate::traverse::{rewrite, Ancestry, Visitor};

/// Canonicalize a tree, asking `oracle` for its scopes
pub fn canonicalize(root: Node, oracle: &dyn ScopeOracle) -> Result<Node> {
    let scopes = oracle.scopes_of(&root)?;
    let mut canonicalizer = Canonicalizer::new(scopes);
    rewrite(root, &mut canonicalizer)
}

/// Canonicalizing visitor
pub struct Canonicalizer {
    scopes: ScopeMap,
    /// Id handed to the next scope node entered
    next_scope: usize,
    /// Scopes enclosing the current node
    open_scopes: Vec<ScopeId>,
}

impl Canonicalizer {
    /// Create a canonicalizer over precomputed scope records
    pub fn new(scopes: ScopeMap) -> Self {
        Self {
            scopes,
            next_scope: 0,
            open_scopes: Vec::new(),
        }
    }

    /// Statement declaring the hoisted variables of scope `id`
    fn declaration_for(&self, id: ScopeId, params: &[Node]) -> Result<Node> {
        let scope = self.scopes.get(id).ok_or(OptimizeError::MissingScope(id.0))?;

        let mut names = Vec::new();
        for name in &scope.variables {
            if scope.kind == ScopeKind::Function
                && (name == "arguments" || declares_param(params, name)?)
            {
                continue;
            }
            names.push(name.as_str());
        }

        if names.is_empty() {
            return Ok(Node::empty());
        }
        Ok(Node::var_declaration(
            names.into_iter().map(|name| (name, None)).collect(),
        ))
    }

    fn leave_scope(&mut self, node: Node) -> Result<Node> {
        let id = self.open_scopes.pop().ok_or_else(|| {
            OptimizeError::InvariantViolation(format!("unbalanced scope at {}", node.kind()))
        })?;

        match node {
            Node::Program { body } => {
                let declaration = self.declaration_for(id, &[])?;
                Ok(Node::Program {
                    body: with_declaration(declaration, body),
                })
            }
            Node::FunctionDeclaration { id: name, params, body } => {
                let declaration = self.declaration_for(id, &params)?;
                Ok(Node::FunctionDeclaration {
                    id: name,
                    params,
                    body: Box::new(declare_in_body(declaration, *body)?),
                })
            }
            Node::FunctionExpression { id: name, params, body } => {
                let declaration = self.declaration_for(id, &params)?;
                Ok(Node::FunctionExpression {
                    id: name,
                    params,
                    body: Box::new(declare_in_body(declaration, *body)?),
                })
            }
            other => Ok(other),
        }
    }
}

impl Visitor for Canonicalizer {
    fn enter(&mut self, node: Node, _ancestry: &Ancestry) -> Result<Node> {
        if node.kind().is_scope() {
            self.open_scopes.push(ScopeId(self.next_scope));
            self.next_scope += 1;
        }

        match node {
            // The loop target is rewritten before descent, so a declaration
            // reaching `leave` is always in statement position
            Node::ForInStatement { left, right, body } => Ok(Node::ForInStatement {
                left: Box::new(for_in_target(*left)?),
                right,
                body,
            }),
            other => Ok(other),
        }
    }

    fn leave(&mut self, node: Node, _ancestry: &Ancestry) -> Result<Node> {
        match node {
            Node::Program { .. }
            | Node::FunctionDeclaration { .. }
            | Node::FunctionExpression { .. } => self.leave_scope(node),

            Node::MemberExpression {
                object,
                property,
                computed: false,
            } => {
                let name = property.identifier_name()?;
                trace!(property = name, "computed member access");
                Ok(Node::computed_member(*object, Node::string(name)))
            }

            Node::Property { key, value, kind } => Ok(Node::Property {
                key: Box::new(canonical_key(*key)?),
                value,
                kind,
            }),

            Node::VariableDeclaration { declarations, kind } => {
                ensure_var(kind)?;
                declaration_to_assignments(declarations)
            }

            Node::ForStatement {
                init,
                test,
                update,
                body,
            } => Ok(Node::ForStatement {
                init: init.and_then(|init| match *init {
                    Node::EmptyStatement => None,
                    Node::ExpressionStatement { expression } => Some(expression),
                    other => Some(Box::new(other)),
                }),
                test,
                update,
                body,
            }),

            other => Ok(other),
        }
    }
}

fn declares_param(params: &[Node], name: &str) -> Result<bool> {
    for param in params {
        if param.identifier_name()? == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Put the scope declaration first. A leading empty statement is the slot a
/// previous canonicalization left behind, so it is reused.
fn with_declaration(declaration: Node, mut body: Vec<Node>) -> Vec<Node> {
    match body.first_mut() {
        Some(first) if first.is_empty_statement() => *first = declaration,
        _ => body.insert(0, declaration),
    }
    body
}

fn declare_in_body(declaration: Node, body: Node) -> Result<Node> {
    match body {
        Node::BlockStatement { body } => Ok(Node::block(with_declaration(declaration, body))),
        other => Err(OptimizeError::InvalidNode(format!(
            "function body must be a BlockStatement, found {}",
            other.kind()
        ))),
    }
}

fn canonical_key(key: Node) -> Result<Node> {
    match key {
        Node::Identifier { name } => Ok(Node::literal(name)),
        Node::Literal { value } => Ok(Node::literal(value.to_js_string())),
        other => Err(OptimizeError::InvalidNode(format!(
            "property key must be an Identifier or a Literal, found {}",
            other.kind()
        ))),
    }
}

/// `var a = 1, b, c = 2` becomes `a = 1, c = 2`; a declaration without any
/// initializer becomes an empty statement.
fn declaration_to_assignments(declarations: Vec<Node>) -> Result<Node> {
    let mut assignments = Vec::new();
    for declarator in declarations {
        match declarator {
            Node::VariableDeclarator { id, init } => {
                if let Some(init) = init {
                    assignments.push(Node::assign(*id, *init));
                }
            }
            other => {
                return Err(OptimizeError::InvalidNode(format!(
                    "expected VariableDeclarator, found {}",
                    other.kind()
                )))
            }
        }
    }

    if assignments.is_empty() {
        return Ok(Node::empty());
    }
    Ok(Node::expression_statement(Node::sequence(assignments)))
}

fn ensure_var(kind: DeclarationKind) -> Result<()> {
    if kind != DeclarationKind::Var {
        return Err(OptimizeError::UnsupportedFeature(format!(
            "{:?} declarations",
            kind
        )));
    }
    Ok(())
}

/// `for (var k in o)` becomes `for (k in o)`; `k` is hoisted already. Any
/// other target is left alone.
fn for_in_target(left: Node) -> Result<Node> {
    let mut declarations = match left {
        Node::VariableDeclaration { declarations, kind } => {
            ensure_var(kind)?;
            declarations
        }
        other => return Ok(other),
    };
    if declarations.len() != 1 {
        return Err(OptimizeError::InvalidNode(
            "for-in declaration must declare exactly one variable".to_string(),
        ));
    }
    match declarations.remove(0) {
        Node::VariableDeclarator { id, init: None } => Ok(*id),
        Node::VariableDeclarator { init: Some(_), .. } => Err(OptimizeError::UnsupportedFeature(
            "initializer in for-in declaration".to_string(),
        )),
        other => Err(OptimizeError::InvalidNode(format!(
            "expected VariableDeclarator, found {}",
            other.kind()
        ))),
    }
}
