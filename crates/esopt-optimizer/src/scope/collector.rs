//! Default scope oracle
//!
//! Collects, for the Program and every function, the names a `var`
//! declaration or a function declaration hoists into it. Functions also
//! declare `arguments` and their parameters, first.

use esopt_core::ast::DeclarationKind;
use esopt_core::Node;

use super::oracle::{Scope, ScopeId, ScopeKind, ScopeMap, ScopeOracle};
use crate::error::Result;

/// `var`-hoisting scope collector
#[derive(Debug, Clone, Copy, Default)]
pub struct VarScopeCollector;

impl VarScopeCollector {
    /// Create a new scope collector
    pub fn new() -> Self {
        Self
    }

    /// Collect the scopes of a tree
    pub fn collect(&self, root: &Node) -> Result<ScopeMap> {
        let mut collection = Collection::default();
        collection.walk(root, None)?;
        Ok(collection.scopes)
    }
}

impl ScopeOracle for VarScopeCollector {
    fn scopes_of(&self, root: &Node) -> Result<ScopeMap> {
        self.collect(root)
    }
}

#[derive(Default)]
struct Collection {
    scopes: ScopeMap,
    next_id: usize,
}

impl Collection {
    fn open(&mut self, scope: Scope) -> ScopeId {
        let id = ScopeId(self.next_id);
        self.next_id += 1;
        self.scopes.insert(id, scope);
        id
    }

    fn declare(&mut self, current: Option<ScopeId>, name: &str) {
        // Declarations outside any scope have nowhere to hoist to
        if let Some(scope) = current.and_then(|id| self.scopes.get_mut(id)) {
            scope.declare(name);
        }
    }

    fn walk(&mut self, node: &Node, current: Option<ScopeId>) -> Result<()> {
        let current = match node {
            Node::Program { .. } => Some(self.open(Scope::new(ScopeKind::Program))),
            Node::FunctionDeclaration { id, params, .. } => {
                if let Some(id) = id {
                    self.declare(current, id.identifier_name()?);
                }
                Some(self.open(function_scope(params)?))
            }
            Node::FunctionExpression { params, .. } => Some(self.open(function_scope(params)?)),
            Node::VariableDeclaration {
                declarations,
                kind: DeclarationKind::Var,
            } => {
                for declarator in declarations {
                    if let Node::VariableDeclarator { id, .. } = declarator {
                        self.declare(current, id.identifier_name()?);
                    }
                }
                current
            }
            _ => current,
        };

        for child in node.children() {
            self.walk(child, current)?;
        }
        Ok(())
    }
}

fn function_scope(params: &[Node]) -> Result<Scope> {
    let mut scope = Scope::new(ScopeKind::Function);
    scope.declare("arguments");
    for param in params {
        scope.declare(param.identifier_name()?);
    }
    Ok(scope)
}
