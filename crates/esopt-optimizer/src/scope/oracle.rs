//! Scope records and the oracle interface

use std::collections::BTreeMap;
use std::fmt;

use esopt_core::Node;

use crate::error::Result;

/// Identity of a scope-introducing node.
///
/// Scopes are numbered in pre-order: the Program is `0`, then every function
/// in traversal order. Numbering by position instead of by address keeps the
/// identity stable while the tree is rebuilt by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeId(pub usize);

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of scope-introducing node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Program,
    Function,
}

/// Variables declared in one scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub kind: ScopeKind,
    /// Declared names in declaration order, without duplicates
    pub variables: Vec<String>,
}

impl Scope {
    pub fn new(kind: ScopeKind) -> Self {
        Self {
            kind,
            variables: Vec::new(),
        }
    }

    /// Declare a name; redeclarations keep the first position
    pub fn declare(&mut self, name: &str) {
        if !self.declares(name) {
            self.variables.push(name.to_string());
        }
    }

    pub fn declares(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v == name)
    }
}

/// Scope records of one tree, keyed by scope identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeMap {
    scopes: BTreeMap<ScopeId, Scope>,
}

impl ScopeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ScopeId, scope: Scope) {
        self.scopes.insert(id, scope);
    }

    pub fn get(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(&id)
    }

    pub fn get_mut(&mut self, id: ScopeId) -> Option<&mut Scope> {
        self.scopes.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ScopeId, &Scope)> {
        self.scopes.iter()
    }
}

/// Supplier of per-scope declared variables.
///
/// Consulted once per canonicalization, before the tree is rewritten.
pub trait ScopeOracle {
    fn scopes_of(&self, root: &Node) -> Result<ScopeMap>;
}
