//! Pipeline stages
//!
//! Each stage is a [`Visitor`](crate::traverse::Visitor) run once over the
//! whole tree. The simplifier and the dead-code eliminator expect canonical
//! input, i.e. the output of [`canonicalize`].

pub mod canonicalize;
pub mod dead_code_elimination;
pub mod decanonicalize;
pub mod simplify;

pub use canonicalize::{canonicalize, Canonicalizer};
pub use dead_code_elimination::{eliminate_dead_code, DeadCodeEliminator};
pub use decanonicalize::{decanonicalize, Decanonicalizer};
pub use simplify::{simplify, Simplifier};
