//! Tree rewrite engine
//!
//! Every pipeline stage is one instantiation of [`rewrite`] with its own
//! [`Visitor`].

pub mod ancestry;
pub mod rewrite;

pub use ancestry::Ancestry;
pub use rewrite::{rewrite, Visitor};
