//! Semantic analysis module
//!
//! Pure predicates over nodes, shared by the pipeline stages.

pub mod effects;
pub mod identifier;

pub use effects::has_side_effects;
pub use identifier::{is_reserved_word, is_valid_identifier};
