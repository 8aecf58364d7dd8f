//! Literal value types
//!
//! - `Value`: the scalar carried by a `Literal` node
//! - coercions: the abstract conversion operations on primitives
//! - operations: the operator table used by constant folding

pub mod coercion;
pub mod operations;
pub mod value;

pub use coercion::{number_to_string, string_to_number, to_int32, to_uint32};
pub use value::Value;
