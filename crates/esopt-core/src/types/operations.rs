//! Operator evaluation on literal values
//!
//! This is the one place where the numeric and coercion semantics of every
//! operator are defined. Each function returns `None` when the operation
//! cannot be evaluated on primitives (e.g. `instanceof`, `delete`), in which
//! case the expression must be left as written.

use std::cmp::Ordering;

use super::coercion::{to_int32, to_uint32};
use super::value::Value;
use crate::ast::{BinaryOperator, LogicalOperator, UnaryOperator};

impl Value {
    /// Evaluate a unary operator applied to this value
    pub fn apply_unary(&self, op: UnaryOperator) -> Option<Value> {
        match op {
            UnaryOperator::Not => Some(Value::Bool(!self.to_boolean())),
            UnaryOperator::BitNot => Some(Value::Number(!to_int32(self.to_number()) as f64)),
            UnaryOperator::Plus => Some(Value::Number(self.to_number())),
            UnaryOperator::Minus => Some(Value::Number(-self.to_number())),
            UnaryOperator::Void => Some(Value::Undefined),
            UnaryOperator::TypeOf => Some(Value::string(self.type_of())),
            UnaryOperator::Delete => None,
        }
    }

    /// Evaluate `self op rhs`
    pub fn apply_binary(&self, op: BinaryOperator, rhs: &Value) -> Option<Value> {
        let value = match op {
            BinaryOperator::Add => {
                if self.is_string() || rhs.is_string() {
                    Value::String(self.to_js_string() + &rhs.to_js_string())
                } else {
                    Value::Number(self.to_number() + rhs.to_number())
                }
            }
            BinaryOperator::Sub => Value::Number(self.to_number() - rhs.to_number()),
            BinaryOperator::Mul => Value::Number(self.to_number() * rhs.to_number()),
            BinaryOperator::Div => Value::Number(self.to_number() / rhs.to_number()),
            // f64 `%` truncates toward zero and keeps the dividend's sign,
            // matching the language's remainder
            BinaryOperator::Rem => Value::Number(self.to_number() % rhs.to_number()),

            BinaryOperator::BitAnd => int32_op(self, rhs, |a, b| a & b),
            BinaryOperator::BitOr => int32_op(self, rhs, |a, b| a | b),
            BinaryOperator::BitXor => int32_op(self, rhs, |a, b| a ^ b),
            BinaryOperator::Shl => {
                let shift = to_uint32(rhs.to_number()) & 31;
                Value::Number(to_int32(self.to_number()).wrapping_shl(shift) as f64)
            }
            BinaryOperator::Shr => {
                let shift = to_uint32(rhs.to_number()) & 31;
                Value::Number((to_int32(self.to_number()) >> shift) as f64)
            }
            BinaryOperator::UShr => {
                let shift = to_uint32(rhs.to_number()) & 31;
                Value::Number((to_uint32(self.to_number()) >> shift) as f64)
            }

            BinaryOperator::Lt => Value::Bool(less_than(self, rhs) == Some(true)),
            BinaryOperator::Gt => Value::Bool(less_than(rhs, self) == Some(true)),
            BinaryOperator::LtEq => Value::Bool(less_than(rhs, self) == Some(false)),
            BinaryOperator::GtEq => Value::Bool(less_than(self, rhs) == Some(false)),

            BinaryOperator::Eq => Value::Bool(loose_equals(self, rhs)),
            BinaryOperator::NotEq => Value::Bool(!loose_equals(self, rhs)),
            BinaryOperator::StrictEq => Value::Bool(strict_equals(self, rhs)),
            BinaryOperator::StrictNotEq => Value::Bool(!strict_equals(self, rhs)),

            // Both need an object on the right; on primitives they throw.
            BinaryOperator::In | BinaryOperator::InstanceOf => return None,
        };
        Some(value)
    }

    /// Evaluate `self op rhs` for the short-circuit operators.
    ///
    /// The result is one of the operands, never a coerced boolean.
    pub fn apply_logical(&self, op: LogicalOperator, rhs: &Value) -> Value {
        match (op, self.to_boolean()) {
            (LogicalOperator::And, true) | (LogicalOperator::Or, false) => rhs.clone(),
            (LogicalOperator::And, false) | (LogicalOperator::Or, true) => self.clone(),
        }
    }
}

fn int32_op(lhs: &Value, rhs: &Value, f: impl Fn(i32, i32) -> i32) -> Value {
    let result = f(to_int32(lhs.to_number()), to_int32(rhs.to_number()));
    Value::Number(result as f64)
}

/// Abstract relational comparison `lhs < rhs`.
///
/// `None` stands for the "undefined" outcome produced by NaN operands, which
/// makes every relational operator false.
fn less_than(lhs: &Value, rhs: &Value) -> Option<bool> {
    if let (Value::String(a), Value::String(b)) = (lhs, rhs) {
        // strings compare by UTF-16 code units, not by scalar values
        return Some(a.encode_utf16().cmp(b.encode_utf16()) == Ordering::Less);
    }

    let (a, b) = (lhs.to_number(), rhs.to_number());
    if a.is_nan() || b.is_nan() {
        None
    } else {
        Some(a < b)
    }
}

fn strict_equals(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        // IEEE comparison: NaN never equal, +0 equals -0
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

fn loose_equals(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,
        (Value::Number(a), Value::String(_)) => *a == rhs.to_number(),
        (Value::String(_), Value::Number(b)) => lhs.to_number() == *b,
        (Value::Bool(_), _) => loose_equals(&Value::Number(lhs.to_number()), rhs),
        (_, Value::Bool(_)) => loose_equals(lhs, &Value::Number(rhs.to_number())),
        _ => strict_equals(lhs, rhs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn binary(l: Value, op: BinaryOperator, r: Value) -> Value {
        l.apply_binary(op, &r).unwrap()
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(num(1.0).apply_unary(UnaryOperator::Not), Some(Value::Bool(false)));
        assert_eq!(num(1.0).apply_unary(UnaryOperator::BitNot), Some(num(-2.0)));
        assert_eq!(Value::string("3").apply_unary(UnaryOperator::Plus), Some(num(3.0)));
        assert_eq!(num(1.0).apply_unary(UnaryOperator::Minus), Some(num(-1.0)));
        assert_eq!(num(0.0).apply_unary(UnaryOperator::Minus), Some(num(-0.0)));
        assert_eq!(num(1.0).apply_unary(UnaryOperator::Void), Some(Value::Undefined));
        assert_eq!(
            num(1.0).apply_unary(UnaryOperator::TypeOf),
            Some(Value::string("number"))
        );
        assert_eq!(num(1.0).apply_unary(UnaryOperator::Delete), None);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(binary(num(1.0), BinaryOperator::Add, num(2.0)), num(3.0));
        assert_eq!(binary(num(1.0), BinaryOperator::Sub, num(2.0)), num(-1.0));
        assert_eq!(binary(num(1.0), BinaryOperator::Div, num(2.0)), num(0.5));
        assert_eq!(binary(num(-5.0), BinaryOperator::Rem, num(3.0)), num(-2.0));
        assert_eq!(
            binary(num(100.0), BinaryOperator::Div, num(0.0)),
            num(f64::INFINITY)
        );
        assert!(binary(num(0.0), BinaryOperator::Div, num(0.0))
            .as_number()
            .unwrap()
            .is_nan());
    }

    #[test]
    fn test_string_concatenation() {
        assert_eq!(
            binary(num(1.0), BinaryOperator::Add, Value::string("a")),
            Value::string("1a")
        );
        assert_eq!(
            binary(Value::string("x"), BinaryOperator::Add, Value::Null),
            Value::string("xnull")
        );
        assert_eq!(
            binary(Value::Bool(true), BinaryOperator::Add, num(1.0)),
            num(2.0)
        );
        assert_eq!(
            binary(Value::string("n"), BinaryOperator::Add, num(0.5)),
            Value::string("n0.5")
        );
    }

    #[test]
    fn test_bitwise_and_shifts() {
        assert_eq!(binary(num(1.0), BinaryOperator::BitAnd, num(2.0)), num(0.0));
        assert_eq!(binary(num(1.0), BinaryOperator::BitOr, num(2.0)), num(3.0));
        assert_eq!(binary(num(1.0), BinaryOperator::BitXor, num(2.0)), num(3.0));
        assert_eq!(binary(num(1.0), BinaryOperator::Shl, num(2.0)), num(4.0));
        assert_eq!(binary(num(1.0), BinaryOperator::Shr, num(2.0)), num(0.0));
        assert_eq!(binary(num(-8.0), BinaryOperator::Shr, num(1.0)), num(-4.0));
        assert_eq!(
            binary(num(-1.0), BinaryOperator::UShr, num(0.0)),
            num(4294967295.0)
        );
        assert_eq!(binary(num(1.0), BinaryOperator::Shl, num(33.0)), num(2.0));
    }

    #[test]
    fn test_relational() {
        assert_eq!(binary(num(1.0), BinaryOperator::Lt, num(2.0)), Value::Bool(true));
        assert_eq!(binary(num(1.0), BinaryOperator::Gt, num(2.0)), Value::Bool(false));
        assert_eq!(binary(num(1.0), BinaryOperator::LtEq, num(2.0)), Value::Bool(true));
        assert_eq!(binary(num(1.0), BinaryOperator::GtEq, num(2.0)), Value::Bool(false));
        assert_eq!(
            binary(Value::string("10"), BinaryOperator::Lt, Value::string("9")),
            Value::Bool(true)
        );
        assert_eq!(
            binary(Value::string("10"), BinaryOperator::Lt, num(9.0)),
            Value::Bool(false)
        );
        assert_eq!(
            binary(num(f64::NAN), BinaryOperator::LtEq, num(1.0)),
            Value::Bool(false)
        );
        assert_eq!(
            binary(num(f64::NAN), BinaryOperator::GtEq, num(1.0)),
            Value::Bool(false)
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(binary(num(1.0), BinaryOperator::Eq, num(2.0)), Value::Bool(false));
        assert_eq!(
            binary(num(1.0), BinaryOperator::Eq, Value::string("1")),
            Value::Bool(true)
        );
        assert_eq!(
            binary(num(1.0), BinaryOperator::StrictEq, Value::string("1")),
            Value::Bool(false)
        );
        assert_eq!(
            binary(Value::Null, BinaryOperator::Eq, Value::Undefined),
            Value::Bool(true)
        );
        assert_eq!(
            binary(Value::Null, BinaryOperator::Eq, num(0.0)),
            Value::Bool(false)
        );
        assert_eq!(
            binary(Value::Bool(true), BinaryOperator::Eq, Value::string("1")),
            Value::Bool(true)
        );
        assert_eq!(
            binary(num(f64::NAN), BinaryOperator::StrictNotEq, num(f64::NAN)),
            Value::Bool(true)
        );
        assert_eq!(
            binary(num(0.0), BinaryOperator::StrictEq, num(-0.0)),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_object_operators_not_evaluated() {
        assert_eq!(num(1.0).apply_binary(BinaryOperator::In, &num(2.0)), None);
        assert_eq!(
            num(1.0).apply_binary(BinaryOperator::InstanceOf, &num(2.0)),
            None
        );
    }

    #[test]
    fn test_logical_operators() {
        assert_eq!(num(0.0).apply_logical(LogicalOperator::And, &num(1.0)), num(0.0));
        assert_eq!(num(0.0).apply_logical(LogicalOperator::Or, &num(1.0)), num(1.0));
        assert_eq!(
            Value::string("a").apply_logical(LogicalOperator::And, &Value::Null),
            Value::Null
        );
        assert_eq!(
            Value::string("a").apply_logical(LogicalOperator::Or, &Value::Null),
            Value::string("a")
        );
    }
}
