//! Structural equality for values.

use std::sync::Arc;

use super::value::{Map, Value};

/// Deep structural comparison of two values.
///
/// Symmetric and total; recurses without cycle detection, so cyclic inputs
/// are out of contract. Kinds must match for two values to be equal, with
/// one exception inside maps: an entry holding [`Value::Undefined`] on one
/// side is treated as absent on that side.
///
/// `Regex` values compare by pattern source, `Date` values by instant, and
/// `Custom` values by reference identity.
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Undefined, Value::Undefined) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(a, b)| equals(a, b))
        }
        (Value::Map(x), Value::Map(y)) => map_equals(x, y),
        (Value::Regex(x), Value::Regex(y)) => x.as_str() == y.as_str(),
        (Value::Date(x), Value::Date(y)) => x == y,
        (Value::Custom(x), Value::Custom(y)) => Arc::ptr_eq(x, y),
        _ => false,
    }
}

fn map_equals(a: &Map, b: &Map) -> bool {
    for (name, left) in a.iter() {
        match b.get(name) {
            Some(right) => {
                if !equals(left, right) {
                    return false;
                }
            }
            // An undefined entry counts as absent.
            None => {
                if !left.is_undefined() {
                    return false;
                }
            }
        }
    }
    for (name, right) in b.iter() {
        if !right.is_undefined() && !a.has(name) {
            return false;
        }
    }
    true
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        map_equals(self, other)
    }
}
