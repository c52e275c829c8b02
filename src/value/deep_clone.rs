//! Deep copy of values.

use super::value::{Map, Value};

/// Produces a structurally equal copy of `value` with independent container
/// identity at every cloned level: mutating the result never observably
/// mutates the source.
///
/// Scalars are copied as-is. `Custom` values define their own copy
/// semantics via [`CustomValue::clone_value`](crate::value::CustomValue);
/// the hook's result is returned unmodified and unvalidated, so
/// `equals(v, deep_clone(v))` holds only as far as the hook honours it.
///
/// Recurses without cycle detection; cyclic inputs are out of contract.
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::List(items) => Value::List(items.iter().map(deep_clone).collect()),
        Value::Map(map) => Value::Map(
            map.iter()
                .map(|(key, value)| (key.clone(), deep_clone(value)))
                .collect::<Map>(),
        ),
        Value::Custom(custom) => custom.clone_value(),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{equals, from_json, CustomValue, Pattern};
    use chrono::DateTime;
    use std::sync::Arc;

    #[test]
    fn test_clone_equals_original() {
        let values = [
            Value::Null,
            Value::Undefined,
            Value::Bool(true),
            Value::Int(-7),
            Value::Float(2.5),
            Value::String("text".into()),
            from_json(r#"{"users": {"user1": {"username": "USER1"}}, "ids": [1, 2]}"#).unwrap(),
            Value::Regex(Pattern::new("[a-z]+").unwrap()),
            Value::Date(DateTime::from_timestamp_millis(1_700_000_000_000).unwrap()),
        ];
        for value in &values {
            assert!(equals(value, &deep_clone(value)), "clone of {:?}", value);
        }
    }

    #[test]
    fn test_clone_has_independent_containers() {
        let original = from_json(r#"{"users": {"user1": {"username": "USER1"}}}"#).unwrap();
        let mut copy = deep_clone(&original);

        copy.as_map_mut().unwrap().delete("users");
        assert!(copy.as_map().unwrap().is_empty());
        assert!(original.as_map().unwrap().has("users"));
    }

    #[test]
    fn test_clone_nested_list_independence() {
        let original = from_json(r#"[[1, 2], [3]]"#).unwrap();
        let mut copy = deep_clone(&original);

        copy.as_list_mut().unwrap()[0]
            .as_list_mut()
            .unwrap()
            .push(Value::Int(99));
        assert_eq!(original.as_list().unwrap()[0].as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_custom_clone_hook_is_delegated_to() {
        #[derive(Debug)]
        struct Tagged;
        impl CustomValue for Tagged {
            fn clone_value(&self) -> Value {
                Value::String("copied".into())
            }
        }

        let value = Value::Custom(Arc::new(Tagged));
        assert_eq!(deep_clone(&value), Value::String("copied".into()));
    }
}
