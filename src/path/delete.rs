//! Recursive property deleter.

use super::{PathError, PathOptions};
use crate::value::Value;

/// Removes the entry at `path` inside `target`.
///
/// Traversal mirrors [`rset`](super::rset) but never creates missing
/// intermediates: a missing key or a non-container along the way returns
/// `Ok(false)` without mutating anything. Returns `Ok(true)` iff an entry
/// was actually removed.
///
/// Two historical ambiguities are resolved here deliberately: the final
/// attribute is prefixed exactly like every other segment, and a
/// non-container target raises [`PathError::InvalidTarget`] for parity
/// with `rset`.
pub fn rdelete(target: &mut Value, path: &str, options: &PathOptions) -> Result<bool, PathError> {
    if !target.is_container() {
        return Err(PathError::invalid_target(target.kind()));
    }

    let segments: Vec<&str> = path.split(options.separator_str()).collect();
    // split always yields at least one segment
    let (attr, intermediates) = segments.split_last().unwrap_or((&"", &[]));

    let mut current = target;
    for segment in intermediates {
        let key = options.lookup_key(segment);
        current = match current {
            Value::Map(map) => match map.get_mut(key.as_ref()) {
                Some(next) if next.is_container() => next,
                _ => return Ok(false),
            },
            Value::List(items) => {
                match key
                    .as_ref()
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get_mut(index))
                {
                    Some(next) if next.is_container() => next,
                    _ => return Ok(false),
                }
            }
            _ => return Ok(false),
        };
    }

    let key = options.lookup_key(attr);
    match current {
        Value::Map(map) => Ok(map.delete(key.as_ref()).is_some()),
        Value::List(items) => match key.as_ref().parse::<usize>() {
            Ok(index) if index < items.len() => {
                items.remove(index);
                Ok(true)
            }
            _ => Ok(false),
        },
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::rget;
    use crate::value::{from_json, Kind};

    #[test]
    fn test_delete_removes_entry() {
        let mut target = from_json(r#"{"a": {"b": 1, "c": 2}}"#).unwrap();
        let options = PathOptions::default();

        assert_eq!(rdelete(&mut target, "a.b", &options), Ok(true));
        assert_eq!(rget(&target, "a.b", &options), None);
        assert_eq!(rget(&target, "a.c", &options), Some(&Value::Int(2)));
    }

    #[test]
    fn test_delete_absent_is_false() {
        let mut target = from_json(r#"{"a": {"b": 1}}"#).unwrap();
        let options = PathOptions::default();

        assert_eq!(rdelete(&mut target, "a.x", &options), Ok(false));
        assert_eq!(rdelete(&mut target, "x.y.z", &options), Ok(false));
        // blocked by a non-container intermediate
        assert_eq!(rdelete(&mut target, "a.b.c", &options), Ok(false));
    }

    #[test]
    fn test_non_container_target_fails() {
        let mut target = Value::String("scalar".into());
        let err = rdelete(&mut target, "a", &PathOptions::default()).unwrap_err();
        assert_eq!(err, PathError::invalid_target(Kind::String));
    }

    #[test]
    fn test_final_attribute_is_prefixed() {
        let mut target = from_json(r#"{"_a": {"_b": 1}}"#).unwrap();
        let options = PathOptions::with_prefix("_");

        assert_eq!(rdelete(&mut target, "a.b", &options), Ok(true));
        assert!(!rget(&target, "a", &options).unwrap().as_map().unwrap().has("_b"));
    }

    #[test]
    fn test_delete_list_element() {
        let mut target = from_json(r#"{"items": [1, 2, 3]}"#).unwrap();
        let options = PathOptions::default();

        assert_eq!(rdelete(&mut target, "items.1", &options), Ok(true));
        assert_eq!(
            target.as_map().unwrap().get("items"),
            Some(&from_json("[1, 3]").unwrap())
        );
        assert_eq!(rdelete(&mut target, "items.5", &options), Ok(false));
    }
}
