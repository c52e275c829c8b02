//! Recursive property setter.

use super::{PathError, PathOptions};
use crate::value::{Map, Value};

/// Writes `value` at `path` inside `target`, creating missing intermediate
/// maps along the way.
///
/// The target itself must be a container, else
/// [`PathError::InvalidTarget`]. Intermediate segments that name an
/// existing non-container fail with [`PathError::InvalidIntermediate`]
/// carrying the fully reconstructed path; list intermediates must address
/// an in-bounds container. The final attribute is assigned unconditionally
/// on a map; on a list it replaces an in-bounds index or appends at
/// exactly the current length.
///
/// Not transactional: intermediates created before a failure remain in
/// place.
pub fn rset(
    target: &mut Value,
    path: &str,
    value: Value,
    options: &PathOptions,
) -> Result<(), PathError> {
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
            Value::Map(map) => {
                let next =
                    map.get_or_insert_with(key.into_owned(), || Value::Map(Map::new()));
                if !next.is_container() {
                    return Err(PathError::invalid_intermediate(options.rejoin(&segments)));
                }
                next
            }
            Value::List(items) => {
                let next = key
                    .as_ref()
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get_mut(index))
                    .ok_or_else(|| {
                        PathError::invalid_intermediate(options.rejoin(&segments))
                    })?;
                if !next.is_container() {
                    return Err(PathError::invalid_intermediate(options.rejoin(&segments)));
                }
                next
            }
            _ => return Err(PathError::invalid_intermediate(options.rejoin(&segments))),
        };
    }

    let key = options.lookup_key(attr);
    match current {
        Value::Map(map) => {
            map.set(key.into_owned(), value);
            Ok(())
        }
        Value::List(items) => {
            let index = key
                .as_ref()
                .parse::<usize>()
                .ok()
                .filter(|index| *index <= items.len())
                .ok_or_else(|| PathError::invalid_intermediate(options.rejoin(&segments)))?;
            if index == items.len() {
                items.push(value);
            } else {
                items[index] = value;
            }
            Ok(())
        }
        _ => Err(PathError::invalid_intermediate(options.rejoin(&segments))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::rget;
    use crate::value::{from_json, Kind};

    #[test]
    fn test_set_creates_missing_intermediates() {
        let mut target = Value::Map(Map::new());
        rset(&mut target, "a.b.c", Value::Int(1), &PathOptions::default()).unwrap();
        assert_eq!(
            rget(&target, "a.b.c", &PathOptions::default()),
            Some(&Value::Int(1))
        );
    }

    #[test]
    fn test_set_overwrites_final_attribute() {
        let mut target = from_json(r#"{"a": {"b": 1}}"#).unwrap();
        rset(
            &mut target,
            "a.b",
            Value::String("two".into()),
            &PathOptions::default(),
        )
        .unwrap();
        assert_eq!(
            rget(&target, "a.b", &PathOptions::default()),
            Some(&Value::String("two".into()))
        );
    }

    #[test]
    fn test_non_container_target_fails() {
        let mut target = Value::Int(4);
        let err = rset(&mut target, "a", Value::Null, &PathOptions::default()).unwrap_err();
        assert_eq!(err, PathError::invalid_target(Kind::Int));
    }

    #[test]
    fn test_non_container_intermediate_fails_with_full_path() {
        let mut target = from_json(r#"{"a": {"b": 1}}"#).unwrap();
        let err = rset(&mut target, "a.b.c", Value::Int(2), &PathOptions::default()).unwrap_err();
        assert_eq!(err, PathError::invalid_intermediate("a.b.c"));
    }

    #[test]
    fn test_prefixed_path_reconstruction_in_error() {
        let mut target = from_json(r#"{"_a": {"_b": 1}}"#).unwrap();
        let options = PathOptions::with_prefix("_");
        let err = rset(&mut target, "a.b.c", Value::Int(2), &options).unwrap_err();
        assert_eq!(err, PathError::invalid_intermediate("_a._b._c"));
    }

    #[test]
    fn test_partial_intermediates_survive_failure() {
        let mut target = from_json(r#"{"a": {"blocked": 1}}"#).unwrap();
        assert!(rset(&mut target, "a.blocked.x", Value::Null, &PathOptions::default()).is_err());
        // "a" was traversed, nothing new created below the blocker
        assert!(rget(&target, "a.blocked", &PathOptions::default()).is_some());
    }

    #[test]
    fn test_list_replace_and_append() {
        let mut target = from_json(r#"{"items": [1, 2]}"#).unwrap();
        let options = PathOptions::default();

        rset(&mut target, "items.0", Value::Int(9), &options).unwrap();
        assert_eq!(rget(&target, "items.0", &options), Some(&Value::Int(9)));

        rset(&mut target, "items.2", Value::Int(3), &options).unwrap();
        assert_eq!(target.as_map().unwrap().get("items").unwrap().as_list().unwrap().len(), 3);

        let err = rset(&mut target, "items.9", Value::Int(0), &options).unwrap_err();
        assert_eq!(err, PathError::invalid_intermediate("items.9"));
    }
}
