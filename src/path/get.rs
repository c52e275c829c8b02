//! Recursive property getter.

use super::PathOptions;
use crate::value::Value;

/// Reads the value at `path` inside `target`.
///
/// The path is split on the options' separator and walked left to right;
/// map segments look up the prefixed key, list segments parse the prefixed
/// key as an index. Any missing key, unparsable index or non-container
/// along the way short-circuits to `None` — `rget` never fails.
///
/// An empty path holds a single empty segment and looks up the
/// empty-named key on `target`.
pub fn rget<'a>(target: &'a Value, path: &str, options: &PathOptions) -> Option<&'a Value> {
    let mut current = target;
    for segment in path.split(options.separator_str()) {
        let key = options.lookup_key(segment);
        current = match current {
            Value::Map(map) => map.get(key.as_ref())?,
            Value::List(items) => items.get(key.as_ref().parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
