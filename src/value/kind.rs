//! Runtime kind classification for values.

use std::fmt;

/// Kind is the classified category of a [`Value`](crate::value::Value).
///
/// Every value maps to exactly one kind; classification is total and never
/// fails. `Int` and `Float` are distinct kinds and never compare equal
/// across each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Undefined,
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
    Regex,
    Date,
    /// Caller-defined opaque values, see [`CustomValue`](crate::value::CustomValue).
    Custom,
}

impl Kind {
    /// Returns the lowercase name of the kind, as used in error messages
    /// and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Undefined => "undefined",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Regex => "regex",
            Kind::Date => "date",
            Kind::Custom => "custom",
        }
    }

    /// Returns true if values of this kind can hold named or indexed
    /// sub-values.
    pub fn is_container(&self) -> bool {
        matches!(self, Kind::List | Kind::Map)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Map, Pattern, Value};

    #[test]
    fn test_classification_is_total() {
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::Undefined.kind(), Kind::Undefined);
        assert_eq!(Value::Bool(true).kind(), Kind::Bool);
        assert_eq!(Value::Int(1).kind(), Kind::Int);
        assert_eq!(Value::Float(1.0).kind(), Kind::Float);
        assert_eq!(Value::String("x".into()).kind(), Kind::String);
        assert_eq!(Value::List(vec![]).kind(), Kind::List);
        assert_eq!(Value::Map(Map::new()).kind(), Kind::Map);
        assert_eq!(Value::Regex(Pattern::new(".*").unwrap()).kind(), Kind::Regex);
    }

    #[test]
    fn test_container_kinds() {
        assert!(Kind::List.is_container());
        assert!(Kind::Map.is_container());
        assert!(!Kind::Null.is_container());
        assert!(!Kind::String.is_container());
        assert!(!Kind::Custom.is_container());
    }

    #[test]
    fn test_display() {
        assert_eq!(Kind::Map.to_string(), "map");
        assert_eq!(Kind::Undefined.to_string(), "undefined");
        assert_eq!(Kind::Regex.to_string(), "regex");
    }
}
