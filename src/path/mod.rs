//! Path module - Recursive access to nested values by string paths.
//!
//! A path is split on a configurable separator into segments; each segment,
//! augmented with a configurable prefix, names one step into a container.
//! There is no escaping: a separator character cannot occur inside a
//! segment name.

mod delete;
mod error;
mod get;
mod set;


pub use delete::rdelete;
pub use error::PathError;
pub use get::rget;
pub use set::rset;

use std::borrow::Cow;

/// PathOptions controls how a path string is split into segments and how
/// each segment is turned into a lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOptions {
    /// Separator the path is split on. An empty separator falls back to ".".
    pub separator: String,
    /// Prefix prepended to every segment before lookup.
    pub prefix: String,
}

impl Default for PathOptions {
    fn default() -> Self {
        PathOptions {
            separator: ".".to_string(),
            prefix: String::new(),
        }
    }
}

impl PathOptions {
    /// Creates options with the given separator and no prefix.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        PathOptions {
            separator: separator.into(),
            ..PathOptions::default()
        }
    }

    /// Creates options with the given prefix and the default separator.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        PathOptions {
            prefix: prefix.into(),
            ..PathOptions::default()
        }
    }

    pub(crate) fn separator_str(&self) -> &str {
        if self.separator.is_empty() {
            "."
        } else {
            &self.separator
        }
    }

    /// Builds the lookup key for one segment. Borrows when no prefix is
    /// configured.
    pub(crate) fn lookup_key<'a>(&self, segment: &'a str) -> Cow<'a, str> {
        if self.prefix.is_empty() {
            Cow::Borrowed(segment)
        } else {
            Cow::Owned(format!("{}{}", self.prefix, segment))
        }
    }

    /// Reconstructs the full path from its segments for diagnostics, with
    /// every segment prefixed and the caller's separator between them.
    pub(crate) fn rejoin(&self, segments: &[&str]) -> String {
        segments
            .iter()
            .map(|segment| format!("{}{}", self.prefix, segment))
            .collect::<Vec<_>>()
            .join(self.separator_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PathOptions::default();
        assert_eq!(options.separator, ".");
        assert_eq!(options.prefix, "");
    }

    #[test]
    fn test_empty_separator_falls_back() {
        let options = PathOptions::with_separator("");
        assert_eq!(options.separator_str(), ".");
    }

    #[test]
    fn test_lookup_key_prefixing() {
        let plain = PathOptions::default();
        assert_eq!(plain.lookup_key("name"), "name");

        let prefixed = PathOptions::with_prefix("_");
        assert_eq!(prefixed.lookup_key("name"), "_name");
    }

    #[test]
    fn test_rejoin() {
        let options = PathOptions {
            separator: "/".to_string(),
            prefix: "_".to_string(),
        };
        assert_eq!(options.rejoin(&["a", "b", "c"]), "_a/_b/_c");
    }
}
