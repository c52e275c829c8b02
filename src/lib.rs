//! # dotpath
//!
//! A toolbox of generic routines over nested dynamic values: path-based
//! recursive get/set/delete with a configurable separator and prefix,
//! structural deep equality, deep cloning with a per-value override hook,
//! and a fine-grained runtime kind classifier.
//!
//! All operations are stateless and synchronous; the library keeps no
//! caches or registries and never retains references across calls.
//! Equality and cloning recurse without cycle detection, so behaviour on
//! cyclic structures is undefined.
//!
//! ## Modules
//!
//! - [`value`] - The [`Value`] sum type with kind classification, deep
//!   equality and deep cloning
//! - [`path`] - [`rget`]/[`rset`]/[`rdelete`] access to nested values by
//!   separator-delimited string paths
//!
//! ```
//! use dotpath::{rget, rset, from_json, PathOptions, Value};
//!
//! let mut doc = from_json(r#"{"users": {"user1": {"username": "USER1"}}}"#).unwrap();
//! let options = PathOptions::default();
//!
//! assert_eq!(
//!     rget(&doc, "users.user1.username", &options),
//!     Some(&Value::String("USER1".into()))
//! );
//!
//! rset(&mut doc, "users.user1.active", Value::Bool(true), &options).unwrap();
//! assert_eq!(rget(&doc, "users.user1.active", &options), Some(&Value::Bool(true)));
//! ```

pub mod path;
pub mod value;

pub use path::{rdelete, rget, rset, PathError, PathOptions};
pub use value::{
    deep_clone, equals, from_json, from_yaml, to_json, to_yaml, CustomValue, Kind, Map, Pattern,
    Value,
};
