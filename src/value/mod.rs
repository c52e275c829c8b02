//! Value module - In-memory representation of dynamic values.
//!
//! Provides the [`Value`] sum type, runtime kind classification, deep
//! structural equality and deep cloning with a per-value override hook.

mod deep_clone;
mod equals;
mod kind;
mod value;

pub use deep_clone::deep_clone;
pub use equals::equals;
pub use kind::Kind;
pub use value::*;
