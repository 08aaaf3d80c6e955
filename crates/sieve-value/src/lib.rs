//! Loosely-typed value trees.
//!
//! The shape of data produced by parsing a wire format or a configuration
//! file: scalars, sequences and key-value maps, nested arbitrarily.

/// The value tree and its primitive kinds.
pub mod value;

/// Insertion-ordered map used for map values.
pub mod map;

/// Locations inside a value tree.
pub mod path;

mod value_macro;

pub use map::Map;
pub use path::{PathSegment, ValuePath};
pub use value::{NotAKey, ObjectKey, Tuple, UnknownKind, Value, ValueKind};

pub(crate) mod prelude_internal {
    #![allow(unused_imports)]
    pub use crate::map::Map;
    pub use crate::value::{ObjectKey, Tuple, Value, ValueKind};
    pub use thisisplural::Plural;
}
