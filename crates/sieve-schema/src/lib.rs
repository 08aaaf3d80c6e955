//! Declarative schema validation for loosely-typed value trees
//!
//! A schema is a tree of [`SchemaNode`]s: bare kind tests, the pass-through
//! tag, or [`Descriptor`]s carrying constraints, transforms, defaults and
//! nested schemas. [`validate`] walks a value against a schema and returns
//! the normalized value or the first violation found.

mod builder;
mod callable;
mod config;
mod error;
pub mod predicates;
mod schema;
pub mod transforms;
mod validate;

pub use builder::{DescriptorBuilder, IntoSchema};
pub use callable::{DefaultValue, Predicate, Transform};
pub use config::{Config, ErrmsgPolicy};
pub use error::{SchemaError, SchemaErrorKind, TransformError};
pub use schema::{
    Body, Constraints, Descriptor, DescriptorKind, FieldMap, SchemaNode, TypeSet, Typed,
};
pub use validate::{ValidationContext, validate, validate_with};
