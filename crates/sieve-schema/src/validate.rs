//! Value validation
//!
//! # Architecture
//!
//! Validation is one recursive walk over the value and the schema together:
//! - `ValidationContext::apply`: dispatches on the [`SchemaNode`] variant
//! - `apply_descriptor`: runs a descriptor's steps in fixed order
//!   (`pre_call`, kind test, constraints, body, `post_call`)
//! - `compound` / `record`: recurse into sequence elements and map entries
//!
//! # Error Handling
//!
//! Validation is fail-fast: the first violation aborts the walk and is
//! returned as a [`SchemaError`]. A container that sees a nested failure
//! rewrites its message with the container's `errmsg` (see
//! [`crate::ErrmsgPolicy`]) before passing it on.

mod compound;
mod constraints;
mod context;
mod record;

pub use context::ValidationContext;

use sieve_value::Value;

use crate::schema::{Body, Descriptor, DescriptorKind, Typed};
use crate::{Config, SchemaError, SchemaErrorKind, SchemaNode};

use context::for_label;

// =============================================================================
// Public API
// =============================================================================

/// Validate `value` against `schema`, returning the normalized value.
///
/// The root is labelled `"Top-level"` in diagnostics.
///
/// # Example
///
/// ```
/// use sieve_schema::{validate, DescriptorBuilder};
/// use sieve_value::{value, ValueKind};
///
/// let schema = DescriptorBuilder::typed(ValueKind::Map)
///     .field("a", ValueKind::Integer)
///     .field("b", DescriptorBuilder::typed(ValueKind::Integer).default(3))
///     .build()
///     .unwrap();
/// let output = validate(value!({"a": 1}), &schema).unwrap();
/// assert_eq!(output, value!({"a": 1, "b": 3}));
/// ```
pub fn validate(value: Value, schema: &SchemaNode) -> Result<Value, SchemaError> {
    validate_with(value, schema, &Config::default())
}

/// Validate with explicit settings.
pub fn validate_with(
    value: Value,
    schema: &SchemaNode,
    config: &Config,
) -> Result<Value, SchemaError> {
    let mut ctx = ValidationContext::new(config);
    ctx.apply(value, schema, &config.root_label)
}

// =============================================================================
// Dispatcher
// =============================================================================

impl ValidationContext<'_> {
    /// Validate one value against one schema node. `label` names the value in
    /// messages: the root label, or the map key the value was found under.
    pub fn apply(
        &mut self,
        object: Value,
        schema: &SchemaNode,
        label: &str,
    ) -> Result<Value, SchemaError> {
        tracing::trace!(label, kind = %object.kind(), "apply schema node");

        match schema {
            SchemaNode::PassThrough => Ok(object),
            SchemaNode::Type(types) => {
                if types.matches(&object) {
                    return Ok(object);
                }
                Err(self.error(
                    None,
                    SchemaErrorKind::TypeMismatch {
                        expected: types.clone(),
                        actual: object.kind(),
                    },
                    format!(
                        r#""{}" is not type of "{}"{}"#,
                        object,
                        types,
                        for_label(label)
                    ),
                ))
            }
            SchemaNode::Descriptor(descriptor) => self.apply_descriptor(object, descriptor, label),
        }
    }

    fn apply_descriptor(
        &mut self,
        mut object: Value,
        descriptor: &Descriptor,
        label: &str,
    ) -> Result<Value, SchemaError> {
        object = self.run_transforms(object, &descriptor.pre_call)?;

        let errmsg = descriptor.errmsg.as_deref();
        object = match &descriptor.kind {
            DescriptorKind::Const(None) => {
                return Err(self.error(
                    errmsg,
                    SchemaErrorKind::Malformed,
                    r#"schema for "const" must contain "value""#,
                ));
            }
            DescriptorKind::Const(Some(expected)) => {
                if !object.numeric_eq(expected) {
                    return Err(self.error(
                        errmsg,
                        SchemaErrorKind::ConstMismatch,
                        format!(r#""{}" is not allowed as "{}""#, object, label),
                    ));
                }
                object
            }
            DescriptorKind::Enum(None) => {
                return Err(self.error(
                    errmsg,
                    SchemaErrorKind::Malformed,
                    r#"schema for "enum" must contain "value""#,
                ));
            }
            DescriptorKind::Enum(Some(members)) => {
                if !members.iter().any(|member| object.numeric_eq(member)) {
                    return Err(self.error(
                        errmsg,
                        SchemaErrorKind::NotInEnum,
                        format!(
                            r#""{}" is not in enum "{}""#,
                            object,
                            Value::Array(members.clone())
                        ),
                    ));
                }
                object
            }
            DescriptorKind::Typed(typed) => self.apply_typed(object, descriptor, typed, label)?,
        };

        self.run_transforms(object, &descriptor.post_call)
    }

    fn apply_typed(
        &mut self,
        object: Value,
        descriptor: &Descriptor,
        typed: &Typed,
        label: &str,
    ) -> Result<Value, SchemaError> {
        let errmsg = descriptor.errmsg.as_deref();
        if !typed.types.matches(&object) {
            return Err(self.error(
                errmsg,
                SchemaErrorKind::TypeMismatch {
                    expected: typed.types.clone(),
                    actual: object.kind(),
                },
                format!(
                    r#"expected type "{}"{}; got {}"#,
                    typed.types,
                    for_label(label),
                    object.kind()
                ),
            ));
        }

        self.check_constraints(&object, &typed.constraints, errmsg, label)?;

        match (&typed.body, object) {
            (Body::Elements(schema), Value::Array(items)) => self
                .apply_elements(items, schema, descriptor, label)
                .map(Value::Array),
            (Body::Elements(schema), Value::Tuple(items)) => self
                .apply_elements(items.0, schema, descriptor, label)
                .map(|items| Value::Tuple(items.into_iter().collect())),
            (Body::Fields(fields), Value::Map(entries)) => self
                .apply_fields(entries, fields, descriptor, label)
                .map(Value::Map),
            (Body::AnyKey(schema), Value::Map(entries)) => self
                .apply_any_key(entries, schema, descriptor)
                .map(Value::Map),
            (_, object) => Ok(object),
        }
    }

    fn run_transforms(
        &self,
        mut object: Value,
        transforms: &[crate::Transform],
    ) -> Result<Value, SchemaError> {
        for transform in transforms {
            object = transform.apply(object).map_err(|err| {
                tracing::debug!(transform = transform.name(), path = %self.path(), "transform failed");
                SchemaError::new(SchemaErrorKind::Transform, err.0, self.path())
            })?;
        }
        Ok(object)
    }
}
