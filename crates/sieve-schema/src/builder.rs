//! Builder pattern for constructing schemas programmatically

use std::sync::Arc;

use sieve_value::{ObjectKey, Tuple, Value, ValueKind};

use crate::callable::{DefaultValue, Predicate, Transform};
use crate::schema::{Body, Constraints, Descriptor, DescriptorKind, FieldMap, Typed};
use crate::{SchemaError, SchemaNode, TypeSet};

/// Anything usable where a child schema is expected.
pub trait IntoSchema {
    fn into_schema(self) -> Result<SchemaNode, SchemaError>;
}

impl IntoSchema for SchemaNode {
    fn into_schema(self) -> Result<SchemaNode, SchemaError> {
        Ok(self)
    }
}

impl IntoSchema for ValueKind {
    fn into_schema(self) -> Result<SchemaNode, SchemaError> {
        Ok(SchemaNode::from(self))
    }
}

impl IntoSchema for TypeSet {
    fn into_schema(self) -> Result<SchemaNode, SchemaError> {
        Ok(SchemaNode::Type(self))
    }
}

impl IntoSchema for DescriptorBuilder {
    fn into_schema(self) -> Result<SchemaNode, SchemaError> {
        self.build()
    }
}

impl IntoSchema for Result<SchemaNode, SchemaError> {
    fn into_schema(self) -> Result<SchemaNode, SchemaError> {
        self
    }
}

#[derive(Debug, Clone)]
enum TypeSpec {
    Const,
    Enum,
    Types(TypeSet),
}

#[derive(Debug, Clone)]
enum BodySpec {
    Elements(SchemaNode),
    Fields(FieldMap),
}

/// Builder for [`Descriptor`] nodes.
///
/// Every setter mirrors one descriptor field. Child schemas are built as they
/// are added; the first failure among them (or an unresolvable type name) is
/// reported by [`DescriptorBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    type_spec: Option<TypeSpec>,
    const_value: Option<Value>,
    members: Option<Vec<Value>>,
    body: Option<BodySpec>,
    any_key: Option<SchemaNode>,
    default: Option<DefaultValue>,
    constraints: Constraints,
    pre_call: Vec<Transform>,
    post_call: Vec<Transform>,
    unexpected: bool,
    errmsg: Option<String>,
    error: Option<SchemaError>,
}

impl DescriptorBuilder {
    /// A builder without a type; `build` fails unless one is set.
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// A descriptor testing for one or more kinds.
    pub fn typed(types: impl Into<TypeSet>) -> Self {
        Self::new().ty(types)
    }

    /// A `const` descriptor accepting exactly `value`.
    pub fn constant(value: impl Into<Value>) -> Self {
        let mut builder = Self::new();
        builder.type_spec = Some(TypeSpec::Const);
        builder.value(value)
    }

    /// An `enum` descriptor accepting any of `members`.
    pub fn enumeration<V: Into<Value>>(members: impl IntoIterator<Item = V>) -> Self {
        let mut builder = Self::new();
        builder.type_spec = Some(TypeSpec::Enum);
        builder.members(members)
    }

    pub fn ty(mut self, types: impl Into<TypeSet>) -> Self {
        self.type_spec = Some(TypeSpec::Types(types.into()));
        self
    }

    /// Resolve the type from its name: `"const"`, `"enum"`, or a kind name
    /// such as `"int"` or `"dict"`.
    pub fn type_name(mut self, name: &str) -> Self {
        match name {
            "const" => self.type_spec = Some(TypeSpec::Const),
            "enum" => self.type_spec = Some(TypeSpec::Enum),
            other => match other.parse::<ValueKind>() {
                Ok(kind) => self.type_spec = Some(TypeSpec::Types(kind.into())),
                Err(err) => self.record_error(SchemaError::malformed(format!(
                    "descriptor type is not resolvable: {}",
                    err
                ))),
            },
        }
        self
    }

    /// The value a `const` descriptor must equal. On an `enum` descriptor an
    /// array or tuple here supplies the members.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.const_value = Some(value.into());
        self
    }

    /// The values an `enum` descriptor accepts.
    pub fn members<V: Into<Value>>(mut self, members: impl IntoIterator<Item = V>) -> Self {
        self.members = Some(members.into_iter().map(Into::into).collect());
        self
    }

    /// Schema shared by every element of a sequence.
    pub fn elements(mut self, schema: impl IntoSchema) -> Self {
        if let Some(schema) = self.take(schema) {
            self.body = Some(BodySpec::Elements(schema));
        }
        self
    }

    /// Schema of one map key. Keys are validated in insertion order.
    pub fn field(mut self, key: impl Into<ObjectKey>, schema: impl IntoSchema) -> Self {
        if let Some(schema) = self.take(schema) {
            self = self.empty_fields();
            if let Some(BodySpec::Fields(fields)) = &mut self.body {
                fields.insert(key.into(), schema);
            }
        }
        self
    }

    pub fn fields<K, S>(self, fields: impl IntoIterator<Item = (K, S)>) -> Self
    where
        K: Into<ObjectKey>,
        S: IntoSchema,
    {
        let mut builder = self.empty_fields();
        for (key, schema) in fields {
            builder = builder.field(key, schema);
        }
        builder
    }

    /// Schema applied to every value of a map. Ignored when field schemas are
    /// also given.
    pub fn any_key(mut self, schema: impl IntoSchema) -> Self {
        if let Some(schema) = self.take(schema) {
            self.any_key = Some(schema);
        }
        self
    }

    /// Value inserted verbatim when this node's key is absent.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultValue::Value(value.into()));
        self
    }

    /// Like [`Self::default`], producing a fresh value per substitution.
    pub fn default_with(mut self, factory: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        self.default = Some(DefaultValue::Factory(Arc::new(factory)));
        self
    }

    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.constraints.filters.push(predicate);
        self
    }

    pub fn pre_call(mut self, transform: Transform) -> Self {
        self.pre_call.push(transform);
        self
    }

    pub fn post_call(mut self, transform: Transform) -> Self {
        self.post_call.push(transform);
        self
    }

    /// `false` rejects blank values after the type test.
    pub fn blank(mut self, allowed: bool) -> Self {
        self.constraints.blank = Some(allowed);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.constraints.max_length = Some(max);
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.constraints.min_length = Some(min);
        self
    }

    /// Allow keys absent from the field schemas; they are carried over
    /// unvalidated.
    pub fn unexpected(mut self, allowed: bool) -> Self {
        self.unexpected = allowed;
        self
    }

    pub fn errmsg(mut self, message: impl Into<String>) -> Self {
        self.errmsg = Some(message.into());
        self
    }

    /// Build the descriptor node.
    pub fn build(self) -> Result<SchemaNode, SchemaError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let type_spec = self
            .type_spec
            .ok_or_else(|| SchemaError::malformed(r#"descriptor must contain "type""#))?;

        let kind = match type_spec {
            TypeSpec::Const => {
                if self.members.is_some() {
                    return Err(SchemaError::malformed(
                        r#"schema for "const" takes a single "value", not members"#,
                    ));
                }
                DescriptorKind::Const(self.const_value)
            }
            TypeSpec::Enum => {
                let from_value = match self.const_value {
                    None => None,
                    Some(Value::Array(items)) | Some(Value::Tuple(Tuple(items))) => Some(items),
                    Some(other) => {
                        return Err(SchemaError::malformed(format!(
                            r#"schema for "enum" needs a sequence as "value", got {}"#,
                            other.kind()
                        )));
                    }
                };
                DescriptorKind::Enum(self.members.or(from_value))
            }
            TypeSpec::Types(types) => {
                let body = match (self.body, self.any_key) {
                    (Some(BodySpec::Fields(fields)), _) => Body::Fields(fields),
                    (Some(BodySpec::Elements(schema)), _) => Body::Elements(schema),
                    (None, Some(schema)) => Body::AnyKey(schema),
                    (None, None) => Body::None,
                };
                DescriptorKind::Typed(Typed {
                    types,
                    constraints: self.constraints,
                    body,
                })
            }
        };

        Ok(SchemaNode::from(Descriptor {
            kind,
            pre_call: self.pre_call,
            post_call: self.post_call,
            default: self.default,
            unexpected: self.unexpected,
            errmsg: self.errmsg,
        }))
    }

    fn empty_fields(mut self) -> Self {
        if !matches!(self.body, Some(BodySpec::Fields(_))) {
            self.body = Some(BodySpec::Fields(FieldMap::new()));
        }
        self
    }

    fn take(&mut self, schema: impl IntoSchema) -> Option<SchemaNode> {
        match schema.into_schema() {
            Ok(schema) => Some(schema),
            Err(error) => {
                self.record_error(error);
                None
            }
        }
    }

    fn record_error(&mut self, error: SchemaError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
