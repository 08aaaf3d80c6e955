//! Schema representation types
//!
//! A schema is a tree of [`SchemaNode`]s. Nodes are immutable once built and
//! shared through `Arc`, so one schema can validate any number of values,
//! from any number of threads.

use std::sync::Arc;

use sieve_value::{Map, ObjectKey, Value, ValueKind};

use crate::callable::{DefaultValue, Predicate, Transform};
use crate::{Config, SchemaError};

/// A single validation directive, possibly nesting child directives.
#[derive(Debug, Clone)]
pub enum SchemaNode {
    /// Instance-of test against one or more kinds; the value passes through
    /// unchanged and no other check applies.
    Type(TypeSet),
    /// Accepts any value unchanged.
    PassThrough,
    Descriptor(Arc<Descriptor>),
}

impl SchemaNode {
    pub fn pass_through() -> Self {
        Self::PassThrough
    }

    pub fn any_of(kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        Self::Type(TypeSet::any_of(kinds))
    }

    pub fn descriptor(&self) -> Option<&Descriptor> {
        match self {
            Self::Descriptor(descriptor) => Some(descriptor),
            Self::Type(_) | Self::PassThrough => None,
        }
    }

    /// The `default` of a descriptor node; bare nodes never have one.
    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.descriptor().and_then(|d| d.default.as_ref())
    }

    /// Validate `value` against this schema with the default [`Config`].
    pub fn validate(&self, value: Value) -> Result<Value, SchemaError> {
        crate::validate(value, self)
    }

    pub fn validate_with(&self, value: Value, config: &Config) -> Result<Value, SchemaError> {
        crate::validate_with(value, self, config)
    }
}

impl From<ValueKind> for SchemaNode {
    fn from(kind: ValueKind) -> Self {
        Self::Type(TypeSet::from(kind))
    }
}

impl From<TypeSet> for SchemaNode {
    fn from(types: TypeSet) -> Self {
        Self::Type(types)
    }
}

impl From<Descriptor> for SchemaNode {
    fn from(descriptor: Descriptor) -> Self {
        Self::Descriptor(Arc::new(descriptor))
    }
}

/// Parses a bare tag: `"const"` is the pass-through tag, anything else must
/// name a value kind. A bare `"enum"` has no members and is rejected.
impl core::str::FromStr for SchemaNode {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "const" => Ok(Self::PassThrough),
            "enum" => Err(SchemaError::malformed(
                r#"schema "enum" must be a descriptor with "value""#,
            )),
            other => other.parse::<ValueKind>().map(Self::from).map_err(|_| {
                SchemaError::malformed(format!(
                    r#"schema must be type, descriptor, type set or "const"/"enum"; got "{}""#,
                    other
                ))
            }),
        }
    }
}

/// One or more alternative kinds; a value matches if its kind is any of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeSet(Vec<ValueKind>);

impl TypeSet {
    /// Duplicates are dropped, first occurrence order is kept.
    pub fn any_of(kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        let mut set = Vec::new();
        for kind in kinds {
            if !set.contains(&kind) {
                set.push(kind);
            }
        }
        Self(set)
    }

    pub fn kinds(&self) -> &[ValueKind] {
        &self.0
    }

    pub fn contains(&self, kind: ValueKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn matches(&self, value: &Value) -> bool {
        self.contains(value.kind())
    }
}

impl From<ValueKind> for TypeSet {
    fn from(kind: ValueKind) -> Self {
        Self(vec![kind])
    }
}

impl<const N: usize> From<[ValueKind; N]> for TypeSet {
    fn from(kinds: [ValueKind; N]) -> Self {
        Self::any_of(kinds)
    }
}

impl core::fmt::Display for TypeSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let [kind] = self.0.as_slice() {
            return write!(f, "{}", kind);
        }
        write!(f, "(")?;
        for (i, kind) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", kind)?;
        }
        write!(f, ")")
    }
}

/// A schema node expressed as a type plus optional modifiers.
///
/// Built with [`crate::DescriptorBuilder`].
#[derive(Debug, Clone)]
pub struct Descriptor {
    pub kind: DescriptorKind,
    /// Applied in order before the type test
    pub pre_call: Vec<Transform>,
    /// Applied in order after all checks; the output is not re-validated
    pub post_call: Vec<Transform>,
    /// Substituted when this node's key is absent from the enclosing map
    pub default: Option<DefaultValue>,
    /// Carry keys absent from `Fields` into the result instead of failing
    pub unexpected: bool,
    /// Replaces the message of failures raised at this node
    pub errmsg: Option<String>,
}

#[derive(Debug, Clone)]
pub enum DescriptorKind {
    /// The value must equal the given value. `None` is a malformed schema,
    /// reported when a value reaches this node.
    Const(Option<Value>),
    /// The value must be one of the given values. `None` is malformed, as
    /// for `Const`.
    Enum(Option<Vec<Value>>),
    Typed(Typed),
}

#[derive(Debug, Clone)]
pub struct Typed {
    pub types: TypeSet,
    pub constraints: Constraints,
    pub body: Body,
}

/// Value-level checks run after the type test, in field order.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub filters: Vec<Predicate>,
    /// `Some(false)` rejects blank values
    pub blank: Option<bool>,
    /// Inclusive upper bound on `Value::len`
    pub max_length: Option<usize>,
    /// Inclusive lower bound on `Value::len`
    pub min_length: Option<usize>,
}

/// How the contents of a container are validated.
#[derive(Debug, Clone, Default)]
pub enum Body {
    /// Containers pass through without inspecting entries.
    #[default]
    None,
    /// Every element of a sequence is validated against one schema.
    Elements(SchemaNode),
    /// Map entries are validated key by key.
    Fields(FieldMap),
    /// Every map value is validated against one schema.
    AnyKey(SchemaNode),
}

pub type FieldMap = Map<ObjectKey, SchemaNode>;
