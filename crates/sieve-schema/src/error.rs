//! Schema violation errors
//!
//! Every failure is a [`SchemaError`]: a human-readable message (the text a
//! caller shows), the structured [`SchemaErrorKind`] it was raised as, and the
//! path of the node that raised it.
//!
//! A node's `errmsg` replaces the message but never the kind or the path, so
//! the detail masked by an override is still available programmatically.

use sieve_value::{ObjectKey, ValueKind, ValuePath};
use thiserror::Error;

use crate::TypeSet;

#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct SchemaError {
    pub kind: SchemaErrorKind,
    pub message: String,
    /// Where the failure was raised
    pub path: ValuePath,
}

impl SchemaError {
    pub fn new(kind: SchemaErrorKind, message: impl Into<String>, path: ValuePath) -> Self {
        Self {
            kind,
            message: message.into(),
            path,
        }
    }

    /// A malformed-schema failure that is not tied to any value.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::Malformed, message, ValuePath::root())
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, SchemaErrorKind::Malformed)
    }

    pub(crate) fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// What rule a value (or the schema itself) violated.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaErrorKind {
    /// The schema itself is unusable: unresolved type tag, `const`/`enum`
    /// without a value, a length bound on a value without length.
    Malformed,
    TypeMismatch {
        expected: TypeSet,
        actual: ValueKind,
    },
    ConstMismatch,
    NotInEnum,
    FilterRejected,
    Blank,
    TooLong {
        length: usize,
        max: usize,
    },
    TooShort {
        length: usize,
        min: usize,
    },
    UnexpectedKeys {
        keys: Vec<ObjectKey>,
    },
    MissingKeys {
        keys: Vec<ObjectKey>,
    },
    /// A `pre_call`/`post_call` transform failed.
    Transform,
    DepthLimitExceeded {
        limit: usize,
    },
}

/// Failure reported by a caller-supplied transform.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct TransformError(pub String);

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
