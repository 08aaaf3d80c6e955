//! Validation context
//!
//! `ValidationContext` carries what the recursion needs besides the value and
//! the schema node: the configuration, the current path (for error
//! reporting) and the current depth.

use sieve_value::{ObjectKey, ValuePath};

use crate::schema::Descriptor;
use crate::{Config, ErrmsgPolicy, SchemaError, SchemaErrorKind};

pub struct ValidationContext<'a> {
    pub config: &'a Config,
    path: ValuePath,
    depth: usize,
}

impl<'a> ValidationContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            path: ValuePath::root(),
            depth: 0,
        }
    }

    /// Get a clone of the current path.
    pub fn path(&self) -> ValuePath {
        self.path.clone()
    }

    pub fn push_key(&mut self, key: ObjectKey) {
        self.path.push_key(key);
    }

    pub fn push_index(&mut self, index: usize) {
        self.path.push_index(index);
    }

    pub fn pop_path(&mut self) {
        self.path.pop_segment();
    }

    /// Enter one level of nesting, failing past `Config::max_depth`.
    pub fn enter(&mut self) -> Result<(), SchemaError> {
        self.depth += 1;
        match self.config.max_depth {
            Some(limit) if self.depth > limit => {
                self.depth -= 1;
                Err(SchemaError::new(
                    SchemaErrorKind::DepthLimitExceeded { limit },
                    format!("nesting deeper than {} at {}", limit, self.path),
                    self.path(),
                ))
            }
            _ => Ok(()),
        }
    }

    pub fn leave(&mut self) {
        self.depth -= 1;
    }

    /// A failure raised directly at a node: the node's `errmsg`, if any,
    /// replaces `message`.
    pub fn error(
        &self,
        errmsg: Option<&str>,
        kind: SchemaErrorKind,
        message: impl Into<String>,
    ) -> SchemaError {
        let error = SchemaError::new(
            kind,
            errmsg.map_or_else(|| message.into(), str::to_string),
            self.path(),
        );
        tracing::debug!(path = %error.path, kind = ?error.kind, "schema violation");
        error
    }

    /// A nested failure caught by a container node, rewritten by the
    /// container's `errmsg` according to `Config::nested_errmsg`.
    pub fn rethrow(&self, descriptor: &Descriptor, error: SchemaError) -> SchemaError {
        let Some(errmsg) = &descriptor.errmsg else {
            return error;
        };
        match self.config.nested_errmsg {
            ErrmsgPolicy::Replace => error.with_message(errmsg.clone()),
            ErrmsgPolicy::Prefix => {
                let message = format!("{}: {}", errmsg, error.message);
                error.with_message(message)
            }
        }
    }
}

/// The ` for <label>` suffix naming a path label in messages; empty for an
/// empty label.
pub(crate) fn for_label(label: &str) -> String {
    if label.is_empty() {
        String::new()
    } else {
        format!(" for {}", label)
    }
}
