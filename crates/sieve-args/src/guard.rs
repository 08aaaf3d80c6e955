//! Call guards
//!
//! A [`GuardFactory`] pairs an extraction function (which part of a call is
//! validated) with a write-back function (how the validated value replaces
//! that part). Giving it a schema yields a [`Guard`]; wrapping a function in
//! a guard yields a [`Guarded`] function that only runs on arguments the
//! schema accepts.

use std::borrow::Cow;
use std::sync::Arc;

use sieve_schema::{Config, SchemaNode};
use sieve_value::Value;

use crate::{ArgsError, CallArgs};

type ExtractFn = dyn Fn(&CallArgs) -> Value + Send + Sync;
type WriteBackFn = dyn Fn(Value, CallArgs) -> Result<CallArgs, ArgsError> + Send + Sync;
type CheckFn = dyn Fn(CallArgs) -> Result<CallArgs, ArgsError> + Send + Sync;

#[derive(Clone)]
pub struct GuardFactory {
    extract: Arc<ExtractFn>,
    write_back: Arc<WriteBackFn>,
}

impl GuardFactory {
    pub fn new(
        extract: impl Fn(&CallArgs) -> Value + Send + Sync + 'static,
        write_back: impl Fn(Value, CallArgs) -> Result<CallArgs, ArgsError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            extract: Arc::new(extract),
            write_back: Arc::new(write_back),
        }
    }

    /// A guard validating the extracted part against `schema`.
    pub fn schema(&self, schema: SchemaNode) -> Guard {
        self.schema_with(schema, Config::default())
    }

    pub fn schema_with(&self, schema: SchemaNode, config: Config) -> Guard {
        let extract = self.extract.clone();
        let write_back = self.write_back.clone();
        Guard {
            check: Arc::new(move |args: CallArgs| {
                let validated = schema.validate_with(extract(&args), &config)?;
                write_back(validated, args)
            }),
        }
    }
}

impl core::fmt::Debug for GuardFactory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("GuardFactory(..)")
    }
}

/// Validates and rewrites call arguments.
#[derive(Clone)]
pub struct Guard {
    check: Arc<CheckFn>,
}

impl Guard {
    /// Run the guard on `args`, returning the rewritten arguments.
    pub fn check(&self, args: CallArgs) -> Result<CallArgs, ArgsError> {
        (self.check)(args)
    }

    /// A guard running `self`, then `next` on the arguments `self` produced.
    pub fn then(self, next: Guard) -> Guard {
        Guard {
            check: Arc::new(move |args: CallArgs| next.check(self.check(args)?)),
        }
    }

    pub fn wrap<F, R>(&self, meta: FnMeta, func: F) -> Guarded<F>
    where
        F: Fn(CallArgs) -> R,
    {
        Guarded {
            guard: self.clone(),
            meta,
            func,
        }
    }
}

impl core::fmt::Debug for Guard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Guard(..)")
    }
}

/// Identity of a guarded function, kept for introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnMeta {
    pub name: Cow<'static, str>,
    pub doc: Option<Cow<'static, str>>,
}

impl FnMeta {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A function that is only invoked on arguments its guard accepts.
pub struct Guarded<F> {
    guard: Guard,
    meta: FnMeta,
    func: F,
}

impl<F> Guarded<F> {
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.meta.doc.as_deref()
    }

    pub fn meta(&self) -> &FnMeta {
        &self.meta
    }

    pub fn call<R>(&self, args: CallArgs) -> Result<R, ArgsError>
    where
        F: Fn(CallArgs) -> R,
    {
        let args = self.guard.check(args).inspect_err(|err| {
            tracing::debug!(function = %self.meta.name, error = %err, "guard rejected call");
        })?;
        Ok((self.func)(args))
    }
}

impl<F> core::fmt::Debug for Guarded<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Guarded").field("meta", &self.meta).finish()
    }
}
