//! Caller-supplied callables carried by descriptors
//!
//! All callables are shared (`Arc`) and `Send + Sync`, so schemas can be
//! cloned cheaply and used from several threads at once.

use std::borrow::Cow;
use std::sync::Arc;

use sieve_value::Value;

use crate::TransformError;

type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;
type TransformFn = dyn Fn(Value) -> Result<Value, TransformError> + Send + Sync;
type FactoryFn = dyn Fn() -> Value + Send + Sync;

/// A `filter` predicate over a type-checked value.
#[derive(Clone)]
pub struct Predicate {
    name: Cow<'static, str>,
    func: Arc<PredicateFn>,
}

impl Predicate {
    pub fn new(func: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self::named("closure", func)
    }

    pub fn named(
        name: impl Into<Cow<'static, str>>,
        func: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test(&self, value: &Value) -> bool {
        (self.func)(value)
    }
}

impl core::fmt::Debug for Predicate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Predicate").field(&self.name).finish()
    }
}

/// A `pre_call`/`post_call` step.
#[derive(Clone)]
pub struct Transform {
    name: Cow<'static, str>,
    func: Arc<TransformFn>,
}

impl Transform {
    /// An infallible transform.
    pub fn map(func: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        Self::try_named("closure", move |value| Ok(func(value)))
    }

    /// A transform that may reject its input.
    pub fn try_map(
        func: impl Fn(Value) -> Result<Value, TransformError> + Send + Sync + 'static,
    ) -> Self {
        Self::try_named("closure", func)
    }

    pub fn try_named(
        name: impl Into<Cow<'static, str>>,
        func: impl Fn(Value) -> Result<Value, TransformError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, value: Value) -> Result<Value, TransformError> {
        (self.func)(value)
    }
}

impl core::fmt::Debug for Transform {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Transform").field(&self.name).finish()
    }
}

/// Value substituted for an absent map key. Never validated.
#[derive(Clone)]
pub enum DefaultValue {
    Value(Value),
    /// Invoked once per substitution.
    Factory(Arc<FactoryFn>),
}

impl DefaultValue {
    pub fn produce(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Factory(factory) => factory(),
        }
    }
}

impl core::fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_factory_invoked_per_produce() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let default = DefaultValue::Factory(Arc::new(move || {
            Value::from(counter.fetch_add(1, Ordering::SeqCst))
        }));
        assert_eq!(default.produce(), Value::from(0usize));
        assert_eq!(default.produce(), Value::from(1usize));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_debug_shows_names() {
        let t = Transform::try_named("to_integer", Ok);
        assert_eq!(format!("{:?}", t), r#"Transform("to_integer")"#);
        let p = Predicate::new(|_| true);
        assert_eq!(format!("{:?}", p), r#"Predicate("closure")"#);
    }
}
