use sieve_value::{Map, ObjectKey, Tuple, Value};

/// The arguments of one call: an ordered positional part and a keyword part.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallArgs {
    pub positional: Tuple<Value>,
    pub keyword: Map<ObjectKey, Value>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.0.push(value.into());
        self
    }

    pub fn kwarg(mut self, key: impl Into<ObjectKey>, value: impl Into<Value>) -> Self {
        self.keyword.insert(key.into(), value.into());
        self
    }

    /// Keyword argument by name.
    pub fn get(&self, key: impl Into<ObjectKey>) -> Option<&Value> {
        self.keyword.get(&key.into())
    }
}
