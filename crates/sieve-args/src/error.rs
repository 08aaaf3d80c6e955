use sieve_schema::SchemaError;
use sieve_value::ValueKind;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ArgsError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The validated projection has a shape that cannot be spliced back into
    /// the call, e.g. positional arguments transformed into a map.
    #[error("validated arguments cannot be written back: expected {expected}, got {actual}")]
    WriteBack {
        expected: &'static str,
        actual: ValueKind,
    },
}
