use sieve_schema::SchemaError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValueToJsonError {
    #[error("integer {0} is out of range for a JSON number")]
    BigIntOutOfRange(String),

    #[error("float {0} is not finite and cannot be represented in JSON")]
    NonFiniteFloat(f64),

    #[error("map key {0:?} collides with another key when rendered as JSON")]
    DuplicateKey(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    ToJson(#[from] ValueToJsonError),
}
