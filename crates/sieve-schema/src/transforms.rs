//! Stock `pre_call`/`post_call` transforms
//!
//! Conversions between value kinds, for normalizing input before the type
//! test (`pre_call`) or reshaping validated output (`post_call`).

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};
use sieve_value::{Tuple, Value};

use crate::{Transform, TransformError};

/// Integers pass through; floats are truncated toward zero, texts are parsed
/// (surrounding whitespace allowed) and booleans become 0 or 1.
pub fn to_integer() -> Transform {
    Transform::try_named("to_integer", |value| match value {
        Value::Integer(_) => Ok(value),
        Value::Bool(b) => Ok(Value::from(i32::from(b))),
        Value::Float(f) => BigInt::from_f64(f.trunc())
            .map(Value::Integer)
            .ok_or_else(|| TransformError::new(format!("cannot convert {} to integer", f))),
        Value::Text(text) => text
            .trim()
            .parse::<BigInt>()
            .map(Value::Integer)
            .map_err(|_| {
                TransformError::new(format!(r#"invalid literal for integer: "{}""#, text))
            }),
        other => Err(TransformError::new(format!(
            "cannot convert {} to integer",
            other.kind()
        ))),
    })
}

pub fn to_float() -> Transform {
    Transform::try_named("to_float", |value| match value {
        Value::Float(_) => Ok(value),
        Value::Bool(b) => Ok(Value::Float(if b { 1.0 } else { 0.0 })),
        Value::Integer(n) => n
            .to_f64()
            .map(Value::Float)
            .ok_or_else(|| TransformError::new(format!("integer {} too large for float", n))),
        Value::Text(text) => text
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| TransformError::new(format!(r#"invalid literal for float: "{}""#, text))),
        other => Err(TransformError::new(format!(
            "cannot convert {} to float",
            other.kind()
        ))),
    })
}

/// Any value rendered with its `Display` form; texts pass through.
pub fn to_text() -> Transform {
    Transform::try_named("to_text", |value| match value {
        Value::Text(_) => Ok(value),
        other => Ok(Value::Text(other.to_string())),
    })
}

/// Sequences become arrays, texts their characters, maps their keys.
pub fn to_array() -> Transform {
    Transform::try_named("to_array", |value| {
        into_items(value, "array").map(Value::Array)
    })
}

/// Like [`to_array`], producing a tuple.
pub fn to_tuple() -> Transform {
    Transform::try_named("to_tuple", |value| {
        into_items(value, "tuple").map(|items| Value::Tuple(Tuple(items)))
    })
}

fn into_items(value: Value, target: &str) -> Result<Vec<Value>, TransformError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Tuple(items) => Ok(items.0),
        Value::Text(text) => Ok(text.chars().map(|c| Value::Text(c.to_string())).collect()),
        Value::Map(map) => Ok(map.into_iter().map(|(key, _)| Value::from(key)).collect()),
        other => Err(TransformError::new(format!(
            "cannot convert {} to {}",
            other.kind(),
            target
        ))),
    }
}

pub fn trim() -> Transform {
    Transform::try_named("trim", |value| match value {
        Value::Text(text) => Ok(Value::Text(text.trim().to_string())),
        other => Err(TransformError::new(format!(
            "cannot trim {}",
            other.kind()
        ))),
    })
}

pub fn lowercase() -> Transform {
    Transform::try_named("lowercase", |value| match value {
        Value::Text(text) => Ok(Value::Text(text.to_lowercase())),
        other => Err(TransformError::new(format!(
            "cannot lowercase {}",
            other.kind()
        ))),
    })
}
