//! Conversion between JSON documents and sieve value trees
//!
//! JSON integers become [`Value::Integer`], every other number a
//! [`Value::Float`]; objects become maps with text keys, in document order.
//! Converting back, tuples become arrays and non-text map keys are rendered
//! as text; two keys rendering to the same text are an error.

mod config;
mod error;

pub use config::{Config, NonFiniteFloats};
pub use error::{Error, ValueToJsonError};

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde_json::Value as JsonValue;
use sieve_schema::SchemaNode;
use sieve_value::{Map, ObjectKey, Tuple, Value};

pub fn value_from_json(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(number) => {
            if let Some(i) = number.as_i64() {
                Value::Integer(BigInt::from(i))
            } else if let Some(u) = number.as_u64() {
                Value::Integer(BigInt::from(u))
            } else {
                // Always finite: JSON has no NaN or infinity
                Value::Float(number.as_f64().unwrap_or_default())
            }
        }
        JsonValue::String(s) => Value::Text(s.clone()),
        JsonValue::Array(items) => Value::Array(items.iter().map(value_from_json).collect()),
        JsonValue::Object(object) => Value::Map(
            object
                .iter()
                .map(|(key, value)| (ObjectKey::from(key.as_str()), value_from_json(value)))
                .collect(),
        ),
    }
}

pub fn value_to_json(value: &Value, config: &Config) -> Result<JsonValue, ValueToJsonError> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::Integer(n) => {
            if let Some(i) = n.to_i64() {
                return Ok(JsonValue::Number(i.into()));
            }
            if let Some(u) = n.to_u64() {
                return Ok(JsonValue::Number(u.into()));
            }
            Err(ValueToJsonError::BigIntOutOfRange(n.to_string()))
        }
        Value::Float(f) => match serde_json::Number::from_f64(*f) {
            Some(number) => Ok(JsonValue::Number(number)),
            None => match config.non_finite_floats {
                NonFiniteFloats::Error => Err(ValueToJsonError::NonFiniteFloat(*f)),
                NonFiniteFloats::Null => Ok(JsonValue::Null),
            },
        },
        Value::Text(text) => Ok(JsonValue::String(text.clone())),
        Value::Array(items) | Value::Tuple(Tuple(items)) => items
            .iter()
            .map(|item| value_to_json(item, config))
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        Value::Map(map) => map_to_json(map, config),
    }
}

fn map_to_json(
    map: &Map<ObjectKey, Value>,
    config: &Config,
) -> Result<JsonValue, ValueToJsonError> {
    let mut object = serde_json::Map::new();
    for (key, value) in map.iter() {
        let key = key_to_string(key);
        if object.contains_key(&key) {
            return Err(ValueToJsonError::DuplicateKey(key));
        }
        object.insert(key, value_to_json(value, config)?);
    }
    Ok(JsonValue::Object(object))
}

fn key_to_string(key: &ObjectKey) -> String {
    match key {
        ObjectKey::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validate a JSON document, returning the normalized document.
pub fn validate_json(json: &JsonValue, schema: &SchemaNode) -> Result<JsonValue, Error> {
    validate_json_with(json, schema, &sieve_schema::Config::default(), &Config::default())
}

pub fn validate_json_with(
    json: &JsonValue,
    schema: &SchemaNode,
    schema_config: &sieve_schema::Config,
    config: &Config,
) -> Result<JsonValue, Error> {
    let value = sieve_schema::validate_with(value_from_json(json), schema, schema_config)?;
    Ok(value_to_json(&value, config)?)
}
