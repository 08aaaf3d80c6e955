//! Stock `filter` predicates

use num_traits::ToPrimitive;
use regex::Regex;
use sieve_value::Value;

use crate::{Predicate, SchemaError};

/// Texts fully matching `pattern`. Non-texts are rejected.
pub fn pattern(pattern: &str) -> Result<Predicate, SchemaError> {
    let anchored = format!("^(?:{})$", pattern);
    let regex = Regex::new(&anchored).map_err(|err| {
        SchemaError::malformed(format!("invalid pattern \"{}\": {}", pattern, err))
    })?;
    Ok(matches(regex))
}

/// Texts in which `regex` finds a match. Non-texts are rejected.
pub fn matches(regex: Regex) -> Predicate {
    Predicate::named(format!("matches({})", regex.as_str()), move |value| {
        value.as_text().is_some_and(|text| regex.is_match(text))
    })
}

/// Integers and floats within `min..=max`. Other kinds (and NaN) are
/// rejected.
pub fn between(min: f64, max: f64) -> Predicate {
    Predicate::named(format!("between({}, {})", min, max), move |value| {
        let number = match value {
            Value::Integer(n) => n.to_f64(),
            Value::Float(f) => Some(*f),
            _ => None,
        };
        number.is_some_and(|n| (min..=max).contains(&n))
    })
}
