use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;

use crate::prelude_internal::*;

/// Primitive type identifiers of the value tree.
///
/// A kind never matches another kind: `Bool` is not an `Integer`, and an
/// `Array` is not a `Tuple`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    Text,
    Array,
    Tuple,
    Map,
}

impl core::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool => write!(f, "bool"),
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Text => write!(f, "text"),
            Self::Array => write!(f, "array"),
            Self::Tuple => write!(f, "tuple"),
            Self::Map => write!(f, "map"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value kind \"{0}\"")]
pub struct UnknownKind(pub String);

impl core::str::FromStr for ValueKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(Self::Null),
            "bool" | "boolean" => Ok(Self::Bool),
            "int" | "integer" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "str" | "string" | "text" => Ok(Self::Text),
            "list" | "array" => Ok(Self::Array),
            "tuple" => Ok(Self::Tuple),
            "dict" | "map" => Ok(Self::Map),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// A node of a loosely-typed data tree, as produced by a wire-format or
/// configuration parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(BigInt),
    Float(f64),
    Text(String),
    /// List-like sequence.
    Array(Vec<Value>),
    /// Tuple-like sequence.
    Tuple(Tuple<Value>),
    Map(Map<ObjectKey, Value>),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Array(_) => ValueKind::Array,
            Self::Tuple(_) => ValueKind::Tuple,
            Self::Map(_) => ValueKind::Map,
        }
    }

    pub fn empty_map() -> Self {
        Self::Map(Map::new())
    }

    /// Length of texts (in characters) and containers; `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Text(text) => Some(text.chars().count()),
            Self::Array(items) => Some(items.len()),
            Self::Tuple(items) => Some(items.0.len()),
            Self::Map(map) => Some(map.len()),
            Self::Null | Self::Bool(_) | Self::Integer(_) | Self::Float(_) => None,
        }
    }

    /// Whether the value is empty or falsy: null, `false`, zero, or an empty
    /// text or container.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Integer(n) => n.is_zero(),
            Self::Float(f) => *f == 0.0,
            Self::Text(text) => text.is_empty(),
            Self::Array(items) => items.is_empty(),
            Self::Tuple(items) => items.0.is_empty(),
            Self::Map(map) => map.is_empty(),
        }
    }

    /// Equality where an integer equals a float of the same numeric value,
    /// at any depth. Bools stay distinct from numbers.
    pub fn numeric_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Integer(n), Self::Float(f)) | (Self::Float(f), Self::Integer(n)) => {
                f.fract() == 0.0 && n.to_f64() == Some(*f)
            }
            (Self::Array(a), Self::Array(b)) | (Self::Tuple(Tuple(a)), Self::Tuple(Tuple(b))) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.numeric_eq(y))
            }
            (Self::Map(a), Self::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, x)| b.get(key).is_some_and(|y| x.numeric_eq(y)))
            }
            (a, b) => a == b,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Self::Integer(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Elements of either sequence kind.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            Self::Tuple(items) => Some(&items.0),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map<ObjectKey, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Map lookup by key; `None` for non-maps and absent keys.
    pub fn get(&self, key: impl Into<ObjectKey>) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(&key.into()))
    }

    fn fmt_nested(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{:?}", text),
            other => write!(f, "{}", other),
        }
    }
}

fn fmt_items<'a>(
    f: &mut core::fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a Value>,
) -> core::fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i != 0 {
            write!(f, ", ")?;
        }
        item.fmt_nested(f)?;
    }
    Ok(())
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{:?}", x),
            Self::Text(text) => write!(f, "{}", text),
            Self::Array(items) => {
                write!(f, "[")?;
                fmt_items(f, items)?;
                write!(f, "]")
            }
            Self::Tuple(items) => {
                write!(f, "(")?;
                fmt_items(f, &items.0)?;
                if items.0.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: ", key)?;
                    value.fmt_nested(f)?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Key-comparable value which implements `Eq` and `Hash`.
///
/// Map keys are restricted to booleans, integers, strings and tuples of
/// keys; floats and null have no stable equality to key a map with.
pub enum ObjectKey {
    Bool(bool),
    Number(BigInt),
    String(String),
    Tuple(Tuple<ObjectKey>),
}

impl core::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ObjectKey::Bool(bool) => write!(f, "{}", bool),
            ObjectKey::Number(big_int) => write!(f, "{}", big_int),
            ObjectKey::String(string) => write!(f, "{}", string),
            ObjectKey::Tuple(tuple) => write!(f, "{}", tuple),
        }
    }
}

impl From<&str> for ObjectKey {
    fn from(s: &str) -> Self {
        ObjectKey::String(s.to_string())
    }
}

impl From<String> for ObjectKey {
    fn from(s: String) -> Self {
        ObjectKey::String(s)
    }
}

impl From<bool> for ObjectKey {
    fn from(b: bool) -> Self {
        ObjectKey::Bool(b)
    }
}

impl From<i32> for ObjectKey {
    fn from(n: i32) -> Self {
        ObjectKey::Number(BigInt::from(n))
    }
}

impl From<i64> for ObjectKey {
    fn from(n: i64) -> Self {
        ObjectKey::Number(BigInt::from(n))
    }
}

impl From<BigInt> for ObjectKey {
    fn from(n: BigInt) -> Self {
        ObjectKey::Number(n)
    }
}

impl From<ObjectKey> for Value {
    fn from(key: ObjectKey) -> Self {
        match key {
            ObjectKey::Bool(b) => Value::Bool(b),
            ObjectKey::Number(n) => Value::Integer(n),
            ObjectKey::String(s) => Value::Text(s),
            ObjectKey::Tuple(tuple) => Value::Tuple(tuple.0.into_iter().map(Value::from).collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} value cannot be used as a map key")]
pub struct NotAKey {
    pub kind: ValueKind,
}

impl TryFrom<Value> for ObjectKey {
    type Error = NotAKey;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(ObjectKey::Bool(b)),
            Value::Integer(n) => Ok(ObjectKey::Number(n)),
            Value::Text(s) => Ok(ObjectKey::String(s)),
            Value::Tuple(tuple) => tuple
                .0
                .into_iter()
                .map(ObjectKey::try_from)
                .collect::<Result<Tuple<_>, _>>()
                .map(ObjectKey::Tuple),
            other => Err(NotAKey { kind: other.kind() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Plural)]
pub struct Tuple<T>(pub Vec<T>);

impl<T> Default for Tuple<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl core::fmt::Display for Tuple<ObjectKey> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, ")")
    }
}

// ============================================================================
// From implementations for Value
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(BigInt::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(BigInt::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(BigInt::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(BigInt::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Integer(BigInt::from(n))
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Integer(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Tuple<Value>> for Value {
    fn from(items: Tuple<Value>) -> Self {
        Value::Tuple(items)
    }
}

impl From<Map<ObjectKey, Value>> for Value {
    fn from(map: Map<ObjectKey, Value>) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str_aliases() {
        assert_eq!("int".parse::<ValueKind>(), Ok(ValueKind::Integer));
        assert_eq!("str".parse::<ValueKind>(), Ok(ValueKind::Text));
        assert_eq!("dict".parse::<ValueKind>(), Ok(ValueKind::Map));
        assert_eq!("list".parse::<ValueKind>(), Ok(ValueKind::Array));
        assert_eq!(
            "set".parse::<ValueKind>(),
            Err(UnknownKind("set".to_string()))
        );
    }

    #[test]
    fn test_len_counts_chars() {
        assert_eq!(Value::from("héllo").len(), Some(5));
        assert_eq!(Value::from(3).len(), None);
        assert_eq!(Value::Array(vec![Value::Null]).len(), Some(1));
    }

    #[test]
    fn test_accessors() {
        let tuple = Value::Tuple(Tuple(vec![Value::from(true), Value::from(0.5)]));
        let items = tuple.as_slice().unwrap();
        assert_eq!(items[0].as_bool(), Some(true));
        assert_eq!(items[1].as_float(), Some(0.5));
        assert_eq!(items[1].as_bool(), None);
        assert_eq!(Value::from("x").as_slice(), None);
        assert_eq!(Value::from(1).get("k"), None);
    }

    #[test]
    fn test_empty_tuple_default() {
        let tuple: Tuple<Value> = Tuple::default();
        assert!(tuple.0.is_empty());
    }

    #[test]
    fn test_numeric_eq() {
        assert!(Value::from(1).numeric_eq(&Value::from(1.0)));
        assert!(Value::from(1.0).numeric_eq(&Value::from(1)));
        assert!(!Value::from(1).numeric_eq(&Value::from(1.5)));
        assert!(!Value::from(true).numeric_eq(&Value::from(1)));
        assert!(!Value::from(1).numeric_eq(&Value::from("1")));
        let ints = Value::Array(vec![Value::from(1), Value::from(2)]);
        let floats = Value::Array(vec![Value::from(1.0), Value::from(2.0)]);
        assert!(ints.numeric_eq(&floats));
        assert_ne!(ints, floats);
    }

    #[test]
    fn test_is_blank() {
        assert!(Value::Null.is_blank());
        assert!(Value::from(false).is_blank());
        assert!(Value::from(0).is_blank());
        assert!(Value::from(0.0).is_blank());
        assert!(Value::from("").is_blank());
        assert!(Value::empty_map().is_blank());
        assert!(!Value::from(" ").is_blank());
        assert!(!Value::from(-1).is_blank());
    }

    #[test]
    fn test_display_quotes_nested_text_only() {
        assert_eq!(Value::from("abc").to_string(), "abc");
        let items = Value::Array(vec![Value::from("1"), Value::from(2)]);
        assert_eq!(items.to_string(), r#"["1", 2]"#);
        let single = Value::Tuple(Tuple(vec![Value::from(1)]));
        assert_eq!(single.to_string(), "(1,)");
        assert_eq!(Value::from(1.0).to_string(), "1.0");
    }

    #[test]
    fn test_key_round_trip_through_value() {
        let key = ObjectKey::Tuple(Tuple(vec![1.into(), "a".into()]));
        let value = Value::from(key.clone());
        assert_eq!(ObjectKey::try_from(value), Ok(key));
        assert_eq!(
            ObjectKey::try_from(Value::from(1.5)),
            Err(NotAKey {
                kind: ValueKind::Float
            })
        );
    }
}
