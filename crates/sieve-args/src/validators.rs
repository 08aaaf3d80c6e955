//! The stock guard factories: keyword arguments, positional arguments, or
//! both against separate schemas.

use sieve_schema::SchemaNode;
use sieve_value::{Tuple, Value};

use crate::{ArgsError, CallArgs, Guard, GuardFactory};

/// Projects the keyword arguments as a map; positional arguments are left
/// untouched.
pub fn keyword_factory() -> GuardFactory {
    GuardFactory::new(
        |args| Value::Map(args.keyword.clone()),
        |value, args| match value {
            Value::Map(keyword) => Ok(CallArgs { keyword, ..args }),
            other => Err(ArgsError::WriteBack {
                expected: "map",
                actual: other.kind(),
            }),
        },
    )
}

/// Projects the positional arguments as a tuple; keyword arguments are left
/// untouched. A validated array is accepted back as well.
pub fn positional_factory() -> GuardFactory {
    GuardFactory::new(
        |args| Value::Tuple(args.positional.clone()),
        |value, args| match value {
            Value::Tuple(positional) => Ok(CallArgs { positional, ..args }),
            Value::Array(items) => Ok(CallArgs {
                positional: Tuple(items),
                ..args
            }),
            other => Err(ArgsError::WriteBack {
                expected: "tuple",
                actual: other.kind(),
            }),
        },
    )
}

/// Validate only the keyword arguments, as a map.
pub fn kw_validator(schema: SchemaNode) -> Guard {
    keyword_factory().schema(schema)
}

/// Validate only the positional arguments, as a tuple.
pub fn pos_validator(schema: SchemaNode) -> Guard {
    positional_factory().schema(schema)
}

/// Validate positional and keyword arguments independently; the call is
/// rejected if either fails. Positional arguments are checked first.
pub fn args_validator(pos_schema: SchemaNode, kw_schema: SchemaNode) -> Guard {
    pos_validator(pos_schema).then(kw_validator(kw_schema))
}
