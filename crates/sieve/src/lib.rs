#![doc = include_str!("../README.md")]

pub use sieve_schema as schema;
pub use sieve_value as value;

#[cfg(feature = "args")]
pub use sieve_args as args;
#[cfg(feature = "json")]
pub use sieve_json as json;

pub use sieve_schema::{
    Config, DescriptorBuilder, ErrmsgPolicy, SchemaError, SchemaErrorKind, SchemaNode, validate,
    validate_with,
};
pub use sieve_value::{Map, ObjectKey, Value, ValueKind};

pub mod prelude {
    pub use sieve_schema::{
        Config, DescriptorBuilder, ErrmsgPolicy, IntoSchema, Predicate, SchemaError,
        SchemaErrorKind, SchemaNode, Transform, TransformError, TypeSet, predicates, transforms,
        validate, validate_with,
    };
    pub use sieve_value::{Map, ObjectKey, Tuple, Value, ValueKind, value};

    #[cfg(feature = "args")]
    pub use sieve_args::{
        CallArgs, FnMeta, Guard, GuardFactory, args_validator, kw_validator, pos_validator,
    };
}
