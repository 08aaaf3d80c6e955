//! Argument validation for function calls
//!
//! Wraps a function so that (part of) its arguments are run through a sieve
//! schema, and replaced by the validated result, before every call. The
//! function is never invoked with arguments the schema rejects.

mod args;
mod error;
mod guard;
mod validators;

pub use args::CallArgs;
pub use error::ArgsError;
pub use guard::{FnMeta, Guard, GuardFactory, Guarded};
pub use validators::{
    args_validator, keyword_factory, kw_validator, pos_validator, positional_factory,
};
