/// Runtime values.
///
/// Defines the `Value` enum, its kind tags, builtin function handles and the
/// rendering used by the shell and by `puts`.
pub mod core;

/// Hash keys.
///
/// Defines `HashKey`, the subset of values that may key a hash, and the
/// conversion from values to keys.
pub mod hash_key;

/// Variable scopes.
///
/// Defines `Environment`, a binding frame with an optional parent, and the
/// shared `Env` handle closures capture.
pub mod environment;

pub use self::{
    core::{Builtin, BuiltinFn, Function, Value, ValueKind},
    environment::{Env, Environment},
    hash_key::HashKey,
};
