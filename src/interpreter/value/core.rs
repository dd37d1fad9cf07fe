use std::{collections::BTreeMap, fmt, rc::Rc};

use crate::{
    ast::FunctionLiteral,
    interpreter::{
        evaluator::core::EvalResult,
        value::{environment::Env, hash_key::HashKey},
    },
};

/// Signature of a native function callable from scripts.
///
/// A builtin receives its already evaluated arguments and validates their
/// count and kinds itself.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// A user defined function: a literal paired with the scope it was created
/// in.
///
/// Calls run the body in a fresh child of `env`, never of the caller's
/// scope, which is what makes closures see the bindings of their definition
/// site.
pub struct Function {
    /// Parameters and body, shared with the AST node.
    pub literal: Rc<FunctionLiteral>,
    /// The environment captured when the literal was evaluated.
    pub env:     Env,
}

impl fmt::Debug for Function {
    // The captured environment may contain this very function.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("literal", &self.literal.to_string())
         .finish_non_exhaustive()
    }
}

/// A named native function from the builtin registry.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name scripts call it by.
    pub name: &'static str,
    /// The native implementation.
    pub func: BuiltinFn,
}

/// Represents a runtime value in the interpreter.
///
/// Compound values are reference counted; cloning a `Value` never copies an
/// array, hash or function.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and `!`. The only kind accepted as
    /// an `if` condition.
    Boolean(bool),
    /// An immutable string.
    String(Rc<str>),
    /// An array of `Value` elements.
    Array(Rc<Vec<Self>>),
    /// A hash, mapping each key to the original key value and its value.
    Hash(Rc<BTreeMap<HashKey, (Self, Self)>>),
    /// A closure.
    Function(Rc<Function>),
    /// A native function.
    Builtin(Builtin),
    /// A value travelling up to the nearest function or program boundary
    /// after a `return`. Never observable from scripts.
    Return(Box<Self>),
    /// The absence of a value.
    Null,
}

/// The type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `INTEGER`
    Integer,
    /// `BOOLEAN`
    Boolean,
    /// `STRING`
    String,
    /// `ARRAY`
    Array,
    /// `HASH`
    Hash,
    /// `FUNCTION`
    Function,
    /// `BUILTIN`
    Builtin,
    /// `RETURN_VALUE`
    ReturnValue,
    /// `NULL`
    Null,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Array => "ARRAY",
            Self::Hash => "HASH",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
            Self::ReturnValue => "RETURN_VALUE",
            Self::Null => "NULL",
        };
        write!(f, "{tag}")
    }
}

impl Value {
    /// The boolean `true`.
    pub const TRUE: Self = Self::Boolean(true);
    /// The boolean `false`.
    pub const FALSE: Self = Self::Boolean(false);

    /// Gets the type tag of the value.
    ///
    /// ## Example
    /// ```
    /// use mandrill::interpreter::value::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Integer(3).kind(), ValueKind::Integer);
    /// assert_eq!(Value::from("hi").kind().to_string(), "STRING");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Hash(_) => ValueKind::Hash,
            Self::Function(_) => ValueKind::Function,
            Self::Builtin(_) => ValueKind::Builtin,
            Self::Return(_) => ValueKind::ReturnValue,
            Self::Null => ValueKind::Null,
        }
    }

    /// Gets the key this value is stored under in a hash.
    ///
    /// # Errors
    /// `UnhashableKey` unless the value is an integer, boolean or string.
    pub fn hash_key(&self) -> EvalResult<HashKey> {
        HashKey::try_from(self)
    }

    /// Strips a pending `return`, if any.
    #[must_use]
    pub fn unwrap_return(self) -> Self {
        match self {
            Self::Return(inner) => *inner,
            other => other,
        }
    }

    /// Renders the value as it appears inside an array or hash, where
    /// strings are quoted.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "\"{s}\""),
            other => write!(f, "{other}"),
        }
    }
}

impl PartialEq for Value {
    /// Structural equality for data, identity for closures.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::Return(a), Self::Return(b)) => a == b,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    value.fmt_nested(f)?;
                }

                write!(f, "]")
            },
            Self::Hash(entries) => {
                write!(f, "{{")?;

                for (index, (key, value)) in entries.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    key.fmt_nested(f)?;
                    write!(f, ": ")?;
                    value.fmt_nested(f)?;
                }

                write!(f, "}}")
            },
            Self::Function(function) => write!(f, "{}", function.literal),
            Self::Builtin(builtin) => write!(f, "builtin {}", builtin.name),
            Self::Return(inner) => write!(f, "{inner}"),
            Self::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    fn hash_of(pairs: Vec<(Value, Value)>) -> Value {
        let entries = pairs.into_iter()
                           .map(|(k, v)| (k.hash_key().unwrap(), (k, v)))
                           .collect();
        Value::Hash(Rc::new(entries))
    }

    #[test]
    fn strings_are_quoted_only_when_nested() {
        let array = Value::from(vec![Value::from("a"), Value::Integer(1), Value::Null]);

        assert_eq!(Value::from("a").to_string(), "a");
        assert_eq!(array.to_string(), r#"["a", 1, null]"#);
    }

    #[test]
    fn hashes_render_in_key_order() {
        let hash = hash_of(vec![(Value::from("b"), Value::Integer(2)),
                                (Value::Integer(1), Value::TRUE)]);

        assert_eq!(hash.to_string(), r#"{1: true, "b": 2}"#);
    }

    #[test]
    fn kind_tags() {
        assert_eq!(Value::Null.kind().to_string(), "NULL");
        assert_eq!(Value::Return(Box::new(Value::Null)).kind().to_string(), "RETURN_VALUE");
        assert_eq!(Value::from(Vec::new()).kind().to_string(), "ARRAY");
    }

    #[test]
    fn hash_key_accepts_only_scalars() {
        assert_eq!(Value::Integer(1).hash_key(), Value::Integer(1).hash_key());
        assert!(Value::from("k").hash_key().is_ok());
        assert_eq!(Value::Null.hash_key(),
                   Err(RuntimeError::UnhashableKey { got: ValueKind::Null }));
        assert!(Value::from(Vec::new()).hash_key().is_err());
    }

    #[test]
    fn unwrap_return_strips_one_layer() {
        let wrapped = Value::Return(Box::new(Value::Integer(7)));

        assert_eq!(wrapped.unwrap_return(), Value::Integer(7));
        assert_eq!(Value::Integer(7).unwrap_return(), Value::Integer(7));
    }
}
