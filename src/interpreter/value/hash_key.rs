use std::rc::Rc;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// A value usable as a hash key.
///
/// Only integers, booleans and strings are hashable. Each kind has its own
/// variant, so equal values always give equal keys while values of different
/// kinds never collide: `1`, `true` and `"1"` are three distinct keys.
///
/// Keys are ordered (integers, then booleans, then strings), which keeps hash
/// rendering deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashKey {
    /// An integer key such as `42`.
    Integer(i64),
    /// A boolean key.
    Boolean(bool),
    /// A string key such as `"name"`.
    String(Rc<str>),
}

impl TryFrom<&Value> for HashKey {
    type Error = RuntimeError;

    /// Derives the key of a hashable value.
    ///
    /// # Errors
    /// `UnhashableKey` for arrays, hashes, functions, builtins and `null`.
    ///
    /// ## Example
    /// ```
    /// use mandrill::interpreter::value::{HashKey, Value};
    ///
    /// let a = HashKey::try_from(&Value::from("name")).unwrap();
    /// let b = HashKey::try_from(&Value::from("name")).unwrap();
    ///
    /// assert_eq!(a, b);
    /// assert!(HashKey::try_from(&Value::Null).is_err());
    /// ```
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(Self::Integer(*n)),
            Value::Boolean(b) => Ok(Self::Boolean(*b)),
            Value::String(s) => Ok(Self::String(Rc::clone(s))),
            other => Err(RuntimeError::UnhashableKey { got: other.kind() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::ValueKind;

    fn key(value: &Value) -> HashKey {
        HashKey::try_from(value).unwrap()
    }

    #[test]
    fn equal_values_give_equal_keys() {
        assert_eq!(key(&Value::from("Hello World")), key(&Value::from("Hello World")));
        assert_eq!(key(&Value::Integer(1)), key(&Value::Integer(1)));
        assert_eq!(key(&Value::TRUE), key(&Value::TRUE));
    }

    #[test]
    fn different_values_give_different_keys() {
        assert_ne!(key(&Value::from("My name is johnny")), key(&Value::from("Hello World")));
        assert_ne!(key(&Value::Integer(1)), key(&Value::Integer(2)));
        assert_ne!(key(&Value::TRUE), key(&Value::FALSE));
    }

    #[test]
    fn kinds_never_collide() {
        assert_ne!(key(&Value::from("1")), key(&Value::Integer(1)));
        assert_ne!(key(&Value::Integer(1)), key(&Value::TRUE));
        assert_ne!(key(&Value::from("true")), key(&Value::TRUE));
    }

    #[test]
    fn compound_values_are_unhashable() {
        let array = Value::from(vec![Value::Integer(1)]);

        assert_eq!(HashKey::try_from(&array),
                   Err(RuntimeError::UnhashableKey { got: ValueKind::Array }));
        assert_eq!(HashKey::try_from(&Value::Null),
                   Err(RuntimeError::UnhashableKey { got: ValueKind::Null }));
    }
}
