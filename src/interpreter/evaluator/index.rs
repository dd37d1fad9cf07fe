use std::{collections::BTreeMap, rc::Rc};

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_operand, unwind},
        value::{Env, Value, ValueKind},
    },
};

/// Evaluates a hash literal.
///
/// Entries are evaluated pair by pair, key before value, and a `return`
/// reached in either ends the literal. A key whose value
/// is not hashable aborts the literal with `UnhashableKey`. When two entries
/// have equal keys, the later one wins.
pub fn eval_hash_literal(entries: &[(Expression, Expression)], env: &Env) -> EvalResult<Value> {
    let mut hash = BTreeMap::new();

    for (key, value) in entries {
        let key = unwind!(eval_operand(key, env));
        let hash_key = key.hash_key()?;
        let value = unwind!(eval_operand(value, env));

        hash.insert(hash_key, (key, value));
    }

    Ok(Value::Hash(Rc::new(hash)))
}

/// Evaluates `left[index]`.
///
/// - Arrays take integer indexes in `0..len`; anything outside that range is
///   `IndexOutOfBounds`, and a non-integer index is `InvalidIndex`.
/// - Hashes take any hashable key and give `null` for a missing one.
/// - Every other kind is `NotIndexable`.
///
/// # Example
/// ```
/// use mandrill::interpreter::{evaluator::index::eval_index, value::Value};
///
/// let array = Value::from(vec![Value::Integer(10), Value::Integer(20)]);
///
/// assert_eq!(eval_index(&array, &Value::Integer(1)).unwrap(), Value::Integer(20));
/// assert!(eval_index(&array, &Value::Integer(2)).is_err());
/// assert!(eval_index(&Value::Integer(3), &Value::Integer(0)).is_err());
/// ```
pub fn eval_index(left: &Value, index: &Value) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(i)) => {
            usize::try_from(*i).ok()
                               .and_then(|position| elements.get(position))
                               .cloned()
                               .ok_or(RuntimeError::IndexOutOfBounds { index: *i,
                                                                       len:   elements.len(), })
        },
        (Value::Array(_), other) => Err(RuntimeError::InvalidIndex { container: ValueKind::Array,
                                                                     index:     other.kind(), }),
        (Value::Hash(entries), key) => {
            let key = key.hash_key()?;
            Ok(entries.get(&key).map_or(Value::Null, |(_, value)| value.clone()))
        },
        (other, _) => Err(RuntimeError::NotIndexable { got: other.kind() }),
    }
}
