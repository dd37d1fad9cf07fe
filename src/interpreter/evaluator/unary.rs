use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a prefix operation on an already evaluated operand.
///
/// Supported operators:
/// - `Not`: boolean negation. Only booleans are accepted.
/// - `Negate`: integer negation, checked for overflow.
///
/// # Example
/// ```
/// use mandrill::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::eval_prefix, value::Value},
/// };
///
/// let v = eval_prefix(PrefixOperator::Negate, &Value::Integer(5)).unwrap();
/// assert_eq!(v, Value::Integer(-5));
///
/// let v = eval_prefix(PrefixOperator::Not, &Value::FALSE).unwrap();
/// assert_eq!(v, Value::TRUE);
///
/// assert!(eval_prefix(PrefixOperator::Not, &Value::Integer(1)).is_err());
/// ```
pub fn eval_prefix(op: PrefixOperator, operand: &Value) -> EvalResult<Value> {
    match (op, operand) {
        (PrefixOperator::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
        (PrefixOperator::Negate, Value::Integer(n)) => {
            n.checked_neg().map(Value::Integer).ok_or(RuntimeError::IntegerOverflow)
        },
        (op, operand) => Err(RuntimeError::UnsupportedOperand { op,
                                                                operand: operand.kind() }),
    }
}
