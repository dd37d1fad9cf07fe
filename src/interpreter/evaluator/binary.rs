use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a binary operation on two already evaluated operands.
///
/// Dispatch is by the pair of operand kinds; operands are never converted
/// from one kind to another:
/// - integer with integer: arithmetic and all comparisons,
/// - boolean with boolean: `==` and `!=`,
/// - string with string: `+` (concatenation).
///
/// Every other combination is an `UnsupportedOperator` error.
///
/// # Example
/// ```
/// use mandrill::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::eval_infix, value::Value},
/// };
///
/// let v = eval_infix(InfixOperator::Mul, &Value::Integer(6), &Value::Integer(7)).unwrap();
/// assert_eq!(v, Value::Integer(42));
///
/// let v = eval_infix(InfixOperator::Add, &Value::from("foo"), &Value::from("bar")).unwrap();
/// assert_eq!(v, Value::from("foobar"));
///
/// assert!(eval_infix(InfixOperator::Add, &Value::TRUE, &Value::FALSE).is_err());
/// ```
pub fn eval_infix(op: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, *l, *r),
        (Value::Boolean(l), Value::Boolean(r)) => match op {
            InfixOperator::Equal => Ok(Value::from(l == r)),
            InfixOperator::NotEqual => Ok(Value::from(l != r)),
            _ => Err(unsupported(op, left, right)),
        },
        (Value::String(l), Value::String(r)) if op == InfixOperator::Add => {
            Ok(Value::from(format!("{l}{r}")))
        },
        _ => Err(unsupported(op, left, right)),
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic is checked: overflow is an `IntegerOverflow` error and a zero
/// divisor a `DivideByZero` error. Division truncates toward zero.
fn eval_integer_infix(op: InfixOperator, l: i64, r: i64) -> EvalResult<Value> {
    let checked = |result: Option<i64>| result.map(Value::Integer).ok_or(RuntimeError::IntegerOverflow);

    match op {
        InfixOperator::Add => checked(l.checked_add(r)),
        InfixOperator::Sub => checked(l.checked_sub(r)),
        InfixOperator::Mul => checked(l.checked_mul(r)),
        InfixOperator::Div => {
            if r == 0 {
                return Err(RuntimeError::DivideByZero);
            }
            checked(l.checked_div(r))
        },
        InfixOperator::Equal => Ok(Value::from(l == r)),
        InfixOperator::NotEqual => Ok(Value::from(l != r)),
        InfixOperator::Less => Ok(Value::from(l < r)),
        InfixOperator::LessEqual => Ok(Value::from(l <= r)),
        InfixOperator::Greater => Ok(Value::from(l > r)),
        InfixOperator::GreaterEqual => Ok(Value::from(l >= r)),
    }
}

fn unsupported(op: InfixOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::UnsupportedOperator { op,
                                        left: left.kind(),
                                        right: right.kind() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::ValueKind;

    fn int(op: InfixOperator, l: i64, r: i64) -> EvalResult<Value> {
        eval_infix(op, &Value::Integer(l), &Value::Integer(r))
    }

    #[test]
    fn integer_comparisons() {
        assert_eq!(int(InfixOperator::Less, 1, 2), Ok(Value::TRUE));
        assert_eq!(int(InfixOperator::LessEqual, 2, 2), Ok(Value::TRUE));
        assert_eq!(int(InfixOperator::Greater, 1, 2), Ok(Value::FALSE));
        assert_eq!(int(InfixOperator::GreaterEqual, 1, 2), Ok(Value::FALSE));
        assert_eq!(int(InfixOperator::NotEqual, 1, 2), Ok(Value::TRUE));
    }

    #[test]
    fn division_truncates_and_rejects_zero() {
        assert_eq!(int(InfixOperator::Div, -7, 2), Ok(Value::Integer(-3)));
        assert_eq!(int(InfixOperator::Div, 10, 0), Err(RuntimeError::DivideByZero));
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(int(InfixOperator::Add, i64::MAX, 1), Err(RuntimeError::IntegerOverflow));
        assert_eq!(int(InfixOperator::Mul, i64::MIN, -1), Err(RuntimeError::IntegerOverflow));
        assert_eq!(int(InfixOperator::Div, i64::MIN, -1), Err(RuntimeError::IntegerOverflow));
    }

    #[test]
    fn mixed_kinds_are_never_coerced() {
        assert_eq!(eval_infix(InfixOperator::Equal, &Value::Integer(1), &Value::TRUE),
                   Err(RuntimeError::UnsupportedOperator { op:    InfixOperator::Equal,
                                                           left:  ValueKind::Integer,
                                                           right: ValueKind::Boolean, }));
        assert!(eval_infix(InfixOperator::Sub, &Value::from("a"), &Value::from("b")).is_err());
        assert!(eval_infix(InfixOperator::Less, &Value::TRUE, &Value::FALSE).is_err());
    }
}
