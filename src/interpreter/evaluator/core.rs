use std::{ops::ControlFlow, rc::Rc};

use log::debug;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::eval_infix,
            builtin,
            function::apply_function,
            index::{eval_hash_literal, eval_index},
            unary::eval_prefix,
        },
        value::{Env, Function, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The outcome of evaluating an operand: a value to keep working with, or a
/// pending `return` that must leave the enclosing expression untouched.
pub(crate) type Operand<T> = ControlFlow<Value, T>;

/// Takes the value out of an [`Operand`], or hands a pending `return` back
/// to the caller of the enclosing function.
macro_rules! unwind {
    ($operand:expr) => {
        match $operand? {
            ::std::ops::ControlFlow::Continue(value) => value,
            ::std::ops::ControlFlow::Break(pending) => return Ok(pending),
        }
    };
}

pub(crate) use unwind;

/// Evaluates a program against `env` and returns its value.
///
/// Statements run in order and the value of the last one is the program's
/// value; an empty program evaluates to `null`. A `return` at any depth
/// outside a function ends the program with the returned value.
///
/// Bindings made by `var` statements stay in `env`, so evaluating several
/// programs against the same environment behaves like one long session.
///
/// # Example
/// ```
/// use mandrill::{
///     interpreter::{evaluator::evaluate, value::{Environment, Value}},
///     parse,
/// };
///
/// let env = Environment::global();
/// let program = parse("var n = 42; var m = n - 2; m").unwrap();
///
/// assert_eq!(evaluate(&program, &env).unwrap(), Value::Integer(40));
/// assert_eq!(env.borrow().get("n"), Some(Value::Integer(42)));
/// ```
pub fn evaluate(program: &Program, env: &Env) -> EvalResult<Value> {
    debug!("evaluating program with {} statement(s)", program.statements.len());

    let mut result = Value::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;

        if let Value::Return(inner) = result {
            return Ok(*inner);
        }
    }

    Ok(result)
}

/// Evaluates the statements of a block in `env`.
///
/// Unlike [`evaluate`], a `return` is passed on still wrapped, so it keeps
/// unwinding through enclosing blocks until a function call or the program
/// unwraps it.
pub(crate) fn eval_block(block: &BlockStatement, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Value::Return(_)) {
            break;
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// A `var` statement yields the bound value. A pending `return` coming out of
/// its value expression is passed on without binding anything.
fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Value> {
    match statement {
        Statement::Var { name, value } => {
            let value = eval_expression(value, env)?;
            if matches!(value, Value::Return(_)) {
                return Ok(value);
            }

            env.borrow_mut().set(name.name.as_str(), value.clone());
            Ok(value)
        },
        Statement::Return { value } => match eval_expression(value, env)? {
            pending @ Value::Return(_) => Ok(pending),
            value => Ok(Value::Return(Box::new(value))),
        },
        Statement::Expression { value } => eval_expression(value, env),
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the dispatch point for every expression node. Operands are
/// always evaluated left to right and the first error aborts the whole
/// expression.
pub fn eval_expression(expression: &Expression, env: &Env) -> EvalResult<Value> {
    match expression {
        Expression::Identifier(identifier) => eval_identifier(&identifier.name, env),
        Expression::Integer(n) => Ok(Value::Integer(*n)),
        Expression::Boolean(b) => Ok(Value::from(*b)),
        Expression::StringLiteral(s) => Ok(Value::from(s.as_str())),
        Expression::Array { elements } => {
            Ok(Value::from(unwind!(eval_operands(elements, env))))
        },
        Expression::Hash { entries } => eval_hash_literal(entries, env),
        Expression::Prefix { op, operand } => {
            let operand = unwind!(eval_operand(operand, env));
            eval_prefix(*op, &operand)
        },
        Expression::Infix { left, op, right } => {
            let left = unwind!(eval_operand(left, env));
            let right = unwind!(eval_operand(right, env));
            eval_infix(*op, &left, &right)
        },
        Expression::Index { left, index } => {
            let left = unwind!(eval_operand(left, env));
            let index = unwind!(eval_operand(index, env));
            eval_index(&left, &index)
        },
        Expression::If { condition,
                         consequence,
                         alternative, } => {
            eval_if(condition, consequence, alternative.as_ref(), env)
        },
        Expression::Function(literal) => {
            Ok(Value::Function(Rc::new(Function { literal: Rc::clone(literal),
                                                  env:     Rc::clone(env), })))
        },
        Expression::Call { callee, arguments } => {
            let callee = unwind!(eval_operand(callee, env));
            let arguments = unwind!(eval_operands(arguments, env));
            apply_function(&callee, arguments)
        },
    }
}

/// Evaluates a sub-expression whose value feeds another expression.
///
/// A `return` reached inside it, e.g. in `1 + if (x) { return 2; }`, breaks
/// out instead of becoming an operand.
pub(crate) fn eval_operand(expression: &Expression, env: &Env) -> EvalResult<Operand<Value>> {
    match eval_expression(expression, env)? {
        pending @ Value::Return(_) => Ok(ControlFlow::Break(pending)),
        value => Ok(ControlFlow::Continue(value)),
    }
}

/// Evaluates `expressions` in order, stopping at the first error or pending
/// `return`.
fn eval_operands(expressions: &[Expression], env: &Env) -> EvalResult<Operand<Vec<Value>>> {
    let mut values = Vec::with_capacity(expressions.len());

    for expression in expressions {
        match eval_operand(expression, env)? {
            ControlFlow::Continue(value) => values.push(value),
            ControlFlow::Break(pending) => return Ok(ControlFlow::Break(pending)),
        }
    }

    Ok(ControlFlow::Continue(values))
}

/// Resolves a name: user bindings first, then builtins.
fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }

    builtin::lookup(name).map(Value::Builtin)
                         .ok_or_else(|| RuntimeError::UndefinedIdentifier { name: name.to_string() })
}

/// Evaluates an `if` expression.
///
/// The condition must be a boolean; no other kind is treated as true or
/// false. A false condition without an `else` block evaluates to `null`.
fn eval_if(condition: &Expression,
           consequence: &BlockStatement,
           alternative: Option<&BlockStatement>,
           env: &Env)
           -> EvalResult<Value> {
    match unwind!(eval_operand(condition, env)) {
        Value::Boolean(true) => eval_block(consequence, env),
        Value::Boolean(false) => alternative.map_or(Ok(Value::Null), |block| eval_block(block, env)),
        other => Err(RuntimeError::NonBooleanCondition { got: other.kind() }),
    }
}
