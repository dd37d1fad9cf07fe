use std::{fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{Builtin, Value},
    },
};

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// This many arguments or more.
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn accepts(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry maps a script-visible name to the native function
/// implementing it. The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, func: $func },
            )*
        ];
        /// Names of every builtin, in registry order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => len,
    "push"  => push,
    "first" => first,
    "last"  => last,
    "rest"  => rest,
    "puts"  => puts,
}

/// Finds the builtin registered under `name`.
///
/// The registry is only consulted after every scope, so scripts may shadow
/// any builtin with their own binding.
///
/// # Example
/// ```
/// use mandrill::interpreter::evaluator::builtin::lookup;
///
/// assert!(lookup("len").is_some());
/// assert!(lookup("print").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name).copied()
}

/// Ensures a builtin received an acceptable number of arguments.
///
/// # Errors
/// `WrongArgumentCount` naming the builtin and what it accepts.
pub fn check_arity(name: &str, args: &[Value], arity: Arity) -> EvalResult<()> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { name:     name.to_string(),
                                               expected: arity.to_string(),
                                               got:      args.len(), })
    }
}

fn invalid_argument(name: &str, details: String) -> RuntimeError {
    RuntimeError::InvalidArgument { name: name.to_string(),
                                    details }
}

/// Converts a length to a script integer.
fn length(n: usize) -> EvalResult<Value> {
    i64::try_from(n).map(Value::Integer)
                    .map_err(|_| RuntimeError::IntegerOverflow)
}

/// Returns the length of a string, array or hash.
///
/// Accepts exactly one argument.
/// - Strings report their number of characters, not bytes.
/// - Arrays report their number of elements.
/// - Hashes report their number of entries.
///
/// Other kinds cause an `InvalidArgument` error.
///
/// # Example
/// ```
/// use mandrill::interpreter::{evaluator::builtin::len, value::Value};
///
/// assert_eq!(len(&[Value::from("héllo")]).unwrap(), Value::Integer(5));
/// assert!(len(&[Value::Integer(1)]).is_err());
/// ```
pub fn len(args: &[Value]) -> EvalResult<Value> {
    check_arity("len", args, Arity::Exact(1))?;

    match &args[0] {
        Value::String(s) => length(s.chars().count()),
        Value::Array(elements) => length(elements.len()),
        Value::Hash(entries) => length(entries.len()),
        other => Err(invalid_argument("len", format!("{} has no length", other.kind()))),
    }
}

/// Returns a new array with extra elements appended.
///
/// Accepts an array followed by at least one value. The original array is
/// left untouched.
///
/// # Example
/// ```
/// use mandrill::interpreter::{evaluator::builtin::push, value::Value};
///
/// let original = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
/// let pushed = push(&[original.clone(), Value::Integer(3)]).unwrap();
///
/// assert_eq!(pushed.to_string(), "[1, 2, 3]");
/// assert_eq!(original.to_string(), "[1, 2]");
/// ```
pub fn push(args: &[Value]) -> EvalResult<Value> {
    check_arity("push", args, Arity::AtLeast(2))?;

    let Value::Array(elements) = &args[0] else {
        return Err(invalid_argument("push",
                                    format!("first argument must be ARRAY, got {}",
                                            args[0].kind())));
    };

    let mut pushed = Vec::with_capacity(elements.len() + args.len() - 1);
    pushed.extend(elements.iter().cloned());
    pushed.extend(args[1..].iter().cloned());

    Ok(Value::Array(Rc::new(pushed)))
}

/// Gets the single array argument of `name`.
fn array_argument<'a>(name: &str, args: &'a [Value]) -> EvalResult<&'a [Value]> {
    check_arity(name, args, Arity::Exact(1))?;

    match &args[0] {
        Value::Array(elements) => Ok(elements.as_slice()),
        other => Err(invalid_argument(name, format!("argument must be ARRAY, got {}", other.kind()))),
    }
}

/// Returns the first element of an array, or `null` if it is empty.
pub fn first(args: &[Value]) -> EvalResult<Value> {
    let elements = array_argument("first", args)?;

    Ok(elements.first().cloned().unwrap_or(Value::Null))
}

/// Returns the last element of an array, or `null` if it is empty.
pub fn last(args: &[Value]) -> EvalResult<Value> {
    let elements = array_argument("last", args)?;

    Ok(elements.last().cloned().unwrap_or(Value::Null))
}

/// Returns a new array holding every element but the first.
///
/// An empty array gives `null`.
///
/// # Example
/// ```
/// use mandrill::interpreter::{evaluator::builtin::rest, value::Value};
///
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
///
/// assert_eq!(rest(&[array]).unwrap().to_string(), "[2, 3]");
/// assert_eq!(rest(&[Value::from(Vec::new())]).unwrap(), Value::Null);
/// ```
pub fn rest(args: &[Value]) -> EvalResult<Value> {
    let elements = array_argument("rest", args)?;

    match elements.split_first() {
        Some((_, tail)) => Ok(Value::from(tail.to_vec())),
        None => Ok(Value::Null),
    }
}

/// Prints each argument on its own line to standard output.
///
/// Accepts any number of arguments and returns `null`.
pub fn puts(args: &[Value]) -> EvalResult<Value> {
    check_arity("puts", args, Arity::AtLeast(0))?;

    for arg in args {
        println!("{arg}");
    }
    Ok(Value::Null)
}
