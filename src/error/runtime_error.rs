use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::value::ValueKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Every error aborts the evaluation that raised it and is handed back to
/// the caller unchanged.
pub enum RuntimeError {
    /// Integer division with a zero divisor.
    DivideByZero,
    /// Integer arithmetic left the 64-bit signed range.
    IntegerOverflow,
    /// The infix operator is not defined for this pair of operand kinds.
    UnsupportedOperator {
        /// The operator.
        op:    InfixOperator,
        /// Kind of the left operand.
        left:  ValueKind,
        /// Kind of the right operand.
        right: ValueKind,
    },
    /// The prefix operator is not defined for this operand kind.
    UnsupportedOperand {
        /// The operator.
        op:      PrefixOperator,
        /// Kind of the operand.
        operand: ValueKind,
    },
    /// An `if` condition evaluated to something other than a boolean.
    NonBooleanCondition {
        /// Kind of the condition value.
        got: ValueKind,
    },
    /// A function was called with the wrong number of arguments.
    ArityMismatch {
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        got:      usize,
    },
    /// Called a value that is neither a function nor a builtin.
    NotCallable {
        /// Kind of the called value.
        got: ValueKind,
    },
    /// The name is neither bound nor a builtin.
    UndefinedIdentifier {
        /// The name that was looked up.
        name: String,
    },
    /// Used a value that cannot be hashed as a hash key.
    UnhashableKey {
        /// Kind of the rejected key.
        got: ValueKind,
    },
    /// Indexed a value that does not support indexing.
    NotIndexable {
        /// Kind of the indexed value.
        got: ValueKind,
    },
    /// The container supports indexing, but not with this kind of index.
    InvalidIndex {
        /// Kind of the indexed value.
        container: ValueKind,
        /// Kind of the index value.
        index:     ValueKind,
    },
    /// Array index outside `0..len`.
    IndexOutOfBounds {
        /// The requested index.
        index: i64,
        /// Length of the array.
        len:   usize,
    },
    /// A builtin received the wrong number of arguments.
    WrongArgumentCount {
        /// Name of the builtin.
        name:     String,
        /// The accepted argument count, e.g. `1` or `at least 2`.
        expected: String,
        /// Number of supplied arguments.
        got:      usize,
    },
    /// A builtin received an argument it cannot work with.
    InvalidArgument {
        /// Name of the builtin.
        name:    String,
        /// Details about why the argument is invalid.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivideByZero => write!(f, "Runtime error: Division by zero."),
            Self::IntegerOverflow => {
                write!(f, "Runtime error: Integer overflow while trying to compute result.")
            },
            Self::UnsupportedOperator { op, left, right } => {
                write!(f, "Runtime error: Unsupported operator: {left} {op} {right}.")
            },
            Self::UnsupportedOperand { op, operand } => {
                write!(f, "Runtime error: Unsupported operator: {op}{operand}.")
            },
            Self::NonBooleanCondition { got } => {
                write!(f, "Runtime error: Condition must be BOOLEAN, got {got}.")
            },
            Self::ArityMismatch { expected, got } => write!(f,
                                                            "Runtime error: Wrong number of arguments: expected {expected}, got {got}."),
            Self::NotCallable { got } => write!(f, "Runtime error: {got} is not callable."),
            Self::UndefinedIdentifier { name } => {
                write!(f, "Runtime error: Identifier not found: '{name}'.")
            },
            Self::UnhashableKey { got } => {
                write!(f, "Runtime error: {got} cannot be used as a hash key.")
            },
            Self::NotIndexable { got } => write!(f, "Runtime error: {got} cannot be indexed."),
            Self::InvalidIndex { container, index } => {
                write!(f, "Runtime error: {container} cannot be indexed by {index}.")
            },
            Self::IndexOutOfBounds { index, len } => write!(f,
                                                            "Runtime error: Index {index} out of bounds for length {len}."),
            Self::WrongArgumentCount { name,
                                       expected,
                                       got, } => write!(f,
                                                        "Runtime error: '{name}' expects {expected} argument(s), got {got}."),
            Self::InvalidArgument { name, details } => {
                write!(f, "Runtime error: Invalid argument to '{name}': {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
