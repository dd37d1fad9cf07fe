/// Core evaluation logic.
///
/// Contains the program entry point, statement and block evaluation, and the
/// dispatch over expression nodes.
pub mod core;

/// Prefix operator evaluation.
///
/// Implements `!` on booleans and `-` on integers.
pub mod unary;

/// Infix operator evaluation.
///
/// Dispatches on the pair of operand kinds: integer arithmetic and
/// comparison, boolean equality and string concatenation.
pub mod binary;

/// Function calls.
///
/// Applies closures and builtins to evaluated arguments.
pub mod function;

/// Hash literals and index expressions.
pub mod index;

/// The builtin function registry.
///
/// A fixed table of native functions, consulted when an identifier is not
/// bound in any scope.
pub mod builtin;

pub use self::core::{EvalResult, evaluate};
