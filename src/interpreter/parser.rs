/// Parser state and the Pratt expression loop.
///
/// Holds the current and peek tokens, drives the token stream and exposes the
/// program-level entry point.
pub mod core;

/// Binding power of infix operators.
pub mod precedence;

/// Statement and block parsing.
///
/// Implements `var`, `return` and expression statements, plus the braced
/// blocks used as bodies.
pub mod statement;

/// Prefix parse rules.
///
/// Everything that can start an expression: literals, identifiers, prefix
/// operators, grouping, `if` and function literals.
pub mod prefix;

/// Infix parse rules.
///
/// Binary operators, calls and index expressions.
pub mod infix;

/// Shared helpers for the parse rules.
pub mod utils;

pub use self::{
    core::{ParseResult, Parser},
    precedence::Precedence,
};
