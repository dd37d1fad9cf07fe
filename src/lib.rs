//! # mandrill
//!
//! mandrill is a tree-walking interpreter for a small, dynamically typed
//! scripting language with integers, booleans, strings, arrays, hashes and
//! first-class closures.
//!
//! Source text goes through three stages: the [`interpreter::lexer`] turns it
//! into tokens, the Pratt [`interpreter::parser`] builds an [`ast::Program`],
//! and the [`interpreter::evaluator`] walks that tree against an
//! [`Environment`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

pub use crate::{
    error::Error,
    interpreter::value::{Env, Environment, Value},
};
use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{evaluator::evaluate, parser::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types the parser
/// produces and the evaluator consumes, along with their canonical textual
/// rendering.
///
/// # Responsibilities
/// - Defines program, block, statement and expression nodes.
/// - Defines the prefix and infix operators.
/// - Renders any tree as source text that parses back into an equal tree.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode of the parser and evaluator.
/// - Attaches line numbers to parse errors.
/// - Joins both phases into a single [`Error`] for callers running source
///   text end to end.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
pub mod interpreter;
/// The interactive shell.
///
/// Reads lines, runs each against one session environment and writes back
/// the result or the error.
pub mod repl;

/// Parses source text into a program.
///
/// # Errors
/// Returns the first syntax error in `source`.
///
/// # Examples
/// ```
/// use mandrill::parse;
///
/// let program = parse("var x = 1;").unwrap();
/// assert_eq!(program.statements.len(), 1);
///
/// assert!(parse("var = 1;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(source).parse_program()
}

/// Parses and evaluates `source` against `env`, returning the program's
/// value.
///
/// Bindings made by the program remain in `env` afterwards.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs. Nothing
/// is evaluated when parsing fails.
///
/// # Examples
/// ```
/// use mandrill::{Environment, Value, run};
///
/// let env = Environment::global();
///
/// run("var add = func(a, b) { a + b };", &env).unwrap();
/// assert_eq!(run("add(2, 3)", &env).unwrap(), Value::Integer(5));
///
/// // 'y' is not defined
/// assert!(run("y + 1", &env).is_err());
/// ```
pub fn run(source: &str, env: &Env) -> Result<Value, Error> {
    let program = parse(source)?;
    debug!("running {} byte(s) of source", source.len());

    evaluate(&program, env).map_err(Error::from)
}

/// Parses and evaluates `source` in a fresh environment.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs.
///
/// # Examples
/// ```
/// use mandrill::{Value, interpret};
///
/// let value = interpret("(5 + 10 * 2 + 15 / 3) * 2 + -10").unwrap();
/// assert_eq!(value, Value::Integer(50));
/// ```
pub fn interpret(source: &str) -> Result<Value, Error> {
    run(source, &Environment::global())
}
