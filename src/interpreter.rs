/// The evaluator module runs parsed programs.
///
/// The evaluator walks the AST recursively against an environment and
/// produces a runtime value or the first error it meets.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, calls and `return` unwinding.
/// - Reports runtime errors such as division by zero or unsupported operand
///   kinds.
pub mod evaluator;
/// The lexer module tokenizes source code for the parser.
///
/// The lexer reads raw source text and hands out tokens on demand: numbers,
/// strings, identifiers, keywords, operators and delimiters.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, literal text
///   and source line.
/// - Handles numeric and string literals, identifiers, keywords and
///   operators.
/// - Turns unrecognized input into `Illegal` tokens for the parser to reject.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Resolves operator precedence and associativity with Pratt parsing.
/// - Reports the first syntax error with its line and stops.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation:
/// integers, booleans, strings, arrays, hashes, closures and builtins. It also
/// holds the environments closures capture.
///
/// # Responsibilities
/// - Defines the `Value` enum, its kind tags and its rendering.
/// - Derives hash keys from hashable values.
/// - Provides chained, shared variable scopes.
pub mod value;
