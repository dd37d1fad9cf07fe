use log::trace;

use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::{
            infix::InfixRule,
            precedence::Precedence,
            prefix::PrefixRule,
            utils::describe,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A Pratt parser over a pull-based token stream.
///
/// The parser keeps two tokens of lookahead: `current`, the token being
/// looked at, and `peek`, the one after it. Every parse routine starts with
/// `current` on the first token of its construct and returns with `current`
/// on the construct's last token.
///
/// # Example
/// ```
/// use mandrill::interpreter::parser::Parser;
///
/// let program = Parser::new("var x = 5; x * 2").parse_program().unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// assert_eq!(program.to_string(), "var x = 5;(x * 2);");
/// ```
pub struct Parser<'src> {
    lexer:              Lexer<'src>,
    pub(super) current: Token,
    pub(super) peek:    Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser positioned at the first token of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Self { lexer,
               current,
               peek }
    }

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Stops at the first error; nothing parsed before it is returned.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();

        while !self.current.is(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
            self.advance();
        }

        trace!("parsed program with {} top-level statement(s)", statements.len());
        Ok(Program { statements })
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// Applies the prefix rule of the current token, then keeps folding the
    /// result into the infix rule of the next token for as long as that token
    /// binds tighter than `precedence`. Equal precedence stops the loop, which
    /// makes every binary operator left associative.
    ///
    /// # Errors
    /// - `NoPrefixParseRule` if the current token cannot start an expression.
    /// - Propagates any errors from the prefix and infix rules.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let Some(prefix) = Self::prefix_rule(self.current.kind) else {
            return Err(ParseError::NoPrefixParseRule { found: self.current.to_string(),
                                                       line:  self.current.line, });
        };
        let mut left = prefix(self)?;

        while !self.peek.is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind) {
            // Every token that binds tighter than `Lowest` has an infix rule,
            // so this only fires if the two tables drift apart.
            let Some(infix) = Self::infix_rule(self.peek.kind) else {
                return Err(ParseError::NoInfixParseRule { found: self.peek.to_string(),
                                                          line:  self.peek.line, });
            };
            self.advance();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    /// Moves one token forward.
    pub(super) fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Advances if the peek token has kind `kind`, fails otherwise.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek.is(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected_peek(&describe(kind)))
        }
    }

    /// Builds the error for a peek token that is not `expected`.
    pub(super) fn unexpected_peek(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.to_string(),
                                      found:    self.peek.to_string(),
                                      line:     self.peek.line, }
    }

    /// Consumes an optional `;` following a statement.
    pub(super) fn skip_semicolon(&mut self) {
        if self.peek.is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Gets the rule that parses an expression starting with `kind`.
    fn prefix_rule(kind: TokenKind) -> Option<PrefixRule<'src>> {
        let rule: PrefixRule<'src> = match kind {
            TokenKind::Identifier => Self::parse_identifier,
            TokenKind::Number => Self::parse_integer,
            TokenKind::String => Self::parse_string,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix,
            TokenKind::LParen => Self::parse_grouped,
            TokenKind::LBracket => Self::parse_array,
            TokenKind::LBrace => Self::parse_hash,
            TokenKind::If => Self::parse_if,
            TokenKind::Func => Self::parse_function_literal,
            _ => return None,
        };
        Some(rule)
    }

    /// Gets the rule that continues an expression with `kind`.
    fn infix_rule(kind: TokenKind) -> Option<InfixRule<'src>> {
        let rule: InfixRule<'src> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::EqualEqual
            | TokenKind::BangEqual
            | TokenKind::Less
            | TokenKind::LessEqual
            | TokenKind::Greater
            | TokenKind::GreaterEqual => Self::parse_infix,
            TokenKind::LParen => Self::parse_call,
            TokenKind::LBracket => Self::parse_index,
            _ => return None,
        };
        Some(rule)
    }
}
