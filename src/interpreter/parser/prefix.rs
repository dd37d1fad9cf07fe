use std::rc::Rc;

use crate::{
    ast::{Expression, FunctionLiteral, Identifier, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            precedence::Precedence,
        },
    },
};

/// A rule that parses an expression starting at the current token.
pub(super) type PrefixRule<'src> = fn(&mut Parser<'src>) -> ParseResult<Expression>;

impl Parser<'_> {
    pub(super) fn parse_identifier(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Identifier(Identifier::new(self.current.literal.as_str())))
    }

    /// Parses a decimal integer literal.
    ///
    /// # Errors
    /// `InvalidIntegerLiteral` if the digits do not fit in an `i64`.
    pub(super) fn parse_integer(&mut self) -> ParseResult<Expression> {
        self.current
            .literal
            .parse::<i64>()
            .map(Expression::Integer)
            .map_err(|_| ParseError::InvalidIntegerLiteral { literal: self.current.literal.clone(),
                                                            line:    self.current.line, })
    }

    pub(super) fn parse_string(&mut self) -> ParseResult<Expression> {
        Ok(Expression::StringLiteral(self.current.literal.clone()))
    }

    pub(super) fn parse_boolean(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Boolean(self.current.is(TokenKind::True)))
    }

    /// Parses `!<operand>` or `-<operand>`.
    ///
    /// The operand is parsed at `Prefix` precedence, so `-a * b` groups as
    /// `(-a) * b` while `-f(x)` and `-a[0]` negate the call and the element.
    pub(super) fn parse_prefix(&mut self) -> ParseResult<Expression> {
        let op = match self.current.kind {
            TokenKind::Bang => PrefixOperator::Not,
            TokenKind::Minus => PrefixOperator::Negate,
            _ => {
                return Err(ParseError::NoPrefixParseRule { found: self.current.to_string(),
                                                           line:  self.current.line, });
            },
        };
        self.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix { op,
                                operand: Box::new(operand) })
    }

    /// Parses `( <expression> )`; the parentheses leave no node behind.
    pub(super) fn parse_grouped(&mut self) -> ParseResult<Expression> {
        self.advance();
        let inner = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(inner)
    }

    pub(super) fn parse_array(&mut self) -> ParseResult<Expression> {
        let elements = self.parse_expression_list(TokenKind::RBracket)?;

        Ok(Expression::Array { elements })
    }

    /// Parses a hash literal of the form `{ k1: v1, k2: v2, ... }`.
    ///
    /// An empty hash `{}` is accepted, as is a trailing comma after the last
    /// entry.
    ///
    /// Grammar: `hash := "{" (expression ":" expression ("," expression ":"
    /// expression)*)? "}"`.
    ///
    /// # Errors
    /// - `UnexpectedToken` if a `:`, a `,` or the closing `}` is missing.
    /// - Propagates any errors from key and value expressions.
    pub(super) fn parse_hash(&mut self) -> ParseResult<Expression> {
        let mut entries = Vec::new();

        while !self.peek.is(TokenKind::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::Colon)?;
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            entries.push((key, value));

            if !self.peek.is(TokenKind::RBrace) && !self.peek.is(TokenKind::Comma) {
                return Err(self.unexpected_peek("',' or '}'"));
            }
            if self.peek.is(TokenKind::Comma) {
                self.advance();
            }
        }
        self.advance();

        Ok(Expression::Hash { entries })
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    ///
    /// # Errors
    /// - `UnexpectedToken` if a parenthesis or brace is missing.
    /// - Propagates any errors from the condition and the blocks.
    pub(super) fn parse_if(&mut self) -> ParseResult<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek.is(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative })
    }

    /// Parses `func(<parameters>) { <body> }`.
    ///
    /// Parameters are bare identifiers separated by commas.
    pub(super) fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_parameters()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::Function(Rc::new(FunctionLiteral { parameters, body })))
    }

    fn parse_parameters(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek.is(TokenKind::RParen) {
            self.advance();
            return Ok(parameters);
        }

        loop {
            if !self.peek.is(TokenKind::Identifier) {
                return Err(self.unexpected_peek("a parameter name"));
            }
            self.advance();
            parameters.push(Identifier::new(self.current.literal.as_str()));

            if !self.peek.is(TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        self.expect_peek(TokenKind::RParen)?;

        Ok(parameters)
    }
}
