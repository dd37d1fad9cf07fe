use crate::{
    ast::{BlockStatement, Identifier, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            precedence::Precedence,
        },
    },
};

impl Parser<'_> {
    /// Parses a single statement starting at the current token.
    ///
    /// Dispatches on the first token:
    /// - `var` starts a variable binding,
    /// - `return` starts a return statement,
    /// - anything else is parsed as an expression statement.
    ///
    /// A trailing `;` is optional for all three and consumed when present.
    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.kind {
            TokenKind::Var => self.parse_var_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `var <identifier> = <expression>`.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the name or the `=` is missing.
    /// - Propagates any errors from the value expression.
    fn parse_var_statement(&mut self) -> ParseResult<Statement> {
        if !self.peek.is(TokenKind::Identifier) {
            return Err(self.unexpected_peek("an identifier"));
        }
        self.advance();
        let name = Identifier::new(self.current.literal.as_str());

        self.expect_peek(TokenKind::Assign)?;
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Var { name, value })
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Expression { value })
    }

    /// Parses a `{ ... }` block.
    ///
    /// The current token must be the opening `{`. Returns with the closing
    /// `}` as the current token.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the input ends before the closing `}`.
    /// - Propagates any errors from the inner statements.
    pub(super) fn parse_block_statement(&mut self) -> ParseResult<BlockStatement> {
        let mut statements = Vec::new();
        self.advance();

        while !self.current.is(TokenKind::RBrace) {
            if self.current.is(TokenKind::Eof) {
                return Err(ParseError::UnexpectedToken { expected: "'}'".to_string(),
                                                         found:    self.current.to_string(),
                                                         line:     self.current.line, });
            }
            statements.push(self.parse_statement()?);
            self.advance();
        }

        Ok(BlockStatement { statements })
    }
}
