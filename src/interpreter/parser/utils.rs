use crate::{
    ast::Expression,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            precedence::Precedence,
        },
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of expressions up to `closing`.
    ///
    /// This utility is shared by array literals and call arguments. The
    /// current token is the opening delimiter; on return it is `closing`.
    /// An immediately encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (expression ("," expression)*)? closing`
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - an item fails to parse,
    /// - the token after an item is neither `,` nor `closing`.
    pub(super) fn parse_expression_list(&mut self,
                                        closing: TokenKind)
                                        -> ParseResult<Vec<Expression>> {
        let mut items = Vec::new();

        if self.peek.is(closing) {
            self.advance();
            return Ok(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek.is(TokenKind::Comma) {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.peek.is(closing) {
            return Err(self.unexpected_peek(&format!("',' or {}", describe(closing))));
        }
        self.advance();

        Ok(items)
    }
}

/// Describes a token kind the way error messages name what was expected.
pub(super) fn describe(kind: TokenKind) -> String {
    match kind {
        TokenKind::Identifier => "an identifier".to_string(),
        TokenKind::Number => "a number".to_string(),
        TokenKind::String => "a string".to_string(),
        TokenKind::Eof => "end of input".to_string(),
        _ => format!("'{kind}'"),
    }
}
