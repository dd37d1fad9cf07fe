use crate::{
    ast::{Expression, InfixOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            precedence::Precedence,
        },
    },
};

/// A rule that continues `left` with the current token.
pub(super) type InfixRule<'src> = fn(&mut Parser<'src>, Expression) -> ParseResult<Expression>;

impl Parser<'_> {
    /// Parses the right operand of a binary operator and joins both sides.
    ///
    /// The right side is parsed at the operator's own precedence, so a chain
    /// of equal operators folds to the left: `a - b - c` is `(a - b) - c`.
    pub(super) fn parse_infix(&mut self, left: Expression) -> ParseResult<Expression> {
        let Some(op) = infix_operator(self.current.kind) else {
            return Err(ParseError::NoInfixParseRule { found: self.current.to_string(),
                                                      line:  self.current.line, });
        };
        let precedence = Precedence::of(self.current.kind);
        self.advance();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix { left: Box::new(left),
                               op,
                               right: Box::new(right) })
    }

    pub(super) fn parse_call(&mut self, callee: Expression) -> ParseResult<Expression> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Ok(Expression::Call { callee: Box::new(callee),
                              arguments })
    }

    /// Parses `[<index>]` following an already parsed container.
    pub(super) fn parse_index(&mut self, left: Expression) -> ParseResult<Expression> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Ok(Expression::Index { left:  Box::new(left),
                               index: Box::new(index), })
    }
}

/// Maps an operator token to the binary operator it denotes.
const fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Add),
        TokenKind::Minus => Some(InfixOperator::Sub),
        TokenKind::Star => Some(InfixOperator::Mul),
        TokenKind::Slash => Some(InfixOperator::Div),
        TokenKind::EqualEqual => Some(InfixOperator::Equal),
        TokenKind::BangEqual => Some(InfixOperator::NotEqual),
        TokenKind::Less => Some(InfixOperator::Less),
        TokenKind::LessEqual => Some(InfixOperator::LessEqual),
        TokenKind::Greater => Some(InfixOperator::Greater),
        TokenKind::GreaterEqual => Some(InfixOperator::GreaterEqual),
        _ => None,
    }
}
