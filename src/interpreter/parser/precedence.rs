use crate::interpreter::lexer::TokenKind;

/// How tightly an operator binds, from loosest to tightest.
///
/// The derived ordering follows declaration order, so comparing two levels
/// with `<` tells which one binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that is not an infix operator.
    Lowest,
    /// `==`, `!=`
    Equality,
    /// `<`, `<=`, `>`, `>=`
    Relational,
    /// `+`, `-`
    Additive,
    /// `*`, `/`
    Multiplicative,
    /// Prefix `-` and `!`.
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

impl Precedence {
    /// Gets the precedence of `kind` when it follows an expression.
    ///
    /// Tokens that cannot continue an expression report `Lowest`, which ends
    /// the expression loop.
    ///
    /// ## Example
    /// ```
    /// use mandrill::interpreter::{lexer::TokenKind, parser::Precedence};
    ///
    /// assert!(Precedence::of(TokenKind::Star) > Precedence::of(TokenKind::Plus));
    /// assert!(Precedence::of(TokenKind::LBracket) > Precedence::of(TokenKind::LParen));
    /// assert_eq!(Precedence::of(TokenKind::Comma), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::EqualEqual | TokenKind::BangEqual => Self::Equality,
            TokenKind::Less
            | TokenKind::LessEqual
            | TokenKind::Greater
            | TokenKind::GreaterEqual => Self::Relational,
            TokenKind::Plus | TokenKind::Minus => Self::Additive,
            TokenKind::Star | TokenKind::Slash => Self::Multiplicative,
            TokenKind::LParen => Self::Call,
            TokenKind::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}
