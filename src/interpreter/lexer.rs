use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// Every punctuation mark, operator and keyword of the language has its own
/// variant. `Illegal` and `Eof` are never matched by a pattern; the [`Lexer`]
/// produces them for unrecognized input and for the end of the source.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// Unrecognized input.
    Illegal,
    /// End of the source text.
    Eof,

    /// Identifier tokens; variable or function names such as `x` or `adder`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// Double quoted string literal tokens, such as `"hello"`.
    #[regex(r#""[^"]*""#, count_newlines)]
    String,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// `func`
    #[token("func")]
    Func,
    /// `var`
    #[token("var")]
    Var,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,

    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks; skipped after bumping the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Slash => "/",
            Self::Star => "*",
            Self::EqualEqual => "==",
            Self::Bang => "!",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Func => "func",
            Self::Var => "var",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEWLINE",
        };
        write!(f, "{text}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Keeps the line counter accurate for string literals spanning lines.
fn count_newlines(lex: &mut logos::Lexer<TokenKind>) {
    lex.extras.line += lex.slice().chars().filter(|&c| c == '\n').count();
}

/// A single token: its kind, the source text it stands for and its line.
///
/// For string literals the literal is the text between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind:    TokenKind,
    /// The source text of the token.
    pub literal: String,
    /// The line the token starts on.
    pub line:    usize,
}

impl Token {
    /// Builds a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line }
    }

    /// Returns `true` if the token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::String => write!(f, "\"{}\"", self.literal),
            _ => write!(f, "'{}'", self.literal),
        }
    }
}

/// A pull-based token stream over a source string.
///
/// Tokens are produced on demand by [`Lexer::next_token`]. Once the input is
/// exhausted every further call returns an `Eof` token.
///
/// # Example
/// ```
/// use mandrill::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("var x = 5;");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Var);
/// assert_eq!(lexer.next_token().literal, "x");
/// assert_eq!(lexer.next_token().kind, TokenKind::Assign);
/// assert_eq!(lexer.next_token().kind, TokenKind::Number);
/// assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Produces the next token of the stream.
    ///
    /// Input the language does not recognize becomes an `Illegal` token
    /// holding the offending text; lexing itself never fails.
    pub fn next_token(&mut self) -> Token {
        let Some(result) = self.inner.next() else {
            return Token::new(TokenKind::Eof, "", self.inner.extras.line);
        };

        let slice = self.inner.slice();
        let line = self.inner.extras.line;

        match result {
            // A string spanning lines has already moved the counter past its start.
            Ok(TokenKind::String) => Token::new(TokenKind::String,
                                                &slice[1..slice.len() - 1],
                                                line - slice.matches('\n').count()),
            Ok(kind) => Token::new(kind, slice, line),
            Err(()) => Token::new(TokenKind::Illegal, slice, line),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, `Eof`.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}
