use crate::span::Span;
use std::fmt;

#[derive(Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Decoded literal value; only `Number` tokens carry one.
    pub literal: Option<f64>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<f64>, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.literal {
            Some(n) => write!(f, "{:?} '{}' {} {}", self.kind, self.lexeme, n, self.span),
            None => write!(f, "{:?} '{}' {}", self.kind, self.lexeme, self.span),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Single-character tokens
    OpenParen,   // (
    CloseParen,  // )
    Comma,       // ,
    Semicolon,   // ;
    VectorOpen,  // < (vector delimiter, not a comparison)
    VectorClose, // >
    Assign,      // =

    // Operators
    Caret, // ^
    Star,  // *
    Slash, // /
    Plus,  // +
    Minus, // -

    // Literals
    Identifier,
    Number,

    // Keywords
    Let,
    Print,

    EndOfInput,
}
