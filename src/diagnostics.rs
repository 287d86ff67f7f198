use crate::scanner::token::{Token, TokenKind};
use crate::span::Span;
use std::fmt;

/// A single reported error, carried as a value rather than through a
/// process-wide flag. Renders as one human-readable line:
///
/// ```text
/// [location 1:6-1:7] Error at '2': Expect ';' after statement.
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub span: Span,
    pub context: ErrorContext,
    pub message: String,
}

/// What the message cites: nothing (lexical errors, located by span
/// alone), end-of-input, or an offending token's lexeme.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorContext {
    Bare,
    AtEnd,
    AtLexeme(String),
}

impl Diagnostic {
    pub fn lexical(span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            span,
            context: ErrorContext::Bare,
            message: message.into(),
        }
    }

    /// Syntax error citing the offending token; end-of-input is cited
    /// as ` at end` rather than by its (empty) lexeme.
    pub fn at_token(token: &Token, message: impl Into<String>) -> Self {
        let context = if token.kind == TokenKind::EndOfInput {
            ErrorContext::AtEnd
        } else {
            ErrorContext::AtLexeme(token.lexeme.clone())
        };
        Diagnostic {
            span: token.span,
            context,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[location {}] Error", self.span)?;
        match &self.context {
            ErrorContext::Bare => {}
            ErrorContext::AtEnd => write!(f, " at end")?,
            ErrorContext::AtLexeme(lexeme) => write!(f, " at '{}'", lexeme)?,
        }
        write!(f, ": {}", self.message)
    }
}
