pub mod token;

use crate::diagnostics::Diagnostic;
use crate::scanner::token::{Token, TokenKind};
use crate::span::{Position, Span};
use std::collections::HashMap;

pub struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    start: usize,   // first char of the lexeme being scanned
    current: usize, // char currently being considered
    line: usize,
    column: usize,
    start_column: usize,
    keywords: HashMap<String, TokenKind>,
}

impl Scanner {
    pub fn new(source: impl Into<String>, keywords: &HashMap<String, TokenKind>) -> Self {
        Scanner {
            source: source.into().chars().collect(),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 0,
            start_column: 0,
            keywords: keywords.clone(),
        }
    }

    /// Single left-to-right pass over the source. Never fails: an
    /// unrecognized character is reported and skipped, and a token
    /// vector (terminated by `EndOfInput`) comes back either way.
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_column = self.column;
            self.scan_token();
        }

        let here = Position::new(self.line, self.column);
        self.tokens
            .push(Token::new(TokenKind::EndOfInput, "", None, Span::at(here)));
        (self.tokens, self.diagnostics)
    }

    fn scan_token(&mut self) {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenKind::OpenParen),
            ')' => self.add_token(TokenKind::CloseParen),
            ',' => self.add_token(TokenKind::Comma),
            ';' => self.add_token(TokenKind::Semicolon),
            '<' => self.add_token(TokenKind::VectorOpen),
            '>' => self.add_token(TokenKind::VectorClose),
            '=' => self.add_token(TokenKind::Assign),
            '^' => self.add_token(TokenKind::Caret),
            '*' => self.add_token(TokenKind::Star),
            '+' => self.add_token(TokenKind::Plus),
            '-' => self.add_token(TokenKind::Minus),

            '/' => {
                if self.match_char('/') {
                    // Comment goes until end of line (newline not consumed)
                    while self.peek() != Some('\n') && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            ' ' | '\r' | '\t' => {}

            '\n' => {
                self.line += 1;
                self.column = 0;
            }

            c if c.is_ascii_digit() => self.number(),

            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),

            _ => {
                let span = Span::new(
                    Position::new(self.line, self.start_column),
                    Position::new(self.line, self.column),
                );
                self.diagnostics
                    .push(Diagnostic::lexical(span, "Unexpected character."));
            }
        }
    }

    fn number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // A fractional part needs a digit after the '.'; a bare
        // trailing '.' is left for the next token.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume '.'

            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme: String = self.source[self.start..self.current].iter().collect();
        match lexeme.parse::<f64>() {
            Ok(value) => self.add_literal_token(TokenKind::Number, value),
            Err(_) => {
                let span = Span::new(
                    Position::new(self.line, self.start_column),
                    Position::new(self.line, self.column),
                );
                self.diagnostics
                    .push(Diagnostic::lexical(span, format!("Invalid number '{lexeme}'.")));
            }
        }
    }

    fn identifier(&mut self) {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        let kind = self
            .keywords
            .get(&text)
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: f64) {
        self.push_token(kind, Some(literal));
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<f64>) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let span = Span::new(
            Position::new(self.line, self.start_column),
            Position::new(self.line, self.column),
        );
        self.tokens.push(Token::new(kind, lexeme, literal, span));
    }

    fn advance(&mut self) -> char {
        let ch = self.source[self.current];
        self.current += 1;
        self.column += 1;
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        match self.source.get(self.current) {
            Some(&ch) if ch == expected => {
                self.current += 1;
                self.column += 1;
                true
            }
            _ => false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}
