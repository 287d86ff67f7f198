pub mod ast;

use crate::diagnostics::Diagnostic;
use crate::parser::ast::{BinaryOp, Expr, ExprKind, Program, Stmt, StmtKind};
use crate::scanner::token::{Token, TokenKind};

/// Recursive-descent parser over the scanner's token vector.
///
/// The first structural mismatch aborts the whole parse with a single
/// diagnostic; there is no statement-level resynchronization, so a
/// malformed statement yields no AST at all for that call.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    pub fn parse(mut self) -> Result<Program, Diagnostic> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.statement()?);
        }

        if statements.is_empty() {
            return Ok(Program::empty());
        }

        let span = statements[0]
            .span
            .merge(statements[statements.len() - 1].span);
        Ok(Program { statements, span })
    }

    fn statement(&mut self) -> Result<Stmt, Diagnostic> {
        if self.match_kind(TokenKind::Print) {
            return self.print_statement();
        }
        if self.match_kind(TokenKind::Let) {
            return self.let_statement();
        }
        self.expression_statement()
    }

    fn print_statement(&mut self) -> Result<Stmt, Diagnostic> {
        self.consume(TokenKind::OpenParen, "Expect '(' after print keyword.")?;

        // The first argument is parsed unconditionally, so print takes
        // at least one expression.
        let mut args = vec![self.expression()?];
        while self.match_kind(TokenKind::Comma) {
            args.push(self.expression()?);
        }

        self.consume(TokenKind::CloseParen, "Expect ')' after print arguments.")?;
        self.consume(TokenKind::Semicolon, "Expect ';' after statement.")?;

        let span = args[0].span.merge(self.previous().span);
        Ok(Stmt {
            kind: StmtKind::Print { args },
            span,
        })
    }

    fn let_statement(&mut self) -> Result<Stmt, Diagnostic> {
        let name_token = self
            .consume(TokenKind::Identifier, "Expect identifier after 'let'.")?
            .clone();
        self.consume(TokenKind::Assign, "Expect '=' after identifier.")?;
        let initializer = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after statement.")?;

        // Spans from the name token to the semicolon, excluding 'let'.
        let span = name_token.span.merge(self.previous().span);
        Ok(Stmt {
            kind: StmtKind::Let {
                name: name_token.lexeme,
                initializer,
            },
            span,
        })
    }

    fn expression_statement(&mut self) -> Result<Stmt, Diagnostic> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after statement.")?;

        let span = expr.span;
        Ok(Stmt {
            kind: StmtKind::Expr(expr),
            span,
        })
    }

    fn expression(&mut self) -> Result<Expr, Diagnostic> {
        self.addition()
    }

    fn addition(&mut self) -> Result<Expr, Diagnostic> {
        self.binary_expression(
            &[
                (TokenKind::Plus, BinaryOp::Add),
                (TokenKind::Minus, BinaryOp::Sub),
            ],
            |p| p.multiplication(),
        )
    }

    fn multiplication(&mut self) -> Result<Expr, Diagnostic> {
        self.binary_expression(
            &[
                (TokenKind::Star, BinaryOp::Mul),
                (TokenKind::Slash, BinaryOp::Div),
            ],
            |p| p.exponent(),
        )
    }

    /// `^` is the one right-associative operator: the right operand
    /// recurses into this same rule instead of the next-lower one.
    fn exponent(&mut self) -> Result<Expr, Diagnostic> {
        let mut expr = self.atom()?;

        if self.match_kind(TokenKind::Caret) {
            let right = self.exponent()?;
            let span = expr.span.merge(right.span);
            expr = Expr {
                kind: ExprKind::Binary {
                    op: BinaryOp::Pow,
                    left: Box::new(expr),
                    right: Box::new(right),
                },
                span,
            };
        }

        Ok(expr)
    }

    /// Shared shape of the left-associative precedence levels: parse
    /// the next-tighter level, then fold as long as one of `ops`
    /// keeps appearing.
    fn binary_expression<F>(
        &mut self,
        ops: &[(TokenKind, BinaryOp)],
        mut next_precedence: F,
    ) -> Result<Expr, Diagnostic>
    where
        F: FnMut(&mut Self) -> Result<Expr, Diagnostic>,
    {
        let mut left = next_precedence(self)?;

        while let Some(op) = self.match_operator(ops) {
            let right = next_precedence(self)?;
            let span = left.span.merge(right.span);
            left = Expr {
                kind: ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            };
        }

        Ok(left)
    }

    fn atom(&mut self) -> Result<Expr, Diagnostic> {
        if self.match_kind(TokenKind::Number) {
            let token = self.previous();
            // The scanner always attaches the decoded literal
            let value = token.literal.unwrap_or_default();
            return Ok(Expr {
                kind: ExprKind::Number(value),
                span: token.span,
            });
        }

        if self.match_kind(TokenKind::Identifier) {
            let token = self.previous();
            return Ok(Expr {
                kind: ExprKind::VarRef {
                    name: token.lexeme.clone(),
                },
                span: token.span,
            });
        }

        if self.match_kind(TokenKind::OpenParen) {
            let expr = self.expression()?;
            self.consume(TokenKind::CloseParen, "Expect ')' after expression.")?;
            // The inner expression keeps its own span
            return Ok(expr);
        }

        if self.match_kind(TokenKind::VectorOpen) {
            return self.vector_literal();
        }

        Err(Diagnostic::at_token(self.peek(), "Expect expression."))
    }

    /// `<` was already consumed. `<>` is a legal empty vector.
    fn vector_literal(&mut self) -> Result<Expr, Diagnostic> {
        let open_span = self.previous().span;
        let mut elements = Vec::new();

        if !self.check(TokenKind::VectorClose) {
            elements.push(self.expression()?);
            while self.match_kind(TokenKind::Comma) {
                elements.push(self.expression()?);
            }
        }

        self.consume(
            TokenKind::VectorClose,
            "Expect '>' at the end of vector literal.",
        )?;

        let span = open_span.merge(self.previous().span);
        Ok(Expr {
            kind: ExprKind::Vector { elements },
            span,
        })
    }

    // utility methods
    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::EndOfInput
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn check(&self, kind: TokenKind) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.peek().kind == kind
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    fn match_operator(&mut self, ops: &[(TokenKind, BinaryOp)]) -> Option<BinaryOp> {
        for &(kind, op) in ops {
            if self.check(kind) {
                self.advance();
                return Some(op);
            }
        }
        None
    }

    /// Consume the expected token or abort, citing the offending one.
    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&Token, Diagnostic> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(Diagnostic::at_token(self.peek(), message))
    }
}
