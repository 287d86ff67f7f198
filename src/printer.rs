use crate::parser::ast::{Expr, ExprKind, Program, Stmt, StmtKind};

/// Renders the AST as an indented tree, one node per line, children
/// two spaces beneath their parent:
///
/// ```text
/// program
///   let
///     x
///     vector
///       number 1
///       number 2
/// ```
pub fn render(program: &Program) -> String {
    let mut printer = TreePrinter {
        out: String::new(),
        depth: 0,
    };
    printer.node("program", |p| {
        for stmt in &program.statements {
            p.stmt(stmt);
        }
    });
    printer.out
}

struct TreePrinter {
    out: String,
    depth: usize,
}

impl TreePrinter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn node(&mut self, name: &str, children: impl FnOnce(&mut Self)) {
        self.line(name);
        self.depth += 1;
        children(self);
        self.depth -= 1;
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Let { name, initializer } => self.node("let", |p| {
                p.line(name);
                p.expr(initializer);
            }),
            StmtKind::Print { args } => self.node("print", |p| {
                for arg in args {
                    p.expr(arg);
                }
            }),
            StmtKind::Expr(expr) => self.node("expr", |p| p.expr(expr)),
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Number(value) => self.line(&format!("number {}", value)),
            ExprKind::VarRef { name } => self.line(&format!("var {}", name)),
            ExprKind::Vector { elements } => self.node("vector", |p| {
                for element in elements {
                    p.expr(element);
                }
            }),
            ExprKind::Binary { op, left, right } => self.node(op.name(), |p| {
                p.expr(left);
                p.expr(right);
            }),
        }
    }
}
