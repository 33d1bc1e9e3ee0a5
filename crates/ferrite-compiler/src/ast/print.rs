//! Indented tree dump of the AST, used by the CLI `parse` command and tests.

use std::fmt::Write;

use super::{Block, ElseArm, Expr, ExprKind, IfExpr, IfStmt, Program, Stmt};

/// Renders the program as an indented tree, one node per line.
pub fn dump(program: &Program) -> String {
    let mut out = String::new();
    let mut p = Printer { out: &mut out };
    p.line(0, "Program");
    for item in &program.items {
        p.func(1, item);
    }
    out
}

struct Printer<'a> {
    out: &'a mut String,
}

impl Printer<'_> {
    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn func(&mut self, depth: usize, func: &super::FuncDecl) {
        let mut header = format!("FuncDecl {}", func.name);
        if let Some(ret) = &func.ret_type {
            let _ = write!(header, " -> {ret}");
        }
        self.line(depth, header);
        for param in &func.params {
            let mutability = if param.mutable { "mut " } else { "" };
            self.line(
                depth + 1,
                format!("Param {}{}: {}", mutability, param.name, param.ty),
            );
        }
        self.block(depth + 1, &func.body);
    }

    fn block(&mut self, depth: usize, block: &Block) {
        self.line(depth, "Block");
        for stmt in &block.stmts {
            self.stmt(depth + 1, stmt);
        }
        if let Some(tail) = &block.tail {
            self.expr(depth + 1, tail);
        }
    }

    fn stmt(&mut self, depth: usize, stmt: &Stmt) {
        match stmt {
            Stmt::Empty => self.line(depth, "Empty"),
            Stmt::Expr(e) => {
                self.line(depth, "ExprStmt");
                self.expr(depth + 1, e);
            }
            Stmt::Let {
                name, mutable, ty, init, ..
            } => {
                let mut header = format!("Let {}{}", if *mutable { "mut " } else { "" }, name);
                if let Some(ty) = ty {
                    let _ = write!(header, ": {ty}");
                }
                self.line(depth, header);
                if let Some(init) = init {
                    self.expr(depth + 1, init);
                }
            }
            Stmt::Assign { target, value, .. } => {
                self.line(depth, "Assign");
                self.expr(depth + 1, target);
                self.expr(depth + 1, value);
            }
            Stmt::Return { value, .. } => {
                self.line(depth, "Return");
                if let Some(value) = value {
                    self.expr(depth + 1, value);
                }
            }
            Stmt::If(stmt) => self.if_stmt(depth, stmt),
            Stmt::While { cond, body, .. } => {
                self.line(depth, "While");
                self.expr(depth + 1, cond);
                self.block(depth + 1, body);
            }
            Stmt::For {
                name,
                mutable,
                start,
                end,
                body,
                ..
            } => {
                self.line(
                    depth,
                    format!("For {}{}", if *mutable { "mut " } else { "" }, name),
                );
                self.expr(depth + 1, start);
                if let Some(end) = end {
                    self.expr(depth + 1, end);
                }
                self.block(depth + 1, body);
            }
            Stmt::Loop { body, .. } => {
                self.line(depth, "Loop");
                self.block(depth + 1, body);
            }
            Stmt::Break { value, .. } => {
                self.line(depth, "Break");
                if let Some(value) = value {
                    self.expr(depth + 1, value);
                }
            }
            Stmt::Continue { .. } => self.line(depth, "Continue"),
        }
    }

    fn if_stmt(&mut self, depth: usize, stmt: &IfStmt) {
        self.line(depth, "If");
        self.expr(depth + 1, &stmt.cond);
        self.block(depth + 1, &stmt.then_body);
        if let Some(else_body) = &stmt.else_body {
            self.line(depth + 1, "Else");
            self.block(depth + 2, else_body);
        }
    }

    fn if_expr(&mut self, depth: usize, expr: &IfExpr) {
        self.line(depth, "If");
        self.expr(depth + 1, &expr.cond);
        self.block(depth + 1, &expr.then_body);
        self.line(depth + 1, "Else");
        match &expr.else_body {
            ElseArm::Block(block) => self.block(depth + 2, block),
            ElseArm::If(inner) => self.if_expr(depth + 2, inner),
        }
    }

    fn expr(&mut self, depth: usize, expr: &Expr) {
        match &expr.kind {
            ExprKind::Number(n) => self.line(depth, format!("Number {n}")),
            ExprKind::Ident(name) => self.line(depth, format!("Ident {name}")),
            ExprKind::Binary { op, left, right } => {
                self.line(depth, format!("Binary {op}"));
                self.expr(depth + 1, left);
                self.expr(depth + 1, right);
            }
            ExprKind::Call { callee, args } => {
                self.line(depth, "Call");
                self.expr(depth + 1, callee);
                for arg in args {
                    self.expr(depth + 1, arg);
                }
            }
            ExprKind::Array(elems) => {
                self.line(depth, "Array");
                for elem in elems {
                    self.expr(depth + 1, elem);
                }
            }
            ExprKind::Tuple(elems) => {
                self.line(depth, "Tuple");
                for elem in elems {
                    self.expr(depth + 1, elem);
                }
            }
            ExprKind::Index { base, index } => {
                self.line(depth, "Index");
                self.expr(depth + 1, base);
                self.expr(depth + 1, index);
            }
            ExprKind::Member { base, field } => {
                self.line(depth, format!("Member .{field}"));
                self.expr(depth + 1, base);
            }
            ExprKind::Borrow { mutable, expr } => {
                self.line(depth, if *mutable { "Borrow &mut" } else { "Borrow &" });
                self.expr(depth + 1, expr);
            }
            ExprKind::Deref(inner) => {
                self.line(depth, "Deref");
                self.expr(depth + 1, inner);
            }
            ExprKind::Block(block) => self.block(depth, block),
            ExprKind::If(inner) => self.if_expr(depth, inner),
            ExprKind::Loop(body) => {
                self.line(depth, "Loop");
                self.block(depth + 1, body);
            }
        }
    }
}
