//! Syntax-directed translation of the AST to quadruples.
//!
//! Expression generation returns the textual value naming its result (a
//! temporary, a variable, or a number literal). Temporaries are `t1, t2, …`
//! and labels `L1, L2, …`, both per-run counters. A loop context stack
//! carries the `break`/`continue` targets and, for `loop`, the result
//! temporary that `break <expr>` assigns.

use crate::analyze::Analysis;
use crate::ast::{
    Block, ElseArm, Expr, ExprKind, FuncDecl, IfExpr, IfStmt, Program, Stmt,
};

use super::{Arg, IrError, Op, Quad};

/// Generates the quadruple list for a checked program.
pub fn generate(program: &Program, analysis: &Analysis) -> Result<Vec<Quad>, IrError> {
    let mut generator = Generator {
        analysis,
        code: Vec::new(),
        temp_count: 0,
        label_count: 0,
        loop_stack: Vec::new(),
    };
    for func in &program.items {
        generator.gen_func(func)?;
    }
    Ok(generator.code)
}

struct LoopCtx {
    break_label: String,
    continue_label: String,
    result: Option<String>,
}

struct Generator<'a> {
    analysis: &'a Analysis,
    code: Vec<Quad>,
    temp_count: u32,
    label_count: u32,
    loop_stack: Vec<LoopCtx>,
}

impl Generator<'_> {
    fn new_temp(&mut self) -> String {
        self.temp_count += 1;
        format!("t{}", self.temp_count)
    }

    fn new_label(&mut self) -> String {
        self.label_count += 1;
        format!("L{}", self.label_count)
    }

    fn emit(&mut self, op: Op, arg1: Option<Arg>, arg2: Option<Arg>, result: Option<String>) {
        self.code.push(Quad::new(op, arg1, arg2, result));
    }

    fn emit_label(&mut self, label: &str) {
        self.emit(Op::Label, None, None, Some(label.to_string()));
    }

    fn emit_goto(&mut self, label: &str) {
        self.emit(Op::Goto, None, None, Some(label.to_string()));
    }

    /// Whether the previous quad already left this position (so a loop's
    /// back-edge `goto` would be dead).
    fn last_is_jump(&self) -> bool {
        matches!(
            self.code.last().map(|q| q.op),
            Some(Op::Goto) | Some(Op::Return)
        )
    }

    fn gen_func(&mut self, func: &FuncDecl) -> Result<(), IrError> {
        self.emit(
            Op::FuncStart,
            Some(func.name.as_str().into()),
            None,
            None,
        );
        for param in &func.params {
            self.emit(
                Op::Param,
                Some(param.name.as_str().into()),
                Some(param.ty.to_string().into()),
                None,
            );
        }
        if let Some(value) = self.gen_block_stmts(&func.body)? {
            self.emit(Op::Return, Some(value.into()), None, None);
        }
        self.emit(Op::FuncEnd, Some(func.name.as_str().into()), None, None);
        Ok(())
    }

    /// Generates a block's statements; returns the trailing expression's
    /// value if the block has one and control reaches it.
    fn gen_block_stmts(&mut self, block: &Block) -> Result<Option<String>, IrError> {
        for stmt in &block.stmts {
            self.gen_stmt(stmt)?;
            if stmt.is_terminator() {
                return Ok(None);
            }
        }
        match &block.tail {
            Some(tail) => Ok(Some(self.gen_expr(tail)?)),
            None => Ok(None),
        }
    }

    fn gen_stmt(&mut self, stmt: &Stmt) -> Result<(), IrError> {
        match stmt {
            Stmt::Empty => Ok(()),
            Stmt::Expr(expr) => {
                let value = self.gen_expr(expr)?;
                self.emit(Op::Eval, Some(value.into()), None, None);
                Ok(())
            }
            Stmt::Let { id, name, init, .. } => {
                let ty = self
                    .analysis
                    .decl_type(*id)
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "_".to_string());
                self.emit(
                    Op::Decl,
                    Some(name.as_str().into()),
                    Some(ty.into()),
                    None,
                );
                if let Some(init) = init {
                    let value = self.gen_expr(init)?;
                    self.emit(Op::Assign, Some(value.into()), None, Some(name.clone()));
                }
                Ok(())
            }
            Stmt::Assign { target, value, .. } => {
                let value = self.gen_expr(value)?;
                let slot = match &target.kind {
                    ExprKind::Ident(name) => name.clone(),
                    // Element and member targets materialize as their read
                    // quad; the assignment stores into its temporary.
                    _ => self.gen_expr(target)?,
                };
                self.emit(Op::Assign, Some(value.into()), None, Some(slot));
                Ok(())
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => Some(self.gen_expr(expr)?),
                    None => None,
                };
                self.emit(Op::Return, value.map(Arg::from), None, None);
                Ok(())
            }
            Stmt::If(if_stmt) => self.gen_if_stmt(if_stmt),
            Stmt::While { cond, body, .. } => self.gen_while(cond, body),
            Stmt::For {
                name, start, end, body, pos, ..
            } => match end {
                Some(end) => self.gen_for_range(name, start, end, body),
                None => Err(IrError::UnsupportedForIterable {
                    line: pos.line,
                    col: pos.col,
                }),
            },
            Stmt::Loop { body, .. } => {
                self.gen_loop(body)?;
                Ok(())
            }
            Stmt::Break { value, pos } => {
                let Some(ctx) = self.loop_stack.last() else {
                    return Err(IrError::break_outside(*pos));
                };
                let break_label = ctx.break_label.clone();
                let result = ctx.result.clone();
                if let (Some(expr), Some(result)) = (value, result) {
                    let value = self.gen_expr(expr)?;
                    self.emit(Op::Assign, Some(value.into()), None, Some(result));
                }
                self.emit_goto(&break_label);
                Ok(())
            }
            Stmt::Continue { pos } => {
                let Some(ctx) = self.loop_stack.last() else {
                    return Err(IrError::continue_outside(*pos));
                };
                let label = ctx.continue_label.clone();
                self.emit_goto(&label);
                Ok(())
            }
        }
    }

    fn gen_if_stmt(&mut self, if_stmt: &IfStmt) -> Result<(), IrError> {
        let cond = self.gen_expr(&if_stmt.cond)?;
        let label_else = self.new_label();
        let label_end = self.new_label();

        self.emit(
            Op::IfFalseGoto,
            Some(cond.into()),
            None,
            Some(label_else.clone()),
        );
        self.gen_block_stmts(&if_stmt.then_body)?;
        self.emit_goto(&label_end);
        self.emit_label(&label_else);
        if let Some(else_body) = &if_stmt.else_body {
            self.gen_block_stmts(else_body)?;
        }
        self.emit_label(&label_end);
        Ok(())
    }

    fn gen_while(&mut self, cond: &Expr, body: &Block) -> Result<(), IrError> {
        let label_start = self.new_label();
        let label_end = self.new_label();
        self.loop_stack.push(LoopCtx {
            break_label: label_end.clone(),
            continue_label: label_start.clone(),
            result: None,
        });

        self.emit_label(&label_start);
        let cond = self.gen_expr(cond)?;
        self.emit(
            Op::IfFalseGoto,
            Some(cond.into()),
            None,
            Some(label_end.clone()),
        );
        self.gen_block_stmts(body)?;
        if !self.last_is_jump() {
            self.emit_goto(&label_start);
        }
        self.emit_label(&label_end);

        self.loop_stack.pop();
        Ok(())
    }

    fn gen_for_range(
        &mut self,
        name: &str,
        start: &Expr,
        end: &Expr,
        body: &Block,
    ) -> Result<(), IrError> {
        let start_value = self.gen_expr(start)?;
        self.emit(
            Op::Assign,
            Some(start_value.into()),
            None,
            Some(name.to_string()),
        );

        let label_cond = self.new_label();
        let label_body = self.new_label();
        let label_end = self.new_label();
        self.loop_stack.push(LoopCtx {
            break_label: label_end.clone(),
            continue_label: label_cond.clone(),
            result: None,
        });

        self.emit_goto(&label_cond);
        self.emit_label(&label_body);
        self.gen_block_stmts(body)?;

        let stepped = self.new_temp();
        self.emit(
            Op::Bin(crate::ast::BinOp::Add),
            Some(name.into()),
            Some("1".into()),
            Some(stepped.clone()),
        );
        self.emit(Op::Assign, Some(stepped.into()), None, Some(name.to_string()));

        self.emit_label(&label_cond);
        let end_value = self.gen_expr(end)?;
        let cond = self.new_temp();
        self.emit(
            Op::Bin(crate::ast::BinOp::Lt),
            Some(name.into()),
            Some(end_value.into()),
            Some(cond.clone()),
        );
        self.emit(
            Op::IfFalseGoto,
            Some(cond.into()),
            None,
            Some(label_end.clone()),
        );
        self.emit_goto(&label_body);
        self.emit_label(&label_end);

        self.loop_stack.pop();
        Ok(())
    }

    /// Generates a `loop`, returning the result temporary that valued breaks
    /// assign into.
    fn gen_loop(&mut self, body: &Block) -> Result<String, IrError> {
        let label_start = self.new_label();
        let label_end = self.new_label();
        let result = self.new_temp();
        self.loop_stack.push(LoopCtx {
            break_label: label_end.clone(),
            continue_label: label_start.clone(),
            result: Some(result.clone()),
        });

        self.emit_label(&label_start);
        self.gen_block_stmts(body)?;
        if !self.last_is_jump() {
            self.emit_goto(&label_start);
        }
        self.emit_label(&label_end);

        self.loop_stack.pop();
        Ok(result)
    }

    fn gen_expr(&mut self, expr: &Expr) -> Result<String, IrError> {
        match &expr.kind {
            ExprKind::Number(n) => Ok(n.to_string()),
            ExprKind::Ident(name) => Ok(name.clone()),
            ExprKind::Binary { op, left, right } => {
                let left = self.gen_expr(left)?;
                let right = self.gen_expr(right)?;
                let temp = self.new_temp();
                self.emit(
                    Op::Bin(*op),
                    Some(left.into()),
                    Some(right.into()),
                    Some(temp.clone()),
                );
                Ok(temp)
            }
            ExprKind::Call { callee, args } => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.gen_expr(arg)?);
                }
                let name = match &callee.kind {
                    ExprKind::Ident(name) => name.clone(),
                    _ => self.gen_expr(callee)?,
                };
                let temp = self.new_temp();
                self.emit(
                    Op::Call,
                    Some(name.into()),
                    Some(Arg::List(values)),
                    Some(temp.clone()),
                );
                Ok(temp)
            }
            ExprKind::Array(elems) => self.gen_literal(Op::ArrayLiteral, elems),
            ExprKind::Tuple(elems) => self.gen_literal(Op::TupleLiteral, elems),
            ExprKind::Index { base, index } => {
                let base = self.gen_expr(base)?;
                let index = self.gen_expr(index)?;
                let temp = self.new_temp();
                self.emit(
                    Op::Index,
                    Some(base.into()),
                    Some(index.into()),
                    Some(temp.clone()),
                );
                Ok(temp)
            }
            ExprKind::Member { base, field } => {
                let base = self.gen_expr(base)?;
                let temp = self.new_temp();
                self.emit(
                    Op::MemberAccess,
                    Some(base.into()),
                    Some(field.to_string().into()),
                    Some(temp.clone()),
                );
                Ok(temp)
            }
            ExprKind::Borrow { mutable, expr } => {
                let value = self.gen_expr(expr)?;
                let temp = self.new_temp();
                let op = if *mutable { Op::BorrowMut } else { Op::Borrow };
                self.emit(op, Some(value.into()), None, Some(temp.clone()));
                Ok(temp)
            }
            ExprKind::Deref(inner) => {
                let value = self.gen_expr(inner)?;
                let temp = self.new_temp();
                self.emit(Op::Deref, Some(value.into()), None, Some(temp.clone()));
                Ok(temp)
            }
            ExprKind::Block(block) => {
                let value = self.gen_block_stmts(block)?;
                Ok(value.unwrap_or_else(|| "_".to_string()))
            }
            ExprKind::If(if_expr) => self.gen_if_expr(if_expr),
            ExprKind::Loop(body) => self.gen_loop(body),
        }
    }

    fn gen_literal(&mut self, op: Op, elems: &[Expr]) -> Result<String, IrError> {
        let mut values = Vec::with_capacity(elems.len());
        for elem in elems {
            values.push(self.gen_expr(elem)?);
        }
        let temp = self.new_temp();
        self.emit(op, Some(Arg::List(values)), None, Some(temp.clone()));
        Ok(temp)
    }

    /// `if` in expression context: both arms assign into a shared result
    /// temporary.
    fn gen_if_expr(&mut self, if_expr: &IfExpr) -> Result<String, IrError> {
        let cond = self.gen_expr(&if_expr.cond)?;
        let label_else = self.new_label();
        let label_end = self.new_label();
        let result = self.new_temp();

        self.emit(
            Op::IfFalseGoto,
            Some(cond.into()),
            None,
            Some(label_else.clone()),
        );
        let then_value = self
            .gen_block_stmts(&if_expr.then_body)?
            .unwrap_or_else(|| "_".to_string());
        self.emit(Op::Assign, Some(then_value.into()), None, Some(result.clone()));
        self.emit_goto(&label_end);
        self.emit_label(&label_else);
        let else_value = match &if_expr.else_body {
            ElseArm::Block(block) => self
                .gen_block_stmts(block)?
                .unwrap_or_else(|| "_".to_string()),
            ElseArm::If(inner) => self.gen_if_expr(inner)?,
        };
        self.emit(Op::Assign, Some(else_value.into()), None, Some(result.clone()));
        self.emit_label(&label_end);
        Ok(result)
    }
}
