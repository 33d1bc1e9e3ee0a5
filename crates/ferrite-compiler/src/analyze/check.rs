//! The semantic checking pass.
//!
//! One fail-fast walk over the AST. Results land in [`Analysis`] side tables
//! keyed by node id; the AST itself is never mutated.

use std::collections::HashMap;

use crate::ast::{
    Block, ElseArm, Expr, ExprKind, FuncDecl, IfExpr, IfStmt, NodeId, Program, Stmt,
};
use crate::pos::Pos;

use super::error::{SemanticError, SemanticErrorKind};
use super::symbol::{Scope, Symbol, SymbolId, SymbolKind};
use super::types::{Type, resolve_type};

/// Side tables produced by a successful analysis.
#[derive(Debug, Default)]
pub struct Analysis {
    /// Computed type of every checked expression.
    pub types: HashMap<NodeId, Type>,
    /// Resolved symbol of every checked identifier expression.
    pub idents: HashMap<NodeId, SymbolId>,
    /// Symbol introduced by each `let` statement.
    pub decls: HashMap<NodeId, SymbolId>,
    /// Symbol arena; `SymbolId`s index into it.
    pub symbols: Vec<Symbol>,
}

impl Analysis {
    pub fn expr_type(&self, id: NodeId) -> Option<&Type> {
        self.types.get(&id)
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id as usize]
    }

    /// Final resolved type of the variable a `let` introduced, if known.
    pub fn decl_type(&self, id: NodeId) -> Option<&Type> {
        self.decls
            .get(&id)
            .and_then(|sid| self.symbols[*sid as usize].ty.as_ref())
    }
}

/// Checks a program, returning its analysis side tables.
pub fn analyze(program: &Program) -> Result<Analysis, SemanticError> {
    let mut analyzer = Analyzer::new();
    for func in &program.items {
        analyzer.check_func(func)?;
    }
    Ok(analyzer.finish())
}

/// Loop nesting entry. `while`/`for` accept only bare `break`; `loop`
/// carries the break-type slot.
enum LoopFrame {
    Conditional,
    Valued(Option<Type>),
}

struct Analyzer {
    scopes: Vec<Scope>,
    symbols: Vec<Symbol>,
    loop_frames: Vec<LoopFrame>,
    current_return: Option<Type>,
    types: HashMap<NodeId, Type>,
    idents: HashMap<NodeId, SymbolId>,
    decls: HashMap<NodeId, SymbolId>,
}

impl Analyzer {
    fn new() -> Analyzer {
        Analyzer {
            scopes: vec![Scope::default()],
            symbols: Vec::new(),
            loop_frames: Vec::new(),
            current_return: None,
            types: HashMap::new(),
            idents: HashMap::new(),
            decls: HashMap::new(),
        }
    }

    fn finish(self) -> Analysis {
        Analysis {
            types: self.types,
            idents: self.idents,
            decls: self.decls,
            symbols: self.symbols,
        }
    }

    // --- scope management ---

    fn enter_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    fn exit_scope(&mut self) {
        // Dropping the scope releases every borrow recorded in it.
        self.scopes.pop();
    }

    fn current_scope(&mut self) -> &mut Scope {
        self.scopes.last_mut().expect("scope stack is never empty")
    }

    fn declare(&mut self, symbol: Symbol) -> SymbolId {
        let id = self.symbols.len() as SymbolId;
        let name = symbol.name.clone();
        self.symbols.push(symbol);
        // Shadowing in the same scope simply rebinds the name.
        self.current_scope().symbols.insert(name, id);
        id
    }

    fn lookup(&self, name: &str) -> Option<SymbolId> {
        for scope in self.scopes.iter().rev() {
            if let Some(&id) = scope.symbols.get(name) {
                return Some(id);
            }
        }
        None
    }

    fn lookup_borrow(&self, name: &str) -> Option<super::symbol::BorrowInfo> {
        for scope in self.scopes.iter().rev() {
            if let Some(info) = scope.borrows.get(name) {
                return Some(info.clone());
            }
        }
        None
    }

    // --- declarations ---

    fn check_func(&mut self, func: &FuncDecl) -> Result<(), SemanticError> {
        let param_types: Vec<Type> = func.params.iter().map(|p| resolve_type(&p.ty)).collect();
        let ret = func
            .ret_type
            .as_ref()
            .map(resolve_type)
            .unwrap_or(Type::Void);
        let func_type = Type::Function {
            params: param_types.clone(),
            ret: Box::new(ret.clone()),
        };

        // Registered before the body so recursive calls resolve.
        self.declare(Symbol {
            name: func.name.clone(),
            ty: Some(func_type),
            mutable: false,
            initialized: true,
            kind: SymbolKind::Function,
        });

        let saved = self.current_return.take();
        self.current_return = Some(ret);

        self.enter_scope();
        for (param, ty) in func.params.iter().zip(param_types) {
            self.declare(Symbol {
                name: param.name.clone(),
                ty: Some(ty),
                mutable: param.mutable,
                initialized: true,
                kind: SymbolKind::Parameter,
            });
        }
        self.check_block(&func.body)?;
        self.exit_scope();

        self.current_return = saved;
        Ok(())
    }

    // --- statements ---

    /// Checks a block in its own scope; its type is the trailing
    /// expression's, or `void` without one.
    fn check_block(&mut self, block: &Block) -> Result<Type, SemanticError> {
        self.enter_scope();
        for stmt in &block.stmts {
            self.check_stmt(stmt)?;
        }
        let ty = match &block.tail {
            Some(tail) => self.check_expr(tail)?,
            None => Type::Void,
        };
        self.exit_scope();
        Ok(ty)
    }

    fn check_stmt(&mut self, stmt: &Stmt) -> Result<(), SemanticError> {
        match stmt {
            Stmt::Empty => Ok(()),
            Stmt::Expr(expr) => {
                self.check_expr(expr)?;
                Ok(())
            }
            Stmt::Let {
                id,
                name,
                mutable,
                ty,
                init,
                pos,
            } => self.check_let(*id, name, *mutable, ty.as_ref(), init.as_ref(), *pos),
            Stmt::Assign { target, value, pos } => self.check_assign(target, value, *pos),
            Stmt::Return { value, pos } => self.check_return(value.as_ref(), *pos),
            Stmt::If(if_stmt) => self.check_if_stmt(if_stmt),
            Stmt::While { cond, body, pos } => {
                let cond_ty = self.check_expr(cond)?;
                if cond_ty != Type::I32 {
                    return Err(SemanticError::at(
                        *pos,
                        SemanticErrorKind::ConditionType {
                            construct: "while",
                            found: cond_ty.to_string(),
                        },
                    ));
                }
                self.loop_frames.push(LoopFrame::Conditional);
                let result = self.check_block(body);
                self.loop_frames.pop();
                result.map(|_| ())
            }
            Stmt::For {
                name,
                mutable,
                start,
                end,
                body,
                pos,
            } => self.check_for(name, *mutable, start, end.as_ref(), body, *pos),
            Stmt::Loop { body, .. } => {
                self.loop_frames.push(LoopFrame::Valued(None));
                let result = self.check_block(body);
                self.loop_frames.pop();
                result.map(|_| ())
            }
            Stmt::Break { value, pos } => self.check_break(value.as_ref(), *pos),
            Stmt::Continue { pos } => {
                if self.loop_frames.is_empty() {
                    return Err(SemanticError::at(
                        *pos,
                        SemanticErrorKind::ContinueOutsideLoop,
                    ));
                }
                Ok(())
            }
        }
    }

    fn check_let(
        &mut self,
        id: NodeId,
        name: &str,
        mutable: bool,
        annotation: Option<&crate::ast::TypeExpr>,
        init: Option<&Expr>,
        pos: Pos,
    ) -> Result<(), SemanticError> {
        let init_ty = match init {
            Some(expr) => {
                let ty = self.check_expr(expr)?;
                if ty.is_void() {
                    return Err(SemanticError::at(
                        pos,
                        SemanticErrorKind::VoidValue(name.to_string()),
                    ));
                }
                Some(ty)
            }
            None => None,
        };

        let annotated = annotation.map(resolve_type);
        if let (Some(ann), Some(init_ty)) = (&annotated, &init_ty) {
            if ann != init_ty {
                return Err(SemanticError::at(
                    pos,
                    SemanticErrorKind::DeclTypeMismatch {
                        name: name.to_string(),
                        annotated: ann.to_string(),
                        found: init_ty.to_string(),
                    },
                ));
            }
        }

        // `None` defers the type to the first assignment (`let x; x = 1;`).
        let final_ty = annotated.or(init_ty);

        // Shadowing a name in the same scope resets its borrow state.
        if self.current_scope().symbols.contains_key(name) {
            self.current_scope().borrows.shift_remove(name);
        }

        let initialized = init.is_some();
        let sid = self.declare(Symbol {
            name: name.to_string(),
            ty: final_ty,
            mutable,
            initialized,
            kind: SymbolKind::Variable,
        });
        self.decls.insert(id, sid);
        Ok(())
    }

    fn check_assign(&mut self, target: &Expr, value: &Expr, pos: Pos) -> Result<(), SemanticError> {
        match &target.kind {
            ExprKind::Ident(name) => {
                let Some(sid) = self.lookup(name) else {
                    return Err(SemanticError::at(
                        pos,
                        SemanticErrorKind::Undeclared(name.clone()),
                    ));
                };
                let symbol = &self.symbols[sid as usize];
                // An immutable variable accepts only its first write.
                if !symbol.mutable && symbol.initialized {
                    return Err(SemanticError::at(
                        pos,
                        SemanticErrorKind::ImmutableReassign(name.clone()),
                    ));
                }

                let value_ty = self.check_expr(value)?;
                match self.symbols[sid as usize].ty.clone() {
                    Some(ty) if ty != value_ty => {
                        return Err(SemanticError::at(
                            pos,
                            SemanticErrorKind::AssignTypeMismatch {
                                name: name.clone(),
                                expected: ty.to_string(),
                                found: value_ty.to_string(),
                            },
                        ));
                    }
                    Some(_) => {}
                    None => {
                        if value_ty.is_void() {
                            return Err(SemanticError::at(
                                pos,
                                SemanticErrorKind::VoidValue(name.clone()),
                            ));
                        }
                        self.symbols[sid as usize].ty = Some(value_ty.clone());
                    }
                }
                self.symbols[sid as usize].initialized = true;

                self.idents.insert(target.id, sid);
                self.types.insert(target.id, value_ty);
                Ok(())
            }
            ExprKind::Index { base, .. } => {
                let element_ty = self.check_expr(target)?;
                if let ExprKind::Ident(name) = &base.kind {
                    if let Some(sid) = self.lookup(name) {
                        if !self.symbols[sid as usize].mutable {
                            return Err(SemanticError::at(
                                pos,
                                SemanticErrorKind::ImmutableArrayAssign(name.clone()),
                            ));
                        }
                    }
                }
                let value_ty = self.check_expr(value)?;
                if value_ty != element_ty {
                    return Err(SemanticError::at(
                        pos,
                        SemanticErrorKind::ElementTypeMismatch {
                            expected: element_ty.to_string(),
                            found: value_ty.to_string(),
                        },
                    ));
                }
                Ok(())
            }
            ExprKind::Member { base, .. } => {
                let member_ty = self.check_expr(target)?;
                if let ExprKind::Ident(name) = &base.kind {
                    if let Some(sid) = self.lookup(name) {
                        if !self.symbols[sid as usize].mutable {
                            return Err(SemanticError::at(
                                pos,
                                SemanticErrorKind::ImmutableTupleAssign(name.clone()),
                            ));
                        }
                    }
                }
                let value_ty = self.check_expr(value)?;
                if value_ty != member_ty {
                    return Err(SemanticError::at(
                        pos,
                        SemanticErrorKind::MemberTypeMismatch {
                            expected: member_ty.to_string(),
                            found: value_ty.to_string(),
                        },
                    ));
                }
                Ok(())
            }
            _ => Err(SemanticError::at(
                pos,
                SemanticErrorKind::UnsupportedAssignTarget,
            )),
        }
    }

    fn check_return(&mut self, value: Option<&Expr>, pos: Pos) -> Result<(), SemanticError> {
        let expected = self.current_return.clone().unwrap_or(Type::Void);
        match value {
            Some(expr) => {
                let found = self.check_expr(expr)?;
                if found != expected {
                    return Err(SemanticError::at(
                        pos,
                        SemanticErrorKind::ReturnTypeMismatch {
                            expected: expected.to_string(),
                            found: found.to_string(),
                        },
                    ));
                }
                Ok(())
            }
            None => {
                if expected != Type::Void {
                    return Err(SemanticError::at(
                        pos,
                        SemanticErrorKind::MissingReturnValue(expected.to_string()),
                    ));
                }
                Ok(())
            }
        }
    }

    fn check_if_stmt(&mut self, if_stmt: &IfStmt) -> Result<(), SemanticError> {
        let cond_ty = self.check_expr(&if_stmt.cond)?;
        if cond_ty != Type::I32 {
            return Err(SemanticError::at(
                if_stmt.pos,
                SemanticErrorKind::ConditionType {
                    construct: "if",
                    found: cond_ty.to_string(),
                },
            ));
        }
        self.check_block(&if_stmt.then_body)?;
        if let Some(else_body) = &if_stmt.else_body {
            self.check_block(else_body)?;
        }
        Ok(())
    }

    fn check_for(
        &mut self,
        name: &str,
        mutable: bool,
        start: &Expr,
        end: Option<&Expr>,
        body: &Block,
        pos: Pos,
    ) -> Result<(), SemanticError> {
        let var_ty = match end {
            Some(end) => {
                let start_ty = self.check_expr(start)?;
                let end_ty = self.check_expr(end)?;
                if start_ty != Type::I32 || end_ty != Type::I32 {
                    return Err(SemanticError::at(
                        pos,
                        SemanticErrorKind::ForRangeType {
                            start: start_ty.to_string(),
                            end: end_ty.to_string(),
                        },
                    ));
                }
                Type::I32
            }
            None => {
                let iterable_ty = self.check_expr(start)?;
                match iterable_ty {
                    Type::Array { elem, .. } => *elem,
                    other => {
                        return Err(SemanticError::at(
                            pos,
                            SemanticErrorKind::ForIterableType(other.to_string()),
                        ));
                    }
                }
            }
        };

        self.loop_frames.push(LoopFrame::Conditional);
        self.enter_scope();
        self.declare(Symbol {
            name: name.to_string(),
            ty: Some(var_ty),
            mutable,
            initialized: true,
            kind: SymbolKind::Variable,
        });
        let result = self.check_block(body);
        self.exit_scope();
        self.loop_frames.pop();
        result.map(|_| ())
    }

    fn check_break(&mut self, value: Option<&Expr>, pos: Pos) -> Result<(), SemanticError> {
        if self.loop_frames.is_empty() {
            return Err(SemanticError::at(pos, SemanticErrorKind::BreakOutsideLoop));
        }
        let value_ty = match value {
            Some(expr) => Some(self.check_expr(expr)?),
            None => None,
        };
        let frame = self
            .loop_frames
            .last_mut()
            .expect("loop frame stack is never empty here");
        match frame {
            LoopFrame::Conditional => {
                if value_ty.is_some() {
                    return Err(SemanticError::at(
                        pos,
                        SemanticErrorKind::BreakValueNotInLoop,
                    ));
                }
                Ok(())
            }
            LoopFrame::Valued(slot) => {
                match value_ty {
                    Some(found) => match slot {
                        Some(expected) => {
                            if found != *expected {
                                return Err(SemanticError::at(
                                    pos,
                                    SemanticErrorKind::BreakTypeMismatch {
                                        expected: expected.to_string(),
                                        found: found.to_string(),
                                    },
                                ));
                            }
                        }
                        // The first `break <expr>` fixes the loop's type.
                        None => *slot = Some(found),
                    },
                    None => match slot {
                        Some(expected) => {
                            if *expected != Type::Void {
                                return Err(SemanticError::at(
                                    pos,
                                    SemanticErrorKind::BreakMissingValue(expected.to_string()),
                                ));
                            }
                        }
                        None => *slot = Some(Type::Void),
                    },
                }
                Ok(())
            }
        }
    }

    // --- expressions ---

    fn check_expr(&mut self, expr: &Expr) -> Result<Type, SemanticError> {
        let ty = match &expr.kind {
            ExprKind::Number(_) => Type::I32,
            ExprKind::Ident(name) => {
                let Some(sid) = self.lookup(name) else {
                    return Err(SemanticError::at(
                        expr.pos,
                        SemanticErrorKind::Undeclared(name.clone()),
                    ));
                };
                let symbol = &self.symbols[sid as usize];
                if !symbol.initialized {
                    return Err(SemanticError::at(
                        expr.pos,
                        SemanticErrorKind::Uninitialized(name.clone()),
                    ));
                }
                let Some(ty) = symbol.ty.clone() else {
                    return Err(SemanticError::at(
                        expr.pos,
                        SemanticErrorKind::UntypedVariable(name.clone()),
                    ));
                };
                self.idents.insert(expr.id, sid);
                ty
            }
            ExprKind::Binary { op, left, right } => {
                let left_ty = self.check_expr(left)?;
                let right_ty = self.check_expr(right)?;
                if left_ty != Type::I32 || right_ty != Type::I32 {
                    return Err(SemanticError::at(
                        expr.pos,
                        SemanticErrorKind::BinaryOperandType {
                            op: op.symbol().to_string(),
                            left: left_ty.to_string(),
                            right: right_ty.to_string(),
                        },
                    ));
                }
                // Relational operators also yield i32 in this dialect.
                Type::I32
            }
            ExprKind::Call { callee, args } => self.check_call(expr, callee, args)?,
            ExprKind::Array(elems) => {
                if elems.is_empty() {
                    Type::Array {
                        elem: Box::new(Type::Error),
                        size: 0,
                    }
                } else {
                    let first = self.check_expr(&elems[0])?;
                    for elem in &elems[1..] {
                        let ty = self.check_expr(elem)?;
                        if ty != first {
                            return Err(SemanticError::at(
                                expr.pos,
                                SemanticErrorKind::ArrayElementMismatch {
                                    first: first.to_string(),
                                    found: ty.to_string(),
                                },
                            ));
                        }
                    }
                    Type::Array {
                        elem: Box::new(first),
                        size: elems.len(),
                    }
                }
            }
            ExprKind::Tuple(elems) => {
                let mut members = Vec::with_capacity(elems.len());
                for elem in elems {
                    members.push(self.check_expr(elem)?);
                }
                Type::Tuple(members)
            }
            ExprKind::Index { base, index } => {
                let base_ty = self.check_expr(base)?;
                let (elem, size) = match base_ty {
                    Type::Array { elem, size } => (elem, size),
                    other => {
                        return Err(SemanticError::at(
                            expr.pos,
                            SemanticErrorKind::IndexBaseType(other.to_string()),
                        ));
                    }
                };
                let index_ty = self.check_expr(index)?;
                if index_ty != Type::I32 {
                    return Err(SemanticError::at(
                        expr.pos,
                        SemanticErrorKind::IndexType(index_ty.to_string()),
                    ));
                }
                // A constant index is bounds-checked statically.
                if let ExprKind::Number(n) = &index.kind {
                    let n = *n;
                    if n < 0 || n as usize >= size {
                        return Err(SemanticError::at(
                            expr.pos,
                            SemanticErrorKind::IndexOutOfBounds {
                                index: n,
                                max: size.saturating_sub(1),
                            },
                        ));
                    }
                }
                *elem
            }
            ExprKind::Member { base, field } => {
                let base_ty = self.check_expr(base)?;
                let members = match base_ty {
                    Type::Tuple(members) => members,
                    other => {
                        return Err(SemanticError::at(
                            expr.pos,
                            SemanticErrorKind::MemberBaseType(other.to_string()),
                        ));
                    }
                };
                if *field >= members.len() {
                    return Err(SemanticError::at(
                        expr.pos,
                        SemanticErrorKind::MemberOutOfBounds {
                            index: *field,
                            max: members.len().saturating_sub(1),
                        },
                    ));
                }
                members[*field].clone()
            }
            ExprKind::Borrow { mutable, expr: target } => {
                self.check_borrow(*mutable, target, expr.pos)?
            }
            ExprKind::Deref(inner) => {
                let inner_ty = self.check_expr(inner)?;
                match inner_ty {
                    Type::Ref { target, .. } => *target,
                    other => {
                        return Err(SemanticError::at(
                            expr.pos,
                            SemanticErrorKind::DerefNonRef(other.to_string()),
                        ));
                    }
                }
            }
            ExprKind::Block(block) => self.check_block(block)?,
            ExprKind::If(if_expr) => self.check_if_expr(if_expr)?,
            ExprKind::Loop(body) => {
                self.loop_frames.push(LoopFrame::Valued(None));
                self.check_block(body)?;
                match self.loop_frames.pop() {
                    Some(LoopFrame::Valued(Some(ty))) => ty,
                    _ => Type::Void,
                }
            }
        };
        self.types.insert(expr.id, ty.clone());
        Ok(ty)
    }

    fn check_call(
        &mut self,
        call: &Expr,
        callee: &Expr,
        args: &[Expr],
    ) -> Result<Type, SemanticError> {
        let ExprKind::Ident(name) = &callee.kind else {
            return Err(SemanticError::at(
                callee.pos,
                SemanticErrorKind::CalleeNotIdent,
            ));
        };
        let Some(sid) = self.lookup(name) else {
            return Err(SemanticError::at(
                call.pos,
                SemanticErrorKind::Undeclared(name.clone()),
            ));
        };
        let symbol = &self.symbols[sid as usize];
        if symbol.kind != SymbolKind::Function {
            return Err(SemanticError::at(
                call.pos,
                SemanticErrorKind::NotAFunction(name.clone()),
            ));
        }
        let Some(Type::Function { params, ret }) = symbol.ty.clone() else {
            return Err(SemanticError::at(
                call.pos,
                SemanticErrorKind::NotAFunction(name.clone()),
            ));
        };

        if params.len() != args.len() {
            return Err(SemanticError::at(
                call.pos,
                SemanticErrorKind::ArityMismatch {
                    name: name.clone(),
                    expected: params.len(),
                    found: args.len(),
                },
            ));
        }
        for (i, (arg, expected)) in args.iter().zip(&params).enumerate() {
            let found = self.check_expr(arg)?;
            if found != *expected {
                return Err(SemanticError::at(
                    call.pos,
                    SemanticErrorKind::ArgTypeMismatch {
                        index: i + 1,
                        expected: expected.to_string(),
                        found: found.to_string(),
                    },
                ));
            }
        }

        self.idents.insert(callee.id, sid);
        self.types.insert(
            callee.id,
            Type::Function {
                params,
                ret: ret.clone(),
            },
        );
        Ok(*ret)
    }

    fn check_borrow(
        &mut self,
        mutable: bool,
        target: &Expr,
        pos: Pos,
    ) -> Result<Type, SemanticError> {
        // Borrows apply to named variables only; no projections.
        let ExprKind::Ident(name) = &target.kind else {
            return Err(SemanticError::at(
                pos,
                SemanticErrorKind::BorrowTargetNotIdent,
            ));
        };
        let Some(sid) = self.lookup(name) else {
            return Err(SemanticError::at(
                pos,
                SemanticErrorKind::Undeclared(name.clone()),
            ));
        };
        let Some(target_ty) = self.symbols[sid as usize].ty.clone() else {
            return Err(SemanticError::at(
                pos,
                SemanticErrorKind::UntypedVariable(name.clone()),
            ));
        };

        let existing = self.lookup_borrow(name);
        if mutable {
            if existing
                .as_ref()
                .is_some_and(|b| b.mutable_borrow_active || b.immutable_borrow_count > 0)
            {
                return Err(SemanticError::at(
                    pos,
                    SemanticErrorKind::BorrowConflictMutable(name.clone()),
                ));
            }
            if !self.symbols[sid as usize].mutable {
                return Err(SemanticError::at(
                    pos,
                    SemanticErrorKind::BorrowNotMutable(name.clone()),
                ));
            }
            self.current_scope()
                .borrows
                .entry(name.clone())
                .or_default()
                .mutable_borrow_active = true;
        } else {
            if existing.as_ref().is_some_and(|b| b.mutable_borrow_active) {
                return Err(SemanticError::at(
                    pos,
                    SemanticErrorKind::BorrowConflictShared(name.clone()),
                ));
            }
            self.current_scope()
                .borrows
                .entry(name.clone())
                .or_default()
                .immutable_borrow_count += 1;
        }

        Ok(Type::Ref {
            mutable,
            target: Box::new(target_ty),
        })
    }

    fn check_if_expr(&mut self, if_expr: &IfExpr) -> Result<Type, SemanticError> {
        let cond_ty = self.check_expr(&if_expr.cond)?;
        if cond_ty != Type::I32 {
            return Err(SemanticError::at(
                if_expr.pos,
                SemanticErrorKind::ConditionType {
                    construct: "if",
                    found: cond_ty.to_string(),
                },
            ));
        }
        let then_ty = self.check_block(&if_expr.then_body)?;
        let else_ty = match &if_expr.else_body {
            ElseArm::Block(block) => self.check_block(block)?,
            ElseArm::If(inner) => self.check_if_expr(inner)?,
        };
        // Agreeing arms give the `if` their type; otherwise it is void.
        if then_ty == else_ty {
            Ok(then_ty)
        } else {
            Ok(Type::Void)
        }
    }
}
