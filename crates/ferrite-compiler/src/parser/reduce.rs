//! AST construction during reduction.
//!
//! Every production in [`crate::grammar::PRODUCTIONS`] has a reducer arm
//! here, matched by production number. Reducers consume the popped semantic
//! values in right-hand-side order and return the value for the left-hand
//! side. Shape mismatches can only come from corrupted tables, hence the
//! `unreachable!`s in the extractors.

use crate::ast::{
    Binding, BinOp, Block, ElseArm, Expr, ExprKind, FuncDecl, IfExpr, IfStmt, NodeId, Param,
    Program, Stmt, TypeExpr,
};
use crate::lexer::{Token, parse_int};
use crate::pos::Pos;

use super::SyntaxError;

/// A semantic value on the parser's symbol stack.
#[derive(Debug)]
pub(super) enum StackValue<'s> {
    Token(Token<'s>),
    Program(Program),
    Func(FuncDecl),
    Funcs(Vec<FuncDecl>),
    FnHead {
        name: String,
        params: Vec<Param>,
        ret: Option<TypeExpr>,
        pos: Pos,
    },
    Param(Param),
    Params(Vec<Param>),
    Binding(Binding),
    Block(Block),
    BlockBody {
        stmts: Vec<Stmt>,
        tail: Option<Expr>,
    },
    Stmt(Stmt),
    IfStmt(IfStmt),
    ElsePart(Option<Block>),
    Expr(Expr),
    Exprs(Vec<Expr>),
    IfExpr(IfExpr),
    Type(TypeExpr),
    Types(Vec<TypeExpr>),
}

impl<'s> StackValue<'s> {
    /// Short label for trace output.
    pub(super) fn describe(&self) -> String {
        match self {
            StackValue::Token(t) => format!("{}({})", t.kind, t.text),
            StackValue::Program(_) => "Program".into(),
            StackValue::Func(_) => "FuncDecl".into(),
            StackValue::Funcs(_) => "DeclList".into(),
            StackValue::FnHead { .. } => "FnHead".into(),
            StackValue::Param(_) => "Param".into(),
            StackValue::Params(_) => "ParamList".into(),
            StackValue::Binding(_) => "Binding".into(),
            StackValue::Block(_) => "Block".into(),
            StackValue::BlockBody { .. } => "BlockBody".into(),
            StackValue::Stmt(_) => "Stmt".into(),
            StackValue::IfStmt(_) => "IfStmt".into(),
            StackValue::ElsePart(_) => "ElsePart".into(),
            StackValue::Expr(_) => "Expr".into(),
            StackValue::Exprs(_) => "ExprList".into(),
            StackValue::IfExpr(_) => "IfExpr".into(),
            StackValue::Type(_) => "Type".into(),
            StackValue::Types(_) => "TypeList".into(),
        }
    }

    fn token(self) -> Token<'s> {
        match self {
            StackValue::Token(t) => t,
            v => unreachable!("parse stack: expected token, found {}", v.describe()),
        }
    }

    fn expr(self) -> Expr {
        match self {
            StackValue::Expr(e) => e,
            v => unreachable!("parse stack: expected expression, found {}", v.describe()),
        }
    }

    fn exprs(self) -> Vec<Expr> {
        match self {
            StackValue::Exprs(e) => e,
            v => unreachable!("parse stack: expected expression list, found {}", v.describe()),
        }
    }

    fn stmt(self) -> Stmt {
        match self {
            StackValue::Stmt(s) => s,
            v => unreachable!("parse stack: expected statement, found {}", v.describe()),
        }
    }

    fn block(self) -> Block {
        match self {
            StackValue::Block(b) => b,
            v => unreachable!("parse stack: expected block, found {}", v.describe()),
        }
    }

    fn binding(self) -> Binding {
        match self {
            StackValue::Binding(b) => b,
            v => unreachable!("parse stack: expected binding, found {}", v.describe()),
        }
    }

    fn ty(self) -> TypeExpr {
        match self {
            StackValue::Type(t) => t,
            v => unreachable!("parse stack: expected type, found {}", v.describe()),
        }
    }

    fn types(self) -> Vec<TypeExpr> {
        match self {
            StackValue::Types(t) => t,
            v => unreachable!("parse stack: expected type list, found {}", v.describe()),
        }
    }

    fn if_stmt(self) -> IfStmt {
        match self {
            StackValue::IfStmt(i) => i,
            v => unreachable!("parse stack: expected if statement, found {}", v.describe()),
        }
    }

    fn if_expr(self) -> IfExpr {
        match self {
            StackValue::IfExpr(i) => i,
            v => unreachable!("parse stack: expected if expression, found {}", v.describe()),
        }
    }

    fn else_part(self) -> Option<Block> {
        match self {
            StackValue::ElsePart(e) => e,
            v => unreachable!("parse stack: expected else part, found {}", v.describe()),
        }
    }

    fn params(self) -> Vec<Param> {
        match self {
            StackValue::Params(p) => p,
            v => unreachable!("parse stack: expected parameter list, found {}", v.describe()),
        }
    }

    fn param(self) -> Param {
        match self {
            StackValue::Param(p) => p,
            v => unreachable!("parse stack: expected parameter, found {}", v.describe()),
        }
    }

    fn func(self) -> FuncDecl {
        match self {
            StackValue::Func(f) => f,
            v => unreachable!("parse stack: expected function, found {}", v.describe()),
        }
    }

    fn funcs(self) -> Vec<FuncDecl> {
        match self {
            StackValue::Funcs(f) => f,
            v => unreachable!("parse stack: expected declaration list, found {}", v.describe()),
        }
    }

    fn block_body(self) -> (Vec<Stmt>, Option<Expr>) {
        match self {
            StackValue::BlockBody { stmts, tail } => (stmts, tail),
            v => unreachable!("parse stack: expected block body, found {}", v.describe()),
        }
    }
}

fn take<'s, const N: usize>(children: Vec<StackValue<'s>>) -> [StackValue<'s>; N] {
    match children.try_into() {
        Ok(array) => array,
        Err(v) => unreachable!("parse stack: expected {N} values, found {}", v.len()),
    }
}

/// Builds AST nodes during reduction, handing out fresh node ids.
pub(super) struct AstBuilder {
    next_id: NodeId,
}

impl AstBuilder {
    pub(super) fn new() -> AstBuilder {
        AstBuilder { next_id: 0 }
    }

    fn fresh(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn mk_expr(&mut self, kind: ExprKind, pos: Pos) -> Expr {
        Expr {
            id: self.fresh(),
            kind,
            pos,
        }
    }

    fn int_value(token: &Token<'_>) -> Result<i64, SyntaxError> {
        parse_int(token.text).ok_or_else(|| {
            SyntaxError::at(
                token.pos,
                format!("integer literal `{}` is out of range", token.text),
            )
        })
    }

    /// Wraps an `if` statement as the sole statement of a synthetic block,
    /// used for unbraced then-parts and `else if` chains.
    fn wrap_if(stmt: IfStmt) -> Block {
        let pos = stmt.pos;
        Block {
            stmts: vec![Stmt::If(stmt)],
            tail: None,
            pos,
        }
    }

    pub(super) fn reduce<'s>(
        &mut self,
        prod: u16,
        children: Vec<StackValue<'s>>,
    ) -> Result<StackValue<'s>, SyntaxError> {
        let value = match prod {
            // 1: Program → DeclList
            1 => {
                let [items] = take::<1>(children);
                StackValue::Program(Program {
                    items: items.funcs(),
                })
            }
            // 2: DeclList → ε
            2 => StackValue::Funcs(Vec::new()),
            // 3: DeclList → FnDecl DeclList
            3 => {
                let [func, rest] = take::<2>(children);
                let mut items = vec![func.func()];
                items.extend(rest.funcs());
                StackValue::Funcs(items)
            }
            // 4: FnDecl → FnHead Block; a trailing expression becomes the
            // implicit return value.
            4 => {
                let [head, body] = take::<2>(children);
                let StackValue::FnHead {
                    name,
                    params,
                    ret,
                    pos,
                } = head
                else {
                    unreachable!("parse stack: expected FnHead")
                };
                let mut body = body.block();
                if let Some(tail) = body.tail.take() {
                    let tail_pos = tail.pos;
                    body.stmts.push(Stmt::Return {
                        value: Some(tail),
                        pos: tail_pos,
                    });
                }
                StackValue::Func(FuncDecl {
                    name,
                    params,
                    ret_type: ret,
                    body,
                    pos,
                })
            }
            // 5: FnHead → fn IDENT ( ParamList )
            5 => {
                let [fn_tok, name, _, params, _] = take::<5>(children);
                StackValue::FnHead {
                    name: name.token().text.to_string(),
                    params: params.params(),
                    ret: None,
                    pos: fn_tok.token().pos,
                }
            }
            // 6: FnHead → fn IDENT ( ParamList ) -> Type
            6 => {
                let [fn_tok, name, _, params, _, _, ty] = take::<7>(children);
                StackValue::FnHead {
                    name: name.token().text.to_string(),
                    params: params.params(),
                    ret: Some(ty.ty()),
                    pos: fn_tok.token().pos,
                }
            }
            // 7: ParamList → ε
            7 => StackValue::Params(Vec::new()),
            // 8: ParamList → Param
            8 => {
                let [param] = take::<1>(children);
                StackValue::Params(vec![param.param()])
            }
            // 9: ParamList → Param , ParamList
            9 => {
                let [param, _, rest] = take::<3>(children);
                let mut params = vec![param.param()];
                params.extend(rest.params());
                StackValue::Params(params)
            }
            // 10: Param → Binding : Type
            10 => {
                let [binding, _, ty] = take::<3>(children);
                let binding = binding.binding();
                StackValue::Param(Param {
                    name: binding.name,
                    mutable: binding.mutable,
                    ty: ty.ty(),
                    pos: binding.pos,
                })
            }
            // 11: Binding → IDENT
            11 => {
                let [name] = take::<1>(children);
                let name = name.token();
                StackValue::Binding(Binding {
                    name: name.text.to_string(),
                    mutable: false,
                    pos: name.pos,
                })
            }
            // 12: Binding → mut IDENT
            12 => {
                let [mut_tok, name] = take::<2>(children);
                StackValue::Binding(Binding {
                    name: name.token().text.to_string(),
                    mutable: true,
                    pos: mut_tok.token().pos,
                })
            }
            // 13: Block → { BlockBody }
            13 => {
                let [open, body, _] = take::<3>(children);
                let (stmts, tail) = body.block_body();
                StackValue::Block(Block {
                    stmts,
                    tail,
                    pos: open.token().pos,
                })
            }
            // 14: BlockBody → ε
            14 => StackValue::BlockBody {
                stmts: Vec::new(),
                tail: None,
            },
            // 15: BlockBody → Stmt BlockBody
            15 => {
                let [stmt, rest] = take::<2>(children);
                let (mut stmts, tail) = rest.block_body();
                stmts.insert(0, stmt.stmt());
                StackValue::BlockBody { stmts, tail }
            }
            // 16: BlockBody → Expr
            16 => {
                let [expr] = take::<1>(children);
                StackValue::BlockBody {
                    stmts: Vec::new(),
                    tail: Some(expr.expr()),
                }
            }
            // 17: Stmt → ;
            17 => StackValue::Stmt(Stmt::Empty),
            // 18: Stmt → Expr ;
            18 => {
                let [expr, _] = take::<2>(children);
                StackValue::Stmt(Stmt::Expr(expr.expr()))
            }
            // 19: Stmt → return ;
            19 => {
                let [ret, _] = take::<2>(children);
                StackValue::Stmt(Stmt::Return {
                    value: None,
                    pos: ret.token().pos,
                })
            }
            // 20: Stmt → return Expr ;
            20 => {
                let [ret, expr, _] = take::<3>(children);
                StackValue::Stmt(Stmt::Return {
                    value: Some(expr.expr()),
                    pos: ret.token().pos,
                })
            }
            // 21: Stmt → break ;
            21 => {
                let [brk, _] = take::<2>(children);
                StackValue::Stmt(Stmt::Break {
                    value: None,
                    pos: brk.token().pos,
                })
            }
            // 22: Stmt → break Expr ;
            22 => {
                let [brk, expr, _] = take::<3>(children);
                StackValue::Stmt(Stmt::Break {
                    value: Some(expr.expr()),
                    pos: brk.token().pos,
                })
            }
            // 23: Stmt → continue ;
            23 => {
                let [cont, _] = take::<2>(children);
                StackValue::Stmt(Stmt::Continue {
                    pos: cont.token().pos,
                })
            }
            // 24: Stmt → let Binding ;
            24 => {
                let [let_tok, binding, _] = take::<3>(children);
                self.make_let(let_tok.token().pos, binding.binding(), None, None)
            }
            // 25: Stmt → let Binding : Type ;
            25 => {
                let [let_tok, binding, _, ty, _] = take::<5>(children);
                self.make_let(let_tok.token().pos, binding.binding(), Some(ty.ty()), None)
            }
            // 26: Stmt → let Binding = InitExpr ;
            26 => {
                let [let_tok, binding, _, init, _] = take::<5>(children);
                self.make_let(
                    let_tok.token().pos,
                    binding.binding(),
                    None,
                    Some(init.expr()),
                )
            }
            // 27: Stmt → let Binding : Type = InitExpr ;
            27 => {
                let [let_tok, binding, _, ty, _, init, _] = take::<7>(children);
                self.make_let(
                    let_tok.token().pos,
                    binding.binding(),
                    Some(ty.ty()),
                    Some(init.expr()),
                )
            }
            // 28: Stmt → Assignable = InitExpr ;
            28 => {
                let [target, _, value, _] = take::<4>(children);
                let target = target.expr();
                let pos = target.pos;
                StackValue::Stmt(Stmt::Assign {
                    target,
                    value: value.expr(),
                    pos,
                })
            }
            // 29: Stmt → IfStmt
            29 => {
                let [stmt] = take::<1>(children);
                StackValue::Stmt(Stmt::If(stmt.if_stmt()))
            }
            // 30: Stmt → while Expr Block
            30 => {
                let [while_tok, cond, body] = take::<3>(children);
                StackValue::Stmt(Stmt::While {
                    cond: cond.expr(),
                    body: body.block(),
                    pos: while_tok.token().pos,
                })
            }
            // 31: Stmt → for Binding in Expr .. Expr Block
            31 => {
                let [for_tok, binding, _, start, _, end, body] = take::<7>(children);
                let binding = binding.binding();
                StackValue::Stmt(Stmt::For {
                    name: binding.name,
                    mutable: binding.mutable,
                    start: start.expr(),
                    end: Some(end.expr()),
                    body: body.block(),
                    pos: for_tok.token().pos,
                })
            }
            // 32: Stmt → loop Block
            32 => {
                let [loop_tok, body] = take::<2>(children);
                StackValue::Stmt(Stmt::Loop {
                    body: body.block(),
                    pos: loop_tok.token().pos,
                })
            }
            // 33: IfStmt → if Expr Block ElsePart
            33 => {
                let [if_tok, cond, then_body, else_part] = take::<4>(children);
                StackValue::IfStmt(IfStmt {
                    cond: cond.expr(),
                    then_body: then_body.block(),
                    else_body: else_part.else_part(),
                    pos: if_tok.token().pos,
                })
            }
            // 34: IfStmt → if Expr IfStmt (unbraced nesting; the inner `if`
            // owns any `else`)
            34 => {
                let [if_tok, cond, inner] = take::<3>(children);
                StackValue::IfStmt(IfStmt {
                    cond: cond.expr(),
                    then_body: Self::wrap_if(inner.if_stmt()),
                    else_body: None,
                    pos: if_tok.token().pos,
                })
            }
            // 35: ElsePart → ε
            35 => StackValue::ElsePart(None),
            // 36: ElsePart → else Block
            36 => {
                let [_, body] = take::<2>(children);
                StackValue::ElsePart(Some(body.block()))
            }
            // 37: ElsePart → else IfStmt (an `else if` chain nests as a
            // one-statement block)
            37 => {
                let [_, inner] = take::<2>(children);
                StackValue::ElsePart(Some(Self::wrap_if(inner.if_stmt())))
            }
            // 38: InitExpr → Expr
            38 => {
                let [expr] = take::<1>(children);
                StackValue::Expr(expr.expr())
            }
            // 39: InitExpr → IfExpr
            39 => {
                let [if_expr] = take::<1>(children);
                let if_expr = if_expr.if_expr();
                let pos = if_expr.pos;
                StackValue::Expr(self.mk_expr(ExprKind::If(Box::new(if_expr)), pos))
            }
            // 40: InitExpr → loop Block
            40 => {
                let [loop_tok, body] = take::<2>(children);
                let pos = loop_tok.token().pos;
                StackValue::Expr(self.mk_expr(ExprKind::Loop(Box::new(body.block())), pos))
            }
            // 41: IfExpr → if Expr Block else Block
            41 => {
                let [if_tok, cond, then_body, _, else_body] = take::<5>(children);
                StackValue::IfExpr(IfExpr {
                    cond: cond.expr(),
                    then_body: then_body.block(),
                    else_body: ElseArm::Block(else_body.block()),
                    pos: if_tok.token().pos,
                })
            }
            // 42: IfExpr → if Expr Block else IfExpr
            42 => {
                let [if_tok, cond, then_body, _, else_body] = take::<5>(children);
                StackValue::IfExpr(IfExpr {
                    cond: cond.expr(),
                    then_body: then_body.block(),
                    else_body: ElseArm::If(Box::new(else_body.if_expr())),
                    pos: if_tok.token().pos,
                })
            }
            // 43: Expr → AddExpr
            43 => {
                let [expr] = take::<1>(children);
                StackValue::Expr(expr.expr())
            }
            // 44..=49: Expr → Expr relop AddExpr
            44..=49 => {
                let op = match prod {
                    44 => BinOp::Eq,
                    45 => BinOp::Ne,
                    46 => BinOp::Lt,
                    47 => BinOp::Le,
                    48 => BinOp::Gt,
                    _ => BinOp::Ge,
                };
                self.binary(op, children)
            }
            // 50: AddExpr → MulExpr
            50 => {
                let [expr] = take::<1>(children);
                StackValue::Expr(expr.expr())
            }
            // 51: AddExpr → AddExpr + MulExpr
            51 => self.binary(BinOp::Add, children),
            // 52: AddExpr → AddExpr - MulExpr
            52 => self.binary(BinOp::Sub, children),
            // 53: MulExpr → Primary
            53 => {
                let [expr] = take::<1>(children);
                StackValue::Expr(expr.expr())
            }
            // 54: MulExpr → MulExpr * Primary
            54 => self.binary(BinOp::Mul, children),
            // 55: MulExpr → MulExpr / Primary
            55 => self.binary(BinOp::Div, children),
            // 56: Primary → Assignable
            56 => {
                let [expr] = take::<1>(children);
                StackValue::Expr(expr.expr())
            }
            // 57: Primary → NUMBER
            57 => {
                let [num] = take::<1>(children);
                let num = num.token();
                let value = Self::int_value(&num)?;
                StackValue::Expr(self.mk_expr(ExprKind::Number(value), num.pos))
            }
            // 58: Primary → IDENT ( ArgList )
            58 => {
                let [name, _, args, _] = take::<4>(children);
                let name = name.token();
                let callee = self.mk_expr(ExprKind::Ident(name.text.to_string()), name.pos);
                StackValue::Expr(self.mk_expr(
                    ExprKind::Call {
                        callee: Box::new(callee),
                        args: args.exprs(),
                    },
                    name.pos,
                ))
            }
            // 59: Primary → ( Expr ) - parenthesization, not a node
            59 => {
                let [_, expr, _] = take::<3>(children);
                StackValue::Expr(expr.expr())
            }
            // 60: Primary → ( )
            60 => {
                let [open, _] = take::<2>(children);
                let pos = open.token().pos;
                StackValue::Expr(self.mk_expr(ExprKind::Tuple(Vec::new()), pos))
            }
            // 61: Primary → ( Expr , ) - 1-tuple
            61 => {
                let [open, expr, _, _] = take::<4>(children);
                let pos = open.token().pos;
                let elems = vec![expr.expr()];
                StackValue::Expr(self.mk_expr(ExprKind::Tuple(elems), pos))
            }
            // 62: Primary → ( Expr , ExprList ) - n-tuple
            62 => {
                let [open, expr, _, rest, _] = take::<5>(children);
                let pos = open.token().pos;
                let mut elems = vec![expr.expr()];
                elems.extend(rest.exprs());
                StackValue::Expr(self.mk_expr(ExprKind::Tuple(elems), pos))
            }
            // 63: Primary → [ ExprList ]
            63 => {
                let [open, elems, _] = take::<3>(children);
                let pos = open.token().pos;
                StackValue::Expr(self.mk_expr(ExprKind::Array(elems.exprs()), pos))
            }
            // 64: Primary → & Primary
            64 => {
                let [amp, expr] = take::<2>(children);
                let pos = amp.token().pos;
                StackValue::Expr(self.mk_expr(
                    ExprKind::Borrow {
                        mutable: false,
                        expr: Box::new(expr.expr()),
                    },
                    pos,
                ))
            }
            // 65: Primary → & mut Primary
            65 => {
                let [amp, _, expr] = take::<3>(children);
                let pos = amp.token().pos;
                StackValue::Expr(self.mk_expr(
                    ExprKind::Borrow {
                        mutable: true,
                        expr: Box::new(expr.expr()),
                    },
                    pos,
                ))
            }
            // 66: Primary → Block - expression block
            66 => {
                let [block] = take::<1>(children);
                let block = block.block();
                let pos = block.pos;
                StackValue::Expr(self.mk_expr(ExprKind::Block(Box::new(block)), pos))
            }
            // 67: Assignable → IDENT
            67 => {
                let [name] = take::<1>(children);
                let name = name.token();
                StackValue::Expr(self.mk_expr(ExprKind::Ident(name.text.to_string()), name.pos))
            }
            // 68: Assignable → Primary [ Expr ]
            68 => {
                let [base, _, index, _] = take::<4>(children);
                let base = base.expr();
                let pos = base.pos;
                StackValue::Expr(self.mk_expr(
                    ExprKind::Index {
                        base: Box::new(base),
                        index: Box::new(index.expr()),
                    },
                    pos,
                ))
            }
            // 69: Assignable → Primary . NUMBER
            69 => {
                let [base, _, field] = take::<3>(children);
                let base = base.expr();
                let pos = base.pos;
                let field = Self::int_value(&field.token())? as usize;
                StackValue::Expr(self.mk_expr(
                    ExprKind::Member {
                        base: Box::new(base),
                        field,
                    },
                    pos,
                ))
            }
            // 70: Assignable → * Primary
            70 => {
                let [star, expr] = take::<2>(children);
                let pos = star.token().pos;
                StackValue::Expr(self.mk_expr(ExprKind::Deref(Box::new(expr.expr())), pos))
            }
            // 71: ArgList → ε / 74: ExprList → ε
            71 | 74 => StackValue::Exprs(Vec::new()),
            // 72: ArgList → Expr / 75: ExprList → Expr
            72 | 75 => {
                let [expr] = take::<1>(children);
                StackValue::Exprs(vec![expr.expr()])
            }
            // 73: ArgList → Expr , ArgList / 76: ExprList → Expr , ExprList
            73 | 76 => {
                let [expr, _, rest] = take::<3>(children);
                let mut exprs = vec![expr.expr()];
                exprs.extend(rest.exprs());
                StackValue::Exprs(exprs)
            }
            // 77: Type → i32
            77 => StackValue::Type(TypeExpr::I32),
            // 78: Type → & Type
            78 => {
                let [_, target] = take::<2>(children);
                StackValue::Type(TypeExpr::Ref {
                    mutable: false,
                    target: Box::new(target.ty()),
                })
            }
            // 79: Type → & mut Type
            79 => {
                let [_, _, target] = take::<3>(children);
                StackValue::Type(TypeExpr::Ref {
                    mutable: true,
                    target: Box::new(target.ty()),
                })
            }
            // 80: Type → [ Type ; NUMBER ]
            80 => {
                let [_, elem, _, size, _] = take::<5>(children);
                let size = Self::int_value(&size.token())? as usize;
                StackValue::Type(TypeExpr::Array {
                    elem: Box::new(elem.ty()),
                    size,
                })
            }
            // 81: Type → ( )
            81 => StackValue::Type(TypeExpr::Tuple(Vec::new())),
            // 82: Type → ( TypeList )
            82 => {
                let [_, members, _] = take::<3>(children);
                StackValue::Type(TypeExpr::Tuple(members.types()))
            }
            // 83: TypeList → Type
            83 => {
                let [ty] = take::<1>(children);
                StackValue::Types(vec![ty.ty()])
            }
            // 84: TypeList → Type , TypeList
            84 => {
                let [ty, _, rest] = take::<3>(children);
                let mut types = vec![ty.ty()];
                types.extend(rest.types());
                StackValue::Types(types)
            }
            other => unreachable!("no reducer for production {other}"),
        };
        Ok(value)
    }

    fn make_let<'s>(
        &mut self,
        pos: Pos,
        binding: Binding,
        ty: Option<TypeExpr>,
        init: Option<Expr>,
    ) -> StackValue<'s> {
        StackValue::Stmt(Stmt::Let {
            id: self.fresh(),
            name: binding.name,
            mutable: binding.mutable,
            ty,
            init,
            pos,
        })
    }

    fn binary<'s>(&mut self, op: BinOp, children: Vec<StackValue<'s>>) -> StackValue<'s> {
        let [left, _, right] = take::<3>(children);
        let left = left.expr();
        let pos = left.pos;
        StackValue::Expr(self.mk_expr(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right.expr()),
            },
            pos,
        ))
    }
}
