//! Three-address intermediate representation.
//!
//! The unit is the quadruple `(op, arg1, arg2, result)`; unused slots render
//! as `_`, list arguments (call arguments, literal elements) as a bracketed
//! list. `lower` holds the syntax-directed translator.

mod lower;

#[cfg(test)]
mod lower_tests;

pub use lower::generate;

use crate::ast::BinOp;
use crate::pos::Pos;

/// The closed opcode set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    FuncStart,
    FuncEnd,
    Param,
    Decl,
    Assign,
    Return,
    Eval,
    Label,
    Goto,
    IfFalseGoto,
    Bin(BinOp),
    Call,
    ArrayLiteral,
    TupleLiteral,
    Deref,
    Borrow,
    BorrowMut,
    Index,
    MemberAccess,
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Op::FuncStart => "func_start",
            Op::FuncEnd => "func_end",
            Op::Param => "param",
            Op::Decl => "decl",
            Op::Assign => "assign",
            Op::Return => "return",
            Op::Eval => "eval",
            Op::Label => "label",
            Op::Goto => "goto",
            Op::IfFalseGoto => "if_false_goto",
            Op::Bin(op) => op.symbol(),
            Op::Call => "call",
            Op::ArrayLiteral => "array_literal",
            Op::TupleLiteral => "tuple_literal",
            Op::Deref => "deref",
            Op::Borrow => "borrow",
            Op::BorrowMut => "borrow_mut",
            Op::Index => "index",
            Op::MemberAccess => "member_access",
        };
        f.write_str(name)
    }
}

/// An argument slot: a single value name or a bracketed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Atom(String),
    List(Vec<String>),
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Atom(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Atom(value.to_string())
    }
}

impl std::fmt::Display for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arg::Atom(s) => f.write_str(s),
            Arg::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// One quadruple. Renders as `op \t arg1 \t arg2 \t result` with `_` for
/// unused slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quad {
    pub op: Op,
    pub arg1: Option<Arg>,
    pub arg2: Option<Arg>,
    pub result: Option<String>,
}

impl Quad {
    pub fn new(op: Op, arg1: Option<Arg>, arg2: Option<Arg>, result: Option<String>) -> Quad {
        Quad {
            op,
            arg1,
            arg2,
            result,
        }
    }
}

impl std::fmt::Display for Quad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn slot(arg: &Option<Arg>) -> String {
            arg.as_ref().map_or_else(|| "_".to_string(), |a| a.to_string())
        }
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.op,
            slot(&self.arg1),
            slot(&self.arg2),
            self.result.as_deref().unwrap_or("_")
        )
    }
}

/// IR generation failures. The semantic pass rejects these shapes first;
/// the generator still refuses them so it is safe on unchecked trees.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IrError {
    #[error("error (line {line}, col {col}): `break` outside of a loop")]
    BreakOutsideLoop { line: u32, col: u32 },
    #[error("error (line {line}, col {col}): `continue` outside of a loop")]
    ContinueOutsideLoop { line: u32, col: u32 },
    #[error("error (line {line}, col {col}): for-loop over an array is not supported by the IR generator")]
    UnsupportedForIterable { line: u32, col: u32 },
}

impl IrError {
    pub(crate) fn break_outside(pos: Pos) -> IrError {
        IrError::BreakOutsideLoop {
            line: pos.line,
            col: pos.col,
        }
    }

    pub(crate) fn continue_outside(pos: Pos) -> IrError {
        IrError::ContinueOutsideLoop {
            line: pos.line,
            col: pos.col,
        }
    }
}
