//! Semantic error kinds and the positioned error wrapper.

use crate::pos::Pos;

/// A semantic error at a source position. The checker is fail-fast: the
/// first violation aborts the pass.
#[derive(Debug, Clone, thiserror::Error)]
#[error("error (line {line}, col {col}): {kind}")]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub line: u32,
    pub col: u32,
    pub offset: u32,
}

impl SemanticError {
    pub(crate) fn at(pos: Pos, kind: SemanticErrorKind) -> Self {
        Self {
            kind,
            line: pos.line,
            col: pos.col,
            offset: pos.offset,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SemanticErrorKind {
    #[error("undeclared identifier `{0}`")]
    Undeclared(String),
    #[error("use of uninitialized variable `{0}`")]
    Uninitialized(String),
    #[error("cannot assign a value of type `void` to `{0}`")]
    VoidValue(String),
    #[error("variable `{0}` has no type: annotate it or give it an initializer before use")]
    UntypedVariable(String),
    #[error("type mismatch: `{name}` is declared as `{annotated}` but its initializer has type `{found}`")]
    DeclTypeMismatch {
        name: String,
        annotated: String,
        found: String,
    },
    #[error("cannot assign twice to immutable variable `{0}`")]
    ImmutableReassign(String),
    #[error("type mismatch: `{name}` has type `{expected}` but the assigned value has type `{found}`")]
    AssignTypeMismatch {
        name: String,
        expected: String,
        found: String,
    },
    #[error("cannot modify element of immutable array `{0}`")]
    ImmutableArrayAssign(String),
    #[error("cannot modify member of immutable tuple `{0}`")]
    ImmutableTupleAssign(String),
    #[error("element type mismatch: expected `{expected}`, found `{found}`")]
    ElementTypeMismatch { expected: String, found: String },
    #[error("member type mismatch: expected `{expected}`, found `{found}`")]
    MemberTypeMismatch { expected: String, found: String },
    #[error("unsupported assignment target")]
    UnsupportedAssignTarget,
    #[error("call target must be an identifier")]
    CalleeNotIdent,
    #[error("`{0}` is not a function")]
    NotAFunction(String),
    #[error("function `{name}` expects {expected} argument(s), found {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("argument {index} type mismatch: expected `{expected}`, found `{found}`")]
    ArgTypeMismatch {
        index: usize,
        expected: String,
        found: String,
    },
    #[error("operator `{op}` requires two `i32` operands, found `{left}` and `{right}`")]
    BinaryOperandType {
        op: String,
        left: String,
        right: String,
    },
    #[error("{construct} condition must be `i32`, found `{found}`")]
    ConditionType {
        construct: &'static str,
        found: String,
    },
    #[error("for-loop bounds must be `i32`, found `{start}` and `{end}`")]
    ForRangeType { start: String, end: String },
    #[error("for-loop iterable must be an array, found `{0}`")]
    ForIterableType(String),
    #[error("array elements must share one type: first is `{first}`, later element is `{found}`")]
    ArrayElementMismatch { first: String, found: String },
    #[error("indexing requires an array, found `{0}`")]
    IndexBaseType(String),
    #[error("array index must be `i32`, found `{0}`")]
    IndexType(String),
    #[error("array index {index} out of bounds [0, {max}]")]
    IndexOutOfBounds { index: i64, max: usize },
    #[error("member access requires a tuple, found `{0}`")]
    MemberBaseType(String),
    #[error("tuple index {index} out of bounds [0, {max}]")]
    MemberOutOfBounds { index: usize, max: usize },
    #[error("cannot dereference a value of type `{0}`")]
    DerefNonRef(String),
    #[error("borrow target must be a named variable")]
    BorrowTargetNotIdent,
    #[error("variable `{0}` is already borrowed; cannot borrow as mutable")]
    BorrowConflictMutable(String),
    #[error("variable `{0}` is not mutable; cannot borrow as mutable")]
    BorrowNotMutable(String),
    #[error("variable `{0}` is mutably borrowed; cannot borrow as immutable")]
    BorrowConflictShared(String),
    #[error("`break` outside of a loop")]
    BreakOutsideLoop,
    #[error("`continue` outside of a loop")]
    ContinueOutsideLoop,
    #[error("`break` with a value is only allowed inside `loop`")]
    BreakValueNotInLoop,
    #[error("inconsistent `break` types in loop: `{expected}` vs `{found}`")]
    BreakTypeMismatch { expected: String, found: String },
    #[error("`break` without a value in a loop that breaks with `{0}`")]
    BreakMissingValue(String),
    #[error("return type mismatch: expected `{expected}`, found `{found}`")]
    ReturnTypeMismatch { expected: String, found: String },
    #[error("function expects a `{0}` return value, but none was provided")]
    MissingReturnValue(String),
}
