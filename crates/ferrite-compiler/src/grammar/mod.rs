//! The ferrite grammar and LR(1) table construction.
//!
//! - `first` - fixed-point FIRST sets
//! - `lr1` - items, closure, and the canonical LR(1) collection
//! - `build` - ACTION/GOTO construction and conflict resolution
//!
//! [`PRODUCTIONS`] is the single source of truth for the production listing.
//! Productions are numbered by their position here; the parser's reducer is
//! indexed by the same numbers, so the two cannot drift apart.

pub mod build;
pub mod first;
pub mod lr1;

#[cfg(test)]
mod first_tests;

pub use build::{BuildSummary, TableBuildError, TablesBuild, build_tables};

use ferrite_core::Grammar;

/// The production listing, in reducer order. Row 0 is the augmented start.
///
/// Blocks are uniform: a braced statement list with an optional trailing
/// expression as the block's value. `if`/`loop` are statements in statement
/// position and expressions (`IfExpr`, `loop Block`) in initializer position,
/// which keeps the grammar free of reduce/reduce conflicts. The unbraced
/// `IfStmt → if Expr IfStmt` alternative admits `if a if b { } else { }`,
/// with the `else` binding to the nearest `if`.
pub static PRODUCTIONS: &[(&str, &[&str])] = &[
    // 0
    ("Program'", &["Program"]),
    // 1
    ("Program", &["DeclList"]),
    // 2
    ("DeclList", &[]),
    // 3
    ("DeclList", &["FnDecl", "DeclList"]),
    // 4
    ("FnDecl", &["FnHead", "Block"]),
    // 5
    ("FnHead", &["fn", "IDENT", "(", "ParamList", ")"]),
    // 6
    ("FnHead", &["fn", "IDENT", "(", "ParamList", ")", "->", "Type"]),
    // 7
    ("ParamList", &[]),
    // 8
    ("ParamList", &["Param"]),
    // 9
    ("ParamList", &["Param", ",", "ParamList"]),
    // 10
    ("Param", &["Binding", ":", "Type"]),
    // 11
    ("Binding", &["IDENT"]),
    // 12
    ("Binding", &["mut", "IDENT"]),
    // 13
    ("Block", &["{", "BlockBody", "}"]),
    // 14
    ("BlockBody", &[]),
    // 15
    ("BlockBody", &["Stmt", "BlockBody"]),
    // 16
    ("BlockBody", &["Expr"]),
    // 17
    ("Stmt", &[";"]),
    // 18
    ("Stmt", &["Expr", ";"]),
    // 19
    ("Stmt", &["return", ";"]),
    // 20
    ("Stmt", &["return", "Expr", ";"]),
    // 21
    ("Stmt", &["break", ";"]),
    // 22
    ("Stmt", &["break", "Expr", ";"]),
    // 23
    ("Stmt", &["continue", ";"]),
    // 24
    ("Stmt", &["let", "Binding", ";"]),
    // 25
    ("Stmt", &["let", "Binding", ":", "Type", ";"]),
    // 26
    ("Stmt", &["let", "Binding", "=", "InitExpr", ";"]),
    // 27
    ("Stmt", &["let", "Binding", ":", "Type", "=", "InitExpr", ";"]),
    // 28
    ("Stmt", &["Assignable", "=", "InitExpr", ";"]),
    // 29
    ("Stmt", &["IfStmt"]),
    // 30
    ("Stmt", &["while", "Expr", "Block"]),
    // 31
    ("Stmt", &["for", "Binding", "in", "Expr", "..", "Expr", "Block"]),
    // 32
    ("Stmt", &["loop", "Block"]),
    // 33
    ("IfStmt", &["if", "Expr", "Block", "ElsePart"]),
    // 34
    ("IfStmt", &["if", "Expr", "IfStmt"]),
    // 35
    ("ElsePart", &[]),
    // 36
    ("ElsePart", &["else", "Block"]),
    // 37
    ("ElsePart", &["else", "IfStmt"]),
    // 38
    ("InitExpr", &["Expr"]),
    // 39
    ("InitExpr", &["IfExpr"]),
    // 40
    ("InitExpr", &["loop", "Block"]),
    // 41
    ("IfExpr", &["if", "Expr", "Block", "else", "Block"]),
    // 42
    ("IfExpr", &["if", "Expr", "Block", "else", "IfExpr"]),
    // 43
    ("Expr", &["AddExpr"]),
    // 44
    ("Expr", &["Expr", "==", "AddExpr"]),
    // 45
    ("Expr", &["Expr", "!=", "AddExpr"]),
    // 46
    ("Expr", &["Expr", "<", "AddExpr"]),
    // 47
    ("Expr", &["Expr", "<=", "AddExpr"]),
    // 48
    ("Expr", &["Expr", ">", "AddExpr"]),
    // 49
    ("Expr", &["Expr", ">=", "AddExpr"]),
    // 50
    ("AddExpr", &["MulExpr"]),
    // 51
    ("AddExpr", &["AddExpr", "+", "MulExpr"]),
    // 52
    ("AddExpr", &["AddExpr", "-", "MulExpr"]),
    // 53
    ("MulExpr", &["Primary"]),
    // 54
    ("MulExpr", &["MulExpr", "*", "Primary"]),
    // 55
    ("MulExpr", &["MulExpr", "/", "Primary"]),
    // 56
    ("Primary", &["Assignable"]),
    // 57
    ("Primary", &["NUMBER"]),
    // 58
    ("Primary", &["IDENT", "(", "ArgList", ")"]),
    // 59
    ("Primary", &["(", "Expr", ")"]),
    // 60
    ("Primary", &["(", ")"]),
    // 61
    ("Primary", &["(", "Expr", ",", ")"]),
    // 62
    ("Primary", &["(", "Expr", ",", "ExprList", ")"]),
    // 63
    ("Primary", &["[", "ExprList", "]"]),
    // 64
    ("Primary", &["&", "Primary"]),
    // 65
    ("Primary", &["&", "mut", "Primary"]),
    // 66
    ("Primary", &["Block"]),
    // 67
    ("Assignable", &["IDENT"]),
    // 68
    ("Assignable", &["Primary", "[", "Expr", "]"]),
    // 69
    ("Assignable", &["Primary", ".", "NUMBER"]),
    // 70
    ("Assignable", &["*", "Primary"]),
    // 71
    ("ArgList", &[]),
    // 72
    ("ArgList", &["Expr"]),
    // 73
    ("ArgList", &["Expr", ",", "ArgList"]),
    // 74
    ("ExprList", &[]),
    // 75
    ("ExprList", &["Expr"]),
    // 76
    ("ExprList", &["Expr", ",", "ExprList"]),
    // 77
    ("Type", &["i32"]),
    // 78
    ("Type", &["&", "Type"]),
    // 79
    ("Type", &["&", "mut", "Type"]),
    // 80
    ("Type", &["[", "Type", ";", "NUMBER", "]"]),
    // 81
    ("Type", &["(", ")"]),
    // 82
    ("Type", &["(", "TypeList", ")"]),
    // 83
    ("TypeList", &["Type"]),
    // 84
    ("TypeList", &["Type", ",", "TypeList"]),
];

/// Builds the ferrite grammar from [`PRODUCTIONS`].
pub fn language_grammar() -> Grammar {
    Grammar::from_rules(PRODUCTIONS)
}

/// Constructs ACTION/GOTO tables for the ferrite grammar.
pub fn build() -> Result<TablesBuild, TableBuildError> {
    build_tables(language_grammar())
}
