//! Symbols, scopes, and borrow bookkeeping.

use indexmap::IndexMap;

use super::types::Type;

/// Index into the analyzer's symbol arena. Symbols outlive their scopes so
/// side tables can keep referring to them after scope exit.
pub type SymbolId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Parameter,
    Function,
}

#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    /// `None` until the first assignment for a `let x;` with neither
    /// annotation nor initializer.
    pub ty: Option<Type>,
    pub mutable: bool,
    pub initialized: bool,
    pub kind: SymbolKind,
}

/// Active borrows of one variable, tracked per scope.
#[derive(Debug, Clone, Default)]
pub struct BorrowInfo {
    pub mutable_borrow_active: bool,
    pub immutable_borrow_count: u32,
}

/// One lexical scope: name bindings plus the borrows taken within it.
/// Dropping the scope releases its borrows.
#[derive(Debug, Default)]
pub struct Scope {
    pub symbols: IndexMap<String, SymbolId>,
    pub borrows: IndexMap<String, BorrowInfo>,
}
