//! Semantic analysis.
//!
//! A single post-parse tree walk over the AST:
//! - `types` - the structural type taxonomy and annotation resolution
//! - `symbol` - symbols, scopes, and per-scope borrow maps
//! - `check` - the checking pass itself, producing [`Analysis`] side tables
//! - `error` - semantic error kinds

mod check;
mod error;
mod symbol;
mod types;


pub use check::{Analysis, analyze};
pub use error::{SemanticError, SemanticErrorKind};
pub use symbol::{BorrowInfo, Symbol, SymbolId, SymbolKind};
pub use types::{Type, resolve_type};
