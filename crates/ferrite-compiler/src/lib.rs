//! Compiler front-end for the ferrite language.
//!
//! The pipeline, leaves first:
//! - `lexer` - source text → tokens
//! - `grammar` - productions, FIRST sets, canonical LR(1) states, ACTION/GOTO
//! - `parser` - table-driven stack automaton building the AST
//! - `analyze` - scoped symbol table, type checking, borrow tracking
//! - `ir` - AST → quadruples
//! - `diagnostics` - annotated snippet rendering for the CLI
//!
//! Control flow is strictly forward; a failure at any stage aborts the run.

pub mod analyze;
pub mod ast;
pub mod diagnostics;
pub mod grammar;
pub mod ir;
pub mod lexer;
pub mod parser;
pub mod pos;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod pipeline_tests;

pub use analyze::{Analysis, SemanticError, analyze};
pub use grammar::{TableBuildError, TablesBuild};
pub use ir::{IrError, Quad};
pub use lexer::{Token, TokenKind, lex};
pub use parser::{Parser, SyntaxError, TraceRow};

/// Any stage failure, with the single-line `error (line L, col C): …`
/// rendering inherited from the stage errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Table(#[from] TableBuildError),
    #[error("{0}")]
    Syntax(#[from] SyntaxError),
    #[error("{0}")]
    Semantic(#[from] SemanticError),
    #[error("{0}")]
    Ir(#[from] IrError),
}

impl Error {
    /// Byte offset of the error position, when the stage carries one.
    pub fn offset(&self) -> Option<u32> {
        match self {
            Error::Table(_) => None,
            Error::Syntax(e) => Some(e.offset),
            Error::Semantic(e) => Some(e.offset),
            Error::Ir(_) => None,
        }
    }

    /// The message without the `error (line L, col C)` prefix, for snippet
    /// titles.
    pub fn message(&self) -> String {
        match self {
            Error::Table(e) => e.to_string(),
            Error::Syntax(e) => e.message.clone(),
            Error::Semantic(e) => e.kind.to_string(),
            Error::Ir(e) => e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// A process-wide parser over a one-time table build.
///
/// Tables are pure data and are safely shared across parses; each parse gets
/// its own stacks. The CLI builds its [`Parser`] from the cached artifact
/// instead.
pub fn shared_parser() -> &'static Parser {
    static PARSER: std::sync::OnceLock<Parser> = std::sync::OnceLock::new();
    PARSER.get_or_init(|| {
        let build = grammar::build().expect("the ferrite grammar builds without conflicts");
        Parser::new(build.set)
    })
}

/// Parses a source string with the shared tables.
pub fn parse_source(source: &str) -> Result<ast::Program> {
    let tokens = lex(source);
    Ok(shared_parser().parse(&tokens)?)
}

/// Parses and checks a source string with the shared tables.
pub fn check_source(source: &str) -> Result<(ast::Program, Analysis)> {
    let program = parse_source(source)?;
    let analysis = analyze(&program)?;
    Ok((program, analysis))
}
