//! Core data structures for the ferrite compiler.
//!
//! This crate holds the pure data shared between the table builder, the
//! parser, and the CLI:
//! - `grammar` - productions over interned symbol ids, augmented grammar
//! - `tables` - ACTION/GOTO parse tables
//! - `binary` - the on-disk table artifact (header + postcard payload)
//!
//! Nothing in here computes item sets or drives a parse; algorithms live in
//! `ferrite-compiler`.

pub mod binary;
pub mod grammar;
pub mod tables;

#[cfg(test)]
mod tables_tests;

pub use binary::{ArtifactError, from_binary, to_binary};
pub use grammar::{Grammar, NonTermId, ProdId, Production, Sym, TermId};
pub use tables::{Action, ParseTables, TableSet};
