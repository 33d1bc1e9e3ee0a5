//! ACTION/GOTO parse tables.
//!
//! Rows are keyed by `IndexMap` so iteration order (and therefore the binary
//! artifact) is deterministic for a given build.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::grammar::{Grammar, NonTermId, ProdId, TermId};

/// A parser action for `(state, terminal)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Shift(u32),
    Reduce(ProdId),
    Accept,
}

/// ACTION and GOTO tables, indexed by state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseTables {
    pub action: Vec<IndexMap<TermId, Action>>,
    pub goto: Vec<IndexMap<NonTermId, u32>>,
}

impl ParseTables {
    pub fn state_count(&self) -> usize {
        self.action.len()
    }

    pub fn action(&self, state: u32, term: TermId) -> Option<Action> {
        self.action
            .get(state as usize)
            .and_then(|row| row.get(&term))
            .copied()
    }

    pub fn goto(&self, state: u32, nonterm: NonTermId) -> Option<u32> {
        self.goto
            .get(state as usize)
            .and_then(|row| row.get(&nonterm))
            .copied()
    }
}

/// A grammar together with its tables; the unit the artifact stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSet {
    pub grammar: Grammar,
    pub tables: ParseTables,
}
