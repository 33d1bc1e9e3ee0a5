//! ACTION/GOTO table construction.
//!
//! Shift entries are inserted before reduce entries, and an occupied cell is
//! never overwritten, so every shift/reduce collision resolves in favour of
//! the shift (this is what binds a dangling `else` to the nearest `if`).
//! A reduce/reduce collision has no such tie-break and aborts the build.

use indexmap::IndexMap;

use ferrite_core::tables::{Action, ParseTables, TableSet};
use ferrite_core::{Grammar, Sym};

use super::first::FirstSets;
use super::lr1::build_collection;

/// Statistics from a table build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub states: usize,
    pub productions: usize,
    pub shift_reduce_resolved: usize,
}

/// A successful build: the tables plus the build statistics.
#[derive(Debug, Clone)]
pub struct TablesBuild {
    pub set: TableSet,
    pub summary: BuildSummary,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TableBuildError {
    #[error(
        "reduce/reduce conflict in state {state} on `{lookahead}`: ({left}) vs ({right})"
    )]
    ReduceReduce {
        state: u32,
        lookahead: String,
        left: String,
        right: String,
    },
}

/// Builds ACTION/GOTO tables for an augmented grammar.
pub fn build_tables(grammar: Grammar) -> Result<TablesBuild, TableBuildError> {
    let first = FirstSets::compute(&grammar);
    let collection = build_collection(&grammar, &first);

    let mut action: Vec<IndexMap<_, _>> = Vec::with_capacity(collection.states.len());
    let mut goto: Vec<IndexMap<_, _>> = Vec::with_capacity(collection.states.len());
    let mut shift_reduce_resolved = 0usize;

    for (i, state) in collection.states.iter().enumerate() {
        let mut action_row = IndexMap::new();
        let mut goto_row = IndexMap::new();

        // Shifts and GOTOs come straight from the recorded transitions.
        for (&sym, &target) in &collection.transitions[i] {
            match sym {
                Sym::T(t) => {
                    action_row.insert(t, Action::Shift(target));
                }
                Sym::N(n) => {
                    goto_row.insert(n, target);
                }
            }
        }

        // Reduces and accept; existing shifts win.
        for item in state {
            if !item.is_complete(&grammar) {
                continue;
            }
            let prod = &grammar.productions[item.prod as usize];
            if prod.lhs == grammar.start {
                action_row.insert(ferrite_core::grammar::EOF_TERM, Action::Accept);
                continue;
            }
            match action_row.get(&item.la).copied() {
                None => {
                    action_row.insert(item.la, Action::Reduce(item.prod));
                }
                Some(Action::Shift(_)) | Some(Action::Accept) => {
                    shift_reduce_resolved += 1;
                }
                Some(Action::Reduce(other)) if other != item.prod => {
                    return Err(TableBuildError::ReduceReduce {
                        state: i as u32,
                        lookahead: grammar.term_name(item.la).to_string(),
                        left: grammar.display_production(other),
                        right: grammar.display_production(item.prod),
                    });
                }
                Some(Action::Reduce(_)) => {}
            }
        }

        action.push(action_row);
        goto.push(goto_row);
    }

    let summary = BuildSummary {
        states: collection.states.len(),
        productions: grammar.productions.len(),
        shift_reduce_resolved,
    };
    Ok(TablesBuild {
        set: TableSet {
            grammar,
            tables: ParseTables { action, goto },
        },
        summary,
    })
}
