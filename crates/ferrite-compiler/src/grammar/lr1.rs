//! Canonical LR(1) item sets.
//!
//! States are full closures represented as ordered item sets; the collection
//! is grown to a fixed point with membership keyed on item-set equality.
//! Transitions are recorded as symbol → state-index maps while the
//! collection is built, so the table pass never recomputes GOTO sets.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use ferrite_core::grammar::EOF_TERM;
use ferrite_core::{Grammar, ProdId, Sym, TermId};

use super::first::FirstSets;

/// An LR(1) item `[A → α·β, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    pub prod: ProdId,
    pub dot: u16,
    pub la: TermId,
}

impl Item {
    /// The symbol after the dot, if any.
    pub fn next_symbol(&self, grammar: &Grammar) -> Option<Sym> {
        grammar.productions[self.prod as usize]
            .rhs
            .get(self.dot as usize)
            .copied()
    }

    pub fn is_complete(&self, grammar: &Grammar) -> bool {
        self.dot as usize == grammar.productions[self.prod as usize].rhs.len()
    }
}

pub type ItemSet = BTreeSet<Item>;

/// Expands an item set with all items reachable through nonterminals after
/// the dot, with lookaheads from `FIRST(β a)`.
pub fn closure(grammar: &Grammar, first: &FirstSets, seed: &ItemSet) -> ItemSet {
    let mut set = seed.clone();
    let mut work: Vec<Item> = seed.iter().copied().collect();

    while let Some(item) = work.pop() {
        let Some(Sym::N(b)) = item.next_symbol(grammar) else {
            continue;
        };
        let beta = &grammar.productions[item.prod as usize].rhs[item.dot as usize + 1..];
        let lookaheads = first.first_of_seq(beta, item.la);
        for (prod_id, prod) in grammar.productions.iter().enumerate() {
            if prod.lhs != b {
                continue;
            }
            for &la in &lookaheads {
                let new = Item {
                    prod: prod_id as ProdId,
                    dot: 0,
                    la,
                };
                if set.insert(new) {
                    work.push(new);
                }
            }
        }
    }
    set
}

/// `GOTO(I, X)`: advances the dot over `X` and closes the result.
pub fn goto_set(grammar: &Grammar, first: &FirstSets, set: &ItemSet, sym: Sym) -> ItemSet {
    let moved: ItemSet = set
        .iter()
        .filter(|item| item.next_symbol(grammar) == Some(sym))
        .map(|item| Item {
            prod: item.prod,
            dot: item.dot + 1,
            la: item.la,
        })
        .collect();
    if moved.is_empty() {
        moved
    } else {
        closure(grammar, first, &moved)
    }
}

/// The canonical collection plus its transition maps.
pub struct Collection {
    pub states: Vec<ItemSet>,
    pub transitions: Vec<IndexMap<Sym, u32>>,
}

/// Builds the canonical LR(1) collection from
/// `closure({[start' → ·start, $]})`.
pub fn build_collection(grammar: &Grammar, first: &FirstSets) -> Collection {
    let seed: ItemSet = [Item {
        prod: 0,
        dot: 0,
        la: EOF_TERM,
    }]
    .into_iter()
    .collect();
    let start = closure(grammar, first, &seed);

    let mut ids: IndexMap<ItemSet, u32> = IndexMap::new();
    ids.insert(start, 0);
    let mut transitions: Vec<IndexMap<Sym, u32>> = vec![IndexMap::new()];
    let mut next = 0usize;

    while next < ids.len() {
        let state = ids.get_index(next).map(|(s, _)| s.clone());
        let Some(state) = state else { break };

        // Outgoing symbols, deduplicated in item order.
        let mut symbols: BTreeSet<Sym> = BTreeSet::new();
        for item in &state {
            if let Some(sym) = item.next_symbol(grammar) {
                symbols.insert(sym);
            }
        }

        for sym in symbols {
            let target = goto_set(grammar, first, &state, sym);
            if target.is_empty() {
                continue;
            }
            let target_id = match ids.get(&target).copied() {
                Some(id) => id,
                None => {
                    let id = ids.len() as u32;
                    ids.insert(target, id);
                    transitions.push(IndexMap::new());
                    id
                }
            };
            transitions[next].insert(sym, target_id);
        }
        next += 1;
    }

    Collection {
        states: ids.into_keys().collect(),
        transitions,
    }
}
