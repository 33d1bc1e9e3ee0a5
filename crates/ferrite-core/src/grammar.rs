//! Grammar model: symbols, productions, and the augmented grammar.
//!
//! Symbols are interned as small indices. Terminals and nonterminals live in
//! separate tables; a symbol is a nonterminal iff it appears as the left-hand
//! side of some production. The end-of-input sentinel `$` is always terminal 0.

use serde::{Deserialize, Serialize};

/// Index into [`Grammar::terminals`].
pub type TermId = u16;
/// Index into [`Grammar::nonterminals`].
pub type NonTermId = u16;
/// Index into [`Grammar::productions`].
pub type ProdId = u16;

/// Terminal id reserved for the end-of-input sentinel `$`.
pub const EOF_TERM: TermId = 0;

/// A grammar symbol: terminal or nonterminal, by table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sym {
    T(TermId),
    N(NonTermId),
}

/// A single production `lhs → rhs`. An empty `rhs` is an ε production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Production {
    pub lhs: NonTermId,
    pub rhs: Vec<Sym>,
}

/// An augmented grammar. Production 0 is always `start' → start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grammar {
    /// Terminal names; index 0 is `$`.
    pub terminals: Vec<String>,
    /// Nonterminal names, in order of first appearance as a left-hand side.
    pub nonterminals: Vec<String>,
    /// Productions in definition order; index 0 is the augmented start.
    pub productions: Vec<Production>,
    /// The augmented start nonterminal.
    pub start: NonTermId,
}

impl Grammar {
    /// Builds a grammar from a listing of `(lhs, rhs)` rows.
    ///
    /// Row 0 must be the augmented production: a unique start symbol with a
    /// single-symbol right-hand side. Every symbol that occurs as some row's
    /// left-hand side is a nonterminal; everything else is a terminal.
    pub fn from_rules(rules: &[(&str, &[&str])]) -> Grammar {
        let mut nonterminals: Vec<String> = Vec::new();
        for (lhs, _) in rules {
            if !nonterminals.iter().any(|n| n == lhs) {
                nonterminals.push((*lhs).to_string());
            }
        }

        let mut terminals: Vec<String> = vec!["$".to_string()];
        for (_, rhs) in rules {
            for sym in *rhs {
                let is_nonterm = nonterminals.iter().any(|n| n == sym);
                if !is_nonterm && !terminals.iter().any(|t| t == sym) {
                    terminals.push((*sym).to_string());
                }
            }
        }

        let nonterm_id = |name: &str| -> NonTermId {
            nonterminals.iter().position(|n| n == name).unwrap() as NonTermId
        };
        let sym_id = |name: &str| -> Sym {
            if let Some(i) = nonterminals.iter().position(|n| n == name) {
                Sym::N(i as NonTermId)
            } else {
                let i = terminals.iter().position(|t| t == name).unwrap();
                Sym::T(i as TermId)
            }
        };

        let productions = rules
            .iter()
            .map(|(lhs, rhs)| Production {
                lhs: nonterm_id(lhs),
                rhs: rhs.iter().map(|s| sym_id(s)).collect(),
            })
            .collect::<Vec<_>>();

        let start = productions[0].lhs;
        Grammar {
            terminals,
            nonterminals,
            productions,
            start,
        }
    }

    pub fn term_name(&self, id: TermId) -> &str {
        &self.terminals[id as usize]
    }

    pub fn nonterm_name(&self, id: NonTermId) -> &str {
        &self.nonterminals[id as usize]
    }

    pub fn sym_name(&self, sym: Sym) -> &str {
        match sym {
            Sym::T(t) => self.term_name(t),
            Sym::N(n) => self.nonterm_name(n),
        }
    }

    /// Looks up a terminal by name.
    pub fn term_id(&self, name: &str) -> Option<TermId> {
        self.terminals.iter().position(|t| t == name).map(|i| i as TermId)
    }

    /// Renders a production as `LHS → X Y Z` (ε for an empty right-hand side).
    pub fn display_production(&self, prod: ProdId) -> String {
        let p = &self.productions[prod as usize];
        let rhs = if p.rhs.is_empty() {
            "ε".to_string()
        } else {
            p.rhs
                .iter()
                .map(|s| self.sym_name(*s))
                .collect::<Vec<_>>()
                .join(" ")
        };
        format!("{} → {}", self.nonterm_name(p.lhs), rhs)
    }

    /// CRC32 of the canonical production listing.
    ///
    /// Embedded in the table artifact so stale tables are rebuilt whenever
    /// the grammar changes.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for i in 0..self.productions.len() {
            hasher.update(self.display_production(i as ProdId).as_bytes());
            hasher.update(b"\n");
        }
        hasher.finalize()
    }
}
