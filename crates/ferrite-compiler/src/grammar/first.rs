//! FIRST set computation.
//!
//! The standard fixed point: iterate over all productions, accumulating
//! terminals (and nullability) per nonterminal until nothing changes.

use std::collections::BTreeSet;

use ferrite_core::{Grammar, Sym, TermId};

/// FIRST of one nonterminal. `nullable` records ε membership explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirstSet {
    pub terms: BTreeSet<TermId>,
    pub nullable: bool,
}

/// FIRST sets for every nonterminal of a grammar.
#[derive(Debug, Clone)]
pub struct FirstSets {
    sets: Vec<FirstSet>,
}

impl FirstSets {
    pub fn compute(grammar: &Grammar) -> FirstSets {
        let mut sets = vec![FirstSet::default(); grammar.nonterminals.len()];
        let mut changed = true;
        while changed {
            changed = false;
            for prod in &grammar.productions {
                let lhs = prod.lhs as usize;
                let mut nullable_prefix = true;
                for sym in &prod.rhs {
                    match *sym {
                        Sym::T(t) => {
                            changed |= sets[lhs].terms.insert(t);
                            nullable_prefix = false;
                            break;
                        }
                        Sym::N(n) => {
                            let from = sets[n as usize].clone();
                            for t in &from.terms {
                                changed |= sets[lhs].terms.insert(*t);
                            }
                            if !from.nullable {
                                nullable_prefix = false;
                                break;
                            }
                        }
                    }
                }
                if nullable_prefix && !sets[lhs].nullable {
                    sets[lhs].nullable = true;
                    changed = true;
                }
            }
        }
        FirstSets { sets }
    }

    pub fn of(&self, nonterm: u16) -> &FirstSet {
        &self.sets[nonterm as usize]
    }

    /// `FIRST(α a)`: the terminals that can begin the string `α` followed by
    /// the lookahead `a`. If all of `α` is nullable, `a` itself is included.
    pub fn first_of_seq(&self, seq: &[Sym], lookahead: TermId) -> BTreeSet<TermId> {
        let mut out = BTreeSet::new();
        for sym in seq {
            match *sym {
                Sym::T(t) => {
                    out.insert(t);
                    return out;
                }
                Sym::N(n) => {
                    let set = self.of(n);
                    out.extend(set.terms.iter().copied());
                    if !set.nullable {
                        return out;
                    }
                }
            }
        }
        out.insert(lookahead);
        out
    }
}
