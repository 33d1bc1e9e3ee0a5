//! Table-driven LR(1) parser.
//!
//! The driver runs a state stack and a symbol stack over the ACTION/GOTO
//! tables; AST nodes are built during reductions by [`reduce::AstBuilder`],
//! indexed by production number. A trace hook records every action for the
//! `parse --trace` output.

mod reduce;

#[cfg(test)]
mod parser_tests;
#[cfg(test)]
mod trace_tests;

use std::collections::HashMap;

use serde::Serialize;

use ferrite_core::grammar::EOF_TERM;
use ferrite_core::tables::{Action, TableSet};
use ferrite_core::TermId;

use crate::ast::Program;
use crate::lexer::{Token, TokenKind};
use crate::pos::Pos;

use reduce::{AstBuilder, StackValue};

/// A syntax error with the offending position.
#[derive(Debug, Clone, thiserror::Error)]
#[error("error (line {line}, col {col}): {message}")]
pub struct SyntaxError {
    pub message: String,
    pub line: u32,
    pub col: u32,
    pub offset: u32,
}

impl SyntaxError {
    pub(crate) fn at(pos: Pos, message: String) -> Self {
        Self {
            message,
            line: pos.line,
            col: pos.col,
            offset: pos.offset,
        }
    }
}

/// One row of the parse trace, recorded before each action.
#[derive(Debug, Clone, Serialize)]
pub struct TraceRow {
    pub state: Vec<u32>,
    pub symbols: Vec<String>,
    pub input: Vec<String>,
    pub action: String,
}

/// A parser over a fixed table set. Reusable across parses; each parse gets
/// fresh stacks and a fresh node-id counter.
pub struct Parser {
    set: TableSet,
    term_by_text: HashMap<String, TermId>,
    ident_term: TermId,
    number_term: TermId,
}

impl Parser {
    pub fn new(set: TableSet) -> Parser {
        let term_by_text = set
            .grammar
            .terminals
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i as TermId))
            .collect();
        let ident_term = set.grammar.term_id("IDENT").unwrap_or(0);
        let number_term = set.grammar.term_id("NUMBER").unwrap_or(0);
        Parser {
            set,
            term_by_text,
            ident_term,
            number_term,
        }
    }

    pub fn tables(&self) -> &TableSet {
        &self.set
    }

    /// Parses a token stream into a [`Program`].
    pub fn parse(&self, tokens: &[Token<'_>]) -> Result<Program, SyntaxError> {
        self.drive(tokens, &mut None)
    }

    /// Parses while recording a trace row per action.
    pub fn parse_traced(
        &self,
        tokens: &[Token<'_>],
    ) -> (Result<Program, SyntaxError>, Vec<TraceRow>) {
        let mut trace = Some(Vec::new());
        let result = self.drive(tokens, &mut trace);
        (result, trace.unwrap_or_default())
    }

    /// Maps a token to the terminal the tables are keyed by.
    fn lookahead(&self, token: &Token<'_>) -> Result<TermId, SyntaxError> {
        match token.kind {
            TokenKind::Ident => Ok(self.ident_term),
            TokenKind::Number => Ok(self.number_term),
            TokenKind::Eof => Ok(EOF_TERM),
            TokenKind::Error => Err(SyntaxError::at(
                token.pos,
                format!("unrecognized token `{}`", token.text),
            )),
            TokenKind::Keyword | TokenKind::Op | TokenKind::Delim => self
                .term_by_text
                .get(token.text)
                .copied()
                .ok_or_else(|| {
                    SyntaxError::at(
                        token.pos,
                        format!("token `{}` is not part of the grammar", token.text),
                    )
                }),
        }
    }

    fn drive(
        &self,
        tokens: &[Token<'_>],
        trace: &mut Option<Vec<TraceRow>>,
    ) -> Result<Program, SyntaxError> {
        let grammar = &self.set.grammar;
        let tables = &self.set.tables;
        if tokens.is_empty() {
            return Err(SyntaxError::at(
                Pos::default(),
                "empty token stream (missing EOF token)".to_string(),
            ));
        }
        let mut states: Vec<u32> = vec![0];
        let mut symbols: Vec<StackValue<'_>> = Vec::new();
        let mut builder = AstBuilder::new();
        let mut idx = 0usize;

        loop {
            let state = *states.last().unwrap_or(&0);
            let token = &tokens[idx.min(tokens.len() - 1)];
            let term = self.lookahead(token)?;

            let Some(action) = tables.action(state, term) else {
                return Err(SyntaxError::at(
                    token.pos,
                    format!(
                        "unexpected token {}({}) with lookahead `{}` in state {}",
                        token.kind,
                        token.text,
                        grammar.term_name(term),
                        state
                    ),
                ));
            };

            match action {
                Action::Shift(target) => {
                    if let Some(rows) = trace {
                        rows.push(trace_row(
                            &states,
                            &symbols,
                            tokens,
                            idx,
                            format!("shift {target}"),
                        ));
                    }
                    states.push(target);
                    symbols.push(StackValue::Token(*token));
                    idx += 1;
                }
                Action::Reduce(prod_id) => {
                    if let Some(rows) = trace {
                        rows.push(trace_row(
                            &states,
                            &symbols,
                            tokens,
                            idx,
                            format!("reduce {}", grammar.display_production(prod_id)),
                        ));
                    }

                    let prod = &grammar.productions[prod_id as usize];
                    let n = prod.rhs.len();

                    if n == 0 && tables.goto(state, prod.lhs) == Some(state) {
                        return Err(SyntaxError::at(
                            token.pos,
                            format!(
                                "parse tables corrupted: infinite ε-reduce on {}",
                                grammar.display_production(prod_id)
                            ),
                        ));
                    }

                    let children = symbols.split_off(symbols.len() - n);
                    states.truncate(states.len() - n);
                    let value = builder.reduce(prod_id, children)?;

                    let top = *states.last().unwrap_or(&0);
                    let Some(next) = tables.goto(top, prod.lhs) else {
                        return Err(SyntaxError::at(
                            token.pos,
                            format!(
                                "parse tables corrupted: no GOTO for {} in state {top}",
                                grammar.nonterm_name(prod.lhs)
                            ),
                        ));
                    };
                    symbols.push(value);
                    states.push(next);
                    debug_assert_eq!(states.len(), symbols.len() + 1);
                }
                Action::Accept => {
                    if let Some(rows) = trace {
                        rows.push(trace_row(&states, &symbols, tokens, tokens.len(), "accept".into()));
                    }
                    return match symbols.pop() {
                        Some(StackValue::Program(program)) => Ok(program),
                        _ => Err(SyntaxError::at(
                            token.pos,
                            "parse accepted without a program on the stack".to_string(),
                        )),
                    };
                }
            }
        }
    }
}

fn trace_row(
    states: &[u32],
    symbols: &[StackValue<'_>],
    tokens: &[Token<'_>],
    idx: usize,
    action: String,
) -> TraceRow {
    TraceRow {
        state: states.to_vec(),
        symbols: symbols.iter().map(|s| s.describe()).collect(),
        input: tokens[idx.min(tokens.len())..]
            .iter()
            .map(|t| {
                if t.is_eof() {
                    "$".to_string()
                } else {
                    t.text.to_string()
                }
            })
            .collect(),
        action,
    }
}
