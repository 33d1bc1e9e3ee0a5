use indexmap::IndexMap;

use crate::binary::{self, ArtifactError};
use crate::grammar::Grammar;
use crate::tables::{Action, ParseTables, TableSet};

fn sample() -> TableSet {
    let grammar = Grammar::from_rules(&[("S'", &["S"]), ("S", &["a"])]);
    let mut action_row = IndexMap::new();
    action_row.insert(grammar.term_id("a").unwrap(), Action::Shift(2));
    let mut goto_row = IndexMap::new();
    goto_row.insert(1, 1u32);
    let tables = ParseTables {
        action: vec![action_row, IndexMap::new(), IndexMap::new()],
        goto: vec![goto_row, IndexMap::new(), IndexMap::new()],
    };
    TableSet { grammar, tables }
}

#[test]
fn lookup_helpers() {
    let set = sample();
    let a = set.grammar.term_id("a").unwrap();
    assert_eq!(set.tables.action(0, a), Some(Action::Shift(2)));
    assert_eq!(set.tables.action(1, a), None);
    assert_eq!(set.tables.goto(0, 1), Some(1));
    assert_eq!(set.tables.state_count(), 3);
}

#[test]
fn binary_round_trip() {
    let set = sample();
    let fp = set.grammar.fingerprint();
    let bytes = binary::to_binary(&set);
    let loaded = binary::from_binary(&bytes, fp).unwrap();
    assert_eq!(loaded.grammar.terminals, set.grammar.terminals);
    assert_eq!(loaded.tables.state_count(), set.tables.state_count());
    let a = loaded.grammar.term_id("a").unwrap();
    assert_eq!(loaded.tables.action(0, a), Some(Action::Shift(2)));
}

#[test]
fn rejects_bad_magic() {
    let set = sample();
    let fp = set.grammar.fingerprint();
    let mut bytes = binary::to_binary(&set);
    bytes[0] = b'X';
    assert!(matches!(
        binary::from_binary(&bytes, fp),
        Err(ArtifactError::BadMagic)
    ));
}

#[test]
fn rejects_stale_fingerprint() {
    let set = sample();
    let fp = set.grammar.fingerprint();
    let bytes = binary::to_binary(&set);
    assert!(matches!(
        binary::from_binary(&bytes, fp.wrapping_add(1)),
        Err(ArtifactError::Stale { .. })
    ));
}

#[test]
fn rejects_truncated_input() {
    assert!(matches!(
        binary::from_binary(b"FRT1", 0),
        Err(ArtifactError::Truncated)
    ));
}
