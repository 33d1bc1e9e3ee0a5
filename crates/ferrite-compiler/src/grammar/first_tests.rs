use ferrite_core::grammar::EOF_TERM;
use ferrite_core::{Grammar, Sym};

use super::first::FirstSets;
use super::language_grammar;

fn first_names(grammar: &Grammar, first: &FirstSets, nonterm: &str) -> Vec<String> {
    let id = grammar
        .nonterminals
        .iter()
        .position(|n| n == nonterm)
        .unwrap() as u16;
    let mut names: Vec<String> = first
        .of(id)
        .terms
        .iter()
        .map(|t| grammar.term_name(*t).to_string())
        .collect();
    names.sort();
    names
}

fn is_nullable(grammar: &Grammar, first: &FirstSets, nonterm: &str) -> bool {
    let id = grammar
        .nonterminals
        .iter()
        .position(|n| n == nonterm)
        .unwrap() as u16;
    first.of(id).nullable
}

#[test]
fn dragon_book_grammar() {
    let grammar = Grammar::from_rules(&[
        ("S'", &["S"]),
        ("S", &["C", "C"]),
        ("C", &["c", "C"]),
        ("C", &["d"]),
    ]);
    let first = FirstSets::compute(&grammar);
    assert_eq!(first_names(&grammar, &first, "S'"), ["c", "d"]);
    assert_eq!(first_names(&grammar, &first, "S"), ["c", "d"]);
    assert_eq!(first_names(&grammar, &first, "C"), ["c", "d"]);
    assert!(!is_nullable(&grammar, &first, "S"));
}

#[test]
fn nullable_prefixes_propagate() {
    let grammar = Grammar::from_rules(&[
        ("S'", &["S"]),
        ("S", &["A", "B"]),
        ("A", &[]),
        ("A", &["a"]),
        ("B", &["b"]),
    ]);
    let first = FirstSets::compute(&grammar);
    assert_eq!(first_names(&grammar, &first, "A"), ["a"]);
    assert!(is_nullable(&grammar, &first, "A"));
    assert_eq!(first_names(&grammar, &first, "S"), ["a", "b"]);
    assert!(!is_nullable(&grammar, &first, "S"));
}

#[test]
fn first_of_seq_walks_through_nullables() {
    let grammar = Grammar::from_rules(&[
        ("S'", &["S"]),
        ("S", &["A", "B"]),
        ("A", &[]),
        ("A", &["a"]),
        ("B", &["b"]),
    ]);
    let first = FirstSets::compute(&grammar);
    let a = Sym::N(2);
    let b = Sym::N(3);

    let seq = first.first_of_seq(&[a, b], EOF_TERM);
    let mut names: Vec<&str> = seq.iter().map(|t| grammar.term_name(*t)).collect();
    names.sort();
    assert_eq!(names, ["a", "b"]);

    // A alone is nullable, so the lookahead shows through.
    let seq = first.first_of_seq(&[a], EOF_TERM);
    let mut names: Vec<&str> = seq.iter().map(|t| grammar.term_name(*t)).collect();
    names.sort();
    assert_eq!(names, ["$", "a"]);
}

#[test]
fn language_grammar_first_sets() {
    let grammar = language_grammar();
    let first = FirstSets::compute(&grammar);

    assert_eq!(first_names(&grammar, &first, "Type"), ["&", "(", "[", "i32"]);
    assert_eq!(
        first_names(&grammar, &first, "Primary"),
        ["&", "(", "*", "IDENT", "NUMBER", "[", "{"]
    );

    for nullable in ["DeclList", "ParamList", "BlockBody", "ElsePart", "ArgList", "ExprList"] {
        assert!(is_nullable(&grammar, &first, nullable), "{nullable}");
    }
    for non_nullable in ["Program", "FnDecl", "Stmt", "Expr", "Type", "Block"] {
        assert!(!is_nullable(&grammar, &first, non_nullable), "{non_nullable}");
    }
}
