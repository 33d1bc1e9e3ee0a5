//! End-to-end scenarios across lex → parse → check → IR, plus the table
//! artifact round trip.

use crate::analyze::{Type, analyze};
use crate::ast::{self, Stmt};
use crate::ir::generate;
use crate::lexer::lex;
use crate::parser::Parser;
use crate::{check_source, grammar, shared_parser};

#[test]
fn straight_line_program_flows_through_every_stage() {
    let source = "fn main() { let x: i32 = 1 + 2 * 3; }";
    let (program, analysis) = check_source(source).unwrap();
    let quads = generate(&program, &analysis).unwrap();

    let rendered: Vec<String> = quads.iter().map(|q| q.to_string()).collect();
    assert!(rendered.contains(&"*\t2\t3\tt1".to_string()));
    assert!(rendered.contains(&"+\t1\tt1\tt2".to_string()));
    assert!(rendered.contains(&"decl\tx\ti32\t_".to_string()));
    assert!(rendered.contains(&"assign\tt2\t_\tx".to_string()));
}

#[test]
fn function_calls_check_and_lower() {
    let source = "fn f(x: i32) -> i32 { return x + 1; } fn main() { let y: i32 = f(41); }";
    let (program, analysis) = check_source(source).unwrap();
    let quads = generate(&program, &analysis).unwrap();
    let rendered: Vec<String> = quads.iter().map(|q| q.to_string()).collect();
    assert!(rendered.contains(&"call\tf\t[41]\tt2".to_string()));
    assert!(rendered.contains(&"assign\tt2\t_\ty".to_string()));
}

#[test]
fn conflicting_borrows_are_diagnosed() {
    let source = "fn main() { let x: i32 = 1; let r: &i32 = &x; let r2: &mut i32 = &mut x; }";
    let err = check_source(source).unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains("already borrowed") || message.contains("not mutable"),
        "{message}"
    );
}

#[test]
fn loop_expressions_carry_their_break_type() {
    let source = "fn main() { let v: i32 = loop { break 7; }; }";
    let (program, analysis) = check_source(source).unwrap();
    let Stmt::Let { id, .. } = &program.items[0].body.stmts[0] else {
        panic!("expected a let statement");
    };
    assert_eq!(analysis.decl_type(*id), Some(&Type::I32));
}

#[test]
fn nested_unbraced_if_accepts_and_binds_else_inward() {
    let (program, _) = check_source("fn main() { if 1 if 0 { } else { } }").unwrap();
    let dump = ast::dump(&program);
    // The else block is attached under the inner if.
    assert!(dump.contains("Else"), "{dump}");
    let Stmt::If(outer) = &program.items[0].body.stmts[0] else {
        panic!("expected an if statement");
    };
    assert!(outer.else_body.is_none());
}

#[test]
fn table_artifact_round_trips_through_a_file() {
    let build = grammar::build().unwrap();
    let fingerprint = build.set.grammar.fingerprint();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ferrite.tables");
    std::fs::write(&path, ferrite_core::to_binary(&build.set)).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let loaded = ferrite_core::from_binary(&bytes, fingerprint).unwrap();

    // A parser over the reloaded tables behaves like the built one.
    let source = "fn main() { let x: i32 = 1 + 2 * 3; }";
    let from_disk = Parser::new(loaded);
    let a = from_disk.parse(&lex(source)).unwrap();
    let b = shared_parser().parse(&lex(source)).unwrap();
    assert_eq!(ast::dump(&a), ast::dump(&b));

    // A fingerprint mismatch is a stale artifact, not a parse hazard.
    assert!(ferrite_core::from_binary(&bytes, fingerprint.wrapping_add(1)).is_err());
}

#[test]
fn stage_failures_abort_the_pipeline() {
    // Syntax failure: no AST, nothing downstream.
    let tokens = lex("fn main() { let = 1; }");
    assert!(shared_parser().parse(&tokens).is_err());

    // Semantic failure: parse succeeds, analysis rejects.
    let tokens = lex("fn main() { y = 1; }");
    let program = shared_parser().parse(&tokens).unwrap();
    assert!(analyze(&program).is_err());
}
