use indoc::indoc;

use crate::ast;
use crate::lexer::lex;
use crate::shared_parser;

fn parse_dump(source: &str) -> String {
    let tokens = lex(source);
    let program = shared_parser()
        .parse(&tokens)
        .unwrap_or_else(|err| panic!("{source:?}: {err}"));
    ast::dump(&program).trim_end().to_string()
}

fn parse_err(source: &str) -> String {
    let tokens = lex(source);
    shared_parser()
        .parse(&tokens)
        .expect_err("expected a syntax error")
        .to_string()
}

#[test]
fn empty_program() {
    insta::assert_snapshot!(parse_dump(""), @"Program");
}

#[test]
fn precedence_multiplication_binds_tighter() {
    insta::assert_snapshot!(parse_dump("fn main() { let x: i32 = 1 + 2 * 3; }"), @r"
    Program
      FuncDecl main
        Block
          Let x: i32
            Binary +
              Number 1
              Binary *
                Number 2
                Number 3
    ");
}

#[test]
fn additive_operators_are_left_associative() {
    insta::assert_snapshot!(parse_dump("fn main() { let x: i32 = 1 - 2 - 3; }"), @r"
    Program
      FuncDecl main
        Block
          Let x: i32
            Binary -
              Binary -
                Number 1
                Number 2
              Number 3
    ");
}

#[test]
fn dangling_else_binds_to_the_nearest_if() {
    insta::assert_snapshot!(parse_dump("fn main() { if 1 if 0 { } else { } }"), @r"
    Program
      FuncDecl main
        Block
          If
            Number 1
            Block
              If
                Number 0
                Block
                Else
                  Block
    ");
}

#[test]
fn else_if_chains_nest() {
    insta::assert_snapshot!(parse_dump("fn main() { if 1 { } else if 0 { } else { } }"), @r"
    Program
      FuncDecl main
        Block
          If
            Number 1
            Block
            Else
              Block
                If
                  Number 0
                  Block
                  Else
                    Block
    ");
}

#[test]
fn tuples_and_parenthesization() {
    let source = indoc! {"
        fn main() {
            let a: i32 = (1);
            let b: (i32) = (1,);
            let c: (i32, i32) = (1, 2);
            let d: () = ();
        }
    "};
    insta::assert_snapshot!(parse_dump(source), @r"
    Program
      FuncDecl main
        Block
          Let a: i32
            Number 1
          Let b: (i32)
            Tuple
              Number 1
          Let c: (i32, i32)
            Tuple
              Number 1
              Number 2
          Let d: ()
            Tuple
    ");
}

#[test]
fn lvalues_and_projections() {
    let source = indoc! {"
        fn main() {
            let mut a: [i32; 3] = [1, 2, 3];
            a[0] = 9;
            let t: (i32, i32) = (1, 2);
            let x: i32 = t.0;
            let r: &i32 = &x;
            let y: i32 = *r;
        }
    "};
    insta::assert_snapshot!(parse_dump(source), @r"
    Program
      FuncDecl main
        Block
          Let mut a: [i32; 3]
            Array
              Number 1
              Number 2
              Number 3
          Assign
            Index
              Ident a
              Number 0
            Number 9
          Let t: (i32, i32)
            Tuple
              Number 1
              Number 2
          Let x: i32
            Member .0
              Ident t
          Let r: &i32
            Borrow &
              Ident x
          Let y: i32
            Deref
              Ident r
    ");
}

#[test]
fn loops_and_jumps() {
    let source =
        "fn main() { let v: i32 = loop { break 7; }; while 1 { break; } for i in 0..10 { continue; } }";
    insta::assert_snapshot!(parse_dump(source), @r"
    Program
      FuncDecl main
        Block
          Let v: i32
            Loop
              Block
                Break
                  Number 7
          While
            Number 1
            Block
              Break
          For i
            Number 0
            Number 10
            Block
              Continue
    ");
}

#[test]
fn trailing_expression_becomes_the_implicit_return() {
    insta::assert_snapshot!(parse_dump("fn f() -> i32 { 41 + 1 }"), @r"
    Program
      FuncDecl f -> i32
        Block
          Return
            Binary +
              Number 41
              Number 1
    ");
}

#[test]
fn block_and_if_expressions_in_initializer_position() {
    let source = indoc! {"
        fn main() {
            let x: i32 = { let y: i32 = 1; y };
            let z: i32 = if x { 1 } else { 2 };
        }
    "};
    insta::assert_snapshot!(parse_dump(source), @r"
    Program
      FuncDecl main
        Block
          Let x: i32
            Block
              Let y: i32
                Number 1
              Ident y
          Let z: i32
            If
              Ident x
              Block
                Number 1
              Else
                Block
                  Number 2
    ");
}

#[test]
fn calls_with_arguments() {
    insta::assert_snapshot!(parse_dump("fn main() { f(1, 2); g(); }"), @r"
    Program
      FuncDecl main
        Block
          ExprStmt
            Call
              Ident f
              Number 1
              Number 2
          ExprStmt
            Call
              Ident g
    ");
}

#[test]
fn function_parameters() {
    insta::assert_snapshot!(parse_dump("fn f(a: i32, mut b: &mut i32) -> (i32, i32) { }"), @r"
    Program
      FuncDecl f -> (i32, i32)
        Param a: i32
        Param mut b: &mut i32
        Block
    ");
}

#[test]
fn empty_statement_parses() {
    insta::assert_snapshot!(parse_dump("fn main() { ; }"), @r"
    Program
      FuncDecl main
        Block
          Empty
    ");
}

#[test]
fn deref_assignment_parses_as_an_lvalue() {
    insta::assert_snapshot!(parse_dump("fn main() { *p = 1; }"), @r"
    Program
      FuncDecl main
        Block
          Assign
            Deref
              Ident p
            Number 1
    ");
}

#[test]
fn syntax_error_reports_token_and_position() {
    let message = parse_err("fn main() { let = 1; }");
    assert!(
        message.starts_with("error (line 1, col 17): unexpected token OP(=)"),
        "{message}"
    );
    assert!(message.contains("in state"), "{message}");
}

#[test]
fn error_token_is_rejected_with_its_lexeme() {
    let message = parse_err("fn main() { let x: i32 = 12abc; }");
    assert!(
        message.contains("unrecognized token `12abc`"),
        "{message}"
    );
}

#[test]
fn statement_block_requires_a_semicolon() {
    // A braced block in statement position is an expression statement and
    // needs its `;` unless it is the trailing expression.
    let message = parse_err("fn main() { { let a: i32 = 1; } let b: i32 = 2; }");
    assert!(message.starts_with("error (line 1, col 33)"), "{message}");
}
