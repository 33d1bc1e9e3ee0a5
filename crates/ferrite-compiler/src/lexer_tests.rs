use crate::lexer::{TokenKind, lex, parse_int};

fn dump(source: &str) -> String {
    lex(source)
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn tokenizes_a_declaration() {
    insta::assert_snapshot!(dump("fn main() { let x: i32 = 1 + 2 * 3; }"), @r"
    KEYWORD(fn)@1:1
    IDENT(main)@1:4
    DELIM(()@1:8
    DELIM())@1:9
    DELIM({)@1:11
    KEYWORD(let)@1:13
    IDENT(x)@1:17
    DELIM(:)@1:18
    KEYWORD(i32)@1:20
    OP(=)@1:24
    NUMBER(1)@1:26
    OP(+)@1:28
    NUMBER(2)@1:30
    OP(*)@1:32
    NUMBER(3)@1:34
    DELIM(;)@1:35
    DELIM(})@1:37
    EOF()@1:38
    ");
}

#[test]
fn integer_bases() {
    insta::assert_snapshot!(dump("0b1010 0o17 0x1F 0XaB 42"), @r"
    NUMBER(0b1010)@1:1
    NUMBER(0o17)@1:8
    NUMBER(0x1F)@1:13
    NUMBER(0XaB)@1:18
    NUMBER(42)@1:23
    EOF()@1:25
    ");
}

#[test]
fn digit_prefixed_identifier_is_one_error_token() {
    insta::assert_snapshot!(dump("12abc"), @r"
    ERROR(12abc)@1:1
    EOF()@1:6
    ");
}

#[test]
fn bad_base_prefix_covers_two_bytes() {
    insta::assert_snapshot!(dump("0z"), @r"
    ERROR(0z)@1:1
    EOF()@1:3
    ");
    insta::assert_snapshot!(dump("0zz"), @r"
    ERROR(0z)@1:1
    IDENT(z)@1:3
    EOF()@1:4
    ");
}

#[test]
fn base_prefix_without_digits_is_an_error() {
    insta::assert_snapshot!(dump("0b"), @r"
    ERROR(0b)@1:1
    EOF()@1:3
    ");
    insta::assert_snapshot!(dump("0b9"), @r"
    ERROR(0b)@1:1
    NUMBER(9)@1:3
    EOF()@1:4
    ");
}

#[test]
fn based_literal_stops_at_foreign_digits() {
    insta::assert_snapshot!(dump("0b102"), @r"
    NUMBER(0b10)@1:1
    NUMBER(2)@1:5
    EOF()@1:6
    ");
}

#[test]
fn unknown_byte_is_a_single_error_token() {
    insta::assert_snapshot!(dump("@"), @r"
    ERROR(@)@1:1
    EOF()@1:2
    ");
}

#[test]
fn skips_comments_and_whitespace() {
    insta::assert_snapshot!(dump("let x = 5; // trailing\n/* block\ncomment */ y"), @r"
    KEYWORD(let)@1:1
    IDENT(x)@1:5
    OP(=)@1:7
    NUMBER(5)@1:9
    DELIM(;)@1:10
    IDENT(y)@3:12
    EOF()@3:13
    ");
}

#[test]
fn block_comment_with_inner_stars() {
    insta::assert_snapshot!(dump("/* a **/ x"), @r"
    IDENT(x)@1:10
    EOF()@1:11
    ");
}

#[test]
fn operators_use_maximal_munch() {
    insta::assert_snapshot!(dump("a==b!=c>=d<=e->f..g.h&i"), @r"
    IDENT(a)@1:1
    OP(==)@1:2
    IDENT(b)@1:4
    OP(!=)@1:5
    IDENT(c)@1:7
    OP(>=)@1:8
    IDENT(d)@1:10
    OP(<=)@1:11
    IDENT(e)@1:13
    OP(->)@1:14
    IDENT(f)@1:16
    OP(..)@1:17
    IDENT(g)@1:19
    OP(.)@1:20
    IDENT(h)@1:21
    OP(&)@1:22
    IDENT(i)@1:23
    EOF()@1:24
    ");
}

#[test]
fn keywords_do_not_swallow_identifiers() {
    insta::assert_snapshot!(dump("letx let mutable mut"), @r"
    IDENT(letx)@1:1
    KEYWORD(let)@1:6
    IDENT(mutable)@1:10
    KEYWORD(mut)@1:18
    EOF()@1:21
    ");
}

#[test]
fn empty_input_yields_exactly_one_eof() {
    let tokens = lex("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].pos.line, 1);
    assert_eq!(tokens[0].pos.col, 1);
}

#[test]
fn eof_count_is_always_one() {
    for source in ["", "fn main() { }", "12abc 0z @ /* unterminated"] {
        let eofs = lex(source)
            .iter()
            .filter(|t| t.kind == TokenKind::Eof)
            .count();
        assert_eq!(eofs, 1, "source {source:?}");
    }
}

#[test]
fn token_texts_reconstruct_the_source_modulo_whitespace() {
    let source = "fn add(a: i32, b: i32) -> i32 { return a + b; }";
    let stripped: String = source.split_whitespace().collect();
    let joined: String = lex(source).iter().map(|t| t.text).collect();
    assert_eq!(joined, stripped);
}

#[test]
fn parses_integer_literals_by_base() {
    assert_eq!(parse_int("42"), Some(42));
    assert_eq!(parse_int("0b1010"), Some(10));
    assert_eq!(parse_int("0o17"), Some(15));
    assert_eq!(parse_int("0x1F"), Some(31));
    assert_eq!(parse_int("0XaB"), Some(171));
    assert_eq!(parse_int("99999999999999999999"), None);
}
