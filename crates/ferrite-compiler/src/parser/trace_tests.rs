use crate::lexer::lex;
use crate::shared_parser;

#[test]
fn trace_records_every_action_and_ends_in_accept() {
    let tokens = lex("fn main() { }");
    let (result, rows) = shared_parser().parse_traced(&tokens);
    result.unwrap();

    assert!(rows.len() > 5);

    let first = &rows[0];
    assert_eq!(first.state, vec![0]);
    assert!(first.symbols.is_empty());
    assert_eq!(first.input.first().map(String::as_str), Some("fn"));

    let last = rows.last().unwrap();
    assert_eq!(last.action, "accept");
    assert!(last.input.is_empty());

    for row in &rows {
        assert!(
            row.action == "accept"
                || row.action.starts_with("shift ")
                || row.action.starts_with("reduce "),
            "{}",
            row.action
        );
        if row.action.starts_with("reduce ") {
            assert!(row.action.contains("→"), "{}", row.action);
        }
    }
}

#[test]
fn stacks_keep_the_driver_invariant() {
    // |state stack| = |symbol stack| + 1 before every action.
    let tokens = lex("fn main() { let x: i32 = 1 + 2 * 3; }");
    let (result, rows) = shared_parser().parse_traced(&tokens);
    result.unwrap();
    for row in &rows {
        assert_eq!(row.state.len(), row.symbols.len() + 1);
    }
}

#[test]
fn remaining_input_shrinks_by_shifts_only() {
    let tokens = lex("fn f() { ; }");
    let (result, rows) = shared_parser().parse_traced(&tokens);
    result.unwrap();

    let mut previous = usize::MAX;
    for row in rows.iter().filter(|r| r.action != "accept") {
        assert!(row.input.len() <= previous);
        previous = row.input.len();
    }

    let shifts = rows.iter().filter(|r| r.action.starts_with("shift ")).count();
    // One shift per non-EOF token.
    assert_eq!(shifts, tokens.len() - 1);
}

#[test]
fn rows_serialize_to_the_gui_shape() {
    let tokens = lex("fn main() { }");
    let (result, rows) = shared_parser().parse_traced(&tokens);
    result.unwrap();

    let value = serde_json::to_value(&rows[0]).unwrap();
    let object = value.as_object().unwrap();
    for key in ["state", "symbols", "input", "action"] {
        assert!(object.contains_key(key), "{key}");
    }
}

#[test]
fn symbols_render_tokens_and_nodes() {
    let tokens = lex("fn main() { }");
    let (result, rows) = shared_parser().parse_traced(&tokens);
    result.unwrap();

    let rendered: Vec<&String> = rows.iter().flat_map(|r| &r.symbols).collect();
    assert!(rendered.iter().any(|s| s.as_str() == "KEYWORD(fn)"));
    assert!(rendered.iter().any(|s| s.as_str() == "FnHead"));
}
