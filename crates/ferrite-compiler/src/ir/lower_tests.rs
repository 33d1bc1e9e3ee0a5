use std::collections::HashMap;

use crate::check_source;
use crate::ir::{Op, generate};

fn lower(source: &str) -> Vec<String> {
    let (program, analysis) = check_source(source).unwrap_or_else(|err| panic!("{source:?}: {err}"));
    generate(&program, &analysis)
        .unwrap()
        .iter()
        .map(|q| q.to_string())
        .collect()
}

#[test]
fn arithmetic_declaration() {
    assert_eq!(
        lower("fn main() { let x: i32 = 1 + 2 * 3; }"),
        vec![
            "func_start\tmain\t_\t_",
            "decl\tx\ti32\t_",
            "*\t2\t3\tt1",
            "+\t1\tt1\tt2",
            "assign\tt2\t_\tx",
            "func_end\tmain\t_\t_",
        ]
    );
}

#[test]
fn calls_and_returns() {
    assert_eq!(
        lower("fn f(x: i32) -> i32 { return x + 1; } fn main() { let y: i32 = f(41); }"),
        vec![
            "func_start\tf\t_\t_",
            "param\tx\ti32\t_",
            "+\tx\t1\tt1",
            "return\tt1\t_\t_",
            "func_end\tf\t_\t_",
            "func_start\tmain\t_\t_",
            "decl\ty\ti32\t_",
            "call\tf\t[41]\tt2",
            "assign\tt2\t_\ty",
            "func_end\tmain\t_\t_",
        ]
    );
}

#[test]
fn array_literal_and_element_assignment() {
    assert_eq!(
        lower("fn main() { let mut a: [i32; 3] = [1, 2, 3]; a[0] = 9; }"),
        vec![
            "func_start\tmain\t_\t_",
            "decl\ta\t[i32; 3]\t_",
            "array_literal\t[1, 2, 3]\t_\tt1",
            "assign\tt1\t_\ta",
            "index\ta\t0\tt2",
            "assign\t9\t_\tt2",
            "func_end\tmain\t_\t_",
        ]
    );
}

#[test]
fn loop_with_valued_break() {
    assert_eq!(
        lower("fn main() { let v: i32 = loop { break 7; }; }"),
        vec![
            "func_start\tmain\t_\t_",
            "decl\tv\ti32\t_",
            "label\t_\t_\tL1",
            "assign\t7\t_\tt1",
            "goto\t_\t_\tL2",
            "label\t_\t_\tL2",
            "assign\tt1\t_\tv",
            "func_end\tmain\t_\t_",
        ]
    );
}

#[test]
fn while_loop_shape() {
    assert_eq!(
        lower("fn main() { let mut i: i32 = 0; while i < 3 { i = i + 1; } }"),
        vec![
            "func_start\tmain\t_\t_",
            "decl\ti\ti32\t_",
            "assign\t0\t_\ti",
            "label\t_\t_\tL1",
            "<\ti\t3\tt1",
            "if_false_goto\tt1\t_\tL2",
            "+\ti\t1\tt2",
            "assign\tt2\t_\ti",
            "goto\t_\t_\tL1",
            "label\t_\t_\tL2",
            "func_end\tmain\t_\t_",
        ]
    );
}

#[test]
fn for_range_shape() {
    assert_eq!(
        lower("fn main() { for i in 0..3 { ; } }"),
        vec![
            "func_start\tmain\t_\t_",
            "assign\t0\t_\ti",
            "goto\t_\t_\tL1",
            "label\t_\t_\tL2",
            "+\ti\t1\tt1",
            "assign\tt1\t_\ti",
            "label\t_\t_\tL1",
            "<\ti\t3\tt2",
            "if_false_goto\tt2\t_\tL3",
            "goto\t_\t_\tL2",
            "label\t_\t_\tL3",
            "func_end\tmain\t_\t_",
        ]
    );
}

#[test]
fn if_statement_shape() {
    assert_eq!(
        lower("fn main() { if 1 { ; } else { ; } }"),
        vec![
            "func_start\tmain\t_\t_",
            "if_false_goto\t1\t_\tL1",
            "goto\t_\t_\tL2",
            "label\t_\t_\tL1",
            "label\t_\t_\tL2",
            "func_end\tmain\t_\t_",
        ]
    );
}

#[test]
fn if_expression_assigns_both_arms_into_one_temp() {
    assert_eq!(
        lower("fn main() { let x: i32 = if 1 { 2 } else { 3 }; }"),
        vec![
            "func_start\tmain\t_\t_",
            "decl\tx\ti32\t_",
            "if_false_goto\t1\t_\tL1",
            "assign\t2\t_\tt1",
            "goto\t_\t_\tL2",
            "label\t_\t_\tL1",
            "assign\t3\t_\tt1",
            "label\t_\t_\tL2",
            "assign\tt1\t_\tx",
            "func_end\tmain\t_\t_",
        ]
    );
}

#[test]
fn eval_marks_discarded_expression_statements() {
    assert_eq!(
        lower("fn f() { } fn main() { f(); }"),
        vec![
            "func_start\tf\t_\t_",
            "func_end\tf\t_\t_",
            "func_start\tmain\t_\t_",
            "call\tf\t[]\tt1",
            "eval\tt1\t_\t_",
            "func_end\tmain\t_\t_",
        ]
    );
}

#[test]
fn projection_and_reference_quads() {
    let source = "fn main() { let mut x: i32 = 1; let t: (i32) = (x,); let m: i32 = t.0; \
                  let r: &mut i32 = &mut x; let d: i32 = *r; }";
    assert_eq!(
        lower(source),
        vec![
            "func_start\tmain\t_\t_",
            "decl\tx\ti32\t_",
            "assign\t1\t_\tx",
            "decl\tt\t(i32)\t_",
            "tuple_literal\t[x]\t_\tt1",
            "assign\tt1\t_\tt",
            "decl\tm\ti32\t_",
            "member_access\tt\t0\tt2",
            "assign\tt2\t_\tm",
            "decl\tr\t&mut i32\t_",
            "borrow_mut\tx\t_\tt3",
            "assign\tt3\t_\tr",
            "decl\td\ti32\t_",
            "deref\tr\t_\tt4",
            "assign\tt4\t_\td",
            "func_end\tmain\t_\t_",
        ]
    );
}

#[test]
fn deferred_declaration_uses_the_adopted_type() {
    assert_eq!(
        lower("fn main() { let x; x = 1; }"),
        vec![
            "func_start\tmain\t_\t_",
            "decl\tx\ti32\t_",
            "assign\t1\t_\tx",
            "func_end\tmain\t_\t_",
        ]
    );
}

#[test]
fn continue_jumps_to_the_loop_condition() {
    assert_eq!(
        lower("fn main() { while 1 { continue; } }"),
        vec![
            "func_start\tmain\t_\t_",
            "label\t_\t_\tL1",
            "if_false_goto\t1\t_\tL2",
            "goto\t_\t_\tL1",
            "label\t_\t_\tL2",
            "func_end\tmain\t_\t_",
        ]
    );
}

#[test]
fn every_jump_target_is_defined_exactly_once_per_function() {
    let sources = [
        "fn main() { if 1 { ; } else { ; } while 1 { break; } }",
        "fn main() { let v: i32 = loop { break 7; }; for i in 0..3 { continue; } }",
        "fn f() -> i32 { if 1 { return 1; } return 2; } fn main() { let x: i32 = f(); }",
    ];
    for source in sources {
        let quads = {
            let (program, analysis) = check_source(source).unwrap();
            generate(&program, &analysis).unwrap()
        };

        let mut labels: HashMap<String, usize> = HashMap::new();
        let mut targets: Vec<String> = Vec::new();
        for quad in &quads {
            match quad.op {
                Op::Label => {
                    *labels
                        .entry(quad.result.clone().unwrap_or_default())
                        .or_insert(0) += 1;
                }
                Op::Goto | Op::IfFalseGoto => {
                    targets.push(quad.result.clone().unwrap_or_default());
                }
                Op::FuncStart => {
                    // Labels are function-local; counters carry across, so a
                    // fresh map per function is enough.
                    for target in targets.drain(..) {
                        assert_eq!(labels.get(&target), Some(&1), "{source}: {target}");
                    }
                    labels.clear();
                }
                _ => {}
            }
        }
        for target in targets {
            assert_eq!(labels.get(&target), Some(&1), "{source}: {target}");
        }
    }
}

#[test]
fn break_guard_suppresses_dead_back_edges() {
    // The loop body ends in a goto, so no second jump back to the start.
    let quads = lower("fn main() { loop { break; } }");
    assert_eq!(
        quads,
        vec![
            "func_start\tmain\t_\t_",
            "label\t_\t_\tL1",
            "goto\t_\t_\tL2",
            "label\t_\t_\tL2",
            "func_end\tmain\t_\t_",
        ]
    );
}
