use pausepoints_cdp::PausePoint;

use super::{annotate, type_code};

fn point(line: u32, column: u32, kind: &str) -> PausePoint {
    PausePoint {
        line,
        column,
        kind: Some(kind.to_string()),
    }
}

#[test]
fn test_type_codes() {
    assert_eq!(type_code(Some("call")), 'c');
    assert_eq!(type_code(Some("debuggerStatement")), 'd');
    assert_eq!(type_code(Some("return")), 'r');
    assert_eq!(type_code(Some("foo")), 'o');
    assert_eq!(type_code(None), 'o');
}

#[test]
fn test_single_marker() {
    let out = annotate("a\nb\n", &[point(0, 1, "call")]);
    assert_eq!(out, "a/*c*/\nb\n");
}

#[test]
fn test_unknown_type_renders_as_other() {
    let out = annotate("x;\n", &[point(0, 0, "foo")]);
    assert_eq!(out, "/*o*/x;\n");
}

#[test]
fn test_missing_type_renders_as_other() {
    let points = [PausePoint {
        line: 0,
        column: 0,
        kind: None,
    }];
    assert_eq!(annotate("x;\n", &points), "/*o*/x;\n");
}

#[test]
fn test_independent_lines_any_input_order() {
    let text = "aa\nbb\ncc";
    let points = [point(2, 0, "return"), point(0, 0, "debuggerStatement")];
    let out = annotate(text, &points);
    assert_eq!(out, "/*d*/aa\nbb\n/*r*/cc");
}

#[test]
fn test_same_line_columns_do_not_displace_each_other() {
    // Both columns refer to the original text; the column-4 marker must
    // not be shifted by the column-0 splice no matter the input order.
    let points = [point(0, 0, "call"), point(0, 4, "return")];
    assert_eq!(annotate("abcdef", &points), "/*c*/abcd/*r*/ef");

    let reversed = [point(0, 4, "return"), point(0, 0, "call")];
    assert_eq!(annotate("abcdef", &reversed), "/*c*/abcd/*r*/ef");
}

#[test]
fn test_duplicate_position_keeps_input_order() {
    let points = [point(0, 1, "call"), point(0, 1, "return")];
    assert_eq!(annotate("ab", &points), "a/*c*//*r*/b");
}

#[test]
fn test_column_past_line_end_clamps() {
    let out = annotate("ab\n", &[point(0, 99, "call")]);
    assert_eq!(out, "ab/*c*/\n");
}

#[test]
fn test_line_past_end_is_skipped() {
    let out = annotate("ab\n", &[point(7, 0, "call")]);
    assert_eq!(out, "ab\n");
}

#[test]
fn test_multibyte_source_splices_on_char_boundary() {
    let out = annotate("héllo()", &[point(0, 5, "call")]);
    assert_eq!(out, "héllo/*c*/()");
}

#[test]
fn test_no_points_is_identity() {
    let text = "function f() {\n  return 1;\n}\n";
    assert_eq!(annotate(text, &[]), text);
}
