//! Round-trip and malformed-input tests for the outline parser.

use rstest::rstest;

use otln::parser::{serialize, OutlineParser, ParseOptions};
use otln::OutlineError;

#[rstest]
#[case::flat("A\nB\nC\n")]
#[case::one_level("A\n  B\n  C\n")]
#[case::deep("A\n  B\n    C\n      D\n")]
#[case::retreat("A\n  B\n    C\nD\n  E\n")]
#[case::empty("")]
#[case::blank_between_roots("A\n\nB\n")]
#[case::indented_blank("A\n  B\n  \n  C\n")]
#[case::unicode("Grüße\n  très bien\n")]
fn given_well_formed_text_when_round_tripping_then_output_is_identical(#[case] text: &str) {
    let outline = OutlineParser::new().parse(text).unwrap();
    assert_eq!(serialize(&outline), text);
}

#[test]
fn given_skip_blank_lines_option_when_parsing_then_blanks_are_dropped() {
    let parser = OutlineParser::with_options(ParseOptions {
        preserve_blank_lines: false,
    });
    let outline = parser.parse("A\n\n  B\n\nC\n").unwrap();
    assert_eq!(serialize(&outline), "A\n  B\nC\n");
}

#[test]
fn given_blank_lines_when_parsing_with_defaults_then_they_become_empty_nodes() {
    let outline = OutlineParser::new().parse("A\n\nB\n").unwrap();
    assert_eq!(outline.roots().len(), 3);
    let blank = outline.get_node(outline.roots()[1]).unwrap();
    assert_eq!(blank.data.text, "");
}

#[test]
fn given_over_indented_line_when_parsing_then_fails_with_line_number() {
    let result = OutlineParser::new().parse("A\n    B\n");
    match result {
        Err(OutlineError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected ParseError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn given_over_indented_first_line_when_parsing_then_fails() {
    let result = OutlineParser::new().parse("  A\n");
    assert!(matches!(result, Err(OutlineError::Parse { line: 1, .. })));
}

#[rstest]
#[case::tab("A\n\tB\n")]
#[case::odd_indent("A\n   B\n")]
fn given_bad_indentation_when_parsing_then_fails(#[case] text: &str) {
    let result = OutlineParser::new().parse(text);
    assert!(matches!(result, Err(OutlineError::Parse { .. })));
}

#[test]
fn given_input_without_trailing_newline_when_round_tripping_then_newline_is_added() {
    let outline = OutlineParser::new().parse("A\n  B").unwrap();
    assert_eq!(serialize(&outline), "A\n  B\n");
}

#[test]
fn given_nested_outline_when_parsing_then_depth_matches() {
    let outline = OutlineParser::new()
        .parse("A\n  B\n    C\nD\n")
        .unwrap();
    assert_eq!(outline.depth(), 3);
    assert_eq!(outline.len(), 4);
}

#[test]
fn given_sibling_after_retreat_when_parsing_then_attaches_to_correct_parent() {
    // E at depth 1 must attach to D, not to A
    let outline = OutlineParser::new().parse("A\n  B\nD\n  E\n").unwrap();
    let d = outline.get_node(outline.roots()[1]).unwrap();
    assert_eq!(d.data.text, "D");
    assert_eq!(d.children.len(), 1);
    let e = outline.get_node(d.children[0]).unwrap();
    assert_eq!(e.data.text, "E");
}
