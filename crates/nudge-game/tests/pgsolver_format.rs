use nudge_core::Player;
use nudge_game::{parse_pgsolver, parse_pgsolver_str, to_pgsolver_string, write_pgsolver};

const SAMPLE: &str = "parity 3;\n0 4 0 1,2 \"entry\";\n1 3 1 2;\n2 2 0 0,3;\n3 1 1;\n";

#[test]
fn canonical_text_round_trips() {
    let game = parse_pgsolver_str(SAMPLE).unwrap();
    assert_eq!(game.node_count(), 4);
    assert_eq!(game.edge_count(), 5);
    assert_eq!(game.label(0).unwrap(), Some("entry"));
    assert_eq!(game.owner(1).unwrap(), Player::Odd);
    assert_eq!(game.priority(0).unwrap(), 4);
    assert_eq!(to_pgsolver_string(&game), SAMPLE);
}

#[test]
fn writer_streams_the_same_text() {
    let game = parse_pgsolver(SAMPLE.as_bytes()).unwrap();
    let mut buffer = Vec::new();
    write_pgsolver(&game, &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), SAMPLE);
}

#[test]
fn loose_layout_is_accepted() {
    let text = "parity 2; start 0;\n2 0 1 0 , 1;\n0 1 0\n  1, 2;   1 5 1 1 \"a;b\";";
    let game = parse_pgsolver_str(text).unwrap();
    assert_eq!(game.successors(2).unwrap(), &[0, 1]);
    assert_eq!(game.successors(0).unwrap(), &[1, 2]);
    assert_eq!(game.label(1).unwrap(), Some("a;b"));
    assert_eq!(game.predecessors(1).unwrap(), &[2, 0, 1]);
    game.check_invariants().unwrap();
}

#[test]
fn empty_game_has_negative_header() {
    let game = parse_pgsolver_str("parity -1;").unwrap();
    assert!(game.is_empty());
    assert_eq!(to_pgsolver_string(&game), "parity -1;\n");
}

#[test]
fn repeated_successors_collapse() {
    let game = parse_pgsolver_str("parity 1; 0 0 0 1,1; 1 0 1 1;").unwrap();
    assert_eq!(game.successors(0).unwrap(), &[1]);
}

fn parse_code(text: &str) -> String {
    parse_pgsolver_str(text).unwrap_err().code().to_string()
}

#[test]
fn malformed_inputs_report_specific_codes() {
    assert_eq!(parse_code(""), "missing-header");
    assert_eq!(parse_code("0 1 0 0;"), "missing-header");
    assert_eq!(parse_code("parity x;"), "invalid-integer");
    assert_eq!(parse_code("parity 0; 0 1 2 0;"), "invalid-owner");
    assert_eq!(parse_code("parity 0; 1 1 0 0;"), "node-out-of-range");
    assert_eq!(parse_code("parity 0; 0 1 0 0; 0 1 0 0;"), "duplicate-node");
    assert_eq!(parse_code("parity 0; 0 1 0 4;"), "successor-out-of-range");
    assert_eq!(parse_code("parity 1; 0 1 0 0;"), "missing-node");
    assert_eq!(parse_code("parity 0; 0 1 0 0"), "unterminated");
    assert_eq!(parse_code("parity 0; 0 1 0 0 \"open;"), "unterminated");
    assert_eq!(parse_code("parity 0; 0 1;"), "short-statement");
    assert_eq!(parse_code("parity 0; 0 -1 0 0;"), "invalid-integer");
}

#[test]
fn oversized_header_is_rejected_before_allocating() {
    let err = parse_pgsolver_str("parity 1000000000000000; 0 0 0 0;").unwrap_err();
    assert_eq!(err.code(), "missing-node");
    assert_eq!(err.info().context["declared"], "1000000000000001");
    assert_eq!(err.info().context["defined"], "1");

    let err = parse_pgsolver_str("parity 9223372036854775807; 0 0 0 0;").unwrap_err();
    assert!(matches!(err, nudge_core::NudgeError::Parse(_)));
}

#[test]
fn parse_errors_carry_the_line() {
    let err = parse_pgsolver_str("parity 1;\n0 0 0 1;\n1 0 7 0;\n").unwrap_err();
    assert_eq!(err.info().context.get("line").map(String::as_str), Some("3"));
}
