use indoc::indoc;

use super::*;

fn error_at(text: &str, position: usize, labels: &[&str]) -> ParseError {
    let failure = Failure {
        furthest: position,
        expected: labels.iter().copied().collect(),
    };
    ParseError::from_failure(text, failure)
}

#[test]
fn single_label_display() {
    let err = error_at("abc", 1, &["b"]);
    insta::assert_snapshot!(err.to_string(), @"expected 'b' at 0:1");
}

#[test]
fn multiple_labels_are_sorted() {
    let err = error_at("", 0, &["c", "a", "b"]);
    insta::assert_snapshot!(err.to_string(), @"expected one of 'a', 'b', 'c' at 0:0");
}

#[test]
fn location_on_later_line() {
    let text = indoc! {"
        first
        second
    "};
    let err = error_at(text, 9, &["EOF"]);

    assert_eq!(err.location, LineCol::new(1, 3));
    insta::assert_snapshot!(err.to_string(), @"expected 'EOF' at 1:3");
}

#[test]
fn serializes_to_json() {
    let err = error_at("ab\nc", 3, &["x", "y"]);
    insta::assert_snapshot!(
        serde_json::to_string(&err).unwrap(),
        @r#"{"expected":["x","y"],"position":3,"location":{"line":1,"column":0}}"#
    );
}

#[test]
fn render_points_at_failure() {
    let err = error_at("abc", 1, &["b"]);
    let rendered = err.render("abc");

    assert!(rendered.starts_with("error: expected 'b' at 0:1"));
    assert!(rendered.contains("1 | abc"));
    assert!(rendered.contains('^'));
}

#[test]
fn render_with_path() {
    let source = "x = 1\ny = ?\n";
    let err = error_at(source, 10, &["a number"]);
    let rendered = err.printer(source).path("input.txt").render();

    assert!(rendered.contains("--> input.txt:2:5"));
    assert!(rendered.contains("2 | y = ?"));
}

#[test]
fn render_at_end_of_input() {
    let err = error_at("ab", 2, &["c"]);
    let rendered = err.render("ab");

    assert!(rendered.starts_with("error: expected 'c' at 0:2"));
}

#[test]
fn limit_errors() {
    insta::assert_snapshot!(Error::from(LimitExceeded::ExecFuel).to_string(), @"execution limit exceeded");
    insta::assert_snapshot!(Error::from(LimitExceeded::Recursion).to_string(), @"recursion limit exceeded");
}

#[test]
fn parse_error_is_transparent() {
    let err = Error::from(error_at("a", 0, &["b"]));
    insta::assert_snapshot!(err.to_string(), @"expected 'b' at 0:0");
}

#[test]
fn config_error_messages() {
    let err = ConfigError::InvalidBounds { min: 3, max: 1 };
    insta::assert_snapshot!(err.to_string(), @"invalid repetition bounds: min 3 exceeds max 1");

    let err = ConfigError::UnknownGroup {
        pattern: "(a)".to_string(),
        group: "2".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"regex `(a)` has no capture group 2");
}
