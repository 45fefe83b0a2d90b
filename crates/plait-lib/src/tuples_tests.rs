use super::*;

#[derive(Debug, PartialEq)]
struct Point {
    x: i64,
    y: i64,
}

fn int() -> Parser<i64> {
    regex(r"-?\d+").map(|s| s.parse::<i64>().unwrap_or_default())
}

#[test]
fn seq_builds_tuples() {
    let p = seq!(string("a"), regex(r"\d"), string("c"));
    assert_eq!(
        p.parse("a1c").unwrap(),
        ("a".to_string(), "1".to_string(), "c".to_string())
    );
}

#[test]
fn seq_of_one() {
    assert_eq!(seq!(string("a")).parse("a").unwrap(), ("a".to_string(),));
}

#[test]
fn append_grows_tuple() {
    let p = string("a").tuple().append(string("b")).append(decimal_digit());
    assert_eq!(
        p.parse("ab1").unwrap(),
        ("a".to_string(), "b".to_string(), '1')
    );
}

#[test]
fn combine_spreads_arguments() {
    let point = seq!(int() << string(","), int()).combine(|x: i64, y: i64| Point { x, y });
    assert_eq!(point.parse("3,-4").unwrap(), Point { x: 3, y: -4 });
}

#[test]
fn combine_six() {
    let digit = || decimal_digit().map(|c| c.to_digit(10).unwrap_or(0));
    let p = seq!(digit(), digit(), digit(), digit(), digit(), digit())
        .combine(|a: u32, b: u32, c: u32, d: u32, e: u32, f: u32| a + b + c + d + e + f);

    assert_eq!(p.parse("123456").unwrap(), 21);
}

#[test]
fn combine_nothing() {
    assert_eq!(eof().combine(|| 5).parse("").unwrap(), 5);
}

#[test]
fn seq_failure_reports_position() {
    let p = seq!(string("a"), string("b"), string("c"));
    insta::assert_snapshot!(p.parse("abx").unwrap_err(), @"expected 'c' at 0:2");
}
