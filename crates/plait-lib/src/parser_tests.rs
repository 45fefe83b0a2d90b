use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn parse_requires_whole_input() {
    let ab = string("ab");

    let err = ab.parse("abc").unwrap_err();
    insta::assert_snapshot!(err, @"expected 'EOF' at 0:2");
    assert_eq!(ab.parse_partial("abc").unwrap(), ("ab".to_string(), "c"));
}

#[test]
fn parse_partial_reports_furthest_failure() {
    let err = string("a").parse_partial("b").unwrap_err();

    assert_eq!(err.position, 0);
    assert_eq!(err.location, LineCol::new(0, 0));
    insta::assert_snapshot!(err, @"expected 'a' at 0:0");
}

#[test]
fn run_at_explicit_positions() {
    let input = Input::new("xyz");

    assert_eq!(
        string("xy").run(input.start()),
        Outcome::success(2, "xy".to_string())
    );
    assert_eq!(string("z").run(input.start().at(2)).next(), Some(3));
    assert_eq!(
        string("z").run(input.start()),
        Outcome::failure(0, "z")
    );
}

#[test]
fn custom_parser_from_function() {
    let upper_run = Parser::new(|state| {
        let len = state
            .rest()
            .find(|c: char| !c.is_uppercase())
            .unwrap_or(state.rest().len());
        if len == 0 {
            return state.failure("uppercase letters");
        }
        Outcome::success(state.pos() + len, state.rest()[..len].to_string())
    });

    assert_eq!(upper_run.parse_partial("ABc").unwrap(), ("AB".to_string(), "c"));
    insta::assert_snapshot!(upper_run.parse("abc").unwrap_err(), @"expected 'uppercase letters' at 0:0");
}

#[test]
fn parsers_are_shared_across_threads() {
    let digits = regex(r"\d+").map(|s| s.len());
    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let digits = digits.clone();
            std::thread::spawn(move || digits.parse(&"7".repeat(n)).ok())
        })
        .collect();

    let lens: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(lens, [Some(1), Some(2), Some(3), Some(4)]);
}

#[test]
fn named_reports_to_tracer() {
    let tracer = Rc::new(RefCell::new(PrintTracer::new(Verbosity::Default)));
    let word = regex("[a-z]+").named("word");
    let words = word.sep_by(string(" ")).named("words");

    Runner::new()
        .tracer(tracer.clone())
        .parse(&words, "ab cd")
        .unwrap();

    insta::assert_snapshot!(tracer.borrow().render(), @r"
    > words @0
      > word @0
      + word 0..2
      > word @3
      + word 3..5
    + words 0..5
    ");
}

#[test]
fn untraced_parse_ignores_names() {
    let p = string("a").named("a");
    assert_eq!(p.parse("a").unwrap(), "a");
}
