use super::*;

#[test]
fn whole_match() {
    let p = regex("[0-9]+");
    assert_eq!(p.parse_partial("123abc").unwrap(), ("123".to_string(), "abc"));
}

#[test]
fn match_is_anchored() {
    let err = regex("b").parse_partial("ab").unwrap_err();
    insta::assert_snapshot!(err, @"expected 'b' at 0:0");
}

#[test]
fn match_starts_at_current_position() {
    let p = string("a") >> regex("b+");
    assert_eq!(p.parse("abb").unwrap(), "bb");
}

#[test]
fn look_around_sees_preceding_text() {
    let p = string("a") >> regex(r"\bb");
    assert!(p.parse("ab").is_err());

    let p = string("a ") >> regex(r"\bb");
    assert_eq!(p.parse("a b").unwrap(), "b");
}

#[test]
fn group_by_index() {
    let p = regex_group(r"(\d+)-(\d+)", Group::Index(2));
    assert_eq!(p.parse("12-34").unwrap(), "34");
}

#[test]
fn group_by_name() {
    let p = regex_group(r"(?<year>\d{4})-\d{2}", "year");
    assert_eq!(p.parse("2024-05").unwrap(), "2024");
}

#[test]
fn non_participating_group_is_empty() {
    let p = regex_group("(a)|(b)", Group::Index(1));
    assert_eq!(p.parse("b").unwrap(), "");
}

#[test]
fn several_groups() {
    let p = regex_groups(r"(\w+)@(?<host>\w+)", [Group::Index(1), Group::from("host")]);
    assert_eq!(
        p.parse("me@example").unwrap(),
        ["me".to_string(), "example".to_string()]
    );
}

#[test]
fn invalid_pattern_is_config_error() {
    let err = try_regex("(").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRegex { ref pattern, .. } if pattern == "("));
}

#[test]
#[should_panic(expected = "invalid regex `(`")]
fn invalid_pattern_panics() {
    let _ = regex("(");
}

#[test]
fn unknown_groups() {
    let err = try_regex_group("(a)", Group::Index(2)).unwrap_err();
    insta::assert_snapshot!(err, @"regex `(a)` has no capture group 2");

    let err = try_regex_group("(a)", "missing").unwrap_err();
    insta::assert_snapshot!(err, @"regex `(a)` has no capture group `missing`");

    let err = try_regex_groups("(a)", [Group::Index(1), Group::from("x")]).unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownGroup {
            pattern: "(a)".to_string(),
            group: "`x`".to_string(),
        }
    );
}

#[test]
fn unicode_whitespace() {
    assert_eq!(regex(r"\s+").parse("\u{3000}").unwrap(), "\u{3000}");
}

#[test]
fn flags_apply_to_pattern() {
    let keyword = regex_with("select", RegexFlags::new().case_insensitive(true));
    assert_eq!(keyword.parse("SELECT").unwrap(), "SELECT");

    let word = regex_with("[a-z]+", RegexFlags::new().case_insensitive(true));
    insta::assert_snapshot!(word.parse("1").unwrap_err(), @"expected '[a-z]+' at 0:0");
}

#[test]
fn invalid_pattern_with_flags() {
    let err = try_regex_with("(", RegexFlags::new()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRegex { ref pattern, .. } if pattern == "("));
}

#[test]
fn reuse_compiled_regex() {
    let number = Regex::new(r"\d+").unwrap();
    let p = compiled_regex(number, "a number");

    assert_eq!(p.parse_partial("42 apples").unwrap(), ("42".to_string(), " apples"));
    insta::assert_snapshot!(p.parse("x").unwrap_err(), @"expected 'a number' at 0:0");
}
