use super::*;

fn error<T: 'static>(parser: &Parser<T>, text: &str) -> String {
    match parser.parse_partial(text) {
        Ok(_) => panic!("expected {text:?} to fail"),
        Err(err) => err.to_string(),
    }
}

#[test]
fn string_matches_exactly() {
    let p = string("abc");

    assert_eq!(p.parse_partial("abcd").unwrap(), ("abc".to_string(), "d"));
    insta::assert_snapshot!(error(&p, "abd"), @"expected 'abc' at 0:0");
    insta::assert_snapshot!(error(&p, "ab"), @"expected 'abc' at 0:0");
}

#[test]
fn string_with_transform() {
    let select = string_with("select", str::to_lowercase);

    assert_eq!(select.parse("SeLeCt").unwrap(), "select");
    assert_eq!(select.parse_partial("SELECT *").unwrap(), ("select".to_string(), " *"));
    insta::assert_snapshot!(error(&select, "SEL"), @"expected 'select' at 0:0");
}

#[test]
fn string_with_counts_characters() {
    let p = string_with("é", str::to_uppercase);
    assert_eq!(p.parse_partial("Éa").unwrap(), ("é".to_string(), "a"));
}

#[test]
fn string_from_prefers_longest() {
    let p = string_from(["a", "ab", "abc"]);

    assert_eq!(p.parse_partial("abx").unwrap(), ("ab".to_string(), "x"));
    assert_eq!(p.parse("abc").unwrap(), "abc");
    insta::assert_snapshot!(error(&p, "x"), @"expected one of 'a', 'ab', 'abc' at 0:0");
}

#[test]
fn string_from_nothing_is_config_error() {
    let err = try_string_from(Vec::<String>::new()).unwrap_err();
    assert_eq!(err, ConfigError::EmptyChoice);
}

#[derive(Clone, Debug, PartialEq)]
enum Cmp {
    Lt,
    Le,
    Eq,
}

#[test]
fn from_variants_keyword_table() {
    let cmp = from_variants([("<", Cmp::Lt), ("<=", Cmp::Le), ("==", Cmp::Eq)]);

    assert_eq!(cmp.parse("<=").unwrap(), Cmp::Le);
    assert_eq!(cmp.parse("<").unwrap(), Cmp::Lt);
    insta::assert_snapshot!(error(&cmp, "!"), @"expected one of '<', '<=', '==' at 0:0");
}

#[test]
fn success_and_fail() {
    assert_eq!(success(5).parse("").unwrap(), 5);
    insta::assert_snapshot!(error(&fail::<()>("nothing"), ""), @"expected 'nothing' at 0:0");
}

#[test]
fn eof_only_at_end() {
    assert_eq!(eof().parse_partial("").unwrap(), ((), ""));
    insta::assert_snapshot!(error(&eof(), "a"), @"expected 'EOF' at 0:0");
}

#[test]
fn index_and_line_info() {
    assert_eq!((string("ab") >> index()).parse("ab").unwrap(), 2);
    assert_eq!(
        (string("ab\nc") >> line_info()).parse("ab\nc").unwrap(),
        LineCol::new(1, 1)
    );
}

#[test]
fn test_char_consumes_one_character() {
    let upper = test_char(|c| c.is_ascii_uppercase(), "an uppercase letter");

    assert_eq!(upper.parse_partial("AB").unwrap(), ('A', "B"));
    insta::assert_snapshot!(error(&upper, "a"), @"expected 'an uppercase letter' at 0:0");
}

#[test]
fn char_from_label() {
    let p = char_from("abc");

    assert_eq!(p.parse("b").unwrap(), 'b');
    insta::assert_snapshot!(error(&p, "d"), @"expected '[abc]' at 0:0");
}

#[test]
fn any_char_handles_multibyte() {
    assert_eq!(any_char().many().parse("日本").unwrap(), ['日', '本']);
    insta::assert_snapshot!(error(&any_char(), ""), @"expected 'any character' at 0:0");
}

#[test]
fn character_classes() {
    assert_eq!(letter().parse("é").unwrap(), 'é');
    insta::assert_snapshot!(error(&letter(), "1"), @"expected 'a letter' at 0:0");

    assert_eq!(digit().parse("٣").unwrap(), '٣');
    insta::assert_snapshot!(error(&digit(), "x"), @"expected 'a digit' at 0:0");

    assert_eq!(decimal_digit().parse("7").unwrap(), '7');
    insta::assert_snapshot!(error(&decimal_digit(), "٣"), @"expected '[0123456789]' at 0:0");
}

#[test]
fn whitespace_and_padding() {
    assert_eq!(whitespace().parse(" \t\n").unwrap(), " \t\n");
    insta::assert_snapshot!(error(&whitespace(), "x"), @r"expected '\s+' at 0:0");

    assert_eq!(padding().parse("").unwrap(), "");
    assert_eq!(padding().parse_partial("  x").unwrap(), ("  ".to_string(), "x"));
}

#[test]
fn shared_primitives_are_reused() {
    let a = whitespace();
    let b = whitespace();
    assert_eq!(a.parse(" ").unwrap(), b.parse(" ").unwrap());
}
