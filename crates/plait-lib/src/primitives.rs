//! Primitive parsers.
//!
//! A primitive failure never advances; it is reported at the position where
//! the primitive was attempted.

use std::sync::{Arc, LazyLock};

use plait_core::{ConfigError, LineCol, Outcome};

use crate::combinators::{choice, try_choice};
use crate::invariants::ensure_config;
use crate::parser::Parser;
use crate::regex::regex;

/// Match `s` exactly, yielding it.
pub fn string(s: impl Into<String>) -> Parser<String> {
    let s: String = s.into();
    let label: Arc<str> = s.as_str().into();
    Parser::new(move |state| {
        if state.rest().starts_with(s.as_str()) {
            Outcome::success(state.pos() + s.len(), s.clone())
        } else {
            state.failure(label.clone())
        }
    })
}

/// Match as many characters as `s` has, comparing both sides after
/// `transform`. Yields `s`.
///
/// `string_with("select", str::to_lowercase)` accepts `SELECT`.
pub fn string_with(
    s: impl Into<String>,
    transform: impl Fn(&str) -> String + Send + Sync + 'static,
) -> Parser<String> {
    let s: String = s.into();
    let label: Arc<str> = s.as_str().into();
    let expected = transform(&s);
    let width = s.chars().count();
    Parser::new(move |state| {
        let rest = state.rest();
        let len = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(offset, _)| offset);
        let candidate = &rest[..len];
        if candidate.chars().count() == width && transform(candidate) == expected {
            Outcome::success(state.pos() + len, s.clone())
        } else {
            state.failure(label.clone())
        }
    })
}

/// Match one of `strings`, trying longer ones first so a prefix never
/// shadows a longer candidate.
///
/// # Panics
///
/// If `strings` is empty.
pub fn string_from<S: Into<String>>(strings: impl IntoIterator<Item = S>) -> Parser<String> {
    ensure_config(try_string_from(strings))
}

pub fn try_string_from<S: Into<String>>(
    strings: impl IntoIterator<Item = S>,
) -> Result<Parser<String>, ConfigError> {
    let mut strings: Vec<String> = strings.into_iter().map(Into::into).collect();
    strings.sort_by(|a, b| b.len().cmp(&a.len()));
    try_choice(strings.into_iter().map(string).collect())
}

/// Match one of the keywords of a value table, longest keyword first.
///
/// ```
/// use plait_lib::from_variants;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Op { Lt, Le }
///
/// let op = from_variants([("<", Op::Lt), ("<=", Op::Le)]);
/// assert_eq!(op.parse("<=").unwrap(), Op::Le);
/// ```
///
/// # Panics
///
/// If `variants` is empty.
pub fn from_variants<K, V>(variants: impl IntoIterator<Item = (K, V)>) -> Parser<V>
where
    K: Into<String>,
    V: Clone + Send + Sync + 'static,
{
    let mut variants: Vec<(String, V)> = variants
        .into_iter()
        .map(|(key, value)| (key.into(), value))
        .collect();
    variants.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    choice(
        variants
            .into_iter()
            .map(|(key, value)| string(key).to(value))
            .collect(),
    )
}

/// Zero-width success yielding `value`.
pub fn success<T>(value: T) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    Parser::new(move |state| state.success(value.clone()))
}

/// Zero-width failure with `label`.
pub fn fail<T: 'static>(label: impl Into<Arc<str>>) -> Parser<T> {
    let label: Arc<str> = label.into();
    Parser::new(move |state| state.failure(label.clone()))
}

/// Succeed only at the end of input.
pub fn eof() -> Parser<()> {
    static EOF: LazyLock<Parser<()>> = LazyLock::new(|| {
        Parser::new(|state| {
            if state.is_eof() {
                state.success(())
            } else {
                state.failure("EOF")
            }
        })
    });
    EOF.clone()
}

/// Current byte offset, without consuming input.
pub fn index() -> Parser<usize> {
    Parser::new(|state| state.success(state.pos()))
}

/// Current line and column, without consuming input.
pub fn line_info() -> Parser<LineCol> {
    Parser::new(|state| state.success(state.line_col()))
}

/// Consume one character satisfying `predicate`.
pub fn test_char(
    predicate: impl Fn(char) -> bool + Send + Sync + 'static,
    label: impl Into<Arc<str>>,
) -> Parser<char> {
    let label: Arc<str> = label.into();
    Parser::new(move |state| match state.peek_char() {
        Some(c) if predicate(c) => Outcome::success(state.pos() + c.len_utf8(), c),
        _ => state.failure(label.clone()),
    })
}

/// Consume one character from `chars`.
pub fn char_from(chars: &str) -> Parser<char> {
    let set: Vec<char> = chars.chars().collect();
    test_char(move |c| set.contains(&c), format!("[{chars}]"))
}

pub fn any_char() -> Parser<char> {
    static ANY_CHAR: LazyLock<Parser<char>> =
        LazyLock::new(|| test_char(|_| true, "any character"));
    ANY_CHAR.clone()
}

pub fn letter() -> Parser<char> {
    static LETTER: LazyLock<Parser<char>> =
        LazyLock::new(|| test_char(char::is_alphabetic, "a letter"));
    LETTER.clone()
}

/// Any Unicode numeric character.
pub fn digit() -> Parser<char> {
    static DIGIT: LazyLock<Parser<char>> = LazyLock::new(|| test_char(char::is_numeric, "a digit"));
    DIGIT.clone()
}

/// One of `0123456789`.
pub fn decimal_digit() -> Parser<char> {
    static DECIMAL_DIGIT: LazyLock<Parser<char>> = LazyLock::new(|| char_from("0123456789"));
    DECIMAL_DIGIT.clone()
}

/// One or more whitespace characters.
pub fn whitespace() -> Parser<String> {
    static WHITESPACE: LazyLock<Parser<String>> = LazyLock::new(|| regex(r"\s+"));
    WHITESPACE.clone()
}

/// Zero or more whitespace characters.
pub fn padding() -> Parser<String> {
    static PADDING: LazyLock<Parser<String>> = LazyLock::new(|| regex(r"\s*"));
    PADDING.clone()
}
