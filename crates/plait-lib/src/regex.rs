//! Anchored regular-expression primitives.
//!
//! Patterns are compiled once, at construction, with `regex-automata`'s meta
//! engine and matched anchored at the current position. A failed match is
//! reported with the pattern source as its label.

use std::sync::Arc;

use plait_core::{ConfigError, Outcome, ParseState};
use regex_automata::util::captures::Captures;
use regex_automata::{Anchored, PatternID};

pub use regex_automata::meta::Regex;
pub use regex_automata::util::syntax::Config as RegexFlags;

use crate::invariants::ensure_config;
use crate::parser::Parser;

/// A capture group, by index or by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Group {
    Index(usize),
    Name(String),
}

impl From<usize> for Group {
    fn from(index: usize) -> Self {
        Group::Index(index)
    }
}

impl From<&str> for Group {
    fn from(name: &str) -> Self {
        Group::Name(name.to_string())
    }
}

/// Match `pattern`, yielding the whole match.
///
/// # Panics
///
/// If `pattern` does not compile.
pub fn regex(pattern: &str) -> Parser<String> {
    ensure_config(try_regex(pattern))
}

pub fn try_regex(pattern: &str) -> Result<Parser<String>, ConfigError> {
    try_regex_group(pattern, Group::Index(0))
}

/// Match `pattern` compiled with `flags`, yielding the whole match.
///
/// ```
/// use plait_lib::{RegexFlags, regex_with};
///
/// let keyword = regex_with("select", RegexFlags::new().case_insensitive(true));
/// assert_eq!(keyword.parse("SeLeCt").unwrap(), "SeLeCt");
/// ```
///
/// # Panics
///
/// If `pattern` does not compile.
pub fn regex_with(pattern: &str, flags: RegexFlags) -> Parser<String> {
    ensure_config(try_regex_with(pattern, flags))
}

pub fn try_regex_with(pattern: &str, flags: RegexFlags) -> Result<Parser<String>, ConfigError> {
    let matcher = Matcher::compile_with(pattern, flags)?;
    Ok(matcher.into_parser())
}

/// Match an already compiled `regex`, reporting `label` on failure.
pub fn compiled_regex(regex: Regex, label: impl Into<Arc<str>>) -> Parser<String> {
    Matcher {
        regex,
        label: label.into(),
    }
    .into_parser()
}

/// Match `pattern`, yielding one capture group. A group that did not
/// participate in the match yields `""`.
///
/// # Panics
///
/// If `pattern` does not compile or has no such group.
pub fn regex_group(pattern: &str, group: impl Into<Group>) -> Parser<String> {
    ensure_config(try_regex_group(pattern, group))
}

pub fn try_regex_group(pattern: &str, group: impl Into<Group>) -> Result<Parser<String>, ConfigError> {
    let matcher = Matcher::compile(pattern)?;
    let index = matcher.resolve(&group.into())?;
    Ok(Parser::new(move |state| {
        matcher.search(state, |text, caps| group_text(text, caps, index))
    }))
}

/// Match `pattern`, yielding several capture groups at once.
///
/// ```
/// use plait_lib::{Group, regex_groups};
///
/// let date = regex_groups(r"(\d{4})-(?<month>\d{2})", [Group::Index(1), Group::from("month")]);
/// assert_eq!(date.parse("2024-05").unwrap(), ["2024".to_string(), "05".to_string()]);
/// ```
///
/// # Panics
///
/// If `pattern` does not compile or lacks one of the groups.
pub fn regex_groups<const N: usize>(pattern: &str, groups: [Group; N]) -> Parser<[String; N]> {
    ensure_config(try_regex_groups(pattern, groups))
}

pub fn try_regex_groups<const N: usize>(
    pattern: &str,
    groups: [Group; N],
) -> Result<Parser<[String; N]>, ConfigError> {
    let matcher = Matcher::compile(pattern)?;
    let mut indices = [0; N];
    for (slot, group) in indices.iter_mut().zip(&groups) {
        *slot = matcher.resolve(group)?;
    }
    Ok(Parser::new(move |state| {
        matcher.search(state, |text, caps| {
            indices.map(|index| group_text(text, caps, index))
        })
    }))
}

struct Matcher {
    regex: Regex,
    /// Reported on failure; the pattern source unless given explicitly.
    label: Arc<str>,
}

impl Matcher {
    fn compile(pattern: &str) -> Result<Self, ConfigError> {
        Self::compile_with(pattern, RegexFlags::new())
    }

    fn compile_with(pattern: &str, flags: RegexFlags) -> Result<Self, ConfigError> {
        let regex = Regex::builder()
            .syntax(flags)
            .build(pattern)
            .map_err(|err| ConfigError::InvalidRegex {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })?;
        Ok(Self {
            regex,
            label: pattern.into(),
        })
    }

    fn into_parser(self) -> Parser<String> {
        Parser::new(move |state| self.search(state, |text, caps| group_text(text, caps, 0)))
    }

    /// Map a group to its index in the pattern.
    fn resolve(&self, group: &Group) -> Result<usize, ConfigError> {
        let info = self.regex.group_info();
        let index = match group {
            Group::Index(index) if *index < info.group_len(PatternID::ZERO) => Some(*index),
            Group::Index(_) => None,
            Group::Name(name) => info.to_index(PatternID::ZERO, name),
        };
        index.ok_or_else(|| ConfigError::UnknownGroup {
            pattern: self.label.to_string(),
            group: match group {
                Group::Index(index) => index.to_string(),
                Group::Name(name) => format!("`{name}`"),
            },
        })
    }

    fn search<T>(&self, state: ParseState<'_>, extract: impl FnOnce(&str, &Captures) -> T) -> Outcome<T> {
        let text = state.text();
        let input = regex_automata::Input::new(text)
            .range(state.pos()..)
            .anchored(Anchored::Yes);
        let mut caps = self.regex.create_captures();
        self.regex.search_captures(&input, &mut caps);

        match caps.get_match() {
            Some(found) => Outcome::success(found.end(), extract(text, &caps)),
            None => state.failure(self.label.clone()),
        }
    }
}

fn group_text(text: &str, caps: &Captures, index: usize) -> String {
    caps.get_group(index)
        .map_or_else(String::new, |span| text[span.range()].to_string())
}
