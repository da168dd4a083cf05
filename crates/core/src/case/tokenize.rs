//! Word tokenization shared by every case style.
//!
//! Words are separated by whitespace, `-` and `_`. Runs of separators collapse
//! into a single boundary and leading or trailing ones produce nothing. Any
//! other character that is not alphanumeric is stripped from the word it sits
//! in without splitting it, so `don't` is the single word `dont`.

use std::borrow::Cow;

/// Whether `c` separates words.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '_'
}

/// Iterator over the non-empty word tokens of a string.
///
/// Tokens borrow from the input unless stray characters had to be stripped.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Cow<'a, str>> {
        loop {
            let start = self.rest.find(|c: char| !is_separator(c))?;
            let rest = &self.rest[start..];
            let end = rest.find(is_separator).unwrap_or(rest.len());

            let (word, tail) = rest.split_at(end);
            self.rest = tail;

            let token = strip_stray(word);
            if !token.is_empty() {
                return Some(token);
            }
        }
    }
}

fn strip_stray(word: &str) -> Cow<'_, str> {
    if word.chars().all(char::is_alphanumeric) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.chars().filter(|c| c.is_alphanumeric()).collect())
    }
}

/// Split `input` into word tokens.
///
/// ```rust
/// use casekit_core::case::tokenize;
///
/// let tokens: Vec<_> = tokenize("-hello--world_2nd!").collect();
/// assert_eq!(tokens, ["hello", "world", "2nd"]);
/// ```
pub fn tokenize(input: &str) -> Tokens<'_> {
    Tokens { rest: input }
}
