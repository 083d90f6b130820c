use crate::constant::{LONG_PREFIX, SHORT_PREFIX, VALUE_DELIMITER};

/// The shape of a single raw token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// `--name` or `--name=value`.
    Long {
        name: &'t str,
        value: Option<&'t str>,
    },
    /// `-a`, `-abc`, or `-abc=value` (the value belongs to the final alias).
    Short {
        shorts: &'t str,
        value: Option<&'t str>,
    },
    /// Anything else, including `-`, `--`, and negative numbers such as `-1`.
    Value(&'t str),
}

pub(crate) fn classify(token: &str) -> Token<'_> {
    // 1. Find a 'long' flag, such as:
    //  --initial
    //  --initial=..
    // 2. Find 'short' flag(s), such as (both -i and -v are example short flags):
    //  -i
    //  -i=..
    //  -iv
    //  -iv=..
    // 3. Otherwise, it's a value.
    if let Some(rest) = token.strip_prefix(LONG_PREFIX) {
        let (name, value) = split_equals_delimiter(rest);

        if !name.is_empty() {
            return Token::Long { name, value };
        }
    } else if let Some(rest) = token.strip_prefix(SHORT_PREFIX) {
        let (shorts, value) = split_equals_delimiter(rest);

        if !shorts.is_empty() && shorts.chars().all(is_short_character) {
            return Token::Short { shorts, value };
        }
    }

    Token::Value(token)
}

fn is_short_character(c: char) -> bool {
    !c.is_ascii_digit() && c != '-'
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once(VALUE_DELIMITER) {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}
