// src/core/token.rs

//! Classification of raw `argv` tokens.
//!
//! Only two shapes are options: `-x` (a single ASCII letter) and `--name`
//! (starting with an ASCII letter). Everything else is unrecognized. There
//! is no `--name=value` form; a value is always a separate token.

use crate::constants::{HELP_LONG, HELP_SHORT, VERSION_LONG, VERSION_SHORT};

/// The shape of a single command-line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `--name`, carrying everything after the dashes.
    Long(&'a str),
    /// `-x`.
    Short(char),
    /// Anything else: a value, a bare `-`, `--`, `-ab` or `--9`.
    Unrecognized,
}

impl<'a> Token<'a> {
    /// Classifies `raw` without allocating.
    pub fn classify(raw: &'a str) -> Self {
        let mut chars = raw.chars();
        if chars.next() != Some('-') {
            return Self::Unrecognized;
        }

        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => {
                if chars.next().is_none() {
                    Self::Short(c)
                } else {
                    Self::Unrecognized
                }
            }
            Some('-') => match raw.get(2..) {
                Some(name) if name.starts_with(|c: char| c.is_ascii_alphabetic()) => {
                    Self::Long(name)
                }
                _ => Self::Unrecognized,
            },
            _ => Self::Unrecognized,
        }
    }

    /// Whether the token has one of the two option shapes.
    pub fn is_option(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }

    /// Whether this token names `long_name`, or `short_name` when one exists.
    ///
    /// The long comparison is exact and case-sensitive.
    pub fn names(&self, long_name: &str, short_name: Option<char>) -> bool {
        match *self {
            Self::Long(name) => name == long_name,
            Self::Short(c) => short_name == Some(c),
            Self::Unrecognized => false,
        }
    }
}

/// Shorthand for classifying `raw` and comparing it against a name pair.
pub fn is_named(raw: &str, long_name: &str, short_name: Option<char>) -> bool {
    Token::classify(raw).names(long_name, short_name)
}

/// `--help` or `-h`.
pub fn is_help(raw: &str) -> bool {
    is_named(raw, HELP_LONG, Some(HELP_SHORT))
}

/// `--version` or `-V`.
pub fn is_version(raw: &str) -> bool {
    is_named(raw, VERSION_LONG, Some(VERSION_SHORT))
}

/// Whether `raw` ends an option's argument span: a dash followed by anything.
///
/// This is wider than [`Token::is_option`]: `-9` stops the span
/// and is then rejected as an invalid format, so no value can start with `-`.
pub fn ends_argument_span(raw: &str) -> bool {
    raw.len() > 1 && raw.starts_with('-')
}
