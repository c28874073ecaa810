// src/core/arity.rs

//! How many tokens after an option belong to it.

use crate::core::{errors::ParseError, token::ends_argument_span};
use crate::models::OptionDescriptor;

/// Counts the tokens following an option that belong to it: everything up
/// to the next dash-prefixed token or the end of the stream.
pub fn count_arguments(rest: &[String]) -> usize {
    rest.iter()
        .position(|raw| ends_argument_span(raw))
        .unwrap_or(rest.len())
}

/// Determines the argument span of `option`, found as `raw` with `rest`
/// being every token after it.
///
/// Options without an argument label consume nothing. A cap is enforced only
/// when `max_arg_count > 0`; in that case required and optional-argument
/// options must also receive at least one token.
pub fn resolve_arguments<'a>(
    option: &OptionDescriptor,
    raw: &str,
    rest: &'a [String],
) -> Result<&'a [String], ParseError> {
    if !option.takes_args() {
        return Ok(&[]);
    }

    let count = count_arguments(rest);
    if option.max_arg_count > 0 {
        let empty_not_allowed =
            count == 0 && (option.is_required() || option.has_optional_arg());
        if empty_not_allowed || count > option.max_arg_count {
            log::debug!(
                "Option '{}' got {} argument(s), limit {}",
                option.long_name,
                count,
                option.max_arg_count
            );
            return Err(ParseError::InvalidArgumentCount(raw.to_string()));
        }
    }

    rest.get(..count)
        .ok_or_else(|| ParseError::InvalidArgumentCount(raw.to_string()))
}
