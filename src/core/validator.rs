// src/core/validator.rs

//! Required and repeated options, checked before any option is consumed.

use crate::core::{errors::ParseError, token::is_named};
use crate::models::OptionDescriptor;

/// Counts how many tokens of `args` name `option` by either form.
pub fn count_occurrences(option: &OptionDescriptor, args: &[String]) -> usize {
    args.iter()
        .filter(|raw| is_named(raw, option.long_name, option.short_name))
        .count()
}

/// Cardinality pass over the whole argument region, run before any
/// argument is consumed.
///
/// A required option must occur at least once. An option with a nonzero
/// `max_arg_count` may occur at most that many times. Tables are checked in
/// order and the first violation is returned, so a cardinality problem is
/// reported even when an earlier token would fail later in the walk.
pub fn check_cardinality(options: &[OptionDescriptor], args: &[String]) -> Result<(), ParseError> {
    for option in options {
        let occurrences = count_occurrences(option, args);

        if option.is_required() && occurrences == 0 {
            return Err(ParseError::MissingRequiredOption(option.slash_name()));
        }

        if option.max_arg_count != 0 && occurrences > option.max_arg_count {
            return Err(ParseError::TooManyOccurrences(option.slash_name()));
        }
    }
    Ok(())
}
