// src/core/matcher.rs

//! Lookup of options and commands by their long or short form.

use crate::core::token::Token;
use crate::models::{CommandDescriptor, OptionDescriptor};

/// Resolves a raw token against an option table. First match in table order wins.
pub fn find_option<'t>(
    options: &'t [OptionDescriptor],
    raw: &str,
) -> Option<&'t OptionDescriptor> {
    let token = Token::classify(raw);
    options
        .iter()
        .find(|opt| token.names(opt.long_name, opt.short_name))
}

/// Resolves a raw token against the command table, returning its index.
pub fn find_command(commands: &[CommandDescriptor], raw: &str) -> Option<usize> {
    let token = Token::classify(raw);
    commands
        .iter()
        .position(|cmd| token.names(cmd.name, cmd.short_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OptionFlags;

    static OPTIONS: &[OptionDescriptor] = &[
        OptionDescriptor::new("device", "Device").short('d').arg("dev", 1),
        OptionDescriptor::new("pin", "Password").arg("pwd", 1),
        OptionDescriptor::new("force", "Force").short('f').flags(OptionFlags::HIDDEN),
    ];

    #[test]
    fn test_every_name_matches_its_own_descriptor() {
        for opt in OPTIONS {
            let long = format!("--{}", opt.long_name);
            assert_eq!(find_option(OPTIONS, &long), Some(opt));
            if let Some(c) = opt.short_name {
                assert_eq!(find_option(OPTIONS, &format!("-{c}")), Some(opt));
            }
        }
    }

    #[test]
    fn test_no_match() {
        assert!(find_option(OPTIONS, "--dev").is_none());
        assert!(find_option(OPTIONS, "-p").is_none());
        assert!(find_option(OPTIONS, "device").is_none());
        assert!(find_option(&[], "--device").is_none());
    }
}
