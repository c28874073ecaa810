// src/cli/dispatcher.rs

//! The parse loop: resolves the command, validates the option stream and
//! feeds each option to the command before handing it to the runner.

use crate::cli::runner;
use crate::constants::{FAILURE, SUCCESS};
use crate::context::Context;
use crate::core::{
    arity,
    errors::ParseError,
    help, matcher,
    token::{self, Token},
    validator,
};
use crate::dev_utils::BlockTimer;
use crate::models::{CommandKind, CommandRegistry, OptionDescriptor};

/// First option position of a flat command: `<prog> --command ...`.
const FLAT_FIRST_OPT: usize = 2;
/// First option position of a namespace command: `<prog> --command --ns <entry> ...`.
const NAMESPACE_FIRST_OPT: usize = 4;

/// Parses `argv` (program name first) against `registry` and runs the
/// selected command.
///
/// Returns the command's own status, `SUCCESS` for help requests, or
/// `FAILURE` after reporting the first usage error.
pub fn args_parse(ctx: &mut Context, registry: &mut CommandRegistry, argv: &[String]) -> i32 {
    log::debug!("Dispatching args: {:?}", argv);
    match dispatch(ctx, registry, argv) {
        Ok(status) => status,
        Err(err) => {
            ctx.report(&err);
            FAILURE
        }
    }
}

fn dispatch(
    ctx: &mut Context,
    registry: &mut CommandRegistry,
    argv: &[String],
) -> Result<i32, ParseError> {
    let cmd_name = argv.get(1).ok_or(ParseError::NoCommand)?;
    if !Token::classify(cmd_name).is_option() {
        return Err(ParseError::UnrecognizedCommand(cmd_name.clone()));
    }

    registry.configure();
    let index = match matcher::find_command(registry.commands(), cmd_name) {
        Some(index) => index,
        None if token::is_help(cmd_name) => {
            let text = help::global_help(&ctx.app, registry);
            ctx.info(&text);
            return Ok(SUCCESS);
        }
        None => return Err(ParseError::UnrecognizedCommand(cmd_name.clone())),
    };

    let command = registry
        .get_mut(index)
        .ok_or_else(|| ParseError::UnrecognizedCommand(cmd_name.clone()))?;
    log::debug!("Resolved command '{}'", command.name);

    if argv.iter().skip(2).any(|raw| token::is_help(raw)) {
        if !command.is_hidden() {
            let text = help::command_help(&ctx.app, command);
            ctx.info(&text);
        }
        return Ok(SUCCESS);
    }

    if command.requires_root() && !ctx.is_privileged() {
        return Err(ParseError::RootRequired);
    }

    match &mut command.kind {
        CommandKind::Bare(_) => {}
        CommandKind::Flat { options, action } => {
            let args = argv.get(FLAT_FIRST_OPT..).unwrap_or_default();
            walk(*options, args, |name, values| action.parse_option(name, values))?;
        }
        CommandKind::Namespaced { namespace, action } => {
            if argv.len() < 3 {
                return Err(ParseError::MissingNamespaceOption);
            }
            let (selector, entry_name) = match (argv.get(2), argv.get(3)) {
                (Some(selector), Some(entry_name)) => (selector, entry_name),
                _ => return Err(ParseError::MissingNamespaceName),
            };
            if !token::is_named(selector, namespace.long_name, namespace.short_name) {
                return Err(ParseError::UnrecognizedOption(selector.clone()));
            }
            let entry = namespace
                .entry(entry_name)
                .ok_or_else(|| ParseError::UnrecognizedNamespaceEntry(entry_name.clone()))?;
            log::debug!("Namespace entry '{}' selected", entry.name);

            let args = argv.get(NAMESPACE_FIRST_OPT..).unwrap_or_default();
            walk(entry.options, args, |name, values| {
                action.parse_option(entry.name, name, values)
            })?;
        }
    }

    Ok(runner::run_command(ctx, command, argv))
}

/// Validates cardinality over the whole region, then hands every option
/// with its argument span to `on_option`, left to right.
fn walk(
    options: &[OptionDescriptor],
    args: &[String],
    mut on_option: impl FnMut(&str, &[String]) -> anyhow::Result<()>,
) -> Result<(), ParseError> {
    {
        let _timer = BlockTimer::new("cardinality");
        validator::check_cardinality(options, args)?;
    }

    let _timer = BlockTimer::new("walk");
    let mut position = 0;
    while let Some(raw) = args.get(position) {
        if !Token::classify(raw).is_option() {
            return Err(ParseError::InvalidFormat(raw.clone()));
        }
        let option = matcher::find_option(options, raw)
            .ok_or_else(|| ParseError::UnrecognizedOption(raw.clone()))?;

        let rest = args.get(position + 1..).unwrap_or_default();
        let values = arity::resolve_arguments(option, raw, rest)?;
        log::debug!("Option '--{}' with arguments {:?}", option.long_name, values);

        on_option(option.long_name, values).map_err(|e| {
            log::debug!("Handling of '--{}' failed: {:#}", option.long_name, e);
            ParseError::OptionHandling
        })?;
        position += 1 + values.len();
    }
    Ok(())
}
