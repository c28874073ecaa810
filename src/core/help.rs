// src/core/help.rs

//! Usage text synthesized from the grammar model.
//!
//! Every function here is pure: it renders into a `String` and leaves
//! printing to the caller's `Printer`.

use std::fmt::Write;

use crate::constants::{MAX_OPT_HELP_LEN, PADDING};
use crate::models::{App, CommandDescriptor, CommandRegistry, Namespace, OptionDescriptor};

// `write!` into a `String` cannot fail, so its result is discarded throughout.

fn short_form(short_name: Option<char>) -> String {
    short_name.map(|c| format!("-{c}")).unwrap_or_default()
}

/// `--name (-n)` or `--name`.
fn bracketed_name(long_name: &str, short_name: Option<char>) -> String {
    match short_name {
        Some(c) => format!("--{long_name} (-{c})"),
        None => format!("--{long_name}"),
    }
}

/// `--name <arg>`, `--name [<arg>]` or `--name`, cut to the help column.
fn option_cell(option: &OptionDescriptor) -> String {
    let mut cell = match option.arg_label {
        Some(label) if option.has_optional_arg() => {
            format!("--{} [<{}>]", option.long_name, label)
        }
        Some(label) => format!("--{} <{}>", option.long_name, label),
        None => format!("--{}", option.long_name),
    };
    if let Some((cut, _)) = cell.char_indices().nth(MAX_OPT_HELP_LEN) {
        cell.truncate(cut);
    }
    cell
}

fn push_option_rows<'o>(
    out: &mut String,
    options: impl Iterator<Item = &'o OptionDescriptor>,
    cell_width: usize,
) {
    for option in options {
        let _ = writeln!(
            out,
            "{PADDING}{:<4}{:<cell_width$}{}",
            short_form(option.short_name),
            option_cell(option),
            option.desc
        );
    }
}

/// The option table of a command or namespace entry, hidden options skipped.
pub fn options_help(options: &[OptionDescriptor]) -> String {
    let mut out = String::new();
    push_option_rows(&mut out, options.iter().filter(|opt| !opt.is_hidden()), 38);
    out
}

/// A narrower option table for custom help renderers, limited to the
/// options accepted by `filter`.
pub fn option_list(
    options: &[OptionDescriptor],
    filter: impl Fn(&OptionDescriptor) -> bool,
) -> String {
    let mut out = String::new();
    push_option_rows(&mut out, options.iter().filter(|opt| filter(opt)), 32);
    out
}

/// A one-line synopsis such as `--device <dev> | --pin <pwd>` of the
/// options accepted by `filter`.
pub fn options_synopsis(
    options: &[OptionDescriptor],
    separator: &str,
    filter: impl Fn(&OptionDescriptor) -> bool,
) -> String {
    options
        .iter()
        .filter(|opt| filter(opt))
        .map(|opt| match opt.arg_label {
            Some(label) => format!("--{} <{}>", opt.long_name, label),
            None => format!("--{}", opt.long_name),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

fn command_header(command: &CommandDescriptor) -> String {
    format!("{PADDING}{}\n\n", command.long_desc.unwrap_or(command.desc))
}

/// Global help: title, synopsis, visible commands and pointers to more help.
pub fn global_help(app: &App, registry: &CommandRegistry) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}\n\n", app.title);
    let _ = write!(out, "Usage: {} {}\n\n", app.name, app.info);
    if let Some(note) = app.usage_note {
        let _ = writeln!(out, "{note}");
    }

    out.push_str("\nAvailable commands:\n");
    for command in registry.commands().iter().filter(|cmd| !cmd.is_hidden()) {
        match command.short_name {
            Some(c) => {
                let _ = writeln!(
                    out,
                    "{PADDING}{:<4}--{:<25}{}",
                    format!("-{c}"),
                    command.name,
                    command.desc
                );
            }
            None => {
                let _ = writeln!(out, "{PADDING}--{:<25}{}", command.name, command.desc);
            }
        }
    }

    let _ = writeln!(
        out,
        "\nSee '{} <command> --help' for more information on a specific command.",
        app.name
    );
    if let Some(first) = registry.commands().first() {
        let _ = writeln!(out, "e.g.\n{PADDING}{} --{} --help", app.name, first.name);
    }

    match app.man {
        Some(page) => {
            let _ = writeln!(
                out,
                "For more information, please refer to manpage (man {page})."
            );
        }
        None => out.push_str("For more information, please refer to manpage.\n"),
    }
    out
}

fn namespace_help(app: &App, command: &CommandDescriptor, namespace: &Namespace) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "Usage: {} --{} --{} <NAME>\n\n",
        app.name, command.name, namespace.long_name
    );
    out.push_str(&command_header(command));

    let command_name = bracketed_name(command.name, command.short_name);
    let selector_name = bracketed_name(namespace.long_name, namespace.short_name);

    out.push_str("Valid values of NAME are:\n");
    for entry in namespace.entries {
        let _ = writeln!(out, "{PADDING}{} - {}", entry.name, entry.desc);
    }
    out.push('\n');

    let mut entries = namespace.entries.iter().peekable();
    while let Some(entry) = entries.next() {
        let _ = writeln!(
            out,
            "Options that are valid with {command_name} {selector_name} {} are:",
            entry.name
        );
        out.push_str(&options_help(entry.options));
        if entries.peek().is_some() {
            out.push('\n');
        }
    }
    out
}

fn flat_help(app: &App, command: &CommandDescriptor) -> String {
    let mut out = String::new();
    let _ = write!(out, "Usage: {} --{}", app.name, command.name);

    let options = command.kind.options();
    let visible: Vec<&OptionDescriptor> = options
        .unwrap_or_default()
        .iter()
        .filter(|opt| !opt.is_hidden())
        .collect();

    if options.is_some() {
        for option in visible.iter().filter(|opt| opt.is_required()) {
            let _ = write!(out, " --{}", option.long_name);
            match option.arg_label {
                Some(label) if option.has_optional_arg() => {
                    let _ = write!(out, " [<{label}>]");
                }
                Some(label) => {
                    let _ = write!(out, " <{label}>");
                }
                None => {}
            }
        }
        if visible.iter().any(|opt| !opt.is_required()) {
            out.push_str(" [option...]");
        }
    }
    out.push_str("\n\n");
    out.push_str(&command_header(command));

    if let Some(options) = options
        && !visible.is_empty()
    {
        let _ = writeln!(
            out,
            "Options that are valid with {} are:",
            bracketed_name(command.name, command.short_name)
        );
        out.push_str(&options_help(options));
    }
    out
}

/// Usage text of one command: its own renderer when it supplies one, the
/// namespace variant for namespace commands, the synthesized one otherwise.
pub fn command_help(app: &App, command: &CommandDescriptor) -> String {
    if let Some(custom) = command.kind.action().help(app, command) {
        return custom;
    }
    match command.kind.namespace() {
        Some(namespace) => namespace_help(app, command, namespace),
        None => flat_help(app, command),
    }
}

/// Generic hint appended to every usage error.
pub fn try_help_hint(app: &App) -> String {
    format!("Try `{} --help' for more information.\n", app.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Action, CommandFlags, CommandKind, NamespaceAction, NamespaceEntry, OptionFlags,
        OptionsAction,
    };

    const APP: App = App {
        name: "sedcli",
        title: "sedcli - Self-Encrypting Drive management tool",
        info: "<command> [option...]",
        usage_note: Some("The '<device>' must be a block device (e.g. /dev/nvme0n1)."),
        man: Some("sedcli"),
    };

    struct Nothing;

    impl Action for Nothing {
        fn handle(&mut self) -> i32 {
            0
        }
    }

    impl OptionsAction for Nothing {
        fn parse_option(&mut self, _: &str, _: &[String]) -> anyhow::Result<()> {
            Ok(())
        }
    }

    impl NamespaceAction for Nothing {
        fn parse_option(&mut self, _: &str, _: &str, _: &[String]) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct Custom;

    impl Action for Custom {
        fn handle(&mut self) -> i32 {
            0
        }

        fn help(&self, app: &App, command: &CommandDescriptor) -> Option<String> {
            Some(format!("custom {} {}\n", app.name, command.name))
        }
    }

    static SETUP_OPTIONS: &[OptionDescriptor] = &[
        OptionDescriptor::new("device", "Device node")
            .short('d')
            .arg("dev", 1)
            .flags(OptionFlags::REQUIRED),
        OptionDescriptor::new("pin", "Admin password")
            .arg("pwd", 1)
            .flags(OptionFlags::REQUIRED.union(OptionFlags::OPTIONAL_ARG)),
        OptionDescriptor::new("force", "Skip confirmation").short('f'),
        OptionDescriptor::new("debug", "Internal").flags(OptionFlags::HIDDEN),
    ];

    static OPAL_OPTIONS: &[OptionDescriptor] =
        &[OptionDescriptor::new("range", "Locking range").arg("id", 1)];
    static NVME_OPTIONS: &[OptionDescriptor] = &[OptionDescriptor::new("nsid", "Namespace id")];
    static KINDS: &[NamespaceEntry] = &[
        NamespaceEntry {
            name: "opal",
            desc: "Opal drives",
            options: OPAL_OPTIONS,
        },
        NamespaceEntry {
            name: "nvme",
            desc: "NVMe drives",
            options: NVME_OPTIONS,
        },
    ];

    fn setup_command() -> CommandDescriptor {
        CommandDescriptor::new(
            "setup",
            "Set up a drive",
            CommandKind::Flat {
                options: SETUP_OPTIONS,
                action: Box::new(Nothing),
            },
        )
        .short('s')
        .long_desc("Take ownership and activate locking")
    }

    fn registry() -> CommandRegistry {
        CommandRegistry::new()
            .register(setup_command())
            .register(
                CommandDescriptor::new("secret", "Hidden", CommandKind::Bare(Box::new(Nothing)))
                    .flags(CommandFlags::HIDDEN),
            )
            .register(
                CommandDescriptor::new(
                    "version",
                    "Print version",
                    CommandKind::Bare(Box::new(Nothing)),
                )
                .short('V'),
            )
    }

    #[test]
    fn test_global_help_lists_visible_commands() {
        let text = global_help(&APP, &registry());
        assert!(text.starts_with("sedcli - Self-Encrypting Drive management tool\n\n"));
        assert!(text.contains("\n\nUsage: sedcli <command> [option...]\n\n"));
        assert!(text.contains("The '<device>' must be a block device"));
        assert!(text.contains(&format!("   -s  --{:<25}Set up a drive\n", "setup")));
        assert!(text.contains(&format!("   -V  --{:<25}Print version\n", "version")));
        assert!(!text.contains("--secret"));
        assert!(text.contains("e.g.\n   sedcli --setup --help\n"));
        assert!(text.ends_with("please refer to manpage (man sedcli).\n"));
    }

    #[test]
    fn test_flat_command_help() {
        let text = command_help(&APP, &setup_command());
        let usage = "Usage: sedcli --setup --device <dev> --pin [<pwd>] [option...]\n\n";
        assert!(text.starts_with(usage));
        assert!(text.contains("\n\n   Take ownership and activate locking\n\n"));
        assert!(text.contains("Options that are valid with --setup (-s) are:\n"));
        assert!(text.contains(&format!("   -d  {:<38}Device node\n", "--device <dev>")));
        assert!(text.contains(&format!("       {:<38}Admin password\n", "--pin [<pwd>]")));
        assert!(text.contains(&format!("   -f  {:<38}Skip confirmation\n", "--force")));
        assert!(!text.contains("--debug"));
    }

    #[test]
    fn test_all_required_has_no_option_placeholder() {
        static ONLY: &[OptionDescriptor] = &[OptionDescriptor::new("device", "")
            .arg("dev", 1)
            .flags(OptionFlags::REQUIRED)];
        let cmd = CommandDescriptor::new(
            "status",
            "Status",
            CommandKind::Flat {
                options: ONLY,
                action: Box::new(Nothing),
            },
        );
        let text = command_help(&APP, &cmd);
        assert!(text.starts_with("Usage: sedcli --status --device <dev>\n\n"));
    }

    #[test]
    fn test_bare_command_help() {
        let action = CommandKind::Bare(Box::new(Nothing));
        let cmd = CommandDescriptor::new("version", "Print version", action);
        assert_eq!(
            command_help(&APP, &cmd),
            "Usage: sedcli --version\n\n   Print version\n\n"
        );
    }

    #[test]
    fn test_namespace_help() {
        let cmd = CommandDescriptor::new(
            "cmd",
            "Namespace command",
            CommandKind::Namespaced {
                namespace: Namespace {
                    long_name: "kind",
                    short_name: Some('k'),
                    entries: KINDS,
                },
                action: Box::new(Nothing),
            },
        )
        .short('c');
        let text = command_help(&APP, &cmd);
        assert!(text.starts_with("Usage: sedcli --cmd --kind <NAME>\n\n   Namespace command\n\n"));
        assert!(text.contains(
            "Valid values of NAME are:\n   opal - Opal drives\n   nvme - NVMe drives\n\n"
        ));
        assert!(text.contains("Options that are valid with --cmd (-c) --kind (-k) opal are:\n"));
        assert!(text.contains("Options that are valid with --cmd (-c) --kind (-k) nvme are:\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn test_custom_help_overrides_synthesis() {
        let cmd = CommandDescriptor::new("fancy", "", CommandKind::Bare(Box::new(Custom)));
        assert_eq!(command_help(&APP, &cmd), "custom sedcli fancy\n");
    }

    #[test]
    fn test_option_cell_is_capped() {
        let long = OptionDescriptor::new("an-exceedingly-long-option-name", "")
            .arg("with-a-long-label", 1);
        assert_eq!(option_cell(&long).chars().count(), MAX_OPT_HELP_LEN);
    }

    #[test]
    fn test_synopsis_and_list_helpers() {
        let required = options_synopsis(SETUP_OPTIONS, " ", |o| o.is_required());
        assert_eq!(required, "--device <dev> --pin <pwd>");

        let list = option_list(SETUP_OPTIONS, |o| !o.is_required());
        assert!(list.contains(&format!("   -f  {:<32}Skip confirmation\n", "--force")));
        assert!(list.contains("--debug"));
        assert!(!list.contains("--device"));
    }
}
