// src/models.rs

//! The grammar model: option, namespace and command descriptors.
//!
//! Option and namespace tables are plain `'static` data, read-only during
//! parsing. Commands carry their behavior as a trait object selected by
//! [`CommandKind`], so which callbacks a command has is decided by its
//! variant rather than by optional fields.

use std::fmt;

// --- OPTION MODEL ---

/// Constraint flags attached to an [`OptionDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionFlags(u8);

impl OptionFlags {
    /// No constraints.
    pub const NONE: Self = Self(0);
    /// The option must appear at least once.
    pub const REQUIRED: Self = Self(1);
    /// The argument is shown as optional (`[<arg>]`) in usage text.
    pub const OPTIONAL_ARG: Self = Self(1 << 1);
    /// The option is accepted but never listed in help.
    pub const HIDDEN: Self = Self(1 << 2);

    /// Combines two flag sets. Usable in `const` tables.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if every flag in `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for OptionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Static metadata for one option of a command or namespace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Name used in the `--long` form. Unique within its table.
    pub long_name: &'static str,
    /// Letter used in the `-x` form, if any. Unique within its table.
    pub short_name: Option<char>,
    /// Display label of the argument. Its presence means the option takes arguments.
    pub arg_label: Option<&'static str>,
    /// `0` means unbounded; otherwise both the argument cap and the occurrence limit.
    pub max_arg_count: usize,
    /// Behaviour flags.
    pub flags: OptionFlags,
    /// One-line description shown in help.
    pub desc: &'static str,
}

impl OptionDescriptor {
    /// A switch taking no arguments.
    pub const fn new(long_name: &'static str, desc: &'static str) -> Self {
        Self {
            long_name,
            short_name: None,
            arg_label: None,
            max_arg_count: 0,
            flags: OptionFlags::NONE,
            desc,
        }
    }

    /// Adds the `-x` form.
    pub const fn short(mut self, short_name: char) -> Self {
        self.short_name = Some(short_name);
        self
    }

    /// Declares that the option takes arguments, displayed as `<label>`.
    pub const fn arg(mut self, label: &'static str, max_arg_count: usize) -> Self {
        self.arg_label = Some(label);
        self.max_arg_count = max_arg_count;
        self
    }

    /// Adds `flags` to those already set.
    pub const fn flags(mut self, flags: OptionFlags) -> Self {
        self.flags = self.flags.union(flags);
        self
    }

    /// Must appear exactly once.
    pub const fn is_required(&self) -> bool {
        self.flags.contains(OptionFlags::REQUIRED)
    }

    /// Left out of help.
    pub const fn is_hidden(&self) -> bool {
        self.flags.contains(OptionFlags::HIDDEN)
    }

    /// Rendered as `[<label>]` in help.
    pub const fn has_optional_arg(&self) -> bool {
        self.flags.contains(OptionFlags::OPTIONAL_ARG)
    }

    /// Whether an argument label was declared.
    pub const fn takes_args(&self) -> bool {
        self.arg_label.is_some()
    }

    /// `-x/--long`, or `--long` without a short form. Used in error messages.
    pub fn slash_name(&self) -> String {
        match self.short_name {
            Some(c) => format!("-{}/--{}", c, self.long_name),
            None => format!("--{}", self.long_name),
        }
    }
}

// --- NAMESPACE MODEL ---

/// One selectable entry of a [`Namespace`], owning its own option table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceEntry {
    /// Value given after the selector, e.g. `opal`.
    pub name: &'static str,
    /// Shown in the list of valid values.
    pub desc: &'static str,
    /// Options valid once this entry is selected.
    pub options: &'static [OptionDescriptor],
}

/// A selector option (e.g. `--type`) choosing one of several option tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// Selector in the `--long` form.
    pub long_name: &'static str,
    /// Selector in the `-x` form, if any.
    pub short_name: Option<char>,
    /// Selectable entries, in help order.
    pub entries: &'static [NamespaceEntry],
}

impl Namespace {
    /// Exact, case-sensitive lookup of an entry by name.
    pub fn entry(&self, name: &str) -> Option<&'static NamespaceEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

// --- COMMAND MODEL ---

/// Flags attached to a [`CommandDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandFlags(u8);

impl CommandFlags {
    /// No flags.
    pub const NONE: Self = Self(0);
    /// Not listed in global help; `--help` on it prints nothing.
    pub const HIDDEN: Self = Self(1);
    /// Refused unless the process runs with root privileges.
    pub const REQUIRES_ROOT: Self = Self(1 << 1);

    /// Both sets of flags.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether every flag of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for CommandFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Static identity of the program, used by help and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct App {
    /// Program name, as printed in messages (`sedcli`).
    pub name: &'static str,
    /// First line of the global help.
    pub title: &'static str,
    /// Usage synopsis following the program name.
    pub info: &'static str,
    /// Extra line printed after the usage synopsis.
    pub usage_note: Option<&'static str>,
    /// Man page name referenced by the help footer.
    pub man: Option<&'static str>,
}

/// The behavior every command has: it can run, and optionally configure
/// itself or replace its usage text.
pub trait Action {
    /// Executes the command. The returned status becomes the exit code.
    fn handle(&mut self) -> i32;

    /// Runs once before dispatch. A negative value hides the command.
    fn configure(&mut self) -> i32 {
        0
    }

    /// Custom usage text replacing the synthesized one.
    fn help(&self, _app: &App, _command: &CommandDescriptor) -> Option<String> {
        None
    }
}

/// A command with a flat option table.
pub trait OptionsAction: Action {
    /// Receives one matched option and the argument tokens that followed it.
    fn parse_option(&mut self, option: &str, args: &[String]) -> anyhow::Result<()>;
}

/// A command whose option table is chosen by a namespace entry.
pub trait NamespaceAction: Action {
    /// Like [`OptionsAction::parse_option`], qualified by the active entry name.
    fn parse_option(&mut self, entry: &str, option: &str, args: &[String]) -> anyhow::Result<()>;
}

/// What a command owns, and therefore how it is dispatched.
pub enum CommandKind {
    /// Only `handle`; no options are parsed.
    Bare(Box<dyn Action>),
    /// Options from a single table, starting right after the command.
    Flat {
        /// The table.
        options: &'static [OptionDescriptor],
        /// Receives every matched option, then runs.
        action: Box<dyn OptionsAction>,
    },
    /// A selector and an entry name first, then that entry's options.
    Namespaced {
        /// The selector and its entries.
        namespace: Namespace,
        /// Receives every matched option with the entry name, then runs.
        action: Box<dyn NamespaceAction>,
    },
}

impl CommandKind {
    /// The command's action, whatever its kind.
    pub fn action(&self) -> &dyn Action {
        match self {
            Self::Bare(action) => action.as_ref(),
            Self::Flat { action, .. } => action.as_ref(),
            Self::Namespaced { action, .. } => action.as_ref(),
        }
    }

    /// Mutable access to the action.
    pub fn action_mut(&mut self) -> &mut dyn Action {
        match self {
            Self::Bare(action) => action.as_mut(),
            Self::Flat { action, .. } => action.as_mut(),
            Self::Namespaced { action, .. } => action.as_mut(),
        }
    }

    /// The flat option table, if this is a flat command.
    pub fn options(&self) -> Option<&'static [OptionDescriptor]> {
        match self {
            Self::Flat { options, .. } => Some(*options),
            _ => None,
        }
    }

    /// The selector, if this is a namespace command.
    pub fn namespace(&self) -> Option<&Namespace> {
        match self {
            Self::Namespaced { namespace, .. } => Some(namespace),
            _ => None,
        }
    }
}

impl fmt::Debug for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bare(_) => f.write_str("Bare"),
            Self::Flat { options, .. } => f.debug_struct("Flat").field("options", options).finish(),
            Self::Namespaced { namespace, .. } => f
                .debug_struct("Namespaced")
                .field("namespace", namespace)
                .finish(),
        }
    }
}

/// One top-level command selectable with `--name` or `-c`.
#[derive(Debug)]
pub struct CommandDescriptor {
    /// Selected with `--name`.
    pub name: &'static str,
    /// Selected with `-c`, if set.
    pub short_name: Option<char>,
    /// One line for the global help.
    pub desc: &'static str,
    /// Shown under the usage line of the command help, instead of `desc`.
    pub long_desc: Option<&'static str>,
    /// Visibility and privilege flags.
    pub flags: CommandFlags,
    /// Option model and action.
    pub kind: CommandKind,
}

impl CommandDescriptor {
    /// A visible command with no short form.
    pub fn new(name: &'static str, desc: &'static str, kind: CommandKind) -> Self {
        Self {
            name,
            short_name: None,
            desc,
            long_desc: None,
            flags: CommandFlags::NONE,
            kind,
        }
    }

    /// Adds the `-c` form.
    pub fn short(mut self, short_name: char) -> Self {
        self.short_name = Some(short_name);
        self
    }

    /// Sets the text shown in the command help.
    pub fn long_desc(mut self, long_desc: &'static str) -> Self {
        self.long_desc = Some(long_desc);
        self
    }

    /// Adds `flags` to those already set.
    pub fn flags(mut self, flags: CommandFlags) -> Self {
        self.flags = self.flags.union(flags);
        self
    }

    /// Set statically or by a refusing configure hook.
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(CommandFlags::HIDDEN)
    }

    /// Whether the root check applies.
    pub fn requires_root(&self) -> bool {
        self.flags.contains(CommandFlags::REQUIRES_ROOT)
    }
}

/// The ordered table of commands known to the program.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `command`; lookup and help follow registration order.
    pub fn register(mut self, command: CommandDescriptor) -> Self {
        self.commands.push(command);
        self
    }

    /// All commands, in registration order.
    pub fn commands(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// The command at `index`.
    pub fn get(&self, index: usize) -> Option<&CommandDescriptor> {
        self.commands.get(index)
    }

    /// Mutable access to the command at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut CommandDescriptor> {
        self.commands.get_mut(index)
    }

    /// Runs every command's `configure` hook once, hiding those that refuse.
    pub fn configure(&mut self) {
        for command in &mut self.commands {
            if command.kind.action_mut().configure() < 0 {
                log::debug!("Command '{}' hidden by its configure hook", command.name);
                command.flags = command.flags.union(CommandFlags::HIDDEN);
            }
        }
    }
}
