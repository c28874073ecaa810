//! Command-line surface: raw argv capture, dispatch, command execution and
//! the built-in handlers.

use std::ffi::OsString;

use clap::Parser;

pub mod dispatcher;
pub mod handlers;
pub mod runner;

/// sedcli: manage NVMe Self-Encrypting Drives.
///
/// clap only collects the raw tokens here. Commands, options, help and
/// version are resolved by the dispatcher against the command registry,
/// so clap's own help and version flags are disabled.
#[derive(Parser, Debug)]
#[command(name = "sedcli")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Every token after the program name, untouched.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parses the process arguments, keeping a leading `--` as a token.
    pub fn from_env() -> Self {
        Self::parse_from(escape_tokens(std::env::args_os()))
    }

    /// The full argument vector as the dispatcher expects it, program name first.
    pub fn into_argv(self, program: &str) -> Vec<String> {
        std::iter::once(program.to_string()).chain(self.args).collect()
    }
}

/// Inserts `--` after the program name.
///
/// clap treats the first `--` it sees as the end of options and drops it.
/// Once that escape has been consumed every later token is a value, a user's
/// own `--` included.
pub fn escape_tokens<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut escaped: Vec<OsString> = args.next().into_iter().collect();
    escaped.push(OsString::from("--"));
    escaped.extend(args);
    escaped
}
