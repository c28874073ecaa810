// src/context.rs

//! Per-invocation state shared by the dispatcher and the runner.

use std::fmt;

use crate::core::{errors::ParseError, help};
use crate::models::App;
use crate::system::{
    config::Config,
    output::{Printer, StdPrinter},
    privilege,
};

/// Everything one invocation needs besides its arguments: program identity,
/// configuration, where output goes and how privilege is checked.
///
/// It is passed explicitly to the dispatcher and the runner, so a test can
/// swap the printer or the privilege check without touching process state.
pub struct Context {
    /// Program identity used in messages and help.
    pub app: App,
    /// Loaded `sedcli.toml`.
    pub config: Config,
    printer: Box<dyn Printer>,
    privilege_check: fn() -> bool,
}

impl Context {
    /// A context printing to stdout/stderr and checking for real root privileges.
    pub fn new(app: App, config: Config) -> Self {
        Self {
            app,
            config,
            printer: Box::new(StdPrinter),
            privilege_check: privilege::is_root,
        }
    }

    /// Replaces the output channels.
    pub fn with_printer(mut self, printer: impl Printer + 'static) -> Self {
        self.printer = Box::new(printer);
        self
    }

    /// Replaces the root check.
    pub fn with_privilege_check(mut self, check: fn() -> bool) -> Self {
        self.privilege_check = check;
        self
    }

    /// Writes `text` to the informational channel.
    pub fn info(&mut self, text: &str) {
        self.printer.info(text);
    }

    /// Writes `text` to the error channel.
    pub fn error(&mut self, text: &str) {
        self.printer.error(text);
    }

    /// Runs the privilege check.
    pub fn is_privileged(&self) -> bool {
        (self.privilege_check)()
    }

    /// Prints a parse error followed by the generic pointer to `--help`.
    pub fn report(&mut self, err: &ParseError) {
        log::debug!("Invocation rejected: {:?}", err);
        let message = format!("{}: {}.\n", self.app.name, err);
        self.printer.error(&message);
        let hint = help::try_help_hint(&self.app);
        self.printer.info(&hint);
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("app", &self.app)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
