// src/cli/handlers/version.rs

//! `--version`.

use crate::constants::{SUCCESS, VERSION_LONG, VERSION_SHORT};
use crate::models::{Action, CommandDescriptor, CommandKind};
use crate::system::output::Printer;

/// Prints `<prog> <version>`.
#[derive(Debug)]
pub struct VersionAction<P> {
    printer: P,
}

impl<P: Printer> Action for VersionAction<P> {
    fn handle(&mut self) -> i32 {
        let line = format!("{} {}\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        self.printer.info(&line);
        SUCCESS
    }
}

/// The `--version`/`-V` command, printing through `printer`.
pub fn command<P: Printer + 'static>(printer: P) -> CommandDescriptor {
    CommandDescriptor::new(
        VERSION_LONG,
        "Print sedcli version",
        CommandKind::Bare(Box::new(VersionAction { printer })),
    )
    .short(VERSION_SHORT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::output::MemoryPrinter;

    #[test]
    fn test_prints_package_version() {
        let printer = MemoryPrinter::new();
        let mut cmd = command(printer.clone());

        assert_eq!(cmd.name, "version");
        assert_eq!(cmd.short_name, Some('V'));
        assert_eq!(cmd.kind.action_mut().handle(), SUCCESS);
        assert_eq!(
            printer.captured().info,
            format!("sedcli {}\n", env!("CARGO_PKG_VERSION"))
        );
    }
}
