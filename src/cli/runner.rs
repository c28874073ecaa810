// src/cli/runner.rs

//! Execution of a fully parsed command: run it, report its status and
//! leave a trace in the audit log.

use std::time::{Duration, Instant};

use crate::context::Context;
use crate::core::{
    status::{self, Channel},
    token,
};
use crate::models::CommandDescriptor;
use crate::system::{
    audit::{self, AuditError, AuditLog},
    syslog::SyslogSnapshot,
};

/// Runs `command` and returns its status unchanged.
///
/// The status report is skipped for help and version invocations, and the
/// audit line for version invocations or when auditing is disabled. Audit
/// failures never change the outcome.
pub fn run_command(ctx: &mut Context, command: &mut CommandDescriptor, argv: &[String]) -> i32 {
    let selector = argv.get(1).map(String::as_str).unwrap_or_default();
    let mut snapshot = SyslogSnapshot::take(&ctx.config.syslog_paths);

    let start = Instant::now();
    let status = command.kind.action_mut().handle();
    let elapsed = start.elapsed();
    log::debug!("Command '{}' returned {} after {:?}", command.name, status, elapsed);

    if !token::is_help(selector)
        && !token::is_version(selector)
        && let Some(report) = status::describe_status(ctx.app.name, ctx.config.mode, status)
    {
        match report.channel {
            Channel::Info => ctx.info(&report.text),
            Channel::Error => ctx.error(&report.text),
        }
    }

    if let Some(snapshot) = snapshot.as_mut() {
        match snapshot.growth() {
            Ok(0) => {}
            Ok(bytes) => log::debug!(
                "'{}' grew by {} bytes while '{}' ran",
                snapshot.path().display(),
                bytes,
                command.name
            ),
            Err(e) => log::debug!("Could not re-read '{}': {}", snapshot.path().display(), e),
        }
    }

    if ctx.config.audit && !token::is_version(selector) {
        record(ctx, argv, status, elapsed);
    }

    status
}

fn record(ctx: &mut Context, argv: &[String], status: i32, elapsed: Duration) {
    let program = ctx.app.name;
    let result = audit::audit_message(program, argv, status, elapsed)
        .and_then(|message| AuditLog::new(&ctx.config.audit_log, program).append(&message));

    match result {
        Ok(()) => {}
        Err(AuditError::Allocation(_)) => {
            let message = format!("{}: Memory allocation failed for logging.\n", program);
            ctx.error(&message);
        }
        Err(e) => log::warn!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::status::CliMode;
    use crate::models::{Action, App, CommandKind};
    use crate::system::{config::Config, output::MemoryPrinter};
    use std::path::Path;
    use tempfile::tempdir;

    const APP: App = App {
        name: "sedcli",
        title: "sedcli",
        info: "<command>",
        usage_note: None,
        man: None,
    };

    struct Fixed(i32);

    impl Action for Fixed {
        fn handle(&mut self) -> i32 {
            self.0
        }
    }

    fn argv(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn context(audit_log: &Path, printer: &MemoryPrinter) -> Context {
        let config = Config {
            audit_log: audit_log.to_path_buf(),
            syslog_paths: Vec::new(),
            ..Config::default()
        };
        Context::new(APP, config).with_printer(printer.clone())
    }

    fn command(status: i32) -> CommandDescriptor {
        CommandDescriptor::new("lock", "", CommandKind::Bare(Box::new(Fixed(status)))).short('l')
    }

    #[test]
    fn test_success_is_reported_and_audited() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("audit.log");
        let printer = MemoryPrinter::new();
        let mut ctx = context(&log, &printer);

        let status = run_command(&mut ctx, &mut command(0), &argv(&["sedcli", "--lock"]));

        assert_eq!(status, 0);
        assert_eq!(printer.captured().info, "status: 0x00 SUCCESS\n");
        assert!(printer.captured().error.is_empty());
        let content = std::fs::read_to_string(&log).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains(
            "sedcli: sedcli invoked with: \"sedcli --lock\". Exit status is 0 (success)."
        ));
    }

    #[test]
    fn test_status_is_returned_unchanged() {
        let dir = tempdir().unwrap();
        let printer = MemoryPrinter::new();
        let mut ctx = context(&dir.path().join("audit.log"), &printer);

        assert_eq!(run_command(&mut ctx, &mut command(-22), &argv(&["sedcli", "-l"])), -22);
        assert_eq!(printer.captured().error, "sedcli: Invalid parameter.\n");
        let nvme_status = run_command(&mut ctx, &mut command(0x4000), &argv(&["sedcli", "-l"]));
        assert_eq!(nvme_status, 0x4000);
    }

    #[test]
    fn test_kmip_mode_wording() {
        let dir = tempdir().unwrap();
        let printer = MemoryPrinter::new();
        let mut ctx = context(&dir.path().join("audit.log"), &printer);
        ctx.config.mode = CliMode::Kmip;

        run_command(&mut ctx, &mut command(-1), &argv(&["sedcli", "-l"]));
        assert_eq!(printer.captured().error, "sedcli-kmip: Failure.\n");
    }

    #[test]
    fn test_kmip_successes_are_silent_unless_connected() {
        let dir = tempdir().unwrap();
        let printer = MemoryPrinter::new();
        let mut ctx = context(&dir.path().join("audit.log"), &printer);
        ctx.config.mode = CliMode::Kmip;

        assert_eq!(run_command(&mut ctx, &mut command(0), &argv(&["sedcli", "-l"])), 0);
        assert_eq!(run_command(&mut ctx, &mut command(0x12), &argv(&["sedcli", "-l"])), 0x12);
        assert_eq!(printer.captured().info, "");
        assert_eq!(printer.captured().error, "");

        run_command(&mut ctx, &mut command(1), &argv(&["sedcli", "-l"]));
        assert_eq!(
            printer.captured().error,
            "sedcli-kmip: Successful connection to the KMIP server.\n"
        );
    }

    #[test]
    fn test_version_is_neither_reported_nor_audited() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("audit.log");
        let printer = MemoryPrinter::new();
        let mut ctx = context(&log, &printer);

        let status = run_command(&mut ctx, &mut command(0), &argv(&["sedcli", "--version"]));
        assert_eq!(status, 0);
        assert_eq!(printer.captured().info, "");
        assert!(!log.exists());
    }

    #[test]
    fn test_audit_can_be_disabled() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("audit.log");
        let printer = MemoryPrinter::new();
        let mut ctx = context(&log, &printer);
        ctx.config.audit = false;

        run_command(&mut ctx, &mut command(0), &argv(&["sedcli", "--lock"]));
        assert!(!log.exists());
    }

    #[test]
    fn test_unwritable_audit_log_is_not_fatal() {
        let dir = tempdir().unwrap();
        let printer = MemoryPrinter::new();
        let mut ctx = context(&dir.path().join("missing").join("audit.log"), &printer);

        let status = run_command(&mut ctx, &mut command(0), &argv(&["sedcli", "--lock"]));
        assert_eq!(status, 0);
        assert!(printer.captured().error.is_empty());
    }
}
