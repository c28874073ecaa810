// src/system/audit.rs

//! The append-only audit trail of executed commands.

use std::collections::TryReserveError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;

/// Failure to produce or store an audit line.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The command line could not be rebuilt.
    #[error("Memory allocation failed for logging")]
    Allocation(#[from] TryReserveError),
    /// The log could not be opened or locked.
    #[error("Could not open audit log '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The line could not be written.
    #[error("Could not write audit log '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Joins `argv` with single spaces, as the command was typed.
///
/// Growth is fallible: on allocation failure the whole reconstruction fails
/// instead of producing a truncated command line.
pub fn reconstruct_command(argv: &[String]) -> Result<String, TryReserveError> {
    let mut command = String::new();
    for (i, token) in argv.iter().enumerate() {
        let separator = usize::from(i > 0);
        command.try_reserve(token.len() + separator)?;
        if i > 0 {
            command.push(' ');
        }
        command.push_str(token);
    }
    Ok(command)
}

/// `<s>.<cs>`: whole seconds and hundredths of an elapsed duration.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    format!("{}.{:02}", millis / 1000, (millis % 1000) / 10)
}

/// Builds the audit message (without timestamp) for one invocation.
pub fn audit_message(
    program: &str,
    argv: &[String],
    status: i32,
    elapsed: Duration,
) -> Result<String, AuditError> {
    let command = reconstruct_command(argv)?;
    let outcome = if status == 0 { "success" } else { "failure" };
    Ok(format!(
        "{program} invoked with: \"{command}\". Exit status is {status} ({outcome}). Command took {} s.",
        format_elapsed(elapsed)
    ))
}

/// `asctime`-style local timestamp, e.g. `Fri Oct 16 09:05:42 2026`.
fn timestamp() -> String {
    chrono::Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
}

/// Handle on the audit log file.
/// The audit file of one program.
#[derive(Debug)]
pub struct AuditLog<'a> {
    path: &'a Path,
    program: &'a str,
}

impl<'a> AuditLog<'a> {
    /// Lines written through this log are tagged with `program`.
    pub fn new(path: &'a Path, program: &'a str) -> Self {
        Self { path, program }
    }

    /// Appends `<timestamp> <program>: <message>` as one line.
    ///
    /// The file is held under an exclusive advisory lock for the duration of
    /// the write so that concurrent instances never interleave lines.
    pub fn append(&self, message: &str) -> Result<(), AuditError> {
        let path = self.path.display().to_string();
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path)
            .map_err(|e| AuditError::Open {
                path: path.clone(),
                source: e,
            })?;

        file.lock().map_err(|e| AuditError::Write {
            path: path.clone(),
            source: e,
        })?;

        let line = format!("{} {}: {}\n", timestamp(), self.program, message);
        let written = (&file).write_all(line.as_bytes()).and_then(|()| (&file).flush());

        if let Err(e) = file.unlock() {
            log::warn!("Could not release lock on '{}': {}", path, e);
        }
        written.map_err(|e| AuditError::Write { path, source: e })
    }
}
