// src/system/output.rs

//! The informational and error output channels.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Destination of everything the engine prints for the user.
pub trait Printer {
    /// Informational channel (help, success reports).
    fn info(&mut self, text: &str);
    /// Error channel (usage errors, failure reports).
    fn error(&mut self, text: &str);
}

/// Writes to the process's standard output and standard error.
#[derive(Debug, Default)]
pub struct StdPrinter;

impl Printer for StdPrinter {
    fn info(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
            log::warn!("Failed to write to stdout: {}", e);
        }
    }

    fn error(&mut self, text: &str) {
        let mut stderr = std::io::stderr().lock();
        if let Err(e) = stderr.write_all(text.as_bytes()) {
            log::warn!("Failed to write to stderr: {}", e);
        }
    }
}

/// What a [`MemoryPrinter`] has received so far.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Captured {
    /// Everything written to the informational channel.
    pub info: String,
    /// Everything written to the error channel.
    pub error: String,
}

/// Keeps output in memory. Clones share the same buffers, so a caller can
/// hand one clone to a `Context` and inspect the other afterwards.
#[derive(Debug, Default, Clone)]
pub struct MemoryPrinter {
    captured: Rc<RefCell<Captured>>,
}

impl MemoryPrinter {
    /// Empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of both buffers.
    pub fn captured(&self) -> Captured {
        self.captured.borrow().clone()
    }
}

impl Printer for MemoryPrinter {
    fn info(&mut self, text: &str) {
        self.captured.borrow_mut().info.push_str(text);
    }

    fn error(&mut self, text: &str) {
        self.captured.borrow_mut().error.push_str(text);
    }
}
