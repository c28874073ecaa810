// src/cli/handlers/mod.rs

//! Commands built into the engine itself. Device commands register
//! alongside them through the same `CommandRegistry`.

pub mod version;

use crate::models::CommandRegistry;
use crate::system::output::StdPrinter;

/// Adds the built-in commands to `registry`.
pub fn register_builtins(registry: CommandRegistry) -> CommandRegistry {
    registry.register(version::command(StdPrinter))
}
