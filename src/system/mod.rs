//! # System Interaction Layer
//!
//! Boundaries between the grammar engine and the operating system.
//!
//! ## Modules
//!
//! - **`audit`**: the append-only, lock-protected audit trail of executed commands.
//! - **`config`**: loading of `sedcli.toml`.
//! - **`output`**: the informational and error channels, with an in-memory variant.
//! - **`privilege`**: the root check guarding privileged commands.
//! - **`syslog`**: end-of-file snapshots of the system log around a command.

pub mod audit;
pub mod config;
pub mod output;
pub mod privilege;
pub mod syslog;
