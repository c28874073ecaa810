//! Command-line grammar engine of `sedcli`.
//!
//! Commands are described as static tables of options (optionally grouped
//! under a namespace selector) and registered in a [`models::CommandRegistry`].
//! [`cli::dispatcher::args_parse`] validates an argument vector against that
//! model, feeds every option to its command, runs it and reports the result.

pub mod cli;
pub mod constants;
pub mod context;
pub mod core;
pub mod dev_utils;
pub mod models;
pub mod system;
