// src/bin/sedcli.rs

use anyhow::{Context as _, Result};
use colored::*;
use sedcli::{
    cli::{Cli, dispatcher, handlers},
    context::Context,
    models::{App, CommandRegistry},
    system::config::Config,
};

const APP: App = App {
    name: "sedcli",
    title: "sedcli - utility for managing NVMe Self-Encrypting Drives",
    info: "<command> [option...]",
    usage_note: Some("The '<device>' must be a block device (e.g. /dev/nvme0n1)."),
    man: Some("sedcli"),
};

/// Sets up logging, loads the configuration and hands the raw argument
/// vector to the dispatcher. The dispatcher's status is the exit code.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run_cli(Cli::from_env()) {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            eprintln!("\n{}: {:#}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run_cli(cli: Cli) -> Result<i32> {
    log::debug!("CLI args parsed: {:?}", cli);

    let config = Config::load().context("Failed to load configuration")?;
    log::debug!("Configuration: {:?}", config);

    let mut ctx = Context::new(APP, config);
    let mut registry = handlers::register_builtins(CommandRegistry::new());
    let argv = cli.into_argv(APP.name);

    Ok(dispatcher::args_parse(&mut ctx, &mut registry, &argv))
}
