// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fx: run shell scripts and collect their `::set-output` values.

mod color;
mod commands;
mod console;
mod exit_error;
mod output;
mod terminal;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fx_script::ScriptConfig;
use tracing_subscriber::EnvFilter;

use crate::exit_error::ExitError;
use crate::output::OutputFormat;

/// Log filter variable, e.g. `FX_LOG=fx_script=debug`.
const LOG_ENV: &str = "FX_LOG";

#[derive(Parser)]
#[command(
    name = "fx",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("FX_BUILD_HASH"), ")"),
    about = "Run scripts and collect the values they print",
    styles = color::styles()
)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Text, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command and print the values it sets
    Run(commands::run::RunArgs),
    /// Extract `::set-output` values from a file or stdin
    Parse(commands::parse::ParseArgs),
    /// Show the detected shell and output encoding
    Host(commands::host::HostArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ScriptConfig::load(path)?,
        None => ScriptConfig::default(),
    };

    match cli.command {
        Commands::Run(args) => commands::run::handle(args, &config, cli.output).await,
        Commands::Parse(args) => commands::parse::handle(args, cli.output).await,
        Commands::Host(args) => commands::host::handle(args, &config, cli.output).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        let code = match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("{} {}", color::error("error:"), exit.message);
                }
                exit.code
            }
            None => {
                eprintln!("{} {e:#}", color::error("error:"));
                exit_error::FAILURE
            }
        };
        std::process::exit(code);
    }
}
