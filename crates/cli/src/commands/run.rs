// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fx run`: execute a command through the script driver.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use fx_core::{ExecutionRequest, ScriptArgs};
use fx_script::{DriverContext, ScriptConfig, ScriptDriver};

use crate::console::{ConsoleLog, ConsoleProgress};
use crate::exit_error::ExitError;
use crate::output::{print_outputs, render_failure_json, OutputFormat};
use crate::terminal::TerminalUi;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Command text, passed to the shell as one string
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,

    /// Working directory (relative paths resolve against --project)
    #[arg(long, short = 'C', value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Shell to run the command with (default: detected)
    #[arg(long)]
    pub shell: Option<String>,

    /// Kill the command after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Extra environment variable for the command (repeatable)
    #[arg(long = "env", short = 'e', value_name = "KEY=VALUE", value_parser = parse_env_pair)]
    pub env: Vec<(String, String)>,

    /// Append the command's stdout to this file on success
    #[arg(long, value_name = "PATH")]
    pub redirect_to: Option<PathBuf>,

    /// Base directory for relative --cwd and --redirect-to
    #[arg(long, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Attach the command to this terminal; Ctrl-C cancels it
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Do not echo command output or progress
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl RunArgs {
    pub fn script_args(&self) -> ScriptArgs {
        let mut builder = ExecutionRequest::builder(self.command.join(" "))
            .env(self.env.iter().cloned().collect());
        if let Some(cwd) = &self.cwd {
            builder = builder.working_directory(cwd.clone());
        }
        if let Some(shell) = &self.shell {
            builder = builder.shell(shell.clone());
        }
        if let Some(ms) = self.timeout.filter(|ms| *ms > 0) {
            builder = builder.timeout_ms(ms);
        }

        let args = ScriptArgs::new(builder.build());
        match &self.redirect_to {
            Some(path) => args.redirect_to(path.clone()),
            None => args,
        }
    }

    pub fn context(&self) -> DriverContext {
        let mut ctx = DriverContext::new(Arc::new(ConsoleLog { quiet: self.quiet }));
        if !self.quiet {
            ctx = ctx.with_progress(Arc::new(ConsoleProgress));
        }
        if self.interactive {
            ctx = ctx.with_ui(Arc::new(TerminalUi::system()));
        }
        if let Some(project) = &self.project {
            ctx = ctx.with_project_path(project.clone());
        }
        ctx
    }
}

/// Parse a `KEY=VALUE` pair; the value may be empty or contain `=`.
pub fn parse_env_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

pub async fn handle(args: RunArgs, config: &ScriptConfig, format: OutputFormat) -> Result<()> {
    let driver = ScriptDriver::from_config(config);
    let ctx = args.context();

    match driver.execute(args.script_args(), &ctx).await {
        Ok(outputs) => print_outputs(&outputs, format),
        Err(error) => {
            if let (OutputFormat::Json, Some(failure)) = (format, error.failure()) {
                print!("{}", render_failure_json(failure)?);
            }
            Err(ExitError::from(&error).into())
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
