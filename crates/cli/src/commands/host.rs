// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fx host`: show the shell and output encoding detected for this machine.

use anyhow::Result;
use clap::Args;
use fx_script::host::{HostProbe, SystemHost};
use fx_script::{charset, shell, ScriptConfig};
use serde::Serialize;

use crate::color;
use crate::output::OutputFormat;

#[derive(Args, Debug)]
pub struct HostArgs {
    /// Resolve the encoding as if running this command (applies overrides)
    #[arg(long, value_name = "CMD", default_value = "")]
    pub command: String,
}

#[derive(Debug, Serialize)]
pub struct HostReport {
    pub platform: String,
    pub shell: Option<String>,
    pub encoding: String,
}

pub async fn probe(host: &dyn HostProbe, config: &ScriptConfig, command: &str) -> HostReport {
    HostReport {
        platform: host.platform().to_string(),
        shell: shell::resolve(host).await,
        encoding: charset::resolve(host, command, &config.encoding_overrides()).await,
    }
}

pub fn render(report: &HostReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let shell = report.shell.as_deref().unwrap_or("(none)");
            Ok(format!(
                "{} {}\n{}    {}\n{} {}\n",
                color::header("platform:"),
                color::literal(&report.platform),
                color::header("shell:"),
                color::literal(shell),
                color::header("encoding:"),
                color::literal(&report.encoding),
            ))
        }
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
    }
}

pub async fn handle(args: HostArgs, config: &ScriptConfig, format: OutputFormat) -> Result<()> {
    let report = probe(&SystemHost, config, &args.command).await;
    print!("{}", render(&report, format)?);
    Ok(())
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
