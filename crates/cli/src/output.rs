// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use fx_core::{OutputMap, ScriptFailure};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render extracted outputs: `KEY=VALUE` lines, or a JSON object.
pub fn render_outputs(outputs: &OutputMap, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            Ok(outputs.iter().map(|(key, value)| format!("{key}={value}\n")).collect())
        }
        OutputFormat::Json => {
            let obj = serde_json::json!({ "outputs": outputs });
            Ok(format!("{}\n", serde_json::to_string_pretty(&obj)?))
        }
    }
}

/// JSON document describing a failed run.
pub fn render_failure_json(failure: &ScriptFailure) -> anyhow::Result<String> {
    let obj = serde_json::json!({ "error": failure });
    Ok(format!("{}\n", serde_json::to_string_pretty(&obj)?))
}

pub fn print_outputs(outputs: &OutputMap, format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", render_outputs(outputs, format)?);
    Ok(())
}
