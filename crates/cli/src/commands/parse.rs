// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fx parse`: extract output markers from existing text.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::output::{print_outputs, OutputFormat};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// File to scan (default: stdin)
    pub file: Option<PathBuf>,
}

pub async fn handle(args: ParseArgs, format: OutputFormat) -> Result<()> {
    let text = match &args.file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
            text
        }
    };

    let outputs = fx_script::parse_set_output(&text);
    tracing::debug!(bytes = text.len(), outputs = outputs.len(), "parsed text");
    print_outputs(&outputs, format)
}
