// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal sinks for streamed script output and progress.
//!
//! Everything goes to stderr so that stdout carries only the extracted
//! outputs.

use std::io::Write;

use async_trait::async_trait;
use fx_script::{LogSink, ProgressHandler};

use crate::color;

/// Echoes child output as it arrives.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLog {
    pub quiet: bool,
}

impl ConsoleLog {
    fn write(&self, text: &str) {
        if self.quiet {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        // A closed stderr must not fail the run.
        let _ = stderr.write_all(text.as_bytes());
        let _ = stderr.flush();
    }
}

impl LogSink for ConsoleLog {
    fn info(&self, line: &str) {
        self.write(line);
    }

    fn warn(&self, line: &str) {
        self.write(line);
    }

    fn error(&self, line: &str) {
        self.write(&color::error(line));
    }
}

/// Prints one line per progress tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

#[async_trait]
impl ProgressHandler for ConsoleProgress {
    async fn start(&self, detail: &str) {
        eprintln!("{}", color::context(&format!("▸ {detail}")));
    }

    async fn next(&self, detail: &str) {
        eprintln!("{}", color::context(&format!("  $ {detail}")));
    }

    async fn end(&self, success: bool) {
        if success {
            eprintln!("{}", color::context("✓ done"));
        } else {
            eprintln!("{}", color::error("✗ failed"));
        }
    }
}
