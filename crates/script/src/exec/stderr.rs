// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::adapters::LogSink;

/// Collects decoded stderr chunks while forwarding each one to a sink.
///
/// The accumulator is owned by a single execution. Chunks are kept in
/// arrival order and are never dropped, so the full stderr text is
/// available for the failure message even when the process is killed.
#[derive(Debug, Default)]
pub struct StderrAccumulator {
    chunks: Vec<String>,
}

impl StderrAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward `chunk` as a warning, then append it.
    pub fn handle(&mut self, sink: &dyn LogSink, chunk: &str) {
        sink.warn(chunk);
        self.chunks.push(chunk.to_string());
    }

    pub fn join(&self) -> String {
        self.chunks.concat()
    }
}

#[cfg(test)]
#[path = "stderr_tests.rs"]
mod tests;
