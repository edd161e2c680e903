// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

/// Sink for informational and error lines produced while a script runs.
///
/// Output chunks are forwarded here as they arrive, before they are buffered.
pub trait LogSink: Send + Sync {
    fn info(&self, line: &str);
    fn warn(&self, line: &str);
    fn error(&self, line: &str);
}

/// Forwards lines to `tracing` under the `fx_script::output` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

impl LogSink for TracingLog {
    fn info(&self, line: &str) {
        tracing::info!(target: "fx_script::output", "{}", line.trim_end());
    }

    fn warn(&self, line: &str) {
        tracing::warn!(target: "fx_script::output", "{}", line.trim_end());
    }

    fn error(&self, line: &str) {
        tracing::error!(target: "fx_script::output", "{}", line.trim_end());
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::LogSink;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LogLevel {
        Info,
        Warn,
        Error,
    }

    /// Recorded log line
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LogLine {
        pub level: LogLevel,
        pub text: String,
    }

    /// Fake log sink for testing
    #[derive(Clone, Default)]
    pub struct FakeLog {
        lines: Arc<Mutex<Vec<LogLine>>>,
    }

    impl FakeLog {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded lines
        pub fn lines(&self) -> Vec<LogLine> {
            self.lines.lock().clone()
        }

        /// Concatenated text of every line at `level`
        pub fn text(&self, level: LogLevel) -> String {
            self.lines
                .lock()
                .iter()
                .filter(|l| l.level == level)
                .map(|l| l.text.as_str())
                .collect()
        }

        fn push(&self, level: LogLevel, text: &str) {
            self.lines.lock().push(LogLine { level, text: text.to_string() });
        }
    }

    impl LogSink for FakeLog {
        fn info(&self, line: &str) {
            self.push(LogLevel::Info, line);
        }

        fn warn(&self, line: &str) {
            self.push(LogLevel::Warn, line);
        }

        fn error(&self, line: &str) {
            self.push(LogLevel::Error, line);
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeLog, LogLevel, LogLine};
