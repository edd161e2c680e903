// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborators consumed by the script driver

pub mod log;
pub mod progress;
pub mod ui;

pub use log::{LogSink, TracingLog};
pub use progress::ProgressHandler;
pub use ui::{RunCommandArgs, UiAdapter, UiError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use log::{FakeLog, LogLevel, LogLine};
#[cfg(any(test, feature = "test-support"))]
pub use progress::{FakeProgress, ProgressEvent};
#[cfg(any(test, feature = "test-support"))]
pub use ui::{FakeUi, RunCommandCall};
