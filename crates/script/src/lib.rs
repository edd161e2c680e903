// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fx-script: command execution engine behind the script driver.
//!
//! Resolves the host shell and output encoding, spawns one child per
//! request, streams and decodes its output, extracts `::set-output` /
//! `::set-teamsfx-env` markers and classifies failures.

pub mod adapters;
pub mod charset;
pub mod config;
pub mod driver;
pub mod env;
pub mod exec;
pub mod host;
pub mod set_output;
pub mod shell;
pub mod translate;

#[cfg(test)]
mod exec_tests;

pub use adapters::{
    LogSink, ProgressHandler, RunCommandArgs, TracingLog, UiAdapter, UiError,
};
#[cfg(any(test, feature = "test-support"))]
pub use adapters::{
    FakeLog, FakeProgress, FakeUi, LogLevel, LogLine, ProgressEvent, RunCommandCall,
};
pub use charset::{EncodingOverrides, StreamDecoder, DEFAULT_ENCODING};
pub use config::{ConfigError, ScriptConfig};
pub use driver::{DriverContext, ScriptDriver};
pub use exec::{ProcessExecutor, StderrAccumulator};
#[cfg(any(test, feature = "test-support"))]
pub use host::FakeHost;
pub use host::{HostProbe, Platform, SystemHost};
pub use set_output::parse as parse_set_output;

pub use fx_core::{
    ErrorKind, ExecutionOutcome, ExecutionRequest, ExitInfo, FxError, OutputMap, ScriptArgs,
    ScriptFailure,
};
