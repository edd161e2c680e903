// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by an interactive UI while running a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// The user stopped the command. Benign and never retried.
    #[error("cancelled by user")]
    UserCancel,
    #[error("timed out")]
    Timeout,
    #[error("{0}")]
    Failed(String),
}

/// Arguments handed to [`UiAdapter::run_command`]
#[derive(Debug, Clone, Copy)]
pub struct RunCommandArgs<'a> {
    pub command: &'a str,
    pub working_directory: &'a Path,
    pub shell: Option<&'a str>,
    pub timeout: Option<Duration>,
    pub env: &'a HashMap<String, String>,
}

/// Interactive collaborator that can run a command on the user's behalf.
///
/// When present and available it replaces direct process spawning for the
/// whole call.
#[async_trait]
pub trait UiAdapter: Send + Sync {
    /// Whether the run-command capability is available right now.
    fn can_run_command(&self) -> bool {
        true
    }

    /// Run the command, returning whatever output the UI captured.
    async fn run_command(&self, args: RunCommandArgs<'_>) -> Result<String, UiError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{RunCommandArgs, UiAdapter, UiError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;

    /// Recorded run-command call
    #[derive(Debug, Clone)]
    pub struct RunCommandCall {
        pub command: String,
        pub working_directory: PathBuf,
        pub shell: Option<String>,
        pub timeout: Option<Duration>,
    }

    struct FakeUiState {
        available: bool,
        response: Result<String, UiError>,
        calls: Vec<RunCommandCall>,
    }

    /// Fake UI adapter for testing
    #[derive(Clone)]
    pub struct FakeUi {
        inner: Arc<Mutex<FakeUiState>>,
    }

    impl Default for FakeUi {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeUiState {
                    available: true,
                    response: Ok(String::new()),
                    calls: Vec::new(),
                })),
            }
        }
    }

    impl FakeUi {
        pub fn new() -> Self {
            Self::default()
        }

        /// Respond to every call with `response`
        pub fn responding(self, response: Result<String, UiError>) -> Self {
            self.inner.lock().response = response;
            self
        }

        /// A UI whose run-command capability is missing
        pub fn unavailable() -> Self {
            let ui = Self::default();
            ui.inner.lock().available = false;
            ui
        }

        /// Get all recorded calls
        pub fn calls(&self) -> Vec<RunCommandCall> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl UiAdapter for FakeUi {
        fn can_run_command(&self) -> bool {
            self.inner.lock().available
        }

        async fn run_command(&self, args: RunCommandArgs<'_>) -> Result<String, UiError> {
            let mut inner = self.inner.lock();
            inner.calls.push(RunCommandCall {
                command: args.command.to_string(),
                working_directory: args.working_directory.to_path_buf(),
                shell: args.shell.map(str::to_string),
                timeout: args.timeout,
            });
            inner.response.clone()
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeUi, RunCommandCall};
