// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution requests submitted to the script driver.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// A single shell command to run.
///
/// Built once through [`ExecutionRequest::builder`] and never mutated after
/// it is handed to an executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    /// Command text passed to the shell verbatim.
    pub command: String,
    /// Directory the child process starts in.
    pub working_directory: PathBuf,
    /// Wall-clock limit; `None` means no limit.
    pub timeout: Option<Duration>,
    /// Explicit shell; `None` lets the shell resolver decide.
    pub shell: Option<String>,
    /// Variables layered over the inherited environment.
    pub env: HashMap<String, String>,
}

impl ExecutionRequest {
    pub fn builder(command: impl Into<String>) -> ExecutionRequestBuilder {
        ExecutionRequestBuilder {
            command: command.into(),
            working_directory: PathBuf::from("."),
            timeout: None,
            shell: None,
            env: HashMap::new(),
        }
    }
}

pub struct ExecutionRequestBuilder {
    command: String,
    working_directory: PathBuf,
    timeout: Option<Duration>,
    shell: Option<String>,
    env: HashMap<String, String>,
}

impl ExecutionRequestBuilder {
    crate::setters! {
        into {
            working_directory: PathBuf,
        }
        set {
            env: HashMap<String, String>,
        }
        option {
            timeout: Duration,
            shell: String,
        }
    }

    /// Set the timeout from a millisecond count.
    pub fn timeout_ms(self, ms: u64) -> Self {
        self.timeout(Duration::from_millis(ms))
    }

    /// Add a single environment variable.
    pub fn var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> ExecutionRequest {
        ExecutionRequest {
            command: self.command,
            working_directory: self.working_directory,
            timeout: self.timeout,
            shell: self.shell,
            env: self.env,
        }
    }
}

/// Arguments of one driver `execute` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptArgs {
    pub request: ExecutionRequest,
    /// File that receives the raw stdout on success (appended, never truncated).
    pub redirect_to: Option<PathBuf>,
}

impl ScriptArgs {
    pub fn new(request: ExecutionRequest) -> Self {
        Self { request, redirect_to: None }
    }

    pub fn redirect_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.redirect_to = Some(path.into());
        self
    }
}

impl From<ExecutionRequest> for ScriptArgs {
    fn from(request: ExecutionRequest) -> Self {
        Self::new(request)
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
