// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal results of a single process lifecycle.

use serde::{Deserialize, Serialize};

use crate::OutputMap;

/// Classification of a failed execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The child outlived its timeout and was killed.
    Timeout,
    /// The child ran and exited unsuccessfully.
    NonZeroExit,
    /// The child could not be started (shell missing, bad cwd, permissions).
    SpawnFailure,
    /// The interactive collaborator reported that the user cancelled.
    UserCancelled,
}

crate::simple_display! {
    ErrorKind {
        Timeout => "timeout",
        NonZeroExit => "non-zero exit",
        SpawnFailure => "spawn failure",
        UserCancelled => "user cancelled",
    }
}

impl ErrorKind {
    /// Cancellation is a benign termination, everything else is actionable.
    pub fn is_user_cancel(self) -> bool {
        self == ErrorKind::UserCancelled
    }
}

/// Raw OS-level exit information kept for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitInfo {
    /// Exit code, when the process exited normally.
    pub code: Option<i32>,
    /// Terminating signal on Unix.
    pub signal: Option<i32>,
    /// Set when the executor killed the process for exceeding its timeout.
    pub killed: bool,
    /// Set when the process never started.
    pub spawn_error: Option<String>,
}

impl ExitInfo {
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code), ..Self::default() }
    }

    pub fn signalled(signal: i32) -> Self {
        Self { signal: Some(signal), ..Self::default() }
    }

    pub fn timed_out() -> Self {
        Self { killed: true, ..Self::default() }
    }

    pub fn spawn_failed(error: impl Into<String>) -> Self {
        Self { spawn_error: Some(error.into()), ..Self::default() }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0) && !self.killed && self.spawn_error.is_none()
    }
}

/// A classified failure with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ScriptFailure {
    pub kind: ErrorKind,
    /// Captured stderr (or stdout) text, never dropped on failure.
    pub message: String,
    /// The command that was run.
    pub command: String,
    pub exit: ExitInfo,
}

impl ScriptFailure {
    pub fn new(
        kind: ErrorKind,
        command: impl Into<String>,
        message: impl Into<String>,
        exit: ExitInfo,
    ) -> Self {
        Self { kind, message: message.into(), command: command.into(), exit }
    }
}

/// Exactly one of these is produced per execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Success {
        /// Key/value pairs extracted from the output markers.
        outputs: OutputMap,
        /// Full decoded stdout.
        stdout: String,
    },
    Failure(ScriptFailure),
}

impl ExecutionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionOutcome::Success { .. })
    }

    /// Kind of the failure, `None` on success.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            ExecutionOutcome::Success { .. } => None,
            ExecutionOutcome::Failure(failure) => Some(failure.kind),
        }
    }

    /// Convert into a `Result`, keeping the captured stdout on success.
    pub fn into_result(self) -> Result<(OutputMap, String), ScriptFailure> {
        match self {
            ExecutionOutcome::Success { outputs, stdout } => Ok((outputs, stdout)),
            ExecutionOutcome::Failure(failure) => Err(failure),
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
