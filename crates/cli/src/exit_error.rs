// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

use fx_core::{ErrorKind, FxError};

/// Exit code for a killed, timed-out command (matches coreutils `timeout`).
pub const TIMEOUT: i32 = 124;
/// Exit code when the command could not be started.
pub const SPAWN_FAILURE: i32 = 127;
/// Exit code for a user interrupt (128 + SIGINT).
pub const USER_CANCELLED: i32 = 130;
pub const FAILURE: i32 = 1;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Exit without printing anything further.
    pub fn silent(code: i32) -> Self {
        Self::new(code, "")
    }

    pub fn code_for(kind: ErrorKind) -> i32 {
        match kind {
            ErrorKind::Timeout => TIMEOUT,
            ErrorKind::NonZeroExit => FAILURE,
            ErrorKind::SpawnFailure => SPAWN_FAILURE,
            ErrorKind::UserCancelled => USER_CANCELLED,
        }
    }
}

impl From<&FxError> for ExitError {
    fn from(error: &FxError) -> Self {
        let code = error.kind().map_or(FAILURE, Self::code_for);
        if error.is_user_cancel() {
            // Cancellation is benign: no error banner.
            return Self::silent(code);
        }
        Self::new(code, error.to_string())
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
