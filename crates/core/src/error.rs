// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors returned across the driver boundary.

use std::path::PathBuf;

use thiserror::Error;

use crate::{ErrorKind, ScriptFailure};

/// Error returned by `ScriptDriver::execute`.
#[derive(Debug, Error)]
pub enum FxError {
    /// The script itself failed.
    #[error("failed to run `{}`: {}", .0.command, .0)]
    Script(#[from] ScriptFailure),

    /// The script succeeded but its output could not be appended to the target file.
    #[error("failed to append output to {}: {source}", path.display())]
    Redirect { path: PathBuf, source: std::io::Error },
}

impl FxError {
    /// Failure classification, `None` for errors outside the process lifecycle.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            FxError::Script(failure) => Some(failure.kind),
            FxError::Redirect { .. } => None,
        }
    }

    pub fn is_user_cancel(&self) -> bool {
        self.kind().is_some_and(ErrorKind::is_user_cancel)
    }

    /// The classified failure, if this error came from the script.
    pub fn failure(&self) -> Option<&ScriptFailure> {
        match self {
            FxError::Script(failure) => Some(failure),
            FxError::Redirect { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
