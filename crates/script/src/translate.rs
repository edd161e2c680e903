// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classification of process exits and UI errors into [`ErrorKind`].

use fx_core::{ErrorKind, ExitInfo, ScriptFailure};

use crate::adapters::UiError;

/// The single classification rule for process exits.
pub fn classify(exit: &ExitInfo) -> ErrorKind {
    if exit.killed {
        ErrorKind::Timeout
    } else if exit.spawn_error.is_some() {
        ErrorKind::SpawnFailure
    } else {
        ErrorKind::NonZeroExit
    }
}

/// Build the failure for an unsuccessful exit.
///
/// The message is the captured stderr, else the captured stdout, else a
/// placeholder derived from the exit status.
pub fn translate(command: &str, exit: ExitInfo, stderr: &str, stdout: &str) -> ScriptFailure {
    let kind = classify(&exit);
    let output = captured(stderr, stdout);

    let message = match kind {
        ErrorKind::Timeout => match output {
            Some(output) => format!("command timed out\n{output}"),
            None => "command timed out".to_string(),
        },
        ErrorKind::SpawnFailure => {
            let error = exit.spawn_error.as_deref().unwrap_or("unknown error");
            format!("failed to start command: {error}")
        }
        ErrorKind::NonZeroExit | ErrorKind::UserCancelled => match output {
            Some(output) => output.to_string(),
            None => placeholder(&exit),
        },
    };

    ScriptFailure::new(kind, command, message, exit)
}

/// Map an error from the interactive UI.
pub fn translate_ui(command: &str, error: &UiError) -> ScriptFailure {
    let (kind, exit) = match error {
        UiError::UserCancel => (ErrorKind::UserCancelled, ExitInfo::default()),
        UiError::Timeout => (ErrorKind::Timeout, ExitInfo::timed_out()),
        UiError::Failed(_) => (ErrorKind::NonZeroExit, ExitInfo::default()),
    };
    ScriptFailure::new(kind, command, error.to_string(), exit)
}

fn captured<'a>(stderr: &'a str, stdout: &'a str) -> Option<&'a str> {
    [stderr, stdout].into_iter().map(str::trim_end).find(|s| !s.trim().is_empty())
}

fn placeholder(exit: &ExitInfo) -> String {
    match (exit.code, exit.signal) {
        (_, Some(signal)) => format!("process terminated by signal {signal}"),
        (Some(code), None) => format!("process exited with code {code}"),
        (None, None) => "process failed without output".to_string(),
    }
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
