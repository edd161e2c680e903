// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the script crate.

use std::time::Duration;

/// POSIX login shell override.
pub const SHELL: &str = "SHELL";

/// Windows command interpreter override.
pub const COMSPEC: &str = "ComSpec";

/// Default timeout for requests that do not set one.
pub const TIMEOUT_MS: &str = "FX_SCRIPT_TIMEOUT_MS";

/// Default execution timeout, if `FX_SCRIPT_TIMEOUT_MS` holds a positive integer.
pub fn default_timeout() -> Option<Duration> {
    std::env::var(TIMEOUT_MS)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
