// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the process executor.

use crate::exec::ProcessExecutor;
use crate::host::{FakeHost, Platform};

#[cfg(unix)]
mod basic;
#[cfg(unix)]
mod errors;

/// Executor that spawns the real `/bin/sh` with fixed host answers.
pub(crate) fn executor() -> ProcessExecutor<FakeHost> {
    ProcessExecutor::new(FakeHost::new(Platform::Linux).with_path("/bin/sh"))
}

/// Sync wrapper for async execution in parameterized tests.
pub(crate) fn run_async<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Runtime::new().unwrap().block_on(f)
}
