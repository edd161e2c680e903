// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the script driver.

use std::sync::Arc;

use super::*;
use crate::adapters::{FakeLog, FakeProgress, FakeUi, ProgressEvent, UiError};
use crate::exec_tests::{executor, run_async};
use crate::host::FakeHost;
use fx_core::ErrorKind;

#[cfg(unix)]
mod direct;
mod ui;

pub(crate) fn driver() -> ScriptDriver<FakeHost> {
    ScriptDriver::new(executor())
}

/// Context wired to recording fakes.
pub(crate) struct Harness {
    pub log: FakeLog,
    pub progress: FakeProgress,
    pub ctx: DriverContext,
}

impl Harness {
    pub fn new() -> Self {
        let log = FakeLog::new();
        let progress = FakeProgress::new();
        let ctx = DriverContext::new(Arc::new(log.clone())).with_progress(Arc::new(progress.clone()));
        Self { log, progress, ctx }
    }

    pub fn with_ui(mut self, ui: &FakeUi) -> Self {
        self.ctx = self.ctx.with_ui(Arc::new(ui.clone()));
        self
    }

    pub fn with_project_path(mut self, path: &Path) -> Self {
        self.ctx = self.ctx.with_project_path(path);
        self
    }

    pub fn progress_ended(&self) -> Option<bool> {
        self.progress.events().into_iter().find_map(|e| match e {
            ProgressEvent::End(success) => Some(success),
            _ => None,
        })
    }
}

pub(crate) fn args(command: &str) -> ScriptArgs {
    ScriptArgs::new(ExecutionRequest::builder(command).build())
}

#[test]
fn context_resolves_relative_paths_against_project() {
    let ctx = DriverContext::default().with_project_path("/work/project");
    assert_eq!(ctx.resolve(PathBuf::from("sub/dir")), PathBuf::from("/work/project/sub/dir"));
    assert_eq!(ctx.resolve(PathBuf::from("/abs/path")), PathBuf::from("/abs/path"));
}

#[test]
fn context_without_project_keeps_paths() {
    let ctx = DriverContext::default();
    assert_eq!(ctx.resolve(PathBuf::from("rel")), PathBuf::from("rel"));
    assert!(ctx.ui.is_none());
    assert!(ctx.progress.is_none());
}

#[test]
fn cancel_is_reported_for_any_command() {
    for command in ["echo '::set-output MY_KEY=MY_VALUE'", "echo abc", "exit 1"] {
        let ui = FakeUi::new().responding(Err(UiError::UserCancel));
        let harness = Harness::new().with_ui(&ui);

        let err = run_async(driver().execute(args(command), &harness.ctx)).unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::UserCancelled), "command {command}");
        assert!(err.is_user_cancel());
    }
}
