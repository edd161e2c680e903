// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script driver: the single `execute` entry point used by pipeline runners.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fx_core::{ExecutionRequest, FxError, OutputMap, ScriptArgs, ScriptFailure};
use tokio::io::AsyncWriteExt;
use tracing::Instrument;

use crate::adapters::{LogSink, ProgressHandler, RunCommandArgs, TracingLog, UiAdapter};
use crate::config::ScriptConfig;
use crate::exec::ProcessExecutor;
use crate::host::{HostProbe, SystemHost};
use crate::{set_output, translate};

/// Title reported to the progress handler on start.
pub const PROGRESS_TITLE: &str = "Running script";

/// Collaborators available to one `execute` call.
#[derive(Clone)]
pub struct DriverContext {
    /// Interactive runner; used instead of the executor when it can run commands.
    pub ui: Option<Arc<dyn UiAdapter>>,
    /// Receives streamed stdout (info) and stderr (warn).
    pub log: Arc<dyn LogSink>,
    pub progress: Option<Arc<dyn ProgressHandler>>,
    /// Base for relative working directories and redirect targets.
    pub project_path: Option<PathBuf>,
}

impl Default for DriverContext {
    fn default() -> Self {
        Self::new(Arc::new(TracingLog))
    }
}

impl DriverContext {
    pub fn new(log: Arc<dyn LogSink>) -> Self {
        Self { ui: None, log, progress: None, project_path: None }
    }

    pub fn with_ui(mut self, ui: Arc<dyn UiAdapter>) -> Self {
        self.ui = Some(ui);
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressHandler>) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn with_project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    fn resolve(&self, path: PathBuf) -> PathBuf {
        match &self.project_path {
            Some(root) if path.is_relative() => root.join(path),
            _ => path,
        }
    }
}

/// Runs one script per `execute` call through either the UI or the executor.
pub struct ScriptDriver<H: HostProbe = SystemHost> {
    executor: ProcessExecutor<H>,
}

impl ScriptDriver<SystemHost> {
    /// Driver for the local host with `config` applied.
    pub fn from_config(config: &ScriptConfig) -> Self {
        Self::new(config.executor(SystemHost))
    }
}

impl Default for ScriptDriver<SystemHost> {
    fn default() -> Self {
        Self::from_config(&ScriptConfig::default())
    }
}

impl<H: HostProbe> ScriptDriver<H> {
    pub fn new(executor: ProcessExecutor<H>) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &ProcessExecutor<H> {
        &self.executor
    }

    /// Run the script and return the key/value pairs it printed.
    ///
    /// On success with `redirect_to` set, the raw stdout is appended to that
    /// file exactly once. Progress ticks are sent whatever the outcome.
    pub async fn execute(&self, args: ScriptArgs, ctx: &DriverContext) -> Result<OutputMap, FxError> {
        let ScriptArgs { mut request, redirect_to } = args;
        request.working_directory = ctx.resolve(request.working_directory);
        let redirect_to = redirect_to.map(|path| ctx.resolve(path));

        let span = tracing::info_span!(
            "script.driver",
            command = %request.command,
            redirect = ?redirect_to,
        );
        async {
            if let Some(progress) = &ctx.progress {
                progress.start(PROGRESS_TITLE).await;
                progress.next(&request.command).await;
            }

            let result = match self.dispatch(&request, ctx).await {
                Ok((outputs, stdout)) => match &redirect_to {
                    Some(path) => append(path, &stdout).await.map(|()| outputs),
                    None => Ok(outputs),
                },
                Err(failure) => Err(FxError::Script(failure)),
            };

            if let Some(progress) = &ctx.progress {
                progress.end(result.is_ok()).await;
            }

            match &result {
                Ok(outputs) => tracing::info!(outputs = outputs.len(), "script finished"),
                Err(e) if e.is_user_cancel() => tracing::info!("script cancelled by user"),
                Err(e) => tracing::info!(error = %e, "script failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn dispatch(
        &self,
        request: &ExecutionRequest,
        ctx: &DriverContext,
    ) -> Result<(OutputMap, String), ScriptFailure> {
        let ui = ctx.ui.as_deref().filter(|ui| ui.can_run_command());
        let Some(ui) = ui else {
            return self.executor.run(request, ctx.log.as_ref()).await.into_result();
        };

        tracing::debug!("delegating to interactive ui");
        let args = RunCommandArgs {
            command: &request.command,
            working_directory: &request.working_directory,
            shell: request.shell.as_deref(),
            timeout: request.timeout.or(self.executor.default_timeout()),
            env: &request.env,
        };
        match ui.run_command(args).await {
            Ok(text) => {
                // A terminal-hosted run hands back no captured output.
                let source = if text.trim().is_empty() { request.command.as_str() } else { text.as_str() };
                Ok((set_output::parse(source), text))
            }
            Err(e) => Err(translate::translate_ui(&request.command, &e)),
        }
    }
}

/// Append `stdout` to `path`, creating it if missing.
async fn append(path: &Path, stdout: &str) -> Result<(), FxError> {
    let redirect_err = |source| FxError::Redirect { path: path.to_path_buf(), source };

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(redirect_err)?;
    file.write_all(stdout.as_bytes()).await.map_err(redirect_err)?;
    file.flush().await.map_err(redirect_err)?;

    tracing::debug!(path = %path.display(), bytes = stdout.len(), "output appended");
    Ok(())
}

#[cfg(test)]
#[path = "driver_tests/mod.rs"]
mod tests;
