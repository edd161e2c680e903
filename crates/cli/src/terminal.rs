// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive runner: the command owns the terminal and Ctrl-C cancels it.

use std::process::Stdio;

use async_trait::async_trait;
use fx_script::host::{HostProbe, SystemHost};
use fx_script::{shell, RunCommandArgs, UiAdapter, UiError};

/// Runs commands attached to the current terminal.
///
/// Output is not captured, so the driver reads markers from the command
/// text instead.
#[derive(Debug, Clone)]
pub struct TerminalUi<H: HostProbe = SystemHost> {
    host: H,
}

impl TerminalUi<SystemHost> {
    pub fn system() -> Self {
        Self::new(SystemHost)
    }
}

impl<H: HostProbe> TerminalUi<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }
}

#[async_trait]
impl<H: HostProbe> UiAdapter for TerminalUi<H> {
    async fn run_command(&self, args: RunCommandArgs<'_>) -> Result<String, UiError> {
        let shell = match args.shell {
            Some(shell) => Some(shell.to_string()),
            None => shell::resolve(&self.host).await,
        };
        let invocation = shell::invocation(shell.as_deref(), args.command, self.host.platform());

        let mut cmd = invocation.command();
        cmd.current_dir(args.working_directory)
            .envs(args.env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|e| {
            UiError::Failed(format!("failed to start {}: {e}", invocation.program))
        })?;
        tracing::debug!(pid = ?child.id(), "terminal command started");

        let wait = async {
            let status = match args.timeout {
                Some(limit) => tokio::time::timeout(limit, child.wait())
                    .await
                    .map_err(|_| UiError::Timeout)?,
                None => child.wait().await,
            };
            status.map_err(|e| UiError::Failed(e.to_string()))
        };

        tokio::select! {
            status = wait => {
                let status = status?;
                if status.success() {
                    Ok(String::new())
                } else {
                    Err(UiError::Failed(format!("command exited with {status}")))
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted by user");
                Err(UiError::UserCancel)
            }
        }
    }
}

#[cfg(all(test, unix))]
#[path = "terminal_tests.rs"]
mod tests;
