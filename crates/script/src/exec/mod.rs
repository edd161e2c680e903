// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process executor: one child per request, streamed and decoded output.

mod kill;
mod stderr;

pub use stderr::StderrAccumulator;

use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use fx_core::{ExecutionOutcome, ExecutionRequest, ExitInfo};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::Instrument;

use crate::adapters::LogSink;
use crate::charset::{self, EncodingOverrides, StreamDecoder};
use crate::host::{HostProbe, SystemHost};
use crate::shell::{self, Invocation};
use crate::{set_output, translate};

const READ_BUF: usize = 8 * 1024;

/// Runs shell commands on the local host.
///
/// The host probe decides shell and encoding; every [`run`](Self::run)
/// spawns exactly one child and produces exactly one outcome.
#[derive(Debug, Clone)]
pub struct ProcessExecutor<H: HostProbe = SystemHost> {
    host: H,
    overrides: EncodingOverrides,
    default_timeout: Option<Duration>,
}

impl Default for ProcessExecutor<SystemHost> {
    fn default() -> Self {
        Self::new(SystemHost)
    }
}

impl<H: HostProbe> ProcessExecutor<H> {
    pub fn new(host: H) -> Self {
        Self { host, overrides: EncodingOverrides::default(), default_timeout: None }
    }

    /// Replace the command-to-encoding overrides.
    pub fn with_overrides(mut self, overrides: EncodingOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Timeout applied to requests that carry none.
    pub fn with_default_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn default_timeout(&self) -> Option<Duration> {
        self.default_timeout
    }

    /// Run `request` to completion, forwarding output chunks to `sink`.
    ///
    /// Stdout chunks go to `sink.info`, stderr chunks to `sink.warn`. Never
    /// returns early: spawn errors and timeouts become failure outcomes.
    pub async fn run(&self, request: &ExecutionRequest, sink: &dyn LogSink) -> ExecutionOutcome {
        let span = tracing::info_span!(
            "script.exec",
            command = %request.command,
            cwd = %request.working_directory.display(),
        );
        async {
            let start = Instant::now();
            let outcome = self.execute(request, sink).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &outcome {
                ExecutionOutcome::Success { outputs, .. } => {
                    tracing::info!(elapsed_ms, outputs = outputs.len(), "command succeeded")
                }
                ExecutionOutcome::Failure(f) => {
                    tracing::info!(elapsed_ms, kind = %f.kind, "command failed")
                }
            }
            outcome
        }
        .instrument(span)
        .await
    }

    async fn execute(&self, request: &ExecutionRequest, sink: &dyn LogSink) -> ExecutionOutcome {
        let command = request.command.as_str();

        let shell = match &request.shell {
            Some(shell) => Some(shell.clone()),
            None => shell::resolve(&self.host).await,
        };
        let encoding = charset::resolve(&self.host, command, &self.overrides).await;
        let invocation = shell::invocation(shell.as_deref(), command, self.host.platform());
        tracing::debug!(program = %invocation.program, %encoding, "spawning");

        let mut child = match build_command(&invocation, request).spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::info!(program = %invocation.program, error = %e, "spawn failed");
                let exit = ExitInfo::spawn_failed(e.to_string());
                return ExecutionOutcome::Failure(translate::translate(command, exit, "", ""));
            }
        };

        let pid = child.id();
        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let mut stdout = String::new();
        let mut stderr = StderrAccumulator::new();
        let limit = request.timeout.or(self.default_timeout);

        let status = {
            let work = async {
                let (_, _, status) = tokio::join!(
                    pump(stdout_pipe, &encoding, |chunk| {
                        sink.info(chunk);
                        stdout.push_str(chunk);
                    }),
                    pump(stderr_pipe, &encoding, |chunk| stderr.handle(sink, chunk)),
                    child.wait(),
                );
                status
            };
            match limit {
                Some(limit) => tokio::time::timeout(limit, work).await.ok(),
                None => Some(work.await),
            }
        };

        let exit = match status {
            Some(Ok(status)) => exit_info(status),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "failed to wait for child");
                ExitInfo::spawn_failed(e.to_string())
            }
            None => {
                tracing::info!(timeout_ms = ?limit.map(|t| t.as_millis()), "command timed out, killing");
                kill::terminate(&mut child, pid).await;
                ExitInfo::timed_out()
            }
        };

        if exit.success() {
            let outputs = set_output::parse(&stdout);
            ExecutionOutcome::Success { outputs, stdout }
        } else {
            ExecutionOutcome::Failure(translate::translate(command, exit, &stderr.join(), &stdout))
        }
    }
}

fn build_command(invocation: &Invocation, request: &ExecutionRequest) -> Command {
    let mut cmd = invocation.command();
    cmd.current_dir(&request.working_directory)
        .envs(&request.env)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    #[cfg(unix)]
    cmd.process_group(0);

    cmd
}

/// Read `reader` to EOF, handing each decoded chunk to `on_chunk`.
async fn pump<R>(reader: Option<R>, encoding: &str, mut on_chunk: impl FnMut(&str))
where
    R: AsyncRead + Unpin,
{
    let Some(mut reader) = reader else {
        return;
    };
    let mut decoder = StreamDecoder::new(encoding);
    let mut buf = vec![0u8; READ_BUF];

    loop {
        match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                let text = decoder.decode(&buf[..n]);
                if !text.is_empty() {
                    on_chunk(&text);
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "pipe read failed");
                break;
            }
        }
    }

    let tail = decoder.finish();
    if !tail.is_empty() {
        on_chunk(&tail);
    }
}

fn exit_info(status: ExitStatus) -> ExitInfo {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return ExitInfo::signalled(signal);
        }
    }
    match status.code() {
        Some(code) => ExitInfo::exited(code),
        None => ExitInfo::default(),
    }
}
