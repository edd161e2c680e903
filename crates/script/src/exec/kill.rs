// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Forced termination of a timed-out child and its descendants.

use std::time::Duration;

use tokio::process::Child;

/// Upper bound on reaping a killed child.
pub(crate) const REAP_TIMEOUT: Duration = Duration::from_secs(5);

/// Kill the child's process group (Unix) and the child itself, then reap it.
///
/// `pid` is the one recorded at spawn. The shell may already be reaped while
/// its background descendants still hold the pipes, and the group must be
/// signalled regardless. Every step is best effort: failures are only logged.
pub(crate) async fn terminate(child: &mut Child, pid: Option<u32>) {
    #[cfg(unix)]
    if let Some(pid) = pid {
        use nix::sys::signal::{killpg, Signal};
        use nix::unistd::Pid;

        // Spawned with process_group(0), so the PGID equals the PID.
        if let Err(e) = killpg(Pid::from_raw(pid as i32), Signal::SIGKILL) {
            tracing::debug!(pid, error = %e, "killpg failed");
        }
    }

    if let Err(e) = child.start_kill() {
        tracing::debug!(?pid, error = %e, "kill failed");
    }

    match tokio::time::timeout(REAP_TIMEOUT, child.wait()).await {
        Ok(Ok(status)) => tracing::debug!(?pid, %status, "killed child reaped"),
        Ok(Err(e)) => tracing::warn!(?pid, error = %e, "failed to reap killed child"),
        Err(_) => tracing::warn!(?pid, "killed child did not exit in time"),
    }
}
