// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::{Duration, Instant};

use super::executor;
use crate::adapters::{FakeLog, LogLevel};
use fx_core::{ErrorKind, ExecutionOutcome, ExecutionRequest, ScriptFailure};

fn failure(outcome: ExecutionOutcome) -> ScriptFailure {
    match outcome {
        ExecutionOutcome::Failure(f) => f,
        ExecutionOutcome::Success { stdout, .. } => panic!("expected failure, got stdout {stdout:?}"),
    }
}

#[tokio::test]
async fn non_zero_exit_carries_stderr() {
    let request = ExecutionRequest::builder("echo building; echo boom >&2; exit 3").build();
    let log = FakeLog::new();

    let f = failure(executor().run(&request, &log).await);

    assert_eq!(f.kind, ErrorKind::NonZeroExit);
    assert_eq!(f.message, "boom");
    assert_eq!(f.exit.code, Some(3));
    assert_eq!(f.command, "echo building; echo boom >&2; exit 3");
}

#[tokio::test]
async fn stderr_is_forwarded_in_order() {
    let request = ExecutionRequest::builder("printf a >&2; sleep 0.05; printf b >&2; exit 1").build();
    let log = FakeLog::new();

    let f = failure(executor().run(&request, &log).await);

    assert_eq!(f.message, "ab");
    assert_eq!(log.text(LogLevel::Warn), "ab");
    assert!(log.lines().iter().all(|l| l.level == LogLevel::Warn));
}

#[tokio::test]
async fn failure_without_stderr_uses_stdout() {
    let request = ExecutionRequest::builder("echo only-stdout; exit 2").build();
    let log = FakeLog::new();

    let f = failure(executor().run(&request, &log).await);
    assert_eq!(f.message, "only-stdout");
}

#[tokio::test]
async fn markers_are_ignored_on_failure() {
    let request = ExecutionRequest::builder("echo '::set-output K=v'; exit 1").build();
    let log = FakeLog::new();

    let outcome = executor().run(&request, &log).await;
    assert_eq!(outcome.error_kind(), Some(ErrorKind::NonZeroExit));
}

#[tokio::test]
async fn timeout_kills_and_keeps_partial_output() {
    let request = ExecutionRequest::builder("echo partial; sleep 30").timeout_ms(500).build();
    let log = FakeLog::new();
    let start = Instant::now();

    let f = failure(executor().run(&request, &log).await);

    assert!(start.elapsed() < Duration::from_secs(10), "took {:?}", start.elapsed());
    assert_eq!(f.kind, ErrorKind::Timeout);
    assert!(f.exit.killed);
    assert!(f.message.starts_with("command timed out"));
    assert!(f.message.contains("partial"), "message: {}", f.message);
}

#[tokio::test]
async fn timeout_kills_background_children_after_shell_exits() {
    let dir = tempfile::tempdir().unwrap();
    let pidfile = dir.path().join("bg.pid");
    // The shell exits at once; the background sleep keeps stdout open.
    let command = format!("sleep 30 & echo $! > '{}'; echo hi", pidfile.display());
    let request = ExecutionRequest::builder(command).timeout_ms(500).build();
    let log = FakeLog::new();

    let f = failure(executor().run(&request, &log).await);
    assert_eq!(f.kind, ErrorKind::Timeout);
    assert!(f.message.contains("hi"), "message: {}", f.message);

    let pid: i32 = std::fs::read_to_string(&pidfile).unwrap().trim().parse().unwrap();
    let deadline = Instant::now() + Duration::from_secs(5);
    while is_running(pid) {
        assert!(Instant::now() < deadline, "background process {pid} survived the timeout");
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

/// Live and not a zombie waiting on its new parent to reap it.
fn is_running(pid: i32) -> bool {
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    if kill(Pid::from_raw(pid), None).is_err() {
        return false;
    }
    match std::fs::read_to_string(format!("/proc/{pid}/stat")) {
        Ok(stat) => !stat.rsplit_once(')').is_some_and(|(_, rest)| rest.trim_start().starts_with('Z')),
        Err(_) => true,
    }
}

#[tokio::test]
async fn default_timeout_applies_when_request_has_none() {
    let request = ExecutionRequest::builder("sleep 30").build();
    let log = FakeLog::new();
    let executor = executor().with_default_timeout(Some(Duration::from_millis(300)));

    let f = failure(executor.run(&request, &log).await);
    assert_eq!(f.kind, ErrorKind::Timeout);
}

#[tokio::test]
async fn missing_working_directory_is_spawn_failure() {
    let request = ExecutionRequest::builder("echo hi")
        .working_directory("/definitely/not/a/real/dir")
        .build();
    let log = FakeLog::new();

    let f = failure(executor().run(&request, &log).await);

    assert_eq!(f.kind, ErrorKind::SpawnFailure);
    assert!(f.exit.spawn_error.is_some());
    assert!(f.message.starts_with("failed to start command"));
}

#[tokio::test]
async fn missing_shell_is_spawn_failure() {
    let request = ExecutionRequest::builder("echo hi").shell("/no/such/shell").build();
    let log = FakeLog::new();

    let f = failure(executor().run(&request, &log).await);
    assert_eq!(f.kind, ErrorKind::SpawnFailure);
}

#[tokio::test]
async fn signal_is_recorded() {
    let request = ExecutionRequest::builder("kill -TERM $$").build();
    let log = FakeLog::new();

    let f = failure(executor().run(&request, &log).await);

    assert_eq!(f.kind, ErrorKind::NonZeroExit);
    assert_eq!(f.exit.signal, Some(15));
    assert_eq!(f.message, "process terminated by signal 15");
}
