// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{executor, run_async};
use crate::adapters::{FakeLog, LogLevel};
use fx_core::{ExecutionOutcome, ExecutionRequest};

fn success(outcome: ExecutionOutcome) -> (fx_core::OutputMap, String) {
    match outcome {
        ExecutionOutcome::Success { outputs, stdout } => (outputs, stdout),
        ExecutionOutcome::Failure(f) => panic!("expected success, got {f}"),
    }
}

#[tokio::test]
async fn echo_markers_become_outputs() {
    let request = ExecutionRequest::builder(
        r#"echo "::set-teamsfx-env TAB_DOMAIN=localhost:53000"; echo "::set-output PORT=53000""#,
    )
    .build();
    let log = FakeLog::new();

    let (outputs, stdout) = success(executor().run(&request, &log).await);

    assert_eq!(outputs.get("TAB_DOMAIN").map(String::as_str), Some("localhost:53000"));
    assert_eq!(outputs.get("PORT").map(String::as_str), Some("53000"));
    assert!(stdout.contains("::set-output PORT=53000"));
}

#[tokio::test]
async fn plain_output_has_no_outputs() {
    let request = ExecutionRequest::builder("echo abc").build();
    let log = FakeLog::new();

    let (outputs, stdout) = success(executor().run(&request, &log).await);

    assert!(outputs.is_empty());
    assert_eq!(stdout, "abc\n");
    assert_eq!(log.text(LogLevel::Info), "abc\n");
    assert_eq!(log.text(LogLevel::Warn), "");
}

#[yare::parameterized(
    single = { "printf one", "one" },
    lines = { "printf 'a\\nb\\n'", "a\nb\n" },
    empty = { "true", "" },
)]
fn stdout_is_captured_whole(command: &str, expected: &str) {
    let request = ExecutionRequest::builder(command).build();
    let log = FakeLog::new();
    let (_, stdout) = success(run_async(executor().run(&request, &log)));
    assert_eq!(stdout, expected);
}

#[tokio::test]
async fn env_is_layered_over_inherited() {
    let request = ExecutionRequest::builder("echo \"::set-output GOT=$FX_TEST_VALUE\"")
        .var("FX_TEST_VALUE", "hello")
        .build();
    let log = FakeLog::new();

    let (outputs, _) = success(executor().run(&request, &log).await);
    assert_eq!(outputs.get("GOT").map(String::as_str), Some("hello"));
}

#[tokio::test]
async fn runs_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker.txt"), "present").unwrap();
    let request = ExecutionRequest::builder("cat marker.txt")
        .working_directory(dir.path())
        .build();
    let log = FakeLog::new();

    let (_, stdout) = success(executor().run(&request, &log).await);
    assert_eq!(stdout, "present");
}

#[tokio::test]
async fn explicit_shell_is_used() {
    let request = ExecutionRequest::builder("echo $0").shell("/bin/sh").build();
    let log = FakeLog::new();

    let (_, stdout) = success(executor().run(&request, &log).await);
    assert_eq!(stdout.trim(), "/bin/sh");
}

#[tokio::test]
async fn succeeds_within_timeout() {
    let request = ExecutionRequest::builder("echo fast").timeout_ms(10_000).build();
    let log = FakeLog::new();

    let outcome = executor().run(&request, &log).await;
    assert!(outcome.is_success());
}
