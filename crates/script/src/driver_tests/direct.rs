// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::adapters::LogLevel;

#[tokio::test]
async fn redirect_appends_stdout_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("log");
    let harness = Harness::new();

    let outputs = driver()
        .execute(args("echo '::set-output MY_KEY=MY_VALUE'").redirect_to(&target), &harness.ctx)
        .await
        .unwrap();

    assert_eq!(outputs.get("MY_KEY").map(String::as_str), Some("MY_VALUE"));
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "::set-output MY_KEY=MY_VALUE\n");
}

#[tokio::test]
async fn redirect_never_truncates() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("log");
    std::fs::write(&target, "earlier run\n").unwrap();
    let harness = Harness::new();

    driver().execute(args("echo again").redirect_to(&target), &harness.ctx).await.unwrap();
    driver().execute(args("echo and again").redirect_to(&target), &harness.ctx).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&target).unwrap(),
        "earlier run\nagain\nand again\n"
    );
}

#[tokio::test]
async fn no_redirect_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let harness = Harness::new().with_project_path(dir.path());

    let outputs = driver()
        .execute(args("echo '::set-output MY_KEY=MY_VALUE'"), &harness.ctx)
        .await
        .unwrap();

    assert_eq!(outputs.len(), 1);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn plain_output_is_empty_success() {
    let harness = Harness::new();

    let outputs = driver().execute(args("echo 'abc'"), &harness.ctx).await.unwrap();

    assert!(outputs.is_empty());
    assert_eq!(harness.log.text(LogLevel::Info), "abc\n");
    assert_eq!(harness.progress_ended(), Some(true));
}

#[tokio::test]
async fn failure_skips_redirect_and_ends_progress() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("log");
    let harness = Harness::new();

    let err = driver()
        .execute(args("echo out; echo bad >&2; exit 4").redirect_to(&target), &harness.ctx)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::NonZeroExit));
    assert_eq!(err.failure().map(|f| f.message.as_str()), Some("bad"));
    assert!(!target.exists());
    assert_eq!(harness.progress_ended(), Some(false));
    assert_eq!(harness.log.text(LogLevel::Warn), "bad\n");
}

#[tokio::test]
async fn unavailable_ui_falls_back_to_executor() {
    let ui = FakeUi::unavailable();
    let harness = Harness::new().with_ui(&ui);

    let outputs = driver()
        .execute(args("echo '::set-teamsfx-env REAL=1'"), &harness.ctx)
        .await
        .unwrap();

    assert!(ui.calls().is_empty());
    assert_eq!(outputs.get("REAL").map(String::as_str), Some("1"));
}

#[tokio::test]
async fn relative_paths_resolve_against_project() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub/marker"), "inside sub\n").unwrap();
    let harness = Harness::new().with_project_path(dir.path());
    let request = ExecutionRequest::builder("cat marker").working_directory("sub").build();

    driver()
        .execute(ScriptArgs::new(request).redirect_to("out.log"), &harness.ctx)
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(dir.path().join("out.log")).unwrap(), "inside sub\n");
}

#[tokio::test]
async fn unwritable_redirect_is_redirect_error() {
    let dir = tempfile::tempdir().unwrap();
    let harness = Harness::new();

    // A directory cannot be opened for appending.
    let err = driver()
        .execute(args("echo hi").redirect_to(dir.path()), &harness.ctx)
        .await
        .unwrap_err();

    assert!(matches!(err, FxError::Redirect { .. }), "{err}");
    assert_eq!(err.kind(), None);
    assert_eq!(harness.progress_ended(), Some(false));
}

#[tokio::test]
async fn timeout_is_classified() {
    let harness = Harness::new();
    let request = ExecutionRequest::builder("sleep 30").timeout_ms(300).build();

    let err = driver().execute(ScriptArgs::new(request), &harness.ctx).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Timeout));
}
