// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use super::*;

#[tokio::test]
async fn ui_output_is_parsed() {
    let ui = FakeUi::new().responding(Ok("::set-output FROM_UI=yes\n".into()));
    let harness = Harness::new().with_ui(&ui);

    let outputs = driver().execute(args("npm run build"), &harness.ctx).await.unwrap();

    assert_eq!(outputs.get("FROM_UI").map(String::as_str), Some("yes"));
    assert_eq!(ui.calls().len(), 1);
    assert_eq!(ui.calls()[0].command, "npm run build");
}

#[tokio::test]
async fn empty_ui_output_parses_command_text() {
    let ui = FakeUi::new().responding(Ok(String::new()));
    let harness = Harness::new().with_ui(&ui);

    let outputs = driver()
        .execute(args("echo '::set-output MY_KEY=MY_VALUE'"), &harness.ctx)
        .await
        .unwrap();

    assert_eq!(outputs.get("MY_KEY").map(String::as_str), Some("MY_VALUE"));
}

#[tokio::test]
async fn ui_success_without_markers_is_empty() {
    let ui = FakeUi::new();
    let harness = Harness::new().with_ui(&ui);

    let outputs = driver().execute(args("echo 'abc'"), &harness.ctx).await.unwrap();
    assert!(outputs.is_empty());
}

#[yare::parameterized(
    cancel = { UiError::UserCancel, ErrorKind::UserCancelled },
    timeout = { UiError::Timeout, ErrorKind::Timeout },
    failed = { UiError::Failed("terminal exited".into()), ErrorKind::NonZeroExit },
)]
fn ui_errors_are_classified(error: UiError, expected: ErrorKind) {
    let ui = FakeUi::new().responding(Err(error));
    let harness = Harness::new().with_ui(&ui);

    let err = run_async(driver().execute(args("echo '::set-output K=v'"), &harness.ctx)).unwrap_err();

    assert_eq!(err.kind(), Some(expected));
    assert_eq!(harness.progress_ended(), Some(false));
}

#[tokio::test]
async fn cancel_skips_redirect() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("log");
    let ui = FakeUi::new().responding(Err(UiError::UserCancel));
    let harness = Harness::new().with_ui(&ui);

    let result = driver()
        .execute(args("echo '::set-output K=v'").redirect_to(&target), &harness.ctx)
        .await;

    assert!(result.is_err());
    assert!(!target.exists());
}

#[tokio::test]
async fn ui_output_is_appended_to_redirect() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("log");
    let ui = FakeUi::new().responding(Ok("hello from terminal\n".into()));
    let harness = Harness::new().with_ui(&ui);

    driver().execute(args("serve").redirect_to(&target), &harness.ctx).await.unwrap();

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "hello from terminal\n");
}

#[tokio::test]
async fn ui_receives_resolved_request() {
    let ui = FakeUi::new();
    let harness = Harness::new().with_ui(&ui).with_project_path(Path::new("/work/app"));
    let request = ExecutionRequest::builder("npm start")
        .working_directory("frontend")
        .shell("pwsh")
        .timeout_ms(1_000)
        .build();

    driver().execute(ScriptArgs::new(request), &harness.ctx).await.unwrap();

    let call = &ui.calls()[0];
    assert_eq!(call.working_directory, PathBuf::from("/work/app/frontend"));
    assert_eq!(call.shell.as_deref(), Some("pwsh"));
    assert_eq!(call.timeout, Some(Duration::from_secs(1)));
}

#[tokio::test]
async fn ui_gets_executor_default_timeout() {
    let ui = FakeUi::new();
    let harness = Harness::new().with_ui(&ui);
    let driver = ScriptDriver::new(executor().with_default_timeout(Some(Duration::from_secs(9))));

    driver.execute(args("npm start"), &harness.ctx).await.unwrap();

    assert_eq!(ui.calls()[0].timeout, Some(Duration::from_secs(9)));
}

#[tokio::test]
async fn progress_ticks_on_ui_success() {
    let ui = FakeUi::new();
    let harness = Harness::new().with_ui(&ui);

    driver().execute(args("npm start"), &harness.ctx).await.unwrap();

    assert_eq!(
        harness.progress.events(),
        vec![
            ProgressEvent::Start(PROGRESS_TITLE.to_string()),
            ProgressEvent::Next("npm start".to_string()),
            ProgressEvent::End(true),
        ]
    );
}

#[tokio::test]
async fn ui_path_does_not_stream_to_log() {
    let ui = FakeUi::new().responding(Ok("text\n".into()));
    let harness = Harness::new().with_ui(&ui);

    driver().execute(args("npm start"), &harness.ctx).await.unwrap();
    assert!(harness.log.lines().is_empty());
}
