// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for `fx run`.

use crate::prelude::*;

#[test]
fn prints_set_output_values() {
    cli()
        .args(["run", "--", "echo '::set-output MY_KEY=MY_VALUE'"])
        .passes()
        .stdout_eq("MY_KEY=MY_VALUE\n");
}

#[test]
fn teamsfx_env_markers_are_collected() {
    cli()
        .args([
            "run",
            "--",
            r#"echo "::set-teamsfx-env TAB_DOMAIN=localhost:53000"; echo "::set-teamsfx-env TAB_ENDPOINT=https://localhost:53000""#,
        ])
        .passes()
        .stdout_eq("TAB_DOMAIN=localhost:53000\nTAB_ENDPOINT=https://localhost:53000\n");
}

#[test]
fn plain_output_is_echoed_not_printed() {
    cli()
        .args(["run", "--", "echo abc"])
        .passes()
        .stdout_eq("")
        .stderr_has("abc")
        .stderr_has("Running script");
}

#[test]
fn quiet_suppresses_echo() {
    cli().args(["run", "-q", "--", "echo abc"]).passes().stderr_lacks("abc");
}

#[test]
fn words_are_joined_into_one_command() {
    cli().args(["run", "echo", "::set-output", "K=v"]).passes().stdout_eq("K=v\n");
}

#[test]
fn env_flag_reaches_command() {
    cli()
        .args(["run", "-e", "NAME=fx", "--", "echo \"::set-output HELLO=$NAME\""])
        .passes()
        .stdout_eq("HELLO=fx\n");
}

#[test]
fn json_output() {
    let run = cli()
        .args(["run", "-o", "json", "--", "echo '::set-output A=1'"])
        .passes();
    assert_eq!(run.json()["outputs"]["A"], "1");
}

#[test]
fn failing_command_exits_one_with_stderr() {
    cli()
        .args(["run", "-q", "--", "echo boom >&2; exit 3"])
        .exits_with(1)
        .stdout_eq("")
        .stderr_has("non-zero exit: boom");
}

#[test]
fn failure_as_json() {
    let run = cli().args(["run", "-q", "-o", "json", "--", "exit 2"]).exits_with(1);
    let json = run.json();
    assert_eq!(json["error"]["kind"], "non_zero_exit");
    assert_eq!(json["error"]["exit"]["code"], 2);
}

#[test]
fn timeout_exits_124() {
    cli()
        .args(["run", "-q", "--timeout", "300", "--", "echo started; sleep 30"])
        .exits_with(124)
        .stderr_has("command timed out")
        .stderr_has("started");
}

#[test]
fn timeout_from_env() {
    cli()
        .env("FX_SCRIPT_TIMEOUT_MS", "300")
        .args(["run", "-q", "--", "sleep 30"])
        .exits_with(124);
}

#[test]
fn missing_shell_exits_127() {
    cli()
        .args(["run", "-q", "--shell", "/no/such/shell", "--", "true"])
        .exits_with(127)
        .stderr_has("spawn failure");
}

#[test]
fn missing_cwd_exits_127() {
    cli()
        .args(["run", "-q", "--cwd", "/definitely/not/here", "--", "true"])
        .exits_with(127);
}

#[test]
fn redirect_appends_once() {
    let project = Project::empty();
    project.file("log", "previous\n");

    project
        .fx()
        .args(["run", "-q", "--redirect-to", "log", "--", "echo '::set-output MY_KEY=MY_VALUE'"])
        .passes()
        .stdout_eq("MY_KEY=MY_VALUE\n");

    assert_eq!(project.read("log"), "previous\n::set-output MY_KEY=MY_VALUE\n");
}

#[test]
fn redirect_is_skipped_on_failure() {
    let project = Project::empty();

    project.fx().args(["run", "-q", "--redirect-to", "log", "--", "exit 1"]).exits_with(1);

    assert!(!project.join("log").exists());
}

#[test]
fn project_anchors_relative_paths() {
    let project = Project::empty();
    project.file("app/marker", "inside app\n");

    cli()
        .args(["run", "-q", "--project"])
        .arg(project.path())
        .args(["--cwd", "app", "--redirect-to", "out.log", "--", "cat marker"])
        .passes();

    assert_eq!(project.read("out.log"), "inside app\n");
}

#[test]
fn config_default_timeout_applies() {
    let project = Project::empty();
    let config = project.file("fx.toml", "default_timeout_ms = 300\n");

    cli()
        .args(["run", "-q", "--config"])
        .arg(&config)
        .args(["--", "sleep 30"])
        .exits_with(124);
}

#[test]
fn invalid_config_is_reported() {
    let project = Project::empty();
    let config = project.file("fx.toml", "default_timeout_ms = \"soon\"\n");

    cli()
        .args(["run", "--config"])
        .arg(&config)
        .args(["--", "true"])
        .exits_with(1)
        .stderr_has("invalid config");
}

#[test]
fn interactive_parses_markers_from_command_text() {
    cli()
        .args(["run", "-i", "-q", "--", "echo '::set-output MY_KEY=MY_VALUE' > /dev/null"])
        .passes()
        .stdout_eq("MY_KEY=MY_VALUE\n");
}

#[test]
fn interactive_failure_exits_one() {
    cli().args(["run", "-i", "-q", "--", "exit 5"]).exits_with(1);
}

#[test]
fn command_is_required() {
    cli().args(["run"]).exits_with(2);
}
