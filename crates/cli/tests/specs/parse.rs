// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for `fx parse`.

use crate::prelude::*;

#[test]
fn parses_stdin() {
    cli()
        .arg("parse")
        .write_stdin("Write-Host ::set-teamsfx-env Test0=\"multi word variable\"\nnoise\n::set-output B=2\n")
        .passes()
        .stdout_eq("Test0=multi word variable\nB=2\n");
}

#[test]
fn parses_file() {
    let project = Project::empty();
    let file = project.file("build.log", "step 1\n::set-output URL=https://example.com\n");

    cli().arg("parse").arg(&file).passes().stdout_eq("URL=https://example.com\n");
}

#[test]
fn text_without_markers_prints_nothing() {
    cli().arg("parse").write_stdin("abc\n").passes().stdout_eq("");
}

#[test]
fn json_of_empty_input_is_empty_object() {
    let run = cli().args(["parse", "-o", "json"]).write_stdin("").passes();
    assert_eq!(run.json()["outputs"], serde_json::json!({}));
}

#[test]
fn missing_file_fails() {
    cli()
        .args(["parse", "/no/such/file.log"])
        .exits_with(1)
        .stderr_has("failed to read");
}
