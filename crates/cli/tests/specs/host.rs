// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for `fx host`.

use crate::prelude::*;

#[test]
fn reports_platform_shell_and_encoding() {
    cli()
        .arg("host")
        .passes()
        .stdout_has("platform:")
        .stdout_has("shell:")
        .stdout_has("encoding:");
}

#[test]
fn shell_env_is_reported() {
    cli().env("SHELL", "/bin/bash").arg("host").passes().stdout_has("/bin/bash");
}

#[test]
fn override_applies_to_named_command() {
    cli()
        .args(["host", "--command", "npx @azure/static-web-apps-cli start"])
        .passes()
        .stdout_has("encoding: utf8");
}

#[test]
fn json_report() {
    let run = cli().args(["host", "-o", "json"]).passes();
    let json = run.json();
    assert!(json["platform"].is_string());
    assert!(json["encoding"].is_string());
}

#[test]
fn version_includes_build_hash() {
    cli().arg("--version").passes().stdout_has("fx 0.2.0 (");
}
