// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use fx_core::{ErrorKind, ExitInfo};
use similar_asserts::assert_eq;

fn outputs() -> OutputMap {
    let mut outputs = OutputMap::new();
    outputs.insert("TAB_DOMAIN".into(), "localhost:53000".into());
    outputs.insert("GREETING".into(), "hello world".into());
    outputs
}

#[test]
fn text_lists_pairs_in_order() {
    let text = render_outputs(&outputs(), OutputFormat::Text).unwrap();
    assert_eq!(text, "TAB_DOMAIN=localhost:53000\nGREETING=hello world\n");
}

#[test]
fn text_of_empty_map_is_empty() {
    assert_eq!(render_outputs(&OutputMap::new(), OutputFormat::Text).unwrap(), "");
}

#[test]
fn json_wraps_outputs() {
    let json = render_outputs(&outputs(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["outputs"]["TAB_DOMAIN"], "localhost:53000");
    assert_eq!(value["outputs"]["GREETING"], "hello world");
}

#[test]
fn failure_json_carries_kind_and_exit() {
    let failure = ScriptFailure::new(ErrorKind::Timeout, "sleep 9", "command timed out", ExitInfo::timed_out());
    let json = render_failure_json(&failure).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["error"]["kind"], "timeout");
    assert_eq!(value["error"]["command"], "sleep 9");
    assert_eq!(value["error"]["exit"]["killed"], true);
}

#[test]
fn default_format_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
