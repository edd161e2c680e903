// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::adapters::{FakeLog, LogLevel};

#[test]
fn forwards_then_accumulates_in_order() {
    let log = FakeLog::new();
    let mut acc = StderrAccumulator::new();

    acc.handle(&log, "first ");
    acc.handle(&log, "second\n");

    assert_eq!(acc.join(), "first second\n");
    assert_eq!(log.text(LogLevel::Warn), "first second\n");
    assert!(log.lines().iter().all(|l| l.level == LogLevel::Warn));
}

#[test]
fn empty_until_text_arrives() {
    let log = FakeLog::new();
    let mut acc = StderrAccumulator::new();
    assert_eq!(acc.join(), "");

    acc.handle(&log, "x");
    assert_eq!(acc.join(), "x");
}
