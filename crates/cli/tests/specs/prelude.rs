// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers shared by the specs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

pub use assert_cmd::Command;

/// `fx` with a clean, colorless environment.
pub fn cli() -> Command {
    let mut cmd = Command::cargo_bin("fx").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("FX_LOG")
        .env_remove("FX_SCRIPT_TIMEOUT_MS");
    cmd
}

/// Temporary project directory.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.join(rel)).unwrap()
    }

    pub fn fx(&self) -> Command {
        let mut cmd = cli();
        cmd.current_dir(self.path());
        cmd
    }
}

pub trait CommandExt {
    /// Run and require exit code 0.
    fn passes(&mut self) -> RunAssert;
    /// Run and require the given exit code.
    fn exits_with(&mut self, code: i32) -> RunAssert;
}

impl CommandExt for Command {
    fn passes(&mut self) -> RunAssert {
        self.exits_with(0)
    }

    fn exits_with(&mut self, code: i32) -> RunAssert {
        let output = self.output().unwrap();
        let run = RunAssert { output };
        assert_eq!(
            run.output.status.code(),
            Some(code),
            "unexpected exit\nstdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout missing {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr missing {needle:?}:\n{stderr}");
        self
    }

    pub fn stderr_lacks(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(!stderr.contains(needle), "stderr has {needle:?}:\n{stderr}");
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).unwrap()
    }
}
