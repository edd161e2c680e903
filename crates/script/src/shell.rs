// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default shell resolution and shell command lines.

use std::path::Path;

use crate::env;
use crate::host::{HostProbe, Platform};

/// macOS shells, in order of preference.
pub const MACOS_CANDIDATES: [&str; 2] = ["/bin/zsh", "/bin/bash"];

/// POSIX fallback for everything that is neither macOS nor Windows.
pub const POSIX_FALLBACK: &str = "/bin/sh";

/// Windows fallback when `ComSpec` is unset. Not probed.
pub const WINDOWS_FALLBACK: &str = "cmd.exe";

/// Resolve the default interactive shell.
///
/// `None` means "let the platform pick", not an error.
pub async fn resolve(host: &dyn HostProbe) -> Option<String> {
    if let Some(shell) = host.env_var(env::SHELL) {
        return Some(shell);
    }

    match host.platform() {
        Platform::MacOs => first_existing(host, &MACOS_CANDIDATES).await,
        Platform::Windows => {
            Some(host.env_var(env::COMSPEC).unwrap_or_else(|| WINDOWS_FALLBACK.to_string()))
        }
        Platform::Linux | Platform::Other => first_existing(host, &[POSIX_FALLBACK]).await,
    }
}

async fn first_existing(host: &dyn HostProbe, candidates: &[&str]) -> Option<String> {
    for candidate in candidates {
        if host.path_exists(Path::new(candidate)).await {
            return Some((*candidate).to_string());
        }
    }
    tracing::debug!(?candidates, "no candidate shell found");
    None
}

/// How a shell expects a command string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlavor {
    /// `sh`, `bash`, `zsh`: `-c <command>`.
    Posix,
    /// `cmd.exe`: `/d /s /c "<command>"`.
    Cmd,
    /// `pwsh` or `powershell`: `-Command <command>`.
    PowerShell,
}

impl ShellFlavor {
    /// Detect the flavor from a shell path such as `C:\Windows\System32\cmd.exe`.
    pub fn of(shell: &str) -> Self {
        let name = shell.rsplit(['/', '\\']).next().unwrap_or(shell).to_ascii_lowercase();
        let stem = name.strip_suffix(".exe").unwrap_or(&name);
        match stem {
            "cmd" => ShellFlavor::Cmd,
            "pwsh" | "powershell" => ShellFlavor::PowerShell,
            _ => ShellFlavor::Posix,
        }
    }
}

/// Program and arguments that run a command through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Arguments must reach the program unquoted (cmd.exe on Windows).
    pub verbatim: bool,
}

impl Invocation {
    /// Process builder with program and arguments set; stdio, cwd and env
    /// are left to the caller.
    pub fn command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);

        #[cfg(windows)]
        if self.verbatim {
            for arg in &self.args {
                cmd.raw_arg(arg);
            }
        } else {
            cmd.args(&self.args);
        }
        #[cfg(not(windows))]
        cmd.args(&self.args);

        cmd
    }
}

/// Build the invocation for `command`; `None` uses the platform default shell.
pub fn invocation(shell: Option<&str>, command: &str, platform: Platform) -> Invocation {
    let program = match shell {
        Some(shell) => shell.to_string(),
        None if platform.is_windows() => WINDOWS_FALLBACK.to_string(),
        None => POSIX_FALLBACK.to_string(),
    };

    match ShellFlavor::of(&program) {
        ShellFlavor::Cmd => Invocation {
            program,
            args: vec!["/d".into(), "/s".into(), "/c".into(), format!("\"{command}\"")],
            verbatim: true,
        },
        ShellFlavor::PowerShell => Invocation {
            program,
            args: vec![
                "-NoProfile".into(),
                "-NonInteractive".into(),
                "-Command".into(),
                command.to_string(),
            ],
            verbatim: false,
        },
        ShellFlavor::Posix => {
            Invocation { program, args: vec!["-c".into(), command.to_string()], verbatim: false }
        }
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
