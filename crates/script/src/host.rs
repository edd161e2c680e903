// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host probing: platform, environment, filesystem and helper commands.
//!
//! The shell and encoding resolvers only talk to the OS through
//! [`HostProbe`], so they can be exercised against simulated platforms.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

/// Upper bound for helper queries such as `chcp` or `locale charmap`.
const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Operating system family, as far as shell and encoding resolution care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    /// BSDs and anything else.
    Other,
}

fx_core::simple_display! {
    Platform {
        Windows => "windows",
        MacOs => "macos",
        Linux => "linux",
        Other => "other",
    }
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }

    pub fn is_windows(self) -> bool {
        self == Platform::Windows
    }
}

/// Read-only view of the host used by the resolvers.
#[async_trait]
pub trait HostProbe: Send + Sync {
    fn platform(&self) -> Platform;

    /// Environment variable lookup; empty values count as unset.
    fn env_var(&self, key: &str) -> Option<String>;

    async fn path_exists(&self, path: &Path) -> bool;

    /// Run a helper command and return its stdout.
    async fn query(&self, program: &str, args: &[&str]) -> std::io::Result<String>;
}

/// The real operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemHost;

#[async_trait]
impl HostProbe for SystemHost {
    fn platform(&self) -> Platform {
        Platform::current()
    }

    fn env_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }

    async fn path_exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn query(&self, program: &str, args: &[&str]) -> std::io::Result<String> {
        let mut cmd = tokio::process::Command::new(program);
        cmd.args(args).stdin(std::process::Stdio::null()).kill_on_drop(true);

        let output = tokio::time::timeout(QUERY_TIMEOUT, cmd.output())
            .await
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::TimedOut, "query timed out"))??;

        if !output.status.success() {
            return Err(std::io::Error::other(format!(
                "`{program}` exited with {}",
                output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{HostProbe, Platform};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    struct FakeHostState {
        platform: Platform,
        env: HashMap<String, String>,
        paths: HashSet<PathBuf>,
        /// Keyed by program name. `Err` simulates a failed spawn.
        queries: HashMap<String, Result<String, String>>,
        query_calls: Vec<String>,
        probed: Vec<PathBuf>,
    }

    /// Simulated host for resolver tests
    #[derive(Clone)]
    pub struct FakeHost {
        inner: Arc<Mutex<FakeHostState>>,
    }

    impl FakeHost {
        pub fn new(platform: Platform) -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeHostState {
                    platform,
                    env: HashMap::new(),
                    paths: HashSet::new(),
                    queries: HashMap::new(),
                    query_calls: Vec::new(),
                    probed: Vec::new(),
                })),
            }
        }

        pub fn with_env(self, key: &str, value: &str) -> Self {
            self.inner.lock().env.insert(key.to_string(), value.to_string());
            self
        }

        pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
            self.inner.lock().paths.insert(path.into());
            self
        }

        /// Answer queries for `program` with `stdout`.
        pub fn with_query(self, program: &str, stdout: &str) -> Self {
            self.inner.lock().queries.insert(program.to_string(), Ok(stdout.to_string()));
            self
        }

        /// Make queries for `program` fail.
        pub fn with_failing_query(self, program: &str, error: &str) -> Self {
            self.inner.lock().queries.insert(program.to_string(), Err(error.to_string()));
            self
        }

        /// Program names queried so far, in order.
        pub fn query_calls(&self) -> Vec<String> {
            self.inner.lock().query_calls.clone()
        }

        /// Paths probed for existence so far, in order.
        pub fn probed_paths(&self) -> Vec<PathBuf> {
            self.inner.lock().probed.clone()
        }
    }

    #[async_trait]
    impl HostProbe for FakeHost {
        fn platform(&self) -> Platform {
            self.inner.lock().platform
        }

        fn env_var(&self, key: &str) -> Option<String> {
            self.inner.lock().env.get(key).filter(|v| !v.is_empty()).cloned()
        }

        async fn path_exists(&self, path: &Path) -> bool {
            let mut inner = self.inner.lock();
            inner.probed.push(path.to_path_buf());
            inner.paths.contains(path)
        }

        async fn query(&self, program: &str, _args: &[&str]) -> std::io::Result<String> {
            let mut inner = self.inner.lock();
            inner.query_calls.push(program.to_string());
            match inner.queries.get(program) {
                Some(Ok(stdout)) => Ok(stdout.clone()),
                Some(Err(e)) => Err(std::io::Error::other(e.clone())),
                None => Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{program}: not found"),
                )),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeHost;

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
