// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML configuration for the script engine.
//!
//! ```toml
//! default_timeout_ms = 600000
//!
//! [encoding_overrides]
//! "@azure/static-web-apps-cli" = "utf8"
//! "legacy-tool" = "gbk"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::charset::EncodingOverrides;
use crate::env;
use crate::exec::ProcessExecutor;
use crate::host::HostProbe;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptConfig {
    /// Timeout for requests that carry none. Zero disables it.
    pub default_timeout_ms: Option<u64>,
    /// Extra command-substring to encoding-label entries.
    pub encoding_overrides: IndexMap<String, String>,
}

impl ScriptConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Built-in overrides with the configured entries layered on top.
    pub fn encoding_overrides(&self) -> EncodingOverrides {
        let mut overrides = EncodingOverrides::default();
        for (package, label) in &self.encoding_overrides {
            overrides.insert(package.clone(), label.clone());
        }
        overrides
    }

    /// Configured timeout, else `FX_SCRIPT_TIMEOUT_MS`.
    pub fn default_timeout(&self) -> Option<Duration> {
        match self.default_timeout_ms {
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms)),
            None => env::default_timeout(),
        }
    }

    /// Executor on `host` with this configuration applied.
    pub fn executor<H: HostProbe>(&self, host: H) -> ProcessExecutor<H> {
        ProcessExecutor::new(host)
            .with_overrides(self.encoding_overrides())
            .with_default_timeout(self.default_timeout())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
