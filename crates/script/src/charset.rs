// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Encoding resolution and decoding of child process output.

use encoding_rs::{CoderResult, Decoder, Encoding, UTF_8};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::host::{HostProbe, Platform};

/// Encoding used whenever detection fails.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Windows code pages with a known label.
const CODE_PAGES: &[(u32, &str)] = &[
    (65001, "utf-8"),
    (936, "gb2312"),
    (950, "big5"),
    (932, "shift_jis"),
    (949, "euc-kr"),
    (866, "ibm866"),
    (874, "windows-874"),
    (1250, "windows-1250"),
    (1251, "windows-1251"),
    (1252, "windows-1252"),
    (1253, "windows-1253"),
    (1254, "windows-1254"),
    (1255, "windows-1255"),
    (1256, "windows-1256"),
    (1257, "windows-1257"),
    (1258, "windows-1258"),
    (20127, "us-ascii"),
];

/// Tools whose output encoding is fixed regardless of the OS locale.
///
/// Keys are matched as substrings of the command text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodingOverrides(IndexMap<String, String>);

impl Default for EncodingOverrides {
    fn default() -> Self {
        let mut table = IndexMap::new();
        table.insert("@azure/static-web-apps-cli".to_string(), "utf8".to_string());
        Self(table)
    }
}

impl EncodingOverrides {
    /// An empty table, without the built-in entries.
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, package: impl Into<String>, label: impl Into<String>) {
        self.0.insert(package.into(), label.into());
    }

    /// Label for the first package named in `command`.
    pub fn lookup(&self, command: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(package, _)| !package.is_empty() && command.contains(package.as_str()))
            .map(|(_, label)| label.as_str())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Resolve the encoding of `command`'s output on `host`. Never fails.
pub async fn resolve(host: &dyn HostProbe, command: &str, overrides: &EncodingOverrides) -> String {
    if let Some(label) = overrides.lookup(command) {
        return label.to_string();
    }

    let platform = host.platform();
    let detected = match platform {
        Platform::Windows => match host.query("cmd", &["/d", "/c", "chcp"]).await {
            Ok(out) => parse_code_page(&out).and_then(code_page_label).map(str::to_string),
            Err(e) => {
                tracing::debug!(error = %e, "code page query failed");
                None
            }
        },
        Platform::Linux | Platform::MacOs => match host.query("locale", &["charmap"]).await {
            Ok(out) => parse_locale_charset(&out),
            Err(e) => {
                tracing::debug!(error = %e, "locale query failed");
                None
            }
        },
        Platform::Other => None,
    };

    match detected {
        Some(label) => label,
        None => {
            tracing::debug!(%platform, "falling back to default encoding");
            DEFAULT_ENCODING.to_string()
        }
    }
}

/// Extract the code page number from `chcp` output, e.g. `Active code page: 936`.
///
/// Takes the last run of digits so localized prefixes and trailing dots are ignored.
pub fn parse_code_page(output: &str) -> Option<u32> {
    output
        .split(|c: char| !c.is_ascii_digit())
        .rev()
        .find(|run| !run.is_empty())
        .and_then(|run| run.parse().ok())
}

pub fn code_page_label(code_page: u32) -> Option<&'static str> {
    CODE_PAGES.iter().find(|(cp, _)| *cp == code_page).map(|(_, label)| *label)
}

/// Charset named by `locale charmap` or a locale string.
///
/// `UTF-8`, `zh_CN.UTF-8` and `de_DE.UTF-8@euro` all give `utf-8`; a bare
/// charset with dots of its own (`ANSI_X3.4-1968`) is kept whole.
pub fn parse_locale_charset(output: &str) -> Option<String> {
    let trimmed = output.trim();
    let trimmed = trimmed.split('@').next().unwrap_or(trimmed);
    let charset = if Encoding::for_label(trimmed.as_bytes()).is_some() {
        trimmed
    } else {
        trimmed.rsplit_once('.').map_or(trimmed, |(_, charset)| charset)
    };
    let charset = charset.trim();
    if charset.is_empty() {
        None
    } else {
        Some(charset.to_ascii_lowercase())
    }
}

/// Encoding for `label`, UTF-8 when the label is unknown.
pub fn encoding_for(label: &str) -> &'static Encoding {
    Encoding::for_label(label.trim().as_bytes()).unwrap_or(UTF_8)
}

/// Incremental decoder for one output stream.
///
/// Keeps partial multibyte sequences between chunks, so a character split
/// across two reads decodes once both halves have arrived.
pub struct StreamDecoder {
    decoder: Decoder,
    finished: bool,
}

impl StreamDecoder {
    pub fn new(label: &str) -> Self {
        Self { decoder: encoding_for(label).new_decoder_with_bom_removal(), finished: false }
    }

    /// Decode the next chunk.
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        self.push(bytes, false)
    }

    /// Flush any buffered partial sequence. Later calls return empty strings.
    pub fn finish(&mut self) -> String {
        self.push(&[], true)
    }

    fn push(&mut self, mut bytes: &[u8], last: bool) -> String {
        let mut text = String::new();
        if self.finished {
            return text;
        }
        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length(bytes.len())
                .unwrap_or_else(|| bytes.len().saturating_mul(3))
                .max(16);
            text.reserve(needed);
            let (result, read, _) = self.decoder.decode_to_string(bytes, &mut text, last);
            bytes = &bytes[read..];
            if let CoderResult::InputEmpty = result {
                break;
            }
        }
        self.finished = last;
        text
    }
}

#[cfg(test)]
#[path = "charset_tests.rs"]
mod tests;
