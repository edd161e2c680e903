// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scanner for the `::set-output` / `::set-teamsfx-env` marker protocol.
//!
//! ```text
//! ::set-output KEY=VALUE
//! ::set-teamsfx-env KEY="VALUE WITH SPACES"
//! ```
//!
//! Grammar, per marker: marker token, one or more spaces/tabs, a key of
//! `[A-Za-z0-9_]+`, `=`, then a value that is `"..."`, `'...'` or a bareword
//! ending at whitespace, `;` or a quote. Quoted values end at the closing
//! quote on the same line; bareword values are taken literally (`+` stays `+`).

use fx_core::OutputMap;

/// Recognised marker tokens. Both behave identically.
pub const MARKERS: [&str; 2] = ["::set-output", "::set-teamsfx-env"];

/// Extract every key/value pair from `text`. Later keys overwrite earlier ones.
pub fn parse(text: &str) -> OutputMap {
    let mut outputs = OutputMap::new();
    let mut scanner = Scanner::new(text);
    while let Some((key, value)) = scanner.next_pair() {
        outputs.insert(key.to_string(), value.to_string());
    }
    outputs
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance to the next well-formed assignment.
    fn next_pair(&mut self) -> Option<(&'a str, &'a str)> {
        loop {
            let offset = self.rest().find("::")?;
            let start = self.pos + offset;
            self.pos = start;
            if let Some(pair) = self.assignment() {
                return Some(pair);
            }
            // Malformed marker: resume just past its leading `::`.
            self.pos = start + 2;
        }
    }

    fn assignment(&mut self) -> Option<(&'a str, &'a str)> {
        let marker = MARKERS.iter().find(|m| self.rest().starts_with(**m))?;
        self.pos += marker.len();

        if self.take_while(|c| c == ' ' || c == '\t').is_empty() {
            return None;
        }
        let key = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
        if key.is_empty() || self.peek() != Some('=') {
            return None;
        }
        self.pos += 1;

        let value = self.value()?;
        Some((key, value))
    }

    fn value(&mut self) -> Option<&'a str> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                let body = &self.rest()[1..];
                let end = body.find([quote, '\n'])?;
                if !body[end..].starts_with(quote) {
                    return None;
                }
                self.pos += 1 + end + 1;
                Some(&body[..end])
            }
            _ => Some(self.take_while(|c| !c.is_whitespace() && !matches!(c, ';' | '"' | '\''))),
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }
}

#[cfg(test)]
#[path = "set_output_tests.rs"]
mod tests;
