// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Progress and context: medium grey
    pub const CONTEXT: u8 = 245;
    /// Failure prefix: soft red
    pub const ERROR: u8 = 167;
}

/// Determine if color output should be enabled for `stream`.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
fn colorize(stream_is_terminal: bool) -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    stream_is_terminal
}

pub fn should_colorize() -> bool {
    colorize(std::io::stdout().is_terminal())
}

/// Same rules, for text written to stderr.
pub fn should_colorize_stderr() -> bool {
    colorize(std::io::stderr().is_terminal())
}

/// Build clap `Styles` using the project palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::HEADER)))))
        .literal(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::LITERAL)))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::CONTEXT)))))
}

const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b[38;5;{code}m{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Header color, for stdout.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text, should_colorize())
}

/// Literal color, for stdout.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text, should_colorize())
}

/// Context color, for stderr.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text, should_colorize_stderr())
}

/// Error color, for stderr.
pub fn error(text: &str) -> String {
    paint(codes::ERROR, text, should_colorize_stderr())
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
