// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of erblint's text output.
//!
//! Each offense is a message line followed by `In file: <path>:<line>`:
//!
//! ```text
//! Tag `input` is self-closing, it must end with `/>`.
//! In file: app/views/foo.html.erb:123
//! ```
//!
//! Everything else erblint prints (banner, summary, the missing config
//! warning) is ignored.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Message line followed by the `In file:` location line.
#[allow(clippy::expect_used)]
static OFFENSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?P<message>.*)\r?\nIn file: (?P<file>.*):(?P<line>[0-9]+)")
        .expect("valid regex pattern")
});

/// A single offense reported by erblint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offense {
    /// 1-based line number.
    pub line: u32,
    pub message: String,
    /// Path as printed by erblint (the `--stdin` path, or the temp file).
    pub file: String,
}

/// Extract every offense from erblint's stdout.
pub fn parse_offenses(stdout: &str) -> Vec<Offense> {
    OFFENSE_PATTERN
        .captures_iter(stdout)
        .filter_map(|caps| {
            let line = match caps["line"].parse() {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("ignoring offense with bad line number {}: {}", &caps["line"], e);
                    return None;
                }
            };
            Some(Offense {
                line,
                message: caps["message"].trim_end().to_string(),
                file: caps["file"].to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
