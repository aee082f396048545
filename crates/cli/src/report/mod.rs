// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint result output.
//!
//! Writes a [`LintOutcome`] as colored text or JSON.

mod json;
mod text;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::command::DeliveryMode;
use crate::output::Offense;
use crate::runner::LintOutcome;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Label shown instead of a temp file path.
pub const UNSAVED_LABEL: &str = "<unsaved>";

/// Output formatter for lint results.
pub trait ReportFormatter {
    /// Write the full report for `outcome`.
    fn write(&self, outcome: &LintOutcome, out: &mut dyn WriteColor) -> std::io::Result<()>;
}

/// Formatter for the requested output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Path to show for an offense.
///
/// Temp file paths mean nothing to the user, so unsaved buffers get a label.
pub fn display_path<'a>(outcome: &LintOutcome, offense: &'a Offense) -> &'a str {
    match outcome.invocation.delivery {
        DeliveryMode::TempFile { .. } => UNSAVED_LABEL,
        DeliveryMode::Stdin => &offense.file,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
