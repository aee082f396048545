// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.


use termcolor::WriteColor;

use super::{ReportFormatter, display_path};
use crate::color::scheme;
use crate::runner::LintOutcome;

/// `path:line: message` per offense, then a summary line.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write(&self, outcome: &LintOutcome, out: &mut dyn WriteColor) -> std::io::Result<()> {
        for offense in &outcome.offenses {
            out.set_color(&scheme::path())?;
            write!(out, "{}", display_path(outcome, offense))?;
            out.reset()?;
            write!(out, ":")?;
            out.set_color(&scheme::line_number())?;
            write!(out, "{}", offense.line)?;
            out.reset()?;
            write!(out, ": ")?;
            out.set_color(&scheme::message())?;
            writeln!(out, "{}", offense.message)?;
            out.reset()?;
        }

        let count = outcome.offenses.len();
        if count == 0 {
            out.set_color(&scheme::pass())?;
            write!(out, "PASS")?;
            out.reset()?;
            writeln!(out, ": no offenses")?;
        } else {
            out.set_color(&scheme::fail())?;
            write!(out, "FAIL")?;
            out.reset()?;
            let noun = if count == 1 { "offense" } else { "offenses" };
            writeln!(out, ": {} {}", count, noun)?;
        }
        Ok(())
    }
}
