// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.


use serde_json::json;
use termcolor::WriteColor;

use super::{ReportFormatter, display_path};
use crate::runner::LintOutcome;

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn write(&self, outcome: &LintOutcome, out: &mut dyn WriteColor) -> std::io::Result<()> {
        let offenses: Vec<_> = outcome
            .offenses
            .iter()
            .map(|offense| {
                json!({
                    "file": display_path(outcome, offense),
                    "line": offense.line,
                    "message": offense.message,
                })
            })
            .collect();

        let report = json!({
            "passed": outcome.passed(),
            "status": outcome.status,
            "invocation": outcome.invocation,
            "offenses": offenses,
        });

        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)
    }
}
