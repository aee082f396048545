// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runs an [`Invocation`] and collects erblint's offenses.
//!
//! One synchronous process per request: no retries, no timeout. A failed
//! launch is an error, never an empty result.

use std::io::Write;
use std::process::{Command, Stdio};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::command::{DeliveryMode, Invocation, TEMP_FILE_TOKEN};
use crate::error::{Error, Result};
use crate::output::{Offense, parse_offenses};

/// Result of one erblint run.
#[derive(Debug, Clone, Serialize)]
pub struct LintOutcome {
    pub invocation: Invocation,
    /// Exit code, `None` if the process was killed by a signal.
    pub status: Option<i32>,
    pub offenses: Vec<Offense>,
}

impl LintOutcome {
    pub fn passed(&self) -> bool {
        self.offenses.is_empty()
    }
}

/// Launch erblint for `invocation`, delivering `content` the way it asks.
pub fn run(invocation: &Invocation, content: &[u8]) -> Result<LintOutcome> {
    // Held until the process exits; dropping it deletes the file.
    let temp_file = match &invocation.delivery {
        DeliveryMode::Stdin => None,
        DeliveryMode::TempFile { suffix } => Some(write_temp_file(content, suffix)?),
    };

    let args: Vec<String> = match &temp_file {
        Some(file) => {
            let path = file.path().to_string_lossy().into_owned();
            invocation
                .args()
                .iter()
                .map(|arg| if arg == TEMP_FILE_TOKEN { path.clone() } else { arg.clone() })
                .collect()
        }
        None => invocation.args().to_vec(),
    };

    let program = invocation.program();
    tracing::debug!("running {} {}", program, args.join(" "));

    let mut child = Command::new(program)
        .args(&args)
        .stdin(if invocation.uses_stdin() { Stdio::piped() } else { Stdio::null() })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| Error::Launch { program: program.to_string(), source })?;

    let stdin = child.stdin.take();
    let (output, written) = std::thread::scope(|scope| {
        // Feed stdin from a helper so a chatty linter can't fill stdout and stall.
        let writer = stdin.map(|mut stdin| {
            scope.spawn(move || {
                let result = stdin.write_all(content);
                drop(stdin);
                result
            })
        });
        let output = child.wait_with_output();
        let written = match writer.map(|handle| handle.join()) {
            Some(Ok(result)) => result,
            Some(Err(_)) => Err(std::io::Error::other("stdin writer panicked")),
            None => Ok(()),
        };
        (output, written)
    });

    let output = output?;
    match written {
        // The linter may exit before reading everything; its output still counts.
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
            tracing::debug!("{} closed stdin early", program);
        }
        Err(source) => return Err(Error::Stdin { program: program.to_string(), source }),
        Ok(()) => {}
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        tracing::debug!("{} stderr: {}", program, stderr.trim_end());
    }

    let offenses = parse_offenses(&stdout);
    let status = output.status.code();
    if !output.status.success() && offenses.is_empty() {
        tracing::warn!("{} exited with {} but reported no offenses", program, output.status);
    }

    Ok(LintOutcome { invocation: invocation.clone(), status, offenses })
}

fn write_temp_file(content: &[u8], suffix: &str) -> Result<NamedTempFile> {
    let suffix = if suffix.is_empty() { String::new() } else { format!(".{suffix}") };
    let mut file = tempfile::Builder::new().prefix("erblint-").suffix(&suffix).tempfile()?;
    file.write_all(content)?;
    file.flush()?;
    tracing::debug!("wrote buffer to {}", file.path().display());
    Ok(file)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
