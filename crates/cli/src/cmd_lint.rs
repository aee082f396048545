// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `erblint-adapter lint` command implementation.

use std::io::Read;

use anyhow::Context;
use termcolor::StandardStream;

use erblint_adapter::cli::LintArgs;
use erblint_adapter::config::Settings;
use erblint_adapter::error::ExitCode;
use erblint_adapter::{command, report, runner};

/// Run erblint on one buffer and print its offenses.
pub fn run(args: &LintArgs, mut settings: Settings) -> anyhow::Result<ExitCode> {
    if let Some(executable) = &args.target.executable {
        settings.executable = executable.clone();
    }

    let content = match args.content_file() {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).context("failed to read buffer from stdin")?;
            buf
        }
    };

    let invocation =
        command::build(&settings, args.target.path.as_deref(), &args.target.folders);
    let outcome = runner::run(&invocation, &content)?;

    let mut out = StandardStream::stdout(args.color.choice(args.no_color));
    report::formatter(args.target.output).write(&outcome, &mut out)?;

    Ok(if outcome.passed() { ExitCode::Success } else { ExitCode::CheckFailed })
}
