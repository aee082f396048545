// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `erblint-adapter locate` command implementation.

use erblint_adapter::cli::LocateArgs;
use erblint_adapter::config::Settings;
use erblint_adapter::discovery;
use erblint_adapter::error::ExitCode;

/// Print the nearest config file for a path.
pub fn run(args: &LocateArgs, settings: &Settings) -> anyhow::Result<ExitCode> {
    match discovery::find_config(&args.path, &settings.config_file) {
        Some(path) => {
            println!("{}", path.display());
            Ok(ExitCode::Success)
        }
        None => {
            eprintln!("no {} found above {}", settings.config_file, args.path.display());
            Ok(ExitCode::CheckFailed)
        }
    }
}
