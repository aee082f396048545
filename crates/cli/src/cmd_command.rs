// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `erblint-adapter command` command implementation.

use erblint_adapter::cli::{OutputFormat, TargetArgs};
use erblint_adapter::command::{self, DeliveryMode};
use erblint_adapter::config::Settings;
use erblint_adapter::error::ExitCode;

/// Print the command `lint` would run, without running it.
pub fn run(args: &TargetArgs, mut settings: Settings) -> anyhow::Result<ExitCode> {
    if let Some(executable) = &args.executable {
        settings.executable = executable.clone();
    }

    let invocation = command::build(&settings, args.path.as_deref(), &args.folders);

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&invocation)?),
        OutputFormat::Text => {
            println!("{}", invocation.argv.join(" "));
            match &invocation.delivery {
                DeliveryMode::Stdin => println!("content: stdin"),
                DeliveryMode::TempFile { suffix } => println!("content: temp file (.{})", suffix),
            }
            if let Some(config) = &invocation.config {
                println!("config: {}", config.display());
            }
        }
    }

    Ok(ExitCode::Success)
}
