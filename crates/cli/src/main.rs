// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use erblint_adapter::cli::{Cli, Command};
use erblint_adapter::config::Settings;
use erblint_adapter::error::ExitCode;

mod cmd_command;
mod cmd_lint;
mod cmd_locate;

/// Environment variable holding a tracing filter, e.g. `erblint_adapter=trace`.
const LOG_ENV: &str = "ERBLINT_ADAPTER_LOG";

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("erblint-adapter: {:#}", e);
            let code = e
                .downcast_ref::<erblint_adapter::error::Error>()
                .map_or(ExitCode::InternalError, |e| e.exit_code());
            code.into()
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let settings = Settings::load_or_default(cli.settings.as_deref())?;

    match &cli.command {
        Command::Lint(args) => cmd_lint::run(args, settings),
        Command::Locate(args) => cmd_locate::run(args, &settings),
        Command::ShowCommand(args) => cmd_command::run(args, settings),
    }
}
