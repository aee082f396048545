// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// Runs erblint on ERB buffers the way an editor would
#[derive(Parser)]
#[command(name = "erblint-adapter")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Adapter settings file (TOML)
    #[arg(long, global = true, env = "ERBLINT_ADAPTER_SETTINGS", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lint a file or an unsaved buffer with erblint
    Lint(LintArgs),
    /// Print the erblint config file that applies to a path
    Locate(LocateArgs),
    /// Print the erblint command line without running it
    #[command(name = "command")]
    ShowCommand(TargetArgs),
}

/// Where the buffer lives, as far as the editor knows.
#[derive(clap::Args)]
pub struct TargetArgs {
    /// Path of the file being linted (omit for unsaved buffers)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Open project folder; the first one hosts unsaved buffers
    #[arg(long = "folder", value_name = "DIR")]
    pub folders: Vec<PathBuf>,

    /// Linter executable (overrides the settings file)
    #[arg(long, env = "ERBLINT_ADAPTER_EXECUTABLE", value_name = "NAME")]
    pub executable: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct LintArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Read buffer content from stdin instead of PATH
    #[arg(long)]
    pub stdin: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

impl LintArgs {
    /// File to read buffer content from; `None` means read stdin.
    pub fn content_file(&self) -> Option<&Path> {
        if self.stdin { None } else { self.target.path.as_deref() }
    }
}

#[derive(clap::Args)]
pub struct LocateArgs {
    /// File whose config should be found (need not exist)
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
