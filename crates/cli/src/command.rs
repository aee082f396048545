// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Builds the erblint command line for one lint request.
//!
//! When a path is known (the buffer's own path, or a placeholder inside the
//! first open folder) content is piped through stdin and erblint is told the
//! path and config explicitly. Otherwise content goes through a temp file
//! whose path replaces [`TEMP_FILE_TOKEN`] at launch.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Settings;
pub use crate::config::defaults::TEMP_FILE_TOKEN;
use crate::discovery;

/// How buffer content reaches the linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DeliveryMode {
    /// Content is written to the process's standard input.
    Stdin,
    /// Content is written to a temp file with this suffix (no dot).
    TempFile { suffix: String },
}

/// A fully built linter command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Program followed by its arguments.
    pub argv: Vec<String>,
    #[serde(flatten)]
    pub delivery: DeliveryMode,
    /// Path passed to `--stdin`, real or synthesized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lint_path: Option<PathBuf>,
    /// Config file found by discovery; `None` when the root sentinel was passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PathBuf>,
}

impl Invocation {
    /// Executable name.
    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or_default()
    }

    /// Arguments after the program name.
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }

    pub fn uses_stdin(&self) -> bool {
        self.delivery == DeliveryMode::Stdin
    }
}

/// Build the invocation for `target`, falling back to the first of `folders`
/// for unsaved buffers.
pub fn build(settings: &Settings, target: Option<&Path>, folders: &[PathBuf]) -> Invocation {
    let mut argv = vec![settings.executable.clone()];

    let lint_path = match target {
        Some(path) => Some(path.to_path_buf()),
        None => folders.first().map(|folder| {
            let placeholder = folder.join(&settings.placeholder_file);
            tracing::debug!("unsaved buffer, using {}", placeholder.display());
            placeholder
        }),
    };

    let Some(lint_path) = lint_path else {
        tracing::debug!("no path for buffer, linting through a temp file");
        argv.push(TEMP_FILE_TOKEN.to_string());
        return Invocation {
            argv,
            delivery: DeliveryMode::TempFile { suffix: settings.tempfile_suffix.clone() },
            lint_path: None,
            config: None,
        };
    };

    let config = discovery::find_config(&lint_path, &settings.config_file);
    let config_arg = match &config {
        Some(found) => found.clone(),
        None => discovery::root_sentinel(&lint_path, &settings.config_file),
    };

    argv.push("--config".to_string());
    argv.push(config_arg.to_string_lossy().into_owned());
    argv.push("--stdin".to_string());
    argv.push(lint_path.to_string_lossy().into_owned());

    Invocation { argv, delivery: DeliveryMode::Stdin, lint_path: Some(lint_path), config }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
