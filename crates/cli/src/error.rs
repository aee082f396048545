// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

/// Errors raised while preparing or running an erblint invocation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings file could not be read or parsed.
    #[error("invalid settings in {}: {message}", path.display())]
    Settings { path: PathBuf, message: String },

    /// The linter process could not be started.
    #[error("failed to launch `{program}`")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing buffer content to the linter's stdin failed.
    #[error("failed to write content to `{program}` stdin")]
    Stdin {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Exit code reported for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Settings { .. } => ExitCode::ConfigError,
            Error::Launch { .. } | Error::Stdin { .. } | Error::Io(_) => ExitCode::InternalError,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No offenses (or the requested lookup succeeded).
    Success = 0,
    /// Offenses were reported, or a lookup found nothing.
    CheckFailed = 1,
    /// Settings could not be loaded.
    ConfigError = 2,
    /// Launch or I/O failure.
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
