// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter settings.
//!
//! Every key is optional; an absent settings file means all defaults.

pub mod defaults;

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Settings controlling how erblint is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Linter executable name or path.
    #[serde(default = "Settings::default_executable")]
    pub executable: String,

    /// Config file name searched for in ancestor directories.
    #[serde(default = "Settings::default_config_file")]
    pub config_file: String,

    /// File name used to place unsaved buffers inside the first open folder.
    #[serde(default = "Settings::default_placeholder_file")]
    pub placeholder_file: String,

    /// Temp file suffix (without the dot) when content cannot go through stdin.
    #[serde(default = "Settings::default_tempfile_suffix")]
    pub tempfile_suffix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            executable: Self::default_executable(),
            config_file: Self::default_config_file(),
            placeholder_file: Self::default_placeholder_file(),
            tempfile_suffix: Self::default_tempfile_suffix(),
        }
    }
}

impl Settings {
    pub(crate) fn default_executable() -> String {
        defaults::EXECUTABLE.to_string()
    }

    pub(crate) fn default_config_file() -> String {
        defaults::CONFIG_FILE.to_string()
    }

    pub(crate) fn default_placeholder_file() -> String {
        defaults::PLACEHOLDER_FILE.to_string()
    }

    pub(crate) fn default_tempfile_suffix() -> String {
        defaults::TEMPFILE_SUFFIX.to_string()
    }

    /// Parse settings from TOML text. `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let settings: Settings = toml::from_str(content).map_err(|e| Error::Settings {
            path: path.to_path_buf(),
            message: e.to_string().trim_end().to_string(),
        })?;
        settings.validate(path)?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Settings {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let settings = Self::parse(&content, path)?;
        tracing::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` when given, else fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |message: &str| Error::Settings {
            path: path.to_path_buf(),
            message: message.to_string(),
        };
        if self.executable.trim().is_empty() {
            return Err(invalid("executable must not be empty"));
        }
        if self.config_file.is_empty() || self.config_file.contains(['/', '\\']) {
            return Err(invalid("config_file must be a plain file name"));
        }
        if self.placeholder_file.is_empty() || self.placeholder_file.contains(['/', '\\']) {
            return Err(invalid("placeholder_file must be a plain file name"));
        }
        if self.tempfile_suffix.starts_with('.') {
            return Err(invalid("tempfile_suffix must not start with a dot"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
