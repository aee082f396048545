// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Individual settings delegate to these constants via their `default_*` methods.

/// Name of the linter executable looked up on `PATH`.
pub const EXECUTABLE: &str = "erblint";

/// Config file searched for in ancestor directories.
pub const CONFIG_FILE: &str = ".erb-lint.yml";

/// File name joined onto the first open folder for unsaved buffers.
pub const PLACEHOLDER_FILE: &str = "untitled.erb";

/// Suffix (without the dot) of the temp file used when no path is known.
pub const TEMPFILE_SUFFIX: &str = "erb";

/// Argument token replaced with the temp file path at launch time.
pub const TEMP_FILE_TOKEN: &str = "${temp_file}";
