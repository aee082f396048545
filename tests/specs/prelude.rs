// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};

/// Returns a Command configured to run the erblint-adapter binary.
///
/// Settings and logging variables from the caller's environment are cleared.
pub fn adapter_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("erblint-adapter"));
    cmd.env_remove("ERBLINT_ADAPTER_SETTINGS")
        .env_remove("ERBLINT_ADAPTER_EXECUTABLE")
        .env_remove("ERBLINT_ADAPTER_LOG");
    cmd
}

/// Creates files under `root`, making parent directories as needed.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }
}

/// Stand-in for erblint.
///
/// Reads content from stdin (`--config ... --stdin PATH`) or from its last
/// argument (temp file mode) and reports one offense when it sees `<input>`.
#[cfg(unix)]
const FAKE_ERBLINT: &str = r#"#!/bin/sh
for arg; do last=$arg; done
if [ "$1" = "--config" ]; then
  content=$(cat)
else
  content=$(cat "$last")
fi
echo "Linting 1 files with 12 linters..."
echo
case "$content" in
  *"<input>"*)
    echo 'Tag `input` is self-closing, it must end with `/>`.'
    echo "In file: $last:1"
    echo
    echo "1 error(s) were found in ERB files"
    exit 1
    ;;
esac
echo "No errors were found in ERB files"
"#;

/// Writes the fake erblint into `dir` and returns its path.
#[cfg(unix)]
pub fn fake_erblint(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-erblint");
    std::fs::write(&path, FAKE_ERBLINT).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
