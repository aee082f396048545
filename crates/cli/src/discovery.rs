// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the directory containing a file up to the filesystem root
//! looking for the erblint config file (`.erb-lint.yml` by default).

use std::path::{Component, Path, PathBuf};

/// Find `file_name` in the directory containing `start` or any of its ancestors.
///
/// Returns the nearest match, or `None` once the filesystem root has been
/// checked. `start` does not need to exist; relative paths are resolved
/// against the current directory.
pub fn find_config(start: &Path, file_name: &str) -> Option<PathBuf> {
    let dir = search_dir(start);
    tracing::debug!("looking for {} from {}", file_name, dir.display());

    // Lexical walk: `ancestors()` ends after the root, so this always terminates.
    for current in dir.ancestors() {
        let config_path = current.join(file_name);
        if config_path.exists() {
            tracing::debug!("found {}", config_path.display());
            return Some(config_path);
        }
        tracing::trace!("not found in {}", current.display());
    }

    tracing::debug!("no {} above {}", file_name, dir.display());
    None
}

/// Path used in place of a config file when none was found.
///
/// This is the root of `start`'s ancestor chain joined with `file_name`,
/// which usually does not exist.
pub fn root_sentinel(start: &Path, file_name: &str) -> PathBuf {
    let dir = search_dir(start);
    let root = dir.ancestors().last().unwrap_or(dir.as_path());
    root.join(file_name)
}

/// Directory the search starts from: the absolute, normalized parent of `start`.
fn search_dir(start: &Path) -> PathBuf {
    let start = normalize(&std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf()));
    match start.parent() {
        Some(parent) => parent.to_path_buf(),
        // `start` is itself a root
        None => start,
    }
}

/// Resolve `.` and `..` lexically so every ancestor really contains `path`.
///
/// `..` above the root stays at the root. Symlinks are not followed.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
