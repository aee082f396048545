// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `erblint-adapter command`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use tempfile::TempDir;

use crate::prelude::*;

fn command_json(args: &[&std::ffi::OsStr]) -> serde_json::Value {
    let output = adapter_cmd().arg("command").args(args).args(["-o", "json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn saved_file_uses_config_and_stdin() {
    let temp = TempDir::new().unwrap();
    create_tree(temp.path(), &[(".erb-lint.yml", "---\n")]);
    let target = temp.path().join("app/views/foo.erb");

    let json = command_json(&[target.as_os_str()]);

    assert_eq!(json["mode"], "stdin");
    assert_eq!(json["argv"][0], "erblint");
    assert_eq!(json["argv"][1], "--config");
    assert_eq!(json["argv"][2], temp.path().join(".erb-lint.yml").to_str().unwrap());
    assert_eq!(json["argv"][3], "--stdin");
    assert_eq!(json["argv"][4], target.to_str().unwrap());
}

#[test]
fn unsaved_buffer_in_folder_uses_placeholder() {
    let temp = TempDir::new().unwrap();
    create_tree(temp.path(), &[(".erb-lint.yml", "---\n")]);

    let json = command_json(&[std::ffi::OsStr::new("--folder"), temp.path().as_os_str()]);

    assert_eq!(json["mode"], "stdin");
    assert_eq!(json["argv"][4], temp.path().join("untitled.erb").to_str().unwrap());
    assert_eq!(json["config"], temp.path().join(".erb-lint.yml").to_str().unwrap());
}

#[test]
fn unsaved_buffer_without_folder_uses_temp_file() {
    adapter_cmd()
        .arg("command")
        .assert()
        .success()
        .stdout("erblint ${temp_file}\ncontent: temp file (.erb)\n");
}

#[test]
fn executable_flag_overrides_program() {
    adapter_cmd()
        .args(["command", "--executable", "bin/erblint"])
        .assert()
        .success()
        .stdout(predicates::str::starts_with("bin/erblint ${temp_file}"));
}

#[test]
fn executable_env_overrides_program() {
    adapter_cmd()
        .arg("command")
        .env("ERBLINT_ADAPTER_EXECUTABLE", "bundle-erblint")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("bundle-erblint "));
}
