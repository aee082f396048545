// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `erblint-adapter lint`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use tempfile::TempDir;

use crate::prelude::*;

#[cfg(unix)]
#[test]
fn clean_file_passes() {
    let temp = TempDir::new().unwrap();
    let erblint = fake_erblint(temp.path());
    create_tree(temp.path(), &[("app/show.erb", "<p>hello</p>\n")]);

    adapter_cmd()
        .arg("lint")
        .arg(temp.path().join("app/show.erb"))
        .arg("--executable")
        .arg(&erblint)
        .assert()
        .success()
        .stdout("PASS: no offenses\n");
}

#[cfg(unix)]
#[test]
fn offenses_exit_one_and_are_listed() {
    let temp = TempDir::new().unwrap();
    let erblint = fake_erblint(temp.path());
    create_tree(temp.path(), &[("app/form.erb", "<input>\n")]);
    let target = temp.path().join("app/form.erb");

    adapter_cmd()
        .arg("lint")
        .arg(&target)
        .arg("--executable")
        .arg(&erblint)
        .assert()
        .code(1)
        .stdout(
            predicates::str::contains(format!(
                "{}:1: Tag `input` is self-closing, it must end with `/>`.",
                target.display()
            ))
            .and(predicates::str::contains("FAIL: 1 offense")),
        );
}

#[cfg(unix)]
#[test]
fn unsaved_buffer_is_piped_from_stdin() {
    let temp = TempDir::new().unwrap();
    let erblint = fake_erblint(temp.path());

    let output = adapter_cmd()
        .args(["lint", "-o", "json", "--folder"])
        .arg(temp.path())
        .arg("--executable")
        .arg(&erblint)
        .write_stdin("<div><input></div>")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["invocation"]["mode"], "stdin");
    assert_eq!(json["offenses"][0]["file"], temp.path().join("untitled.erb").to_str().unwrap());
}

#[cfg(unix)]
#[test]
fn unsaved_buffer_without_folder_goes_through_temp_file() {
    let temp = TempDir::new().unwrap();
    let erblint = fake_erblint(temp.path());

    adapter_cmd()
        .args(["lint", "--no-color", "--executable"])
        .arg(&erblint)
        .write_stdin("<input>")
        .assert()
        .code(1)
        .stdout(predicates::str::starts_with("<unsaved>:1: Tag `input`"));
}

#[cfg(unix)]
#[test]
fn stdin_flag_overrides_file_content() {
    let temp = TempDir::new().unwrap();
    let erblint = fake_erblint(temp.path());
    create_tree(temp.path(), &[("form.erb", "<input>\n")]);

    adapter_cmd()
        .args(["lint", "--stdin"])
        .arg(temp.path().join("form.erb"))
        .arg("--executable")
        .arg(&erblint)
        .write_stdin("<p>edited</p>")
        .assert()
        .success();
}

#[test]
fn missing_executable_exits_three() {
    let temp = TempDir::new().unwrap();
    create_tree(temp.path(), &[("show.erb", "<p></p>")]);

    adapter_cmd()
        .arg("lint")
        .arg(temp.path().join("show.erb"))
        .args(["--executable", "erblint-adapter-no-such-binary"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("failed to launch `erblint-adapter-no-such-binary`"));
}

#[test]
fn missing_file_exits_three() {
    let temp = TempDir::new().unwrap();

    adapter_cmd()
        .arg("lint")
        .arg(temp.path().join("gone.erb"))
        .assert()
        .code(3)
        .stderr(predicates::str::contains("failed to read"));
}
