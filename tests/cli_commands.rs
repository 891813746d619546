/*
 * Small admin API server for a mini library system
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

mod common;

use std::fs;
use std::process::Command;

use common::{prepare_test_dir, test_binary_path};

#[test]
fn commands_cli_lists_all_subcommands() {
    let base_dir = prepare_test_dir();

    let output = Command::new(test_binary_path())
        .env("XDG_CONFIG_HOME", &base_dir)
        .env("XDG_DATA_HOME", &base_dir)
        .arg("commands")
        .output()
        .expect("spawn commands failed");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout utf8 failed");
    assert!(stdout.contains("run"));
    assert!(stdout.contains("commands"));
    assert!(stdout.contains("help-all"));

    fs::remove_dir_all(base_dir).expect("cleanup failed");
}

#[test]
fn show_options_cli_prints_bind_settings() {
    let base_dir = prepare_test_dir();

    let output = Command::new(test_binary_path())
        .env("XDG_CONFIG_HOME", &base_dir)
        .env("XDG_DATA_HOME", &base_dir)
        .arg("--show-options")
        .arg("run")
        .arg("127.0.0.1:18080")
        .output()
        .expect("spawn show-options failed");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout utf8 failed");
    assert!(stdout.contains("global options"));
    assert!(stdout.contains("run command options"));
    assert!(stdout.contains("127.0.0.1:18080"));

    fs::remove_dir_all(base_dir).expect("cleanup failed");
}

#[test]
fn run_cli_rejects_inconsistent_bind_value() {
    let base_dir = prepare_test_dir();

    let output = Command::new(test_binary_path())
        .env("XDG_CONFIG_HOME", &base_dir)
        .env("XDG_DATA_HOME", &base_dir)
        .arg("run")
        .arg("[::1")
        .output()
        .expect("spawn run failed");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("stderr utf8 failed");
    assert!(stderr.contains("invalid bind address"));

    fs::remove_dir_all(base_dir).expect("cleanup failed");
}
