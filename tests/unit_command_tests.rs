//! # Command Module Unit Tests / Command 模块单元测试
//!
//! Tests `spawn_and_capture`, `return_code` and `display_command_line`.
//!
//! 测试 `spawn_and_capture`、`return_code` 和 `display_command_line` 函数。
#![cfg(unix)]

use std::fs;
use std::process::Stdio;
use stdin_harness::infra::command::{display_command_line, return_code, spawn_and_capture};
use tempfile::TempDir;
use tokio::process::Command;

#[tokio::test]
async fn test_file_becomes_standard_input() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    fs::write(&input_path, "1 2 3\n4 5 6\n").unwrap();

    let input = fs::File::open(&input_path).unwrap();
    let captured = spawn_and_capture(Command::new("cat"), input).await.unwrap();

    assert!(captured.status.success());
    assert_eq!(captured.stdout, "1 2 3\n4 5 6\n");
    assert!(captured.stderr.is_empty());
}

#[tokio::test]
async fn test_stdout_and_stderr_are_kept_apart() {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", "echo out; echo err >&2; exit 3"]);

    let captured = spawn_and_capture(cmd, Stdio::null()).await.unwrap();

    assert_eq!(captured.stdout, "out\n");
    assert_eq!(captured.stderr, "err\n");
    assert_eq!(return_code(&captured.status), 3);
}

#[tokio::test]
async fn test_signal_is_reported_as_negative_code() {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", "kill -9 $$"]);

    let captured = spawn_and_capture(cmd, Stdio::null()).await.unwrap();

    assert_eq!(return_code(&captured.status), -9);
}

#[tokio::test]
async fn test_nonexistent_program_is_an_error() {
    let cmd = Command::new("this_command_does_not_exist_12345");
    assert!(spawn_and_capture(cmd, Stdio::null()).await.is_err());
}

#[tokio::test]
async fn test_invalid_utf8_is_replaced() {
    let mut cmd = Command::new("printf");
    cmd.arg("a\\377b");

    let captured = spawn_and_capture(cmd, Stdio::null()).await.unwrap();

    assert_eq!(captured.stdout, "a\u{FFFD}b");
}

#[test]
fn test_display_command_line_quotes_arguments() {
    let parts = vec![
        "gcc".to_string(),
        "-o".to_string(),
        "my program".to_string(),
        "main.c".to_string(),
    ];
    assert_eq!(display_command_line(&parts), "gcc -o 'my program' main.c");
}
