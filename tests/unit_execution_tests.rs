//! # Execution Module Unit Tests / Execution 模块单元测试
//!
//! Tests `compile_program` and `run_test_case` with shell stand-ins for the
//! compiler and standard tools as subjects.
//!
//! 使用 shell 脚本代替编译器、标准工具作为被测程序，测试 `compile_program` 和 `run_test_case`。
#![cfg(unix)]

mod common;

use common::{COPYING_COMPILER, ECHO_SUBJECT, FAILING_COMPILER, Sandbox};
use std::path::Path;
use stdin_harness::execution::{compile_program, run_test_case};
use stdin_harness::infra::fs::ensure_case_files;
use stdin_harness::models::{HarnessError, Outcome, TestCase};

fn compiler_command(sandbox: &Sandbox) -> Vec<String> {
    vec![
        sandbox.compiler().display().to_string(),
        "-o".to_string(),
        sandbox.root().join("program").display().to_string(),
        sandbox.root().join("main.c").display().to_string(),
    ]
}

fn case_in(sandbox: &Sandbox, n: usize) -> TestCase {
    let dir = sandbox.root().join("TestCases").join("Open");
    TestCase::new(
        n,
        dir.join(format!("open_{n}.txt")),
        dir.join(format!("open_{n}.output.txt")),
    )
}

#[tokio::test]
async fn test_compile_success_returns_absolute_executable() {
    let sandbox = Sandbox::new(COPYING_COMPILER, ECHO_SUBJECT);
    let executable = compile_program(&compiler_command(&sandbox), &sandbox.root().join("program"))
        .await
        .unwrap();

    assert!(executable.is_absolute());
    assert!(executable.is_file());
}

#[tokio::test]
async fn test_compile_failure_is_a_compilation_error() {
    let sandbox = Sandbox::new(FAILING_COMPILER, ECHO_SUBJECT);
    let error = compile_program(&compiler_command(&sandbox), &sandbox.root().join("program"))
        .await
        .unwrap_err();

    assert!(matches!(
        error.downcast_ref::<HarnessError>(),
        Some(HarnessError::Compilation { .. })
    ));
}

#[tokio::test]
async fn test_missing_compiler_is_an_error() {
    let command = vec![
        "this_compiler_does_not_exist_12345".to_string(),
        "main.c".to_string(),
    ];
    let error = compile_program(&command, Path::new("program"))
        .await
        .unwrap_err();
    assert!(error.to_string().contains("Failed to start compiler"));
}

#[tokio::test]
async fn test_echo_subject_passes() {
    let sandbox = Sandbox::new(COPYING_COMPILER, ECHO_SUBJECT);
    sandbox.add_case(1, "1 2 3\n", "1 2 3\n");

    let result = run_test_case(Path::new("/bin/cat"), &case_in(&sandbox, 1))
        .await
        .unwrap();

    assert_eq!(result.outcome, Outcome::Passed);
    assert_eq!(result.stdout, "1 2 3\n");
    assert_eq!(result.exit_code, 0);
    let (passed, secs, diff) = result.summary();
    assert!(passed);
    assert!(secs > 0.0);
    assert!(diff.is_empty());
}

#[tokio::test]
async fn test_extra_blank_line_fails_with_diff() {
    let sandbox = Sandbox::new(COPYING_COMPILER, ECHO_SUBJECT);
    sandbox.add_case(1, "1 2 3\n", "1 2 3\n\n");

    let result = run_test_case(Path::new("/bin/cat"), &case_in(&sandbox, 1))
        .await
        .unwrap();

    assert!(!result.passed());
    assert!(result.diff_text().starts_with("\nDifferences:\n*** Actual Output\n"));
    assert!(result.diff_text().contains("+ \n"));
}

#[tokio::test]
async fn test_leading_whitespace_fails() {
    let sandbox = Sandbox::new(COPYING_COMPILER, ECHO_SUBJECT);
    sandbox.add_case(1, " a\n", "a\n");

    let result = run_test_case(Path::new("/bin/cat"), &case_in(&sandbox, 1))
        .await
        .unwrap();

    assert!(!result.passed());
    assert!(result.diff_text().contains("!  a\n"));
    assert!(result.diff_text().contains("! a\n"));
}

#[tokio::test]
async fn test_exit_code_does_not_decide_outcome() {
    let sandbox = Sandbox::new(COPYING_COMPILER, ECHO_SUBJECT);
    sandbox.add_case(1, "exit 4\n", "");

    // sh runs its stdin as a script: no output, status 4.
    let result = run_test_case(Path::new("/bin/sh"), &case_in(&sandbox, 1))
        .await
        .unwrap();

    assert!(result.passed());
    assert_eq!(result.exit_code, 4);
}

#[tokio::test]
async fn test_missing_input_is_detected_before_running() {
    let sandbox = Sandbox::new(COPYING_COMPILER, ECHO_SUBJECT);
    let case = case_in(&sandbox, 9);

    assert!(matches!(
        ensure_case_files(&case),
        Err(HarnessError::MissingCaseFile { .. })
    ));
    assert!(run_test_case(Path::new("/bin/cat"), &case).await.is_err());
}
