//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! This module compiles the subject program and runs it once per test case.
//! A single invocation is authoritative: there are no retries and no timeout,
//! so a subject that never exits blocks the harness.
//!
//! 此模块编译被测程序，并在每个测试用例上运行一次。
//! 单次调用即为最终结果：没有重试也没有超时，因此永不退出的被测程序会阻塞测试工具。

use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::process::Command;

use crate::{
    core::{
        compare::{Comparison, compare_outputs, format_diff_report},
        models::{ExecutionResult, HarnessError, Outcome, TestCase},
    },
    infra::{command, fs, t},
};

/// Compiles the subject program.
///
/// # Arguments
/// * `command_line` - The compiler program followed by its arguments
/// * `executable` - Where the command line asks the compiler to write its output
///
/// # Returns
/// The absolute path of the compiled executable. A non-zero compiler status is
/// returned as `HarnessError::Compilation`.
pub async fn compile_program(command_line: &[String], executable: &Path) -> Result<PathBuf> {
    let (program, args) = command_line
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("Empty compiler command."))?;

    println!(
        "{}",
        t!("compile.running", command = command::display_command_line(command_line)).blue()
    );

    let mut cmd = Command::new(program);
    cmd.args(args).kill_on_drop(true);

    let status = command::run_inherited(cmd)
        .await
        .with_context(|| format!("Failed to start compiler '{}'", program))?;

    if !status.success() {
        println!("{}", t!("compile.failed").red());
        return Err(HarnessError::Compilation { status }.into());
    }

    println!("{}", t!("compile.success").green());
    fs::locate_executable(executable)
}

/// Runs the compiled subject once on one test case.
///
/// The input file becomes the subject's standard input and the subject gets
/// no arguments. The clock starts just before launch and stops once the
/// process has exited and its output is collected, so process start-up and
/// teardown are included.
///
/// # Arguments
/// * `executable` - Path to the compiled subject
/// * `case` - The test case whose input is fed and whose expected output is compared
///
/// # Returns
/// The `ExecutionResult` of the run. Only the captured standard output decides
/// the outcome; the exit code is recorded but not judged.
///
/// 在一个测试用例上运行一次已编译的被测程序。
/// 输入文件作为被测程序的标准输入，且不传任何参数。
pub async fn run_test_case(executable: &Path, case: &TestCase) -> Result<ExecutionResult> {
    let expected = fs::read_text_lossy(&case.expected)?;
    let input = std::fs::File::open(&case.input)
        .with_context(|| format!("Failed to open input file {}", case.input.display()))?;

    let mut cmd = Command::new(executable);
    cmd.kill_on_drop(true);

    let start_time = Instant::now();
    let captured = command::spawn_and_capture(cmd, input)
        .await
        .with_context(|| format!("Failed to run {}", executable.display()))?;
    let duration = start_time.elapsed();

    let outcome = match compare_outputs(&captured.stdout, &expected) {
        Comparison::Match => Outcome::Passed,
        Comparison::Mismatch { diff } => Outcome::Failed {
            diff: format_diff_report(&diff),
        },
    };

    Ok(ExecutionResult {
        outcome,
        duration,
        exit_code: command::return_code(&captured.status),
        stdout: captured.stdout,
        stderr: captured.stderr,
    })
}
