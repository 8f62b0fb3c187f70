//! # Console Reporting Module / 控制台报告模块
//!
//! Echoes each case to the console as it finishes, with colour and
//! internationalization support.
//!
//! 在每个用例完成时将其输出到控制台，支持彩色和国际化。

use colored::*;

use crate::core::models::{ExecutionResult, RunState, TestCase};
use crate::infra::t;
use crate::reporting::report::{CASE_SEPARATOR, FINAL_SEPARATOR, format_seconds};

/// Prints the block of one finished case.
///
/// # Output Format / 输出格式
/// ```text
/// ==================================================
/// Running test with TestCases/Open/open_1.txt...
/// Execution time: 0.0021 seconds
/// Return code: 0
///
/// Test PASSED!
/// --------------------------------------------------
/// ```
///
/// A failing case is followed by its diff. With `verbose`, the subject's
/// standard error is shown as well.
pub fn print_case_result(case: &TestCase, result: &ExecutionResult, verbose: bool) {
    println!("\n{}", FINAL_SEPARATOR.cyan());
    println!(
        "{}",
        t!("run.running_test", path = case.input.display()).blue()
    );
    println!(
        "{}",
        t!("run.execution_time", seconds = format_seconds(result.elapsed_secs()))
    );
    println!("{}", t!("run.return_code", code = result.exit_code));

    if verbose && !result.stderr.trim().is_empty() {
        println!("\n--- {} ---", t!("run.stderr_log").yellow());
        println!("{}", result.stderr.trim_end());
    }

    if result.passed() {
        println!("\n{}\n{}", t!("run.test_passed").green().bold(), CASE_SEPARATOR);
    } else {
        println!("\n{}\n{}", t!("run.test_failed").red().bold(), CASE_SEPARATOR);
        println!("{}", result.diff_text());
    }
}

/// Printed after the failing case, right before the process exits.
pub fn print_stopping() {
    println!("{}", t!("run.stopping").yellow());
}

/// Printed when every case passed.
pub fn print_run_completed() {
    println!("{}", t!("run.completed").green().bold());
}

/// Logs a state machine transition in verbose mode.
pub fn print_transition(from: RunState, to: RunState) {
    println!(
        "{}",
        t!("run.state_transition", from = from, to = to).dimmed()
    );
}
