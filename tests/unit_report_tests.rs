//! # Report Module Unit Tests / Report 模块单元测试
//!
//! Writes reports into memory and checks the exact text layout.
//!
//! 将报告写入内存并检查其精确的文本格式。

use std::time::Duration;
use stdin_harness::models::{ExecutionResult, Outcome, TestCase};
use stdin_harness::reporting::ReportWriter;
use stdin_harness::reporting::report::format_seconds;

fn case(n: usize) -> TestCase {
    TestCase::new(
        n,
        format!("TestCases/Open/open_{n}.txt"),
        format!("TestCases/Open/open_{n}.output.txt"),
    )
}

fn result(outcome: Outcome, millis: u64) -> ExecutionResult {
    ExecutionResult {
        outcome,
        duration: Duration::from_millis(millis),
        stdout: String::new(),
        stderr: String::new(),
        exit_code: 0,
    }
}

#[test]
fn test_format_seconds() {
    assert_eq!(format_seconds(0.25), "0.25");
    assert_eq!(format_seconds(2.0), "2.0");
    assert_eq!(format_seconds(0.0), "0.0");
}

#[test]
fn test_format_seconds_never_uses_an_exponent() {
    assert_eq!(format_seconds(0.0000001), "0.0000001");
    assert_eq!(format_seconds(1e16), "10000000000000000.0");
}

#[test]
fn test_passing_run_layout() {
    let mut report = ReportWriter::new(Vec::new());
    report.write_header().unwrap();
    report
        .write_case(&case(1), &result(Outcome::Passed, 250))
        .unwrap();
    report
        .write_case(&case(2), &result(Outcome::Passed, 500))
        .unwrap();
    report.write_footer().unwrap();

    let text = String::from_utf8(report.into_inner()).unwrap();
    assert_eq!(
        text,
        "TEST REPORT\n\n\
         Test with TestCases/Open/open_1.txt:\n\
         Execution time: 0.25 seconds\n\
         Test PASSED!\n\
         Test with TestCases/Open/open_2.txt:\n\
         Execution time: 0.5 seconds\n\
         Test PASSED!\n\
         ==================================================\n\
         Testing completed!\n"
    );
}

#[test]
fn test_failing_case_layout() {
    let mut report = ReportWriter::new(Vec::new());
    report.write_header().unwrap();
    let failed = result(
        Outcome::Failed {
            diff: "\nDifferences:\n*** Actual Output\n--- Expected Output\n\n".to_string(),
        },
        125,
    );
    report.write_case(&case(3), &failed).unwrap();

    let text = String::from_utf8(report.into_inner()).unwrap();
    assert_eq!(
        text,
        "TEST REPORT\n\n\
         Test with TestCases/Open/open_3.txt:\n\
         Execution time: 0.125 seconds\n\
         Test FAILED!\n\
         \nDifferences:\n*** Actual Output\n--- Expected Output\n\n\
         --------------------------------------------------\n"
    );
}
