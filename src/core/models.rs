//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures used throughout the harness.
//! It includes the test case pairing, the per-case execution result, the
//! process-level run state machine and the domain error categories.
//!
//! 此模块定义了整个测试工具中使用的数据结构。
//! 它包括测试用例配对、单个用例的执行结果、进程级运行状态机以及领域错误类别。

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

/// One numbered pair of input file and expected-output file.
/// 一对编号的输入文件和期望输出文件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// The number `N` of the case in the ordered sequence.
    /// 用例在有序序列中的编号 `N`。
    pub index: usize,
    /// File piped to the subject's standard input.
    /// 通过标准输入传给被测程序的文件。
    pub input: PathBuf,
    /// File holding the output the subject is expected to produce.
    /// 保存被测程序期望输出的文件。
    pub expected: PathBuf,
}

impl TestCase {
    pub fn new(index: usize, input: impl Into<PathBuf>, expected: impl Into<PathBuf>) -> Self {
        Self {
            index,
            input: input.into(),
            expected: expected.into(),
        }
    }
}

/// Whether the captured output matched the expected output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// `diff` is the context diff between the actual and expected lines.
    Failed { diff: String },
}

/// Everything observed while running the subject once on one test case.
/// It is consumed by the report and console writers and then dropped.
///
/// 在一个测试用例上运行被测程序一次所观察到的全部信息。
/// 它被报告和控制台输出使用后即被丢弃。
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub outcome: Outcome,
    /// Wall-clock time from just before launch to just after exit.
    /// 从启动前到退出后的挂钟时间。
    pub duration: Duration,
    /// Standard output of the subject, decoded as text.
    pub stdout: String,
    /// Standard error of the subject. Never compared.
    pub stderr: String,
    /// Exit code of the subject. A process killed by signal `N` reports `-N`.
    /// Recorded for display only; it never decides pass or fail.
    pub exit_code: i32,
}

impl ExecutionResult {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Passed)
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    /// The diff block for the report; empty when the case passed.
    pub fn diff_text(&self) -> &str {
        match &self.outcome {
            Outcome::Passed => "",
            Outcome::Failed { diff } => diff,
        }
    }

    /// The `(passed, elapsed seconds, diff text)` triple of this run.
    pub fn summary(&self) -> (bool, f64, &str) {
        (self.passed(), self.elapsed_secs(), self.diff_text())
    }
}

/// Process-level state of a harness run.
///
/// ```text
/// Compiling --ok--> Running --all pass--> Done
///     |                |
///     +--fail--> Aborted <--any case fails
/// ```
///
/// `Done` and `Aborted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Compiling,
    Running,
    Done,
    Aborted,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Done | RunState::Aborted)
    }

    pub fn can_transition_to(self, next: RunState) -> bool {
        matches!(
            (self, next),
            (RunState::Compiling, RunState::Running)
                | (RunState::Compiling, RunState::Aborted)
                | (RunState::Running, RunState::Done)
                | (RunState::Running, RunState::Aborted)
        )
    }

    /// Moves to `next`, refusing transitions the state machine does not have.
    pub fn advance(self, next: RunState) -> Result<RunState, HarnessError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(HarnessError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Compiling => "COMPILING",
            RunState::Running => "RUNNING_CASES",
            RunState::Done => "DONE",
            RunState::Aborted => "ABORTED",
        };
        f.write_str(name)
    }
}

/// The failure categories that end a run.
/// 结束一次运行的失败类别。
#[derive(Debug)]
pub enum HarnessError {
    /// The native compiler exited with a non-zero status.
    /// 本地编译器以非零状态退出。
    Compilation { status: ExitStatus },
    /// The subject's output did not match on this case. The case's block has
    /// already been written to the report.
    /// 被测程序在此用例上的输出不匹配。该用例的报告块已写入。
    TestMismatch { case: TestCase },
    /// A case file was missing when its case was about to run.
    MissingCaseFile { path: PathBuf },
    /// The run state machine was asked for a transition it does not have.
    InvalidTransition { from: RunState, to: RunState },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Compilation { status } => {
                write!(f, "compilation failed ({})", status)
            }
            HarnessError::TestMismatch { case } => write!(
                f,
                "test case {} ({}) produced unexpected output",
                case.index,
                case.input.display()
            ),
            HarnessError::MissingCaseFile { path } => {
                write!(f, "test case file not found: {}", path.display())
            }
            HarnessError::InvalidTransition { from, to } => {
                write!(f, "invalid run state transition {} -> {}", from, to)
            }
        }
    }
}

impl std::error::Error for HarnessError {}
