//! # Text Report Module / 文本报告模块
//!
//! Writes the plain-text report file. The report is opened once, truncated,
//! and written top to bottom one block per case. Every block is flushed as soon
//! as it is written so a run that stops on a failure leaves a complete prefix.
//!
//! The report is always written in English regardless of the console locale.
//!
//! 写入纯文本报告文件。报告只打开一次并被截断，每个用例写入一个块。
//! 每个块写入后立即刷新，因此在失败时停止的运行会留下完整的前缀。
//! 无论控制台语言如何，报告始终以英文写入。
//!
//! ## Format / 格式
//! ```text
//! TEST REPORT
//!
//! Test with TestCases/Open/open_1.txt:
//! Execution time: 0.0021 seconds
//! Test PASSED!
//! ==================================================
//! Testing completed!
//! ```

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::models::{ExecutionResult, TestCase};

/// Separator written after a failing case's diff.
pub const CASE_SEPARATOR: &str = "--------------------------------------------------";
/// Separator written before the completion marker.
pub const FINAL_SEPARATOR: &str = "==================================================";

/// Formats seconds the way the report has always shown them: the shortest
/// representation that round-trips, always with a fractional part.
/// `f64`'s `Display` never uses an exponent, so only whole numbers need `.0`.
pub fn format_seconds(secs: f64) -> String {
    let text = secs.to_string();
    if secs.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// The append-only report, generic over its sink so it can be written to a
/// file or to memory.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl ReportWriter<BufWriter<File>> {
    /// Creates (or truncates) the report file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file: {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.out.write_all(b"TEST REPORT\n\n")?;
        self.out.flush()
    }

    /// Writes the block of one case.
    pub fn write_case(&mut self, case: &TestCase, result: &ExecutionResult) -> io::Result<()> {
        writeln!(self.out, "Test with {}:", case.input.display())?;
        writeln!(
            self.out,
            "Execution time: {} seconds",
            format_seconds(result.elapsed_secs())
        )?;
        if result.passed() {
            writeln!(self.out, "Test PASSED!")?;
        } else {
            writeln!(self.out, "Test FAILED!")?;
            self.out.write_all(result.diff_text().as_bytes())?;
            writeln!(self.out, "{}", CASE_SEPARATOR)?;
        }
        self.out.flush()
    }

    /// Writes the closing separator and completion marker of a fully passing run.
    pub fn write_footer(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", FINAL_SEPARATOR)?;
        writeln!(self.out, "Testing completed!")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
