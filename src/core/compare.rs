//! # Output Comparison Module / 输出比较模块
//!
//! Decides whether a captured output matches the expected output and, when it
//! does not, renders a context diff between the two.
//!
//! Both texts are split into lines and every line loses its trailing whitespace.
//! Nothing else is normalised: leading whitespace and the number of blank lines
//! are significant.
//!
//! 判断捕获的输出是否与期望输出匹配，不匹配时生成两者之间的上下文差异。
//! 两段文本都被拆分为行，并去除每行末尾的空白。其他内容不做规范化：
//! 行首空白和空行数量都是有意义的。

use similar::{DiffOp, DiffTag, TextDiff};
use std::fmt::Write;

/// Label of the captured side of a diff.
pub const ACTUAL_LABEL: &str = "Actual Output";
/// Label of the expected side of a diff.
pub const EXPECTED_LABEL: &str = "Expected Output";
/// Number of unchanged lines shown around each change.
pub const CONTEXT_LINES: usize = 3;

/// The verdict of comparing one captured output with its expected output.
/// 比较一次捕获输出与期望输出的结论。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// Every normalised line is equal and the line counts agree.
    Match,
    /// The outputs differ. `diff` is a non-empty context diff, Actual vs Expected.
    Mismatch { diff: String },
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        matches!(self, Comparison::Match)
    }
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits text into lines without their terminators.
///
/// `\n`, `\r\n`, `\r` and the other Unicode line boundaries end a line. A final
/// terminator does not produce a trailing empty line, so `"a\n"` is one line and
/// `"a\n\n"` is two. The empty text has no lines.
///
/// 将文本拆分为不含终止符的行。末尾的终止符不会产生额外的空行。
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&text[start..i]);
        let mut end = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                end += 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Splits text into lines and strips trailing whitespace from each of them.
/// Leading whitespace is kept.
///
/// 将文本拆分为行，并去除每行末尾的空白。行首空白保持不变。
pub fn normalize_lines(text: &str) -> Vec<&str> {
    split_lines(text).into_iter().map(str::trim_end).collect()
}

/// Compares a captured output with the expected output.
///
/// # Arguments
/// * `actual` - The text the subject program wrote to standard output
/// * `expected` - The content of the expected-output file
///
/// # Returns
/// `Comparison::Match` when the normalised line sequences are identical,
/// otherwise `Comparison::Mismatch` carrying the context diff.
pub fn compare_outputs(actual: &str, expected: &str) -> Comparison {
    let actual_lines = normalize_lines(actual);
    let expected_lines = normalize_lines(expected);

    if actual_lines == expected_lines {
        Comparison::Match
    } else {
        Comparison::Mismatch {
            diff: context_diff(
                &actual_lines,
                &expected_lines,
                ACTUAL_LABEL,
                EXPECTED_LABEL,
                CONTEXT_LINES,
            ),
        }
    }
}

/// Wraps a diff into the block written to the report after `Test FAILED!`.
pub fn format_diff_report(diff: &str) -> String {
    format!("\nDifferences:\n{}\n", diff)
}

fn line_prefix(tag: DiffTag) -> &'static str {
    match tag {
        DiffTag::Equal => "  ",
        DiffTag::Replace => "! ",
        DiffTag::Delete => "- ",
        DiffTag::Insert => "+ ",
    }
}

/// Renders `start..stop` (0-based, half-open) as a context diff range:
/// `N` for one line, `N,M` for several, and the line before for an empty range.
fn format_range(start: usize, stop: usize) -> String {
    let length = stop - start;
    let beginning = if length == 0 { start } else { start + 1 };
    if length <= 1 {
        beginning.to_string()
    } else {
        format!("{},{}", beginning, beginning + length - 1)
    }
}

/// Renders a context diff between two line sequences.
///
/// Hunks come from `similar`'s grouped Myers diff with `context` unchanged
/// lines around each change. Every emitted line ends with `\n`. The result is
/// empty when the sequences are equal.
///
/// # Output Format / 输出格式
/// ```text
/// *** Actual Output
/// --- Expected Output
/// ***************
/// *** 1,2 ****
/// ! wrong
///   shared
/// --- 1,2 ----
/// ! right
///   shared
/// ```
pub fn context_diff(
    a: &[&str],
    b: &[&str],
    from_label: &str,
    to_label: &str,
    context: usize,
) -> String {
    let diff = TextDiff::configure().diff_slices(a, b);
    let mut out = String::new();

    for (n, group) in diff.grouped_ops(context).iter().enumerate() {
        if n == 0 {
            let _ = writeln!(out, "*** {}", from_label);
            let _ = writeln!(out, "--- {}", to_label);
        }
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        out.push_str("***************\n");

        let _ = writeln!(
            out,
            "*** {} ****",
            format_range(first.old_range().start, last.old_range().end)
        );
        if has_tag(group, DiffTag::Delete) {
            for op in group.iter().filter(|op| op.tag() != DiffTag::Insert) {
                for line in &a[op.old_range()] {
                    let _ = writeln!(out, "{}{}", line_prefix(op.tag()), line);
                }
            }
        }

        let _ = writeln!(
            out,
            "--- {} ----",
            format_range(first.new_range().start, last.new_range().end)
        );
        if has_tag(group, DiffTag::Insert) {
            for op in group.iter().filter(|op| op.tag() != DiffTag::Delete) {
                for line in &b[op.new_range()] {
                    let _ = writeln!(out, "{}{}", line_prefix(op.tag()), line);
                }
            }
        }
    }
    out
}

/// Whether a hunk has a replacement or an edit of the given kind.
fn has_tag(group: &[DiffOp], tag: DiffTag) -> bool {
    group
        .iter()
        .any(|op| op.tag() == DiffTag::Replace || op.tag() == tag)
}
