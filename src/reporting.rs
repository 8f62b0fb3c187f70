//! # Reporting Module / 报告模块
//!
//! This module handles the two outputs of a run: the append-only text report
//! file and the colourful, localised echo of the same information on the console.
//!
//! 此模块处理一次运行的两种输出：只追加的文本报告文件，
//! 以及在控制台上以彩色、本地化方式输出的相同信息。

pub mod console;
pub mod report;

// Re-export common reporting items
pub use console::{print_case_result, print_run_completed, print_stopping};
pub use report::ReportWriter;
