//! # Stdin Harness Library / Stdin Harness 库
//!
//! This library provides the functionality behind the `stdin-harness` tool,
//! a batch test harness that compiles a single native program, pipes a numbered
//! sequence of input files into it and compares its standard output against
//! expected-output files, stopping at the first mismatch.
//!
//! 此库为 `stdin-harness` 工具提供核心功能，
//! 这是一个批量测试工具：编译单个本地程序，将编号的输入文件依次通过标准输入传给它，
//! 并将其标准输出与期望输出文件进行比较，在第一次不匹配时停止。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, data models, output comparison and test execution
//! - `infra` - Process spawning and file system helpers
//! - `reporting` - The text report file and console echo
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 配置、数据模型、输出比较和测试执行
//! - `infra` - 进程派生和文件系统辅助功能
//! - `reporting` - 文本报告文件和控制台输出
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::compare;
pub use core::config;
pub use core::execution;
pub use core::models;

/// Selects the user-interface language.
///
/// An explicitly requested locale wins. Otherwise the system locale is detected.
/// The full locale (e.g. "zh-CN") is tried first, then just its language part
/// (e.g. "en" from "en-US"), and finally the default language "en".
///
/// Returns the locale that was activated.
pub fn init_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split(['-', '_'])
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
    lang.to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
