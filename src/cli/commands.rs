//! # Commands Module / 命令模块
//!
//! - `run` - Compile the subject and run every test case (the default)
//! - `init` - Write a starter `Harness.toml`
//!
//! - `run` - 编译被测程序并运行所有测试用例（默认命令）
//! - `init` - 生成初始的 `Harness.toml`

pub mod init;
pub mod run;
