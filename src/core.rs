//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the harness,
//! including configuration, data models, output comparison and test execution.
//!
//! 此模块包含测试工具的核心功能，
//! 包括配置、数据模型、输出比较和测试执行逻辑。

pub mod compare;
pub mod config;
pub mod execution;
pub mod models;
pub mod planner;

// Re-exports
pub use config::HarnessConfig;
pub use execution::{compile_program, run_test_case};
pub use models::{ExecutionResult, TestCase};
