//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as expanding configured paths, locating the compiled executable and
//! checking that a test case's files are present.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如展开配置的路径、定位编译出的可执行文件以及检查测试用例文件是否存在。

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::{HarnessError, TestCase};

/// Expands `~` and environment variables in a path.
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .with_context(|| format!("Failed to expand path: {}", path.display()))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}

/// Finds the executable a compiler produced for `path`.
///
/// Compilers on some platforms append the platform suffix (`.exe`) to the
/// requested name, so that name is tried as well. The result is absolute so a
/// bare name such as `program` is never looked up on `PATH`.
///
/// 查找编译器为 `path` 生成的可执行文件。返回绝对路径，
/// 因此像 `program` 这样的裸名称不会在 `PATH` 中查找。
pub fn locate_executable(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return absolute_path(path);
    }
    let suffix = env::consts::EXE_SUFFIX;
    if !suffix.is_empty() {
        let mut with_suffix = path.as_os_str().to_owned();
        with_suffix.push(suffix);
        let with_suffix = PathBuf::from(with_suffix);
        if with_suffix.is_file() {
            return absolute_path(&with_suffix);
        }
    }
    absolute_path(path).with_context(|| "The compiler reported success but produced no executable")
}

/// Checks that both files of a test case exist before the case runs.
pub fn ensure_case_files(case: &TestCase) -> Result<(), HarnessError> {
    for path in [&case.input, &case.expected] {
        if !path.is_file() {
            return Err(HarnessError::MissingCaseFile { path: path.clone() });
        }
    }
    Ok(())
}

/// Reads a file as text, replacing invalid UTF-8 sequences.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
