//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes a starter
//! `Harness.toml`. Interactively it asks for the most common settings; with
//! `--non-interactive` (or when stdin is not a terminal) it writes the defaults.
//!
//! 此模块实现了 `init` 命令，用于生成初始的 `Harness.toml`。
//! 交互模式下会询问最常用的设置；使用 `--non-interactive`（或标准输入不是终端）时写入默认值。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::io::IsTerminal;
use std::{fs, path::Path};

use crate::core::config::HarnessConfig;
use crate::infra::t;

const CONFIG_HEADER: &str = "\
# Harness configuration / 测试工具配置
# Every key is optional; missing keys use the built-in defaults.
# 所有键都是可选的；缺失的键使用内置默认值。
#
# language = \"en\"           # Console language / 控制台语言
# compiler_flags = [\"-lm\"]  # Extra compiler arguments after the source / 源文件之后的额外编译参数

";

/// Renders a configuration as commented TOML.
pub fn render_config(config: &HarnessConfig) -> Result<String> {
    let body = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
    Ok(format!("{CONFIG_HEADER}{body}"))
}

/// Writes a starter configuration file.
///
/// # Arguments
/// * `output` - Path of the file to create
/// * `force` - Overwrite an existing file without asking
/// * `non_interactive` - Write the defaults without prompting
pub fn run_init_wizard(output: &Path, force: bool, non_interactive: bool) -> Result<()> {
    let interactive = !non_interactive && std::io::stdin().is_terminal();
    let theme = ColorfulTheme::default();

    if output.exists() && !force {
        if !interactive {
            println!("{}", t!("init.file_exists", path = output.display()).red());
            println!("{}", t!("init.use_force").yellow());
            return Ok(());
        }
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init.overwrite_prompt", path = output.display()))
            .default(false)
            .interact()
            .context(t!("init.confirmation_failed").to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted"));
            return Ok(());
        }
    }

    let config = if interactive {
        println!("\n{}", t!("init.welcome").cyan().bold());
        prompt_config(&theme)?
    } else {
        HarnessConfig::default()
    };

    write_config(output, &config)
}

/// Asks for the settings that differ most between projects.
fn prompt_config(theme: &ColorfulTheme) -> Result<HarnessConfig> {
    let defaults = HarnessConfig::default();

    let source: String = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_source"))
        .default(defaults.source.display().to_string())
        .interact_text()?;
    let compiler: String = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_compiler"))
        .default(defaults.compiler.clone())
        .interact_text()?;
    let cases_dir: String = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_cases_dir"))
        .default(defaults.cases_dir.display().to_string())
        .interact_text()?;
    let last: usize = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_last"))
        .default(defaults.last)
        .interact_text()?;

    let config = HarnessConfig {
        source: source.into(),
        compiler,
        cases_dir: cases_dir.into(),
        last,
        ..defaults
    };
    config.validate()?;
    Ok(config)
}

fn write_config(output: &Path, config: &HarnessConfig) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!("init.create_parent_dir_failed", path = parent.display()).to_string()
            })?;
        }
    }

    fs::write(output, render_config(config)?)
        .with_context(|| t!("init.write_failed", path = output.display()).to_string())?;

    println!("{}", t!("init.success", path = output.display()).green());
    println!("{}", t!("init.next_steps"));
    Ok(())
}
