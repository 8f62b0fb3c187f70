//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command, which compiles the subject program,
//! runs every planned test case in order and writes the report. The run stops
//! at the first failing case.
//!
//! 此模块实现了 `run` 命令：编译被测程序，按顺序运行所有计划的测试用例并写入报告。
//! 运行在第一个失败的用例处停止。

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{
        config::{self, ConfigOverrides, HarnessConfig},
        execution::{compile_program, run_test_case},
        models::{HarnessError, RunState},
        planner::{self, ExecutionPlan},
    },
    infra::{fs::ensure_case_files, t},
    reporting::{
        ReportWriter,
        console::{print_case_result, print_run_completed, print_stopping, print_transition},
    },
};

/// Options of the `run` command as parsed from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Path of the configuration file.
    pub config: PathBuf,
    /// Whether the configuration file must exist. False when the path is the
    /// implicit default.
    pub config_required: bool,
    pub overrides: ConfigOverrides,
    pub verbose: bool,
    /// The language requested on the command line, if any.
    pub lang: Option<String>,
}

/// Drives the `Compiling -> Running -> Done | Aborted` state machine.
struct RunTracker {
    state: RunState,
    verbose: bool,
}

impl RunTracker {
    fn new(verbose: bool) -> Self {
        Self {
            state: RunState::Compiling,
            verbose,
        }
    }

    fn advance(&mut self, next: RunState) -> Result<()> {
        let previous = self.state;
        self.state = previous.advance(next)?;
        if self.verbose {
            print_transition(previous, next);
        }
        Ok(())
    }
}

/// Executes the run command with the provided options.
///
/// # Returns
/// `Ok(())` when every case passed. A compilation failure, the first failing
/// case, and any I/O error all end the run with an error.
pub async fn execute(options: RunOptions) -> Result<()> {
    let (config, config_path) = setup_and_parse_config(&options)?;

    // The command line wins over the config file for the language.
    if options.lang.is_none() {
        if let Some(language) = &config.language {
            crate::init_locale(Some(language));
        }
    }

    if let Some(path) = &config_path {
        println!("{}", t!("run.config_loaded", path = path.display()));
    }
    println!(
        "{}",
        t!(
            "run.started",
            time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )
        .cyan()
    );

    let plan = planner::plan_execution(&config)?;
    run_plan(&config, &plan, options.verbose).await
}

/// Loads the configuration file (if any) and applies command-line overrides.
fn setup_and_parse_config(options: &RunOptions) -> Result<(HarnessConfig, Option<PathBuf>)> {
    let (config, config_path) = config::load_or_default(&options.config, options.config_required)
        .with_context(|| t!("run.config_failed").to_string())?;
    let config = config.apply(options.overrides.clone()).expand_paths()?;
    Ok((config, config_path))
}

/// Compiles the subject, then runs the plan case by case.
///
/// The report is only created once compilation has succeeded, so a failed
/// compilation leaves any previous report untouched.
pub async fn run_plan(config: &HarnessConfig, plan: &ExecutionPlan, verbose: bool) -> Result<()> {
    let mut tracker = RunTracker::new(verbose);

    let compiler_command = config.compiler_command()?;
    let executable = match compile_program(&compiler_command, &config.executable).await {
        Ok(executable) => executable,
        Err(e) => {
            tracker.advance(RunState::Aborted)?;
            return Err(e);
        }
    };
    tracker.advance(RunState::Running)?;

    let mut report = ReportWriter::create(&config.report)?;
    report
        .write_header()
        .with_context(|| format!("Failed to write report {}", config.report.display()))?;

    for case in plan.cases() {
        if let Err(e) = ensure_case_files(&case) {
            tracker.advance(RunState::Aborted)?;
            return Err(e.into());
        }

        let result = match run_test_case(&executable, &case).await {
            Ok(result) => result,
            Err(e) => {
                tracker.advance(RunState::Aborted)?;
                return Err(e);
            }
        };

        print_case_result(&case, &result, verbose);
        report
            .write_case(&case, &result)
            .with_context(|| format!("Failed to write report {}", config.report.display()))?;

        if !result.passed() {
            print_stopping();
            tracker.advance(RunState::Aborted)?;
            return Err(HarnessError::TestMismatch { case }.into());
        }
    }

    report
        .write_footer()
        .with_context(|| format!("Failed to write report {}", config.report.display()))?;
    tracker.advance(RunState::Done)?;

    print_run_completed();
    Ok(())
}
