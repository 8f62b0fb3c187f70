//! # Test Execution Planner Module / 测试执行计划模块
//!
//! Turns the configuration into the ordered list of test cases.
//!
//! 将配置转换为有序的测试用例列表。

use crate::core::{config::HarnessConfig, models::TestCase};
use anyhow::Result;
use std::path::Path;

/// The ordered cases a run goes through.
///
/// Cases are produced lazily, one at a time, so the size of the range costs
/// nothing until the run reaches a case.
/// 一次运行依次执行的有序用例，按需逐个生成。
#[derive(Debug, Clone)]
pub struct ExecutionPlan {
    config: HarnessConfig,
}

impl ExecutionPlan {
    /// Cases in ascending case-number order.
    /// 按用例编号升序排列的用例。
    pub fn cases(&self) -> impl Iterator<Item = TestCase> + '_ {
        (self.config.first..=self.config.last).map(|index| case_for(&self.config, index))
    }

    /// Number of cases in the plan.
    pub fn len(&self) -> usize {
        // `first >= 1` holds after validation, so this cannot overflow.
        self.config.last - self.config.first + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Builds the input and expected-output paths of case `index`.
///
/// With the default configuration case 7 is
/// `TestCases/Open/open_7.txt` / `TestCases/Open/open_7.output.txt`.
pub fn case_for(config: &HarnessConfig, index: usize) -> TestCase {
    let dir: &Path = &config.cases_dir;
    TestCase::new(
        index,
        dir.join(format!("{}{}{}", config.input_prefix, index, config.input_suffix)),
        dir.join(format!("{}{}{}", config.input_prefix, index, config.expected_suffix)),
    )
}

/// Creates an execution plan covering cases `first..=last` of the configuration.
pub fn plan_execution(config: &HarnessConfig) -> Result<ExecutionPlan> {
    config.validate()?;
    Ok(ExecutionPlan {
        config: config.clone(),
    })
}
