//! # Configuration Module / 配置模块
//!
//! Describes where the subject program and its test cases live and how to
//! compile it. Every setting has a built-in default so that running the harness
//! with no arguments and no configuration file uses `main.c`, `program`,
//! `Report.txt` and `TestCases/Open/open_1.txt` .. `open_111.txt`.
//!
//! Settings are resolved in the order: command-line flag, `Harness.toml`,
//! built-in default.
//!
//! 描述被测程序及其测试用例的位置以及如何编译它。每个设置都有内置默认值，
//! 因此不带参数和配置文件运行时使用 `main.c`、`program`、`Report.txt`
//! 以及 `TestCases/Open/open_1.txt` .. `open_111.txt`。
//! 设置的解析顺序为：命令行参数、`Harness.toml`、内置默认值。

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::fs::expand_path;

/// Name of the configuration file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "Harness.toml";

/// Extra arguments passed to the compiler after the source file.
/// Accepts either a TOML array or a single shell-style string.
///
/// 在源文件之后传给编译器的额外参数。
/// 可以是 TOML 数组，也可以是单个 shell 风格的字符串。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CompilerFlags {
    List(Vec<String>),
    Line(String),
}

impl Default for CompilerFlags {
    fn default() -> Self {
        CompilerFlags::List(Vec::new())
    }
}

impl CompilerFlags {
    /// Expands `~` and environment variables and splits the flags into arguments.
    pub fn to_args(&self) -> Result<Vec<String>> {
        match self {
            CompilerFlags::List(flags) => flags
                .iter()
                .map(|flag| {
                    shellexpand::full(flag)
                        .map(|expanded| expanded.into_owned())
                        .with_context(|| format!("Failed to expand compiler flag: {flag}"))
                })
                .collect(),
            CompilerFlags::Line(line) => {
                let expanded = shellexpand::full(line)
                    .with_context(|| format!("Failed to expand compiler flags: {line}"))?;
                shlex::split(&expanded)
                    .ok_or_else(|| anyhow::anyhow!("Failed to parse compiler flags: {}", expanded))
            }
        }
    }
}

/// The complete harness configuration, loaded from a TOML file or built from defaults.
/// 完整的测试工具配置，从 TOML 文件加载或由默认值构建。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// The language for console messages (e.g., "en", "zh-CN").
    /// Detected from the system when not specified.
    ///
    /// 控制台消息的语言（例如 "en", "zh-CN"）。未指定时从系统检测。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Source file of the subject program.
    pub source: PathBuf,
    /// Where the compiled subject is written.
    pub executable: PathBuf,
    /// The text report, truncated at the start of every run.
    pub report: PathBuf,
    /// Directory holding the numbered case files.
    pub cases_dir: PathBuf,
    /// File name prefix of every case file.
    pub input_prefix: String,
    /// File name suffix of input files, after the case number.
    pub input_suffix: String,
    /// File name suffix of expected-output files, after the case number.
    pub expected_suffix: String,
    /// Number of the first case to run.
    pub first: usize,
    /// Number of the last case to run, inclusive.
    pub last: usize,
    /// The native compiler program.
    pub compiler: String,
    /// Extra compiler arguments.
    pub compiler_flags: CompilerFlags,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            language: None,
            source: PathBuf::from("main.c"),
            executable: PathBuf::from("program"),
            report: PathBuf::from("Report.txt"),
            cases_dir: PathBuf::from("TestCases/Open"),
            input_prefix: "open_".to_string(),
            input_suffix: ".txt".to_string(),
            expected_suffix: ".output.txt".to_string(),
            first: 1,
            last: 111,
            compiler: "gcc".to_string(),
            compiler_flags: CompilerFlags::default(),
        }
    }
}

/// Values given on the command line. Each one that is set replaces the
/// corresponding configuration value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source: Option<PathBuf>,
    pub executable: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub cases_dir: Option<PathBuf>,
    pub first: Option<usize>,
    pub last: Option<usize>,
    pub compiler: Option<String>,
}

impl HarnessConfig {
    /// Applies command-line overrides on top of this configuration.
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(source) = overrides.source {
            self.source = source;
        }
        if let Some(executable) = overrides.executable {
            self.executable = executable;
        }
        if let Some(report) = overrides.report {
            self.report = report;
        }
        if let Some(cases_dir) = overrides.cases_dir {
            self.cases_dir = cases_dir;
        }
        if let Some(first) = overrides.first {
            self.first = first;
        }
        if let Some(last) = overrides.last {
            self.last = last;
        }
        if let Some(compiler) = overrides.compiler {
            self.compiler = compiler;
        }
        self
    }

    /// Rejects settings that cannot describe a run.
    pub fn validate(&self) -> Result<()> {
        if self.first == 0 {
            bail!("Case numbering starts at 1, got first = 0");
        }
        if self.first > self.last {
            bail!(
                "The first case ({}) comes after the last case ({})",
                self.first,
                self.last
            );
        }
        if self.compiler.trim().is_empty() {
            bail!("No compiler configured");
        }
        if self.input_suffix == self.expected_suffix {
            bail!(
                "Input and expected-output files share the suffix '{}'",
                self.input_suffix
            );
        }
        Ok(())
    }

    /// Expands `~` and environment variables in every path setting.
    pub fn expand_paths(mut self) -> Result<Self> {
        self.source = expand_path(&self.source)?;
        self.executable = expand_path(&self.executable)?;
        self.report = expand_path(&self.report)?;
        self.cases_dir = expand_path(&self.cases_dir)?;
        Ok(self)
    }

    /// The full compiler command line: the program, then `-o <executable> <source>`,
    /// then the extra flags.
    pub fn compiler_command(&self) -> Result<Vec<String>> {
        let program = shellexpand::full(&self.compiler)
            .with_context(|| format!("Failed to expand compiler: {}", self.compiler))?
            .into_owned();
        let mut command = vec![
            program,
            "-o".to_string(),
            self.executable.to_string_lossy().into_owned(),
            self.source.to_string_lossy().into_owned(),
        ];
        command.extend(self.compiler_flags.to_args()?);
        Ok(command)
    }
}

/// Loads a harness configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the configuration file
///
/// # Returns
/// The parsed configuration, with defaults for every missing key
pub fn load_config(path: &Path) -> Result<HarnessConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Loads the configuration file if it exists, otherwise returns the defaults.
///
/// A missing file is only accepted when `required` is false, i.e. when the
/// path is the implicit default rather than one the user asked for.
///
/// 如果配置文件存在则加载，否则返回默认值。
/// 只有当 `required` 为 false（即路径是隐式默认值而非用户指定）时，才接受文件缺失。
pub fn load_or_default(path: &Path, required: bool) -> Result<(HarnessConfig, Option<PathBuf>)> {
    if !required && !path.exists() {
        return Ok((HarnessConfig::default(), None));
    }
    let config = load_config(path)?;
    Ok((config, Some(path.to_path_buf())))
}
