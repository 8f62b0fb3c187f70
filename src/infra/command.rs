//! # Command Execution Module / 命令执行模块
//!
//! Spawns child processes for the compiler and the subject program.
//!
//! 为编译器和被测程序派生子进程。

use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Everything a finished child process left behind.
/// 已结束子进程留下的全部内容。
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    /// Standard output, decoded as text.
    pub stdout: String,
    /// Standard error, decoded as text.
    pub stderr: String,
}

/// Spawns a command with the given standard input, captures its stdout and
/// stderr separately and waits for it to exit.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
/// * `stdin` - What the child reads as standard input, usually an opened file.
///
/// # Returns
/// The exit status and both output streams. Invalid UTF-8 is replaced rather
/// than rejected.
///
/// 派生一个命令并提供给定的标准输入，分别捕获其 stdout 和 stderr，并等待其退出。
pub async fn spawn_and_capture(
    mut cmd: Command,
    stdin: impl Into<Stdio>,
) -> std::io::Result<CapturedOutput> {
    let child = cmd
        .stdin(stdin)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Reads both pipes to the end while waiting, so a chatty child cannot
    // block on a full pipe.
    let output = child.wait_with_output().await?;

    Ok(CapturedOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Runs a command with the harness's own stdin, stdout and stderr and waits
/// for it to exit. Used for the compiler, whose diagnostics go straight to the user.
pub async fn run_inherited(mut cmd: Command) -> std::io::Result<ExitStatus> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
}

/// The numeric return code of a finished process. A process killed by signal
/// `N` reports `-N`.
pub fn return_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}

/// Renders a command line for logs, quoting arguments where a shell would need it.
pub fn display_command_line(parts: &[String]) -> String {
    shlex::try_join(parts.iter().map(String::as_str)).unwrap_or_else(|_| parts.join(" "))
}
