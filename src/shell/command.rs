//! Process spawning for package queries.

use crate::error::{Result, ToolversError};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Queries rely on POSIX `&&` chaining and quoting only.
const SHELL: &str = "/bin/sh";

/// Captured output of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    pub stdout: String,

    pub stderr: String,

    pub duration: Duration,
}

impl CommandOutput {
    /// Whether the command exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run `command` through `sh -c`, capturing both output streams.
///
/// Only a failure to spawn is an error; a non-zero exit is reported
/// through [`CommandOutput::exit_code`].
pub fn execute(command: &str, cwd: Option<&Path>) -> Result<CommandOutput> {
    let start = Instant::now();

    let mut cmd = Command::new(SHELL);
    cmd.arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    let output = cmd.output().map_err(|_| ToolversError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration: start.elapsed(),
    })
}
