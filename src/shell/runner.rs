//! Command runners used by collectors.

use tracing::debug;

use super::command::execute;
use crate::error::{Result, ToolversError};

/// Something that can run a shell command and hand back its stdout.
///
/// A non-zero exit is an error; collectors never retry.
pub trait CommandRunner {
    /// Run `command` and return its trimmed standard output.
    fn run(&mut self, command: &str) -> Result<String>;
}

/// Runs commands on the local machine through `sh -c`.
#[derive(Debug, Default)]
pub struct LocalRunner;

impl LocalRunner {
    /// Create a local runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for LocalRunner {
    fn run(&mut self, command: &str) -> Result<String> {
        debug!("$ {}", command);
        let result = execute(command, None)?;

        if !result.success() {
            debug!("stderr: {}", result.stderr.trim());
            return Err(ToolversError::CommandFailed {
                command: command.to_string(),
                code: result.exit_code,
            });
        }

        let output = result.stdout.trim().to_string();
        debug!("{}", output);
        Ok(output)
    }
}
