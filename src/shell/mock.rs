//! Scripted command runner for testing.
//!
//! `ScriptedRunner` implements [`CommandRunner`] and answers commands from
//! a table of canned outputs, recording every command it was asked to run.
//!
//! # Example
//!
//! ```
//! use toolvers::shell::{CommandRunner, ScriptedRunner};
//!
//! let mut runner = ScriptedRunner::new();
//! runner.respond("uname -sr", "FreeBSD 14.0-RELEASE");
//!
//! assert_eq!(runner.run("uname -sr").unwrap(), "FreeBSD 14.0-RELEASE");
//! assert_eq!(runner.commands(), ["uname -sr"]);
//! ```

use std::collections::HashMap;

use super::runner::CommandRunner;
use crate::error::{Result, ToolversError};

/// Command runner that replays canned output.
///
/// Unscripted commands fail as if they exited with status 127.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, String>,
    commands: Vec<String>,
}

impl ScriptedRunner {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the output for an exact command string.
    pub fn respond(&mut self, command: &str, output: &str) -> &mut Self {
        self.responses
            .insert(command.to_string(), output.to_string());
        self
    }

    /// Commands run so far, in order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&mut self, command: &str) -> Result<String> {
        self.commands.push(command.to_string());
        self.responses
            .get(command)
            .map(|output| output.trim().to_string())
            .ok_or_else(|| ToolversError::CommandFailed {
                command: command.to_string(),
                code: Some(127),
            })
    }
}
