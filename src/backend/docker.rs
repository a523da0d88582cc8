//! Ephemeral Docker containers.
//!
//! Every command gets a fresh `docker run --rm -t` container. With a TTY
//! attached the output carries carriage returns and whatever docker prints
//! itself, so the command is bracketed by markers and only the text between
//! them is kept.

use tracing::debug;

use super::shell_quote;
use crate::error::{Result, ToolversError};
use crate::shell::CommandRunner;

const START_MARKER: &str = "--START--";
const END_MARKER: &str = "--END--";

/// Runs commands in throwaway containers of one image.
#[derive(Debug)]
pub struct DockerRunner<R: CommandRunner> {
    runner: R,
    image: String,
}

impl<R: CommandRunner> DockerRunner<R> {
    /// Run commands in `image` through `runner` on the host.
    pub fn new(runner: R, image: impl Into<String>) -> Self {
        Self {
            runner,
            image: image.into(),
        }
    }

    /// The image commands run in.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Host command that runs `command` in a new container.
    pub fn wrap(&self, command: &str) -> String {
        let script = format!(
            "printf -- '{}\\n' && {} && printf -- '\\n{}'",
            START_MARKER, command, END_MARKER
        );
        format!("docker run --rm -t {} sh -c {}", self.image, shell_quote(&script))
    }
}

impl<R: CommandRunner> CommandRunner for DockerRunner<R> {
    fn run(&mut self, command: &str) -> Result<String> {
        let output = self.runner.run(&self.wrap(command))?;
        let output = between_markers(&output).ok_or_else(|| ToolversError::Parse {
            format: "docker".to_string(),
            message: format!("no output markers in output of {:?}", command),
        })?;
        debug!("{}", output);
        Ok(output)
    }
}

/// Text between the start and end markers, without carriage returns.
fn between_markers(output: &str) -> Option<String> {
    let start = output.find(START_MARKER)? + START_MARKER.len();
    let end = start + output[start..].rfind(END_MARKER)?;
    Some(output[start..end].replace('\r', "").trim().to_string())
}
