//! Runners that execute package queries somewhere other than the local host.
//!
//! Each backend wraps another [`CommandRunner`](crate::shell::CommandRunner) and rewrites every command
//! so it runs inside the target system. Tests drive them with
//! [`ScriptedRunner`](crate::shell::ScriptedRunner).

pub mod docker;
pub mod vagrant;

pub use docker::DockerRunner;
pub use vagrant::VagrantBox;

/// Quote `value` as a single POSIX shell word.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
