//! Shell command execution.
//!
//! Package manager queries are plain command strings run through `sh -c`.
//! Collectors take a [`CommandRunner`] so the same query can run locally,
//! inside a container, or inside a VM, and so tests can script the output.

pub mod command;
pub mod mock;
pub mod runner;

pub use command::{execute, CommandOutput};
pub use mock::ScriptedRunner;
pub use runner::{CommandRunner, LocalRunner};
