//! Command-line interface for toolvers.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{BuildArgs, Cli, CollectArgs, Commands, CompletionsArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
