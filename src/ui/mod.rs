//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] capturing output in tests
//! - [`Table`] for box-drawn tables
//!
//! Diagnostics go through `tracing`; everything meant for the person
//! running the command goes through a `UserInterface`.
//!
//! # Example
//!
//! ```
//! use toolvers::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Debian 12");
//! ui.success("Saved report");
//! assert_eq!(ui.successes(), ["Saved report"]);
//! ```

pub mod mock;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ToolversTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}
