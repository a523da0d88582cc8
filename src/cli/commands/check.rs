//! The `toolvers check` command.
//!
//! Queries the packages of the system toolvers runs on and saves the
//! report into the source directory.

use crate::config::Settings;
use crate::distro;
use crate::error::Result;
use crate::report::ReportStore;
use crate::shell::LocalRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::collect_and_save;

/// The check command implementation.
pub struct CheckCommand {
    settings: Settings,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut runner = LocalRunner::new();
        let identity = distro::detect(&mut runner)?;
        let store = ReportStore::new(&self.settings.source_dir);

        collect_and_save(ui, &identity, &mut runner, false, &store)?;
        Ok(CommandResult::success())
    }
}
