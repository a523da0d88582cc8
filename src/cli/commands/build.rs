//! The `toolvers build` command.

use tracing::debug;

use crate::cli::args::BuildArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::site::build_site;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Printed when no build ID is given.
pub const USAGE: &str = "Usage: toolvers build BUILD_ID";

/// The build command implementation.
pub struct BuildCommand {
    settings: Settings,
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(settings: Settings, args: BuildArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(build_id) = self.args.build_id.as_deref() else {
            ui.error(USAGE);
            return Ok(CommandResult::failure(1));
        };
        debug!("Building site for {:?} with {:?}", build_id, self.settings);

        let summary = build_site(build_id, &self.settings)?;

        ui.success(&format!(
            "Wrote {} ({} systems)",
            summary.index.display(),
            summary.reports
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn missing_build_id_prints_usage() {
        let cmd = BuildCommand::new(Settings::default(), BuildArgs { build_id: None });
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.errors(), [USAGE]);
        assert!(ui.successes().is_empty());
    }
}
