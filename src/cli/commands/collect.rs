//! The `toolvers collect` command.
//!
//! Queries a freshly provisioned system, either a throwaway container or a
//! Vagrant box, and saves its report into the source directory.

use std::path::Path;

use tracing::debug;

use crate::backend::{DockerRunner, VagrantBox};
use crate::cli::args::CollectArgs;
use crate::config::Settings;
use crate::distro::{DistroFamily, OsIdentity};
use crate::error::Result;
use crate::report::ReportStore;
use crate::shell::LocalRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::collect_and_save;

/// The collect command implementation.
pub struct CollectCommand {
    settings: Settings,
    args: CollectArgs,
}

impl CollectCommand {
    /// Create a new collect command.
    pub fn new(settings: Settings, args: CollectArgs) -> Self {
        Self { settings, args }
    }

    fn collect_docker(&self, ui: &mut dyn UserInterface, image: &str) -> Result<()> {
        let identity = docker_identity(&self.args.description, image)?;
        debug!("Collecting {} from image {}", identity.description, image);

        let mut runner = DockerRunner::new(LocalRunner::new(), image);
        collect_and_save(ui, &identity, &mut runner, true, &self.store())?;
        Ok(())
    }

    fn collect_vagrant(&self, ui: &mut dyn UserInterface, box_dir: &Path) -> Result<()> {
        let identity = OsIdentity::from_description(&self.args.description)?;
        ui.message(&format!("Starting Vagrant box in {}", box_dir.display()));

        // Halted when `vm` drops, whether or not the query succeeded.
        let mut vm = VagrantBox::up(LocalRunner::new(), box_dir)?;
        collect_and_save(ui, &identity, &mut vm, true, &self.store())?;
        Ok(())
    }

    fn store(&self) -> ReportStore {
        ReportStore::new(&self.settings.source_dir)
    }
}

impl Command for CollectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match (&self.args.docker, &self.args.vagrant) {
            (Some(image), _) => self.collect_docker(ui, image)?,
            (None, Some(box_dir)) => self.collect_vagrant(ui, box_dir)?,
            (None, None) => {
                unreachable!("the target argument group requires --docker or --vagrant")
            }
        }
        Ok(CommandResult::success())
    }
}

/// Identity of a container: the family comes from the image, the name from
/// the description when it names a known OS.
fn docker_identity(description: &str, image: &str) -> Result<OsIdentity> {
    let family = DistroFamily::from_image(image)?;
    let name = OsIdentity::from_description(description)
        .map(|identity| identity.name)
        .unwrap_or_else(|_| description.trim().to_string());
    Ok(OsIdentity::new(name, description.trim(), family))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolversError;
    use crate::ui::MockUI;

    #[test]
    fn docker_identity_uses_image_family() {
        let identity = docker_identity("Ubuntu 24.04", "ubuntu:24.04").unwrap();
        assert_eq!(identity.name, "Ubuntu");
        assert_eq!(identity.description, "Ubuntu 24.04");
        assert_eq!(identity.family, DistroFamily::Debian);
    }

    #[test]
    fn docker_identity_keeps_unrecognized_description() {
        let identity = docker_identity("Leap 15.5", "opensuse/leap:15.5").unwrap();
        assert_eq!(identity.name, "Leap 15.5");
        assert_eq!(identity.family, DistroFamily::OpenSuse);
    }

    #[test]
    fn unsupported_image_is_rejected() {
        let err = docker_identity("Alpine 3.19", "alpine:3.19").unwrap_err();
        assert!(matches!(err, ToolversError::UnknownOs { .. }));
    }

    #[test]
    fn unknown_vagrant_os_fails_before_starting_box() {
        let cmd = CollectCommand::new(
            Settings::default(),
            CollectArgs {
                description: "Plan 9".to_string(),
                docker: None,
                vagrant: Some("boxes/plan9".into()),
            },
        );
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, ToolversError::UnknownOs { .. }));
        assert!(ui.messages().is_empty());
    }
}
