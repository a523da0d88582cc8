//! Vagrant boxes, used for systems without container images (FreeBSD).

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::shell_quote;
use crate::error::Result;
use crate::shell::CommandRunner;

/// A running Vagrant box.
///
/// The box is started by [`VagrantBox::up`] and halted when the value is
/// dropped, whether or not the queries succeeded.
pub struct VagrantBox<R: CommandRunner> {
    runner: R,
    box_dir: PathBuf,
}

impl<R: CommandRunner> VagrantBox<R> {
    /// Start the box defined in `box_dir`.
    ///
    /// The box is halted even when `vagrant up` itself fails.
    pub fn up(runner: R, box_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut vm = Self {
            runner,
            box_dir: box_dir.into(),
        };
        info!("Starting Vagrant box in {}", vm.box_dir.display());
        let up = in_dir(&vm.box_dir, "vagrant up");
        vm.runner.run(&up)?;
        Ok(vm)
    }

    /// Directory holding the `Vagrantfile`.
    pub fn box_dir(&self) -> &Path {
        &self.box_dir
    }
}

impl<R: CommandRunner> CommandRunner for VagrantBox<R> {
    fn run(&mut self, command: &str) -> Result<String> {
        let ssh = format!("vagrant ssh -c {}", shell_quote(command));
        let output = self.runner.run(&in_dir(&self.box_dir, &ssh))?;
        Ok(output.replace('\r', ""))
    }
}

impl<R: CommandRunner> Drop for VagrantBox<R> {
    fn drop(&mut self) {
        debug!("Halting Vagrant box in {}", self.box_dir.display());
        if let Err(e) = self.runner.run(&in_dir(&self.box_dir, "vagrant halt")) {
            warn!("Failed to halt Vagrant box in {}: {}", self.box_dir.display(), e);
        }
    }
}

fn in_dir(dir: &Path, command: &str) -> String {
    format!("cd {} && {}", shell_quote(&dir.to_string_lossy()), command)
}
