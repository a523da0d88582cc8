//! Per-OS package queries and output parsers.
//!
//! Each supported OS family knows how to build one shell command that
//! describes the tracked packages ([`DistroFamily::query`]) and how to turn
//! that command's output into normalized [`PackageRecord`]s
//! ([`DistroFamily::parse`]).
//!
//! Family quirks live entirely in the query/parse pair:
//! - Arch calls Python 3 `python`
//! - Fedora needs an architecture suffix
//! - openSUSE resolves `python3` with a preliminary `what-provides`
//! - FreeBSD ships clang inside `llvm`
//!
//! [`PackageRecord`]: crate::report::PackageRecord

pub mod arch;
pub mod chunk;
pub mod debian;
pub mod detect;
pub mod fedora;
pub mod freebsd;
pub mod opensuse;

pub use chunk::normalize_version;
pub use detect::{detect, detect_with, parse_os_release, OsIdentity};

use std::collections::BTreeMap;
use std::fmt;

use tracing::info;

use crate::error::{Result, ToolversError};
use crate::report::{OsReport, Results};
use crate::shell::CommandRunner;

/// A package manager query ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Command that must run first on a freshly provisioned system.
    pub setup: Option<String>,
    /// Command whose output describes the packages.
    pub command: String,
    /// Distro package name to tracked package name.
    pub aliases: BTreeMap<String, String>,
}

impl Query {
    /// Create a query with no setup command and no aliases.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            setup: None,
            command: command.into(),
            aliases: BTreeMap::new(),
        }
    }

    /// Set the setup command.
    pub fn with_setup(mut self, setup: impl Into<String>) -> Self {
        self.setup = Some(setup.into());
        self
    }

    /// Set the alias table.
    pub fn with_aliases(mut self, aliases: BTreeMap<String, String>) -> Self {
        self.aliases = aliases;
        self
    }

    /// Command to run on a fresh system: setup, then the query.
    pub fn provisioned_command(&self) -> String {
        match &self.setup {
            Some(setup) => format!("{} && {}", setup, self.command),
            None => self.command.clone(),
        }
    }
}

/// Operating system families with a dedicated package manager parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistroFamily {
    Arch,
    Debian,
    Fedora,
    OpenSuse,
    FreeBsd,
}

impl DistroFamily {
    /// Family for an OS name as found in `/etc/os-release` `NAME`.
    pub fn from_os_name(name: &str) -> Result<Self> {
        match name {
            "Arch Linux" | "ArchLinux" | "Manjaro Linux" => Ok(Self::Arch),
            "Debian" | "Ubuntu" => Ok(Self::Debian),
            "Fedora" | "Fedora Linux" => Ok(Self::Fedora),
            "openSUSE Tumbleweed" | "openSUSE Leap" => Ok(Self::OpenSuse),
            "FreeBSD" => Ok(Self::FreeBsd),
            _ => Err(ToolversError::UnknownOs {
                name: name.to_string(),
            }),
        }
    }

    /// Family for a container image such as `opensuse/leap:15.5`.
    pub fn from_image(image: &str) -> Result<Self> {
        let base = image
            .split(':')
            .next()
            .and_then(|repo| repo.split('/').next())
            .unwrap_or_default();
        match base {
            "archlinux" | "manjarolinux" => Ok(Self::Arch),
            "debian" | "ubuntu" => Ok(Self::Debian),
            "fedora" => Ok(Self::Fedora),
            "opensuse" => Ok(Self::OpenSuse),
            _ => Err(ToolversError::UnknownOs {
                name: image.to_string(),
            }),
        }
    }

    /// Name of the package manager binary.
    pub fn package_manager(self) -> &'static str {
        match self {
            Self::Arch => "pacman",
            Self::Debian => "apt",
            Self::Fedora => "dnf",
            Self::OpenSuse => "zypper",
            Self::FreeBsd => "pkg",
        }
    }

    /// Build the query for `packages`.
    ///
    /// Only openSUSE uses `runner`, to resolve which package provides
    /// `python3`.
    pub fn query(self, packages: &[String], runner: &mut dyn CommandRunner) -> Result<Query> {
        match self {
            Self::Arch => Ok(arch::query(packages)),
            Self::Debian => Ok(debian::query(packages)),
            Self::Fedora => Ok(fedora::query(packages)),
            Self::OpenSuse => opensuse::query(packages, runner),
            Self::FreeBsd => Ok(freebsd::query(packages)),
        }
    }

    /// Parse the output of `query`.
    pub fn parse(self, output: &str, query: &Query) -> Result<Results> {
        match self {
            Self::Arch => Ok(arch::parse(output, query)),
            Self::Debian => Ok(debian::parse(output, query)),
            Self::Fedora => Ok(fedora::parse(output, query)),
            Self::OpenSuse => opensuse::parse(output, query),
            Self::FreeBsd => Ok(freebsd::parse(output, query)),
        }
    }
}

impl fmt::Display for DistroFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package_manager())
    }
}

/// Query `packages` on the system behind `runner` and build its report.
///
/// With `provisioned` set the family's setup command (e.g. refreshing
/// package lists) runs first.
pub fn collect(
    identity: &OsIdentity,
    packages: &[String],
    runner: &mut dyn CommandRunner,
    provisioned: bool,
) -> Result<OsReport> {
    let query = identity.family.query(packages, runner)?;
    let command = if provisioned {
        query.provisioned_command()
    } else {
        query.command.clone()
    };

    info!(
        "Querying {} with {}",
        identity.description, identity.family
    );
    let output = runner.run(&command)?;
    let results = identity.family.parse(&output, &query)?;

    Ok(OsReport::new(
        identity.name.clone(),
        identity.description.clone(),
        results,
    ))
}
