//! Detection of the running operating system.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::DistroFamily;
use crate::error::{Result, ToolversError};
use crate::shell::CommandRunner;

/// Which OS a report describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsIdentity {
    /// Distribution name, e.g. `Ubuntu`.
    pub name: String,
    /// Name plus release, e.g. `Ubuntu 22.04`. Used as display label and
    /// file key.
    pub description: String,
    pub family: DistroFamily,
}

impl OsIdentity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        family: DistroFamily,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            family,
        }
    }

    /// Identity for a system known only by its description.
    ///
    /// The family comes from the longest leading run of words that names a
    /// known OS, so `Arch Linux 2024` and `FreeBSD 14.0-RELEASE` both work.
    pub fn from_description(description: &str) -> Result<Self> {
        let words: Vec<&str> = description.split_whitespace().collect();
        for len in (1..=words.len()).rev() {
            let name = words[..len].join(" ");
            if let Ok(family) = DistroFamily::from_os_name(&name) {
                return Ok(Self::new(name, description.trim(), family));
            }
        }
        Err(ToolversError::UnknownOs {
            name: description.to_string(),
        })
    }
}

/// Detect the OS this process runs on.
pub fn detect(runner: &mut dyn CommandRunner) -> Result<OsIdentity> {
    detect_with(Path::new("/etc"), cfg!(target_os = "freebsd"), runner)
}

/// Detect the OS from files under `etc_dir`.
///
/// On FreeBSD the description comes from `uname -sr` instead.
pub fn detect_with(
    etc_dir: &Path,
    is_freebsd: bool,
    runner: &mut dyn CommandRunner,
) -> Result<OsIdentity> {
    if is_freebsd {
        let description = runner.run("uname -sr")?;
        return Ok(OsIdentity::new(
            "FreeBSD",
            description.trim(),
            DistroFamily::FreeBsd,
        ));
    }

    let arch_release = etc_dir.join("arch-release");
    if arch_release.is_file() && fs::read_to_string(&arch_release)?.trim().is_empty() {
        return Ok(OsIdentity::new("Arch Linux", "Arch Linux", DistroFamily::Arch));
    }

    let os_release = etc_dir.join("os-release");
    let content = fs::read_to_string(&os_release).map_err(|e| ToolversError::Parse {
        format: "os-release".to_string(),
        message: format!("{}: {}", os_release.display(), e),
    })?;
    let fields = parse_os_release(&content);

    let Some(full_name) = fields.get("NAME") else {
        return Err(ToolversError::Parse {
            format: "os-release".to_string(),
            message: format!("{} has no NAME", os_release.display()),
        });
    };
    let name = full_name.replace(" GNU/Linux", "");
    let version_id = fields.get("VERSION_ID").map(String::as_str).unwrap_or("");
    let description = format!("{} {}", name, version_id).trim().to_string();
    debug!("Detected {:?} from {}", description, os_release.display());

    let family = DistroFamily::from_os_name(&name)?;
    Ok(OsIdentity::new(name, description, family))
}

/// Parse `KEY=value` lines; values may be double-quoted.
pub fn parse_os_release(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}
