//! Report data model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parsed package manager output: package name to record.
pub type Results = BTreeMap<String, PackageRecord>;

/// Version information for one package on one system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Normalized dotted version (epoch, release and qualifiers stripped).
    pub version: String,
    /// Package that actually provides this one, when it is not shipped
    /// under its own name (e.g. clang via llvm).
    pub via: Option<String>,
}

impl PackageRecord {
    /// Record for a package shipped under its own name.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            via: None,
        }
    }

    /// Record for a package provided by another package.
    pub fn via(version: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            via: Some(provider.into()),
        }
    }
}

/// All collected package versions for one operating system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsReport {
    /// Short OS name (e.g. "Ubuntu").
    pub name: String,
    /// Display label including the version (e.g. "Ubuntu 22.04").
    pub description: String,
    /// Package name to version record.
    pub results: Results,
}

impl OsReport {
    /// Create a report.
    pub fn new(name: impl Into<String>, description: impl Into<String>, results: Results) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            results,
        }
    }

    /// Key used for this report's file name.
    pub fn file_id(&self) -> String {
        file_id(&self.description)
    }
}

/// Lower-case a description and replace spaces with underscores.
///
/// `"Ubuntu 22.04"` becomes `"ubuntu_22.04"`.
pub fn file_id(description: &str) -> String {
    description.to_lowercase().replace(' ', "_")
}
