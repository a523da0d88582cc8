//! The fixed set of tracked toolchain packages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A toolchain package whose shipped version is compared across systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Package {
    Python3,
    Ruby,
    Clang,
    Gcc,
}

impl Package {
    /// Order in which packages are passed to package manager queries.
    pub const QUERY_ORDER: [Package; 4] = [
        Package::Python3,
        Package::Ruby,
        Package::Clang,
        Package::Gcc,
    ];

    /// Order of rows in the rendered comparison table.
    pub const REPORT_ORDER: [Package; 4] = [
        Package::Clang,
        Package::Gcc,
        Package::Python3,
        Package::Ruby,
    ];

    /// Canonical name used in reports and package manager queries.
    pub fn name(self) -> &'static str {
        match self {
            Package::Python3 => "python3",
            Package::Ruby => "ruby",
            Package::Clang => "clang",
            Package::Gcc => "gcc",
        }
    }

    /// Page listing the branches the project currently maintains.
    pub fn default_support_url(self) -> &'static str {
        match self {
            Package::Python3 => "https://devguide.python.org/versions/#supported-versions",
            Package::Ruby => "https://www.ruby-lang.org/en/downloads/branches/",
            Package::Clang => "https://llvm.org",
            Package::Gcc => "https://gcc.gnu.org/",
        }
    }

    /// Canonical names in query order.
    pub fn query_names() -> Vec<String> {
        Self::QUERY_ORDER
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Package {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python3" => Ok(Package::Python3),
            "ruby" => Ok(Package::Ruby),
            "clang" => Ok(Package::Clang),
            "gcc" => Ok(Package::Gcc),
            _ => Err(format!("unknown package: {}", s)),
        }
    }
}
