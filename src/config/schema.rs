//! Configuration schema.
//!
//! Every key is optional; a missing key takes its default.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::package::Package;

/// Root configuration structure for `toolvers.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Where `check` and `collect` write reports.
    pub source_dir: PathBuf,

    /// Where `build` gathers report data before publishing.
    pub data_dir: PathBuf,

    /// Generated site.
    pub site_dir: PathBuf,

    /// Directory with replacements for the embedded page template and
    /// stylesheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,

    /// Timeout for every HTTP request, in seconds.
    pub http_timeout_secs: u64,

    /// CI artifact download.
    pub artifacts: ArtifactSettings,

    /// Upstream support-window pages.
    pub upstream: UpstreamSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("source"),
            data_dir: PathBuf::from("_data"),
            site_dir: PathBuf::from("_site"),
            template_dir: None,
            http_timeout_secs: 30,
            artifacts: ArtifactSettings::default(),
            upstream: UpstreamSettings::default(),
        }
    }
}

/// Where CI builds publish collected reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactSettings {
    /// Base URL of the artifact API.
    pub api: String,

    /// CI tasks whose `json.zip` artifacts are downloaded.
    pub tasks: Vec<String>,
}

impl Default for ArtifactSettings {
    fn default() -> Self {
        Self {
            api: "https://api.cirrus-ci.com".to_string(),
            tasks: [
                "archlinux_and_manjaro",
                "fedora",
                "opensuse",
                "debian_and_ubuntu",
                "freebsd",
            ]
            .iter()
            .map(|task| task.to_string())
            .collect(),
        }
    }
}

/// Overrides for the scraped project pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpstreamSettings {
    /// Page scraped for a package, replacing the built-in URL.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub urls: BTreeMap<Package, String>,

    /// Branches ignored even when the project still lists them.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub exclude: BTreeMap<Package, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_gives_defaults() {
        let settings: Settings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.source_dir, PathBuf::from("source"));
        assert_eq!(settings.artifacts.tasks.len(), 5);
        assert_eq!(settings.http_timeout_secs, 30);
    }

    #[test]
    fn parses_upstream_overrides() {
        let settings: Settings = serde_yaml::from_str(
            r#"
upstream:
  urls:
    clang: http://localhost:8080/llvm
  exclude:
    python3: ["3.8"]
"#,
        )
        .unwrap();

        assert_eq!(
            settings.upstream.urls[&Package::Clang],
            "http://localhost:8080/llvm"
        );
        assert_eq!(settings.upstream.exclude[&Package::Python3], ["3.8"]);
    }

    #[test]
    fn partial_nested_sections_keep_defaults() {
        let settings: Settings =
            serde_yaml::from_str("artifacts:\n  tasks: [freebsd]\n").unwrap();
        assert_eq!(settings.artifacts.api, "https://api.cirrus-ci.com");
        assert_eq!(settings.artifacts.tasks, ["freebsd"]);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(serde_yaml::from_str::<Settings>("site: _public\n").is_err());
        assert!(serde_yaml::from_str::<Settings>("upstream:\n  urls:\n    perl: x\n").is_err());
    }
}
