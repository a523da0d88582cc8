//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::merger::merge_configs;
use crate::config::schema::Settings;
use crate::error::{Result, ToolversError};

/// Project configuration file name, looked up in the working directory.
pub const PROJECT_CONFIG: &str = "toolvers.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`<config dir>/toolvers/config.yml`)
/// 2. Project config (`toolvers.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config.
    pub user_global: Option<PathBuf>,

    /// Project config.
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self::discover_with(project_root, dirs::config_dir().as_deref())
    }

    /// Discover config files with an explicit user config directory.
    pub fn discover_with(project_root: &Path, user_config_dir: Option<&Path>) -> Self {
        let user_global = user_config_dir
            .map(|dir| dir.join("toolvers").join("config.yml"))
            .filter(|path| path.is_file());
        let project = Some(project_root.join(PROJECT_CONFIG)).filter(|path| path.is_file());

        Self {
            user_global,
            project,
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

/// Load a config file as raw YAML Value (for merging).
///
/// An empty file counts as an empty mapping.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| ToolversError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| ToolversError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if value.is_null() {
        Ok(serde_yaml::Value::Mapping(Default::default()))
    } else {
        Ok(value)
    }
}

/// Load and merge the given config files into typed settings.
///
/// With no files the defaults apply.
pub fn load_from_paths(paths: &[&PathBuf]) -> Result<Settings> {
    let mut configs = Vec::new();
    for path in paths {
        debug!("Loading config {}", path.display());
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);
    serde_yaml::from_value(merged).map_err(|e| ToolversError::Config {
        path: paths
            .last()
            .map(|path| path.to_path_buf())
            .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG)),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges the user and project config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<Settings> {
    match config_override {
        Some(path) => load_from_paths(&[&path.to_path_buf()]),
        None => {
            let paths = ConfigPaths::discover(project_root);
            load_from_paths(&paths.all_existing())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn discover_finds_project_and_user_configs() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG), "site_dir: public").unwrap();
        fs::create_dir_all(user.path().join("toolvers")).unwrap();
        fs::write(user.path().join("toolvers/config.yml"), "http_timeout_secs: 5").unwrap();

        let paths = ConfigPaths::discover_with(project.path(), Some(user.path()));

        assert!(paths.user_global.is_some());
        assert!(paths.project.is_some());
        assert_eq!(paths.all_existing().len(), 2);
    }

    #[test]
    fn discover_without_files_finds_nothing() {
        let project = TempDir::new().unwrap();
        let paths = ConfigPaths::discover_with(project.path(), None);
        assert!(paths.all_existing().is_empty());
    }

    #[test]
    fn project_config_overrides_user_config() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(
            project.path().join(PROJECT_CONFIG),
            "http_timeout_secs: 10\n",
        )
        .unwrap();
        fs::create_dir_all(user.path().join("toolvers")).unwrap();
        fs::write(
            user.path().join("toolvers/config.yml"),
            "http_timeout_secs: 5\nsite_dir: public\n",
        )
        .unwrap();

        let paths = ConfigPaths::discover_with(project.path(), Some(user.path()));
        let settings = load_from_paths(&paths.all_existing()).unwrap();

        assert_eq!(settings.http_timeout_secs, 10);
        assert_eq!(settings.site_dir, PathBuf::from("public"));
    }

    #[test]
    fn override_path_is_loaded_alone() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG), "site_dir: ignored").unwrap();
        let explicit = project.path().join("ci.yml");
        fs::write(&explicit, "data_dir: ci-data").unwrap();

        let settings = load_config(project.path(), Some(&explicit)).unwrap();

        assert_eq!(settings.data_dir, PathBuf::from("ci-data"));
        assert_eq!(settings.site_dir, PathBuf::from("_site"));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let project = TempDir::new().unwrap();
        let path = project.path().join(PROJECT_CONFIG);
        fs::write(&path, "").unwrap();

        let settings = load_from_paths(&[&path]).unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn invalid_yaml_names_the_file() {
        let project = TempDir::new().unwrap();
        let path = project.path().join(PROJECT_CONFIG);
        fs::write(&path, "site_dir: [unclosed").unwrap();

        let err = load_from_paths(&[&path]).unwrap_err();

        assert!(matches!(&err, ToolversError::Config { path: p, .. } if p == &path));
    }

    #[test]
    fn unknown_key_is_a_config_error() {
        let project = TempDir::new().unwrap();
        let path = project.path().join(PROJECT_CONFIG);
        fs::write(&path, "colour: blue").unwrap();

        assert!(matches!(
            load_from_paths(&[&path]),
            Err(ToolversError::Config { .. })
        ));
    }

    #[test]
    fn missing_override_is_a_config_error() {
        let project = TempDir::new().unwrap();
        let err = load_config(project.path(), Some(&project.path().join("nope.yml"))).unwrap_err();
        assert!(matches!(err, ToolversError::Config { .. }));
    }
}
