//! Configuration loading.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use toolvers::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("ci.yml");
//! fs::write(&path, "site_dir: public").unwrap();
//!
//! let settings = load_config(temp.path(), Some(&path)).unwrap();
//! assert_eq!(settings.site_dir, std::path::PathBuf::from("public"));
//! ```
//!
//! # Configuration File Locations
//!
//! Without `--config`, toolvers merges configuration in this order:
//! 1. User global config (`<config dir>/toolvers/config.yml`)
//! 2. Project config (`toolvers.yml` in the working directory)

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{load_config, load_config_value, load_from_paths, ConfigPaths, PROJECT_CONFIG};
pub use merger::{deep_merge, merge_configs};
pub use schema::{ArtifactSettings, Settings, UpstreamSettings};
