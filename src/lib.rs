//! toolvers - Compare the toolchain versions operating systems ship.
//!
//! toolvers asks each supported system's package manager which versions of
//! Python 3, Ruby, Clang and GCC it offers, stores the answers as JSON
//! reports, and renders a static HTML page that marks every version as
//! latest, outdated or unsupported against the branches each upstream
//! project still maintains.
//!
//! # Modules
//!
//! - [`backend`] - Running queries in containers and Vagrant boxes
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and merging
//! - [`distro`] - OS detection and per-package-manager query/parse pairs
//! - [`error`] - Error types and result aliases
//! - [`package`] - The tracked packages
//! - [`report`] - Per-OS reports and their JSON store
//! - [`shell`] - Shell command execution
//! - [`site`] - Static site generation
//! - [`ui`] - Terminal output
//! - [`upstream`] - Scraping upstream support windows
//! - [`version`] - Version comparison and classification
//!
//! # Example
//!
//! ```
//! use toolvers::version::{classify, Verdict};
//!
//! let supported = vec!["3.12".to_string(), "3.11".to_string()];
//! assert_eq!(classify("3.12.3", &supported).verdict, Verdict::Latest);
//! assert_eq!(classify("3.11.9", &supported).verdict, Verdict::Outdated);
//! assert_eq!(classify("3.6.15", &supported).verdict, Verdict::Unsupported);
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod distro;
pub mod error;
pub mod package;
pub mod report;
pub mod shell;
pub mod site;
pub mod ui;
pub mod upstream;
pub mod version;

pub use error::{Result, ToolversError};
