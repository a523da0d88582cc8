//! Report storage on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::model::OsReport;
use crate::error::{Result, ToolversError};

/// Directory of `<file id>.json` reports.
pub struct ReportStore {
    root: PathBuf,
}

impl ReportStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the store directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a report is written to.
    pub fn path_for(&self, report: &OsReport) -> PathBuf {
        self.root.join(format!("{}.json", report.file_id()))
    }

    /// Write a report, replacing any earlier run for the same OS.
    pub fn save(&self, report: &OsReport) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;

        let path = self.path_for(report);
        let json = serde_json::to_string(report)?;
        fs::write(&path, &json)?;

        info!("Saved report to {}", path.display());
        debug!("Report contents: {}", json);
        Ok(path)
    }

    /// Load every `*.json` report in the directory.
    ///
    /// A missing directory yields no reports. Reports come back in file
    /// name order.
    pub fn load_all(&self) -> Result<Vec<OsReport>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(&self.root)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut reports = Vec::with_capacity(paths.len());
        for path in paths {
            debug!("Loading report {}", path.display());
            let content = fs::read_to_string(&path)?;
            let report: OsReport = serde_json::from_str(&content).map_err(|e| ToolversError::Parse {
                format: "report".to_string(),
                message: format!("{}: {}", path.display(), e),
            })?;
            reports.push(report);
        }
        Ok(reports)
    }
}
