//! CI artifact bundles.
//!
//! Every CI task uploads the reports it collected as a `json.zip`
//! artifact. Building the site for a CI build downloads each task's bundle
//! and unpacks it into the data directory.

use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::info;
use zip::ZipArchive;

use crate::upstream::HttpFetcher;

/// URL of the report bundle uploaded by `task` in CI build `build_id`.
pub fn artifact_url(api: &str, build_id: &str, task: &str) -> String {
    format!(
        "{}/v1/artifact/build/{}/{}/json.zip",
        api.trim_end_matches('/'),
        build_id,
        task
    )
}

/// Download and unpack the bundle of every task into `dest`.
///
/// Returns the paths of all extracted files.
pub fn download_all(
    fetcher: &HttpFetcher,
    api: &str,
    build_id: &str,
    tasks: &[String],
    dest: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create {}", dest.display()))?;

    let mut extracted = Vec::new();
    for task in tasks {
        let url = artifact_url(api, build_id, task);
        info!("Downloading {}", url);
        let bytes = fetcher.fetch_bytes(&url)?;
        let files = extract_zip(&bytes, dest)
            .with_context(|| format!("Failed to unpack artifacts of task {}", task))?;
        extracted.extend(files);
    }
    Ok(extracted)
}

/// Extract a ZIP archive into `dest`.
///
/// Entries whose paths would land outside `dest` are rejected.
pub fn extract_zip(bytes: &[u8], dest: &Path) -> Result<Vec<PathBuf>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).context("Invalid ZIP archive")?;
    let mut extracted = Vec::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let relative = entry.enclosed_name().ok_or_else(|| {
            anyhow!("Refusing to extract {} outside {}", entry.name(), dest.display())
        })?;
        let path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&path)?;
            continue;
        }

        info!("> Extracting {}", entry.name());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        io::copy(&mut entry, &mut file)?;
        extracted.push(path);
    }

    Ok(extracted)
}
