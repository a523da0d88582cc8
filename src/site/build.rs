//! Site assembly.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use super::artifacts::download_all;
use super::listing::{write_listing, INDEX_FILE};
use super::table::render_table;
use super::template::{fill_template, format_date, load_asset, PAGE_TEMPLATE, STYLESHEET};
use crate::config::Settings;
use crate::report::ReportStore;
use crate::upstream::{HttpFetcher, PageCache, WebSource};

/// Build ID that publishes local reports instead of CI artifacts.
pub const LOCAL_BUILD: &str = "local";

/// What a site build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// The generated comparison page.
    pub index: PathBuf,
    /// Number of OS reports in the table.
    pub reports: usize,
}

/// Build the static site for `build_id`.
///
/// `local` publishes the reports in the source directory; any other ID
/// names a CI build whose artifacts are downloaded.
pub fn build_site(build_id: &str, settings: &Settings) -> Result<BuildSummary> {
    let site_dir = &settings.site_dir;
    let data_dir = &settings.data_dir;
    let template_dir = settings.template_dir.as_deref();

    fs::create_dir_all(site_dir)
        .with_context(|| format!("Failed to create {}", site_dir.display()))?;
    fs::write(site_dir.join(STYLESHEET), load_asset(STYLESHEET, template_dir)?)
        .with_context(|| format!("Failed to write {}", STYLESHEET))?;

    let fetcher = HttpFetcher::with_timeout(Duration::from_secs(settings.http_timeout_secs))?;

    if build_id.eq_ignore_ascii_case(LOCAL_BUILD) {
        info!("Using local reports from {}", settings.source_dir.display());
        copy_dir_all(&settings.source_dir, &data_dir.join("source")).with_context(|| {
            format!("Failed to copy reports from {}", settings.source_dir.display())
        })?;
    } else {
        download_all(
            &fetcher,
            &settings.artifacts.api,
            build_id,
            &settings.artifacts.tasks,
            data_dir,
        )?;
    }

    let published = site_dir.join("data");
    copy_dir_all(data_dir, &published)
        .with_context(|| format!("Failed to copy {} into the site", data_dir.display()))?;

    let reports = ReportStore::new(data_dir.join("source")).load_all()?;
    let mut pages = PageCache::new();
    let mut source = WebSource::new(&fetcher, &mut pages)
        .with_urls(settings.upstream.urls.clone())
        .with_exclusions(settings.upstream.exclude.clone());

    let table = render_table(&reports, &mut source)?;
    let template = load_asset(PAGE_TEMPLATE, template_dir)?;
    let page = fill_template(&template, &format_date(Utc::now()), &table, &source);

    let index = site_dir.join(INDEX_FILE);
    fs::write(&index, page).with_context(|| format!("Failed to write {}", index.display()))?;
    info!("Wrote {}", index.display());

    write_listing(&published, site_dir)?;
    let published_source = published.join("source");
    if published_source.is_dir() {
        write_listing(&published_source, site_dir)?;
    }

    Ok(BuildSummary {
        index,
        reports: reports.len(),
    })
}

/// Recursively copy `src` into `dst`, creating it as needed.
fn copy_dir_all(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let dest_path = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &dest_path)?;
        } else {
            fs::copy(entry.path(), dest_path)?;
        }
    }
    Ok(())
}
