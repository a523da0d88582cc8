//! Directory listing pages for the published data.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::table::escape_html;
use crate::error::Result;

/// File name of generated pages; never listed itself.
pub const INDEX_FILE: &str = "index.html";

/// Render a listing page titled with `path` and linking every entry.
pub fn render_listing(path: &str, entries: &[String]) -> String {
    let title = format!("Directory listing for {}", escape_html(path));
    let mut html = String::from("<!doctype html>\n");
    html.push_str("<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str(&format!("<h1>{}</h1>\n", title));
    html.push_str("<ul>\n");
    for entry in entries {
        let entry = escape_html(entry);
        html.push_str(&format!("<li><a href=\"{0}\">{0}</a></li>\n", entry));
    }
    html.push_str("</ul>\n");
    html
}

/// Write `index.html` into `dir` listing its contents.
///
/// The title shows `dir` relative to `site_root`, e.g. `/data/source`.
/// Subdirectories are listed with a trailing `/`.
pub fn write_listing(dir: &Path, site_root: &Path) -> Result<PathBuf> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == INDEX_FILE {
            continue;
        }
        if entry.file_type()?.is_dir() {
            entries.push(format!("{}/", name));
        } else {
            entries.push(name);
        }
    }
    entries.sort();

    let relative = dir.strip_prefix(site_root).unwrap_or(dir);
    let path = format!("/{}", relative.to_string_lossy().trim_start_matches('/'));

    let index = dir.join(INDEX_FILE);
    fs::write(&index, render_listing(&path, &entries))?;
    info!("Wrote listing {}", index.display());
    Ok(index)
}
