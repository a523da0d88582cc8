//! Page template and stylesheet.
//!
//! Both are embedded at compile time. A template directory from the
//! configuration may hold replacements for either file.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use include_dir::{include_dir, Dir};

use crate::error::{Result, ToolversError};
use crate::package::Package;
use crate::upstream::SupportSource;

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Page template file name.
pub const PAGE_TEMPLATE: &str = "index.html.template";

/// Stylesheet file name, in the templates directory and on the site.
pub const STYLESHEET: &str = "application.css";

/// Contents of template file `name`, preferring `override_dir`.
pub fn load_asset(name: &str, override_dir: Option<&Path>) -> Result<String> {
    if let Some(dir) = override_dir {
        let path = dir.join(name);
        if path.is_file() {
            return Ok(fs::read_to_string(path)?);
        }
    }

    TEMPLATES_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .map(String::from)
        .ok_or_else(|| ToolversError::Config {
            path: Path::new("templates").join(name),
            message: "missing embedded template".to_string(),
        })
}

/// Timestamp shown on the page: `Mar 04, 2024 at 17:05 UTC`.
pub fn format_date(time: DateTime<Utc>) -> String {
    time.format("%b %d, %Y at %H:%M UTC").to_string()
}

/// Substitute `{{ date }}`, `{{ table }}` and one `{{ <package> }}` URL
/// placeholder per tracked package.
pub fn fill_template(
    template: &str,
    date: &str,
    table: &str,
    source: &dyn SupportSource,
) -> String {
    let mut page = template
        .replace("{{ date }}", date)
        .replace("{{ table }}", table);
    for package in Package::REPORT_ORDER {
        page = page.replace(&format!("{{{{ {} }}}}", package), &source.url(package));
    }
    page
}
