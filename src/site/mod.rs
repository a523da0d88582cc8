//! Static site generation.
//!
//! The site is a single comparison page plus the raw report data and
//! plain directory listings for it.

pub mod artifacts;
pub mod build;
pub mod listing;
pub mod table;
pub mod template;

pub use artifacts::{artifact_url, download_all, extract_zip};
pub use build::{build_site, BuildSummary, LOCAL_BUILD};
pub use listing::{render_listing, write_listing};
pub use table::{escape_html, render_table};
pub use template::{fill_template, format_date, load_asset};
