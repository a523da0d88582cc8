//! Extraction of supported branches from project web pages.
//!
//! Each project publishes its maintained branches differently, so every
//! package has its own extractor. They all return versions in page order
//! and an empty list when the markup is not found.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ToolversError};
use crate::package::Package;

/// Release links on the LLVM home page: `<a href="https://releases.llvm.org/..."><b>LLVM 18.1.8</b></a>`.
const CLANG_RELEASES: &str = r#"a[href^="https://releases.llvm.org/"] > b"#;

/// Release series on the GCC home page.
const GCC_SERIES: &str = "td > dl > dt > span.version > a";

/// Branch table of the Python developer guide.
const PYTHON_TABLE: &str = "#supported-versions table";

/// Container of the Ruby branch list.
const RUBY_BRANCHES: &str = "#content-wrapper > div";

/// Supported versions of `package` found in `html`.
pub fn scrape(package: Package, html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    match package {
        Package::Clang => named_versions(&document, CLANG_RELEASES),
        Package::Gcc => named_versions(&document, GCC_SERIES),
        Package::Python3 => python_branches(&document),
        Package::Ruby => ruby_branches(&document),
    }
}

/// Version from a `"<name> <version>"` label.
///
/// Non-breaking spaces count as spaces: `"GCC\u{a0}14.2"` gives `14.2`.
pub fn normalize_named_version(label: &str) -> Option<String> {
    label
        .replace('\u{a0}', " ")
        .split_whitespace()
        .nth(1)
        .map(String::from)
}

fn named_versions(document: &Html, css: &str) -> Result<Vec<String>> {
    let selector = selector(css)?;
    Ok(document
        .select(&selector)
        .filter_map(|element| normalize_named_version(&text_of(element)))
        .collect())
}

/// First cell of every row of the first branch table, except `main`.
fn python_branches(document: &Html) -> Result<Vec<String>> {
    let table = selector(PYTHON_TABLE)?;
    let row = selector("tr")?;
    let cell = selector("td")?;

    let Some(table) = document.select(&table).next() else {
        return Ok(Vec::new());
    };

    Ok(table
        .select(&row)
        .filter_map(|row| row.select(&cell).next())
        .map(text_of)
        .filter(|branch| !branch.is_empty() && branch != "main")
        .collect())
}

/// Every `h3` that precedes a paragraph whose status line mentions
/// "maintenance".
///
/// Branches are listed newest first and each heading is followed by a
/// status paragraph; end-of-life branches come last. Only the first line
/// counts: end-of-life paragraphs still list a `normal maintenance until`
/// date further down.
fn ruby_branches(document: &Html) -> Result<Vec<String>> {
    let container = selector(RUBY_BRANCHES)?;
    let mut versions = Vec::new();

    for div in document.select(&container) {
        let children: Vec<ElementRef> = div.children().filter_map(ElementRef::wrap).collect();
        let last_maintained = children.iter().rposition(|child| {
            child.value().name() == "p" && status_line(*child).contains("maintenance")
        });

        if let Some(last) = last_maintained {
            versions.extend(
                children[..last]
                    .iter()
                    .filter(|child| child.value().name() == "h3")
                    .filter_map(|heading| normalize_named_version(&text_of(*heading))),
            );
        }
    }

    Ok(versions)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ToolversError::Parse {
        format: "CSS selector".to_string(),
        message: format!("{}: {}", css, e),
    })
}

/// First non-blank text node of `element`.
fn status_line<'a>(element: ElementRef<'a>) -> &'a str {
    element
        .text()
        .find(|text| !text.trim().is_empty())
        .unwrap_or_default()
}

fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
