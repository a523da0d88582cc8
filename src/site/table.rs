//! The version comparison table.

use crate::error::Result;
use crate::package::Package;
use crate::report::{OsReport, PackageRecord};
use crate::upstream::SupportSource;
use crate::version::{classify, Classification, Verdict};

/// Render one row per tracked package and one column per report.
///
/// Columns are ordered by description, ignoring case. Each package's
/// support window is looked up once.
pub fn render_table(reports: &[OsReport], source: &mut dyn SupportSource) -> Result<String> {
    let mut reports: Vec<&OsReport> = reports.iter().collect();
    reports.sort_by_key(|report| report.description.to_lowercase());

    let mut html = String::from("<table>\n  <tr class=\"header\">\n    <th>Package</th>\n");
    for report in &reports {
        html.push_str(&format!("    <th>{}</th>\n", escape_html(&report.description)));
    }
    html.push_str("  </tr>\n");

    for package in Package::REPORT_ORDER {
        let supported = source.supported(package)?;
        let name = escape_html(package.name());

        html.push_str(&format!("  <tr id=\"pkg-{}\">\n", name));
        html.push_str(&format!(
            "    <th class=\"left-header\"><a href=\"#pkg-{0}\">{0}</a></th>\n",
            name
        ));
        for report in &reports {
            let cell = match report.results.get(package.name()) {
                Some(record) => render_cell(record, classify(&record.version, &supported)),
                None => format!("<td class=\"{}\">??</td>", Verdict::Unknown.css_class()),
            };
            html.push_str(&format!("    {}\n", cell));
        }
        html.push_str("  </tr>\n");
    }

    html.push_str("</table>");
    Ok(html)
}

fn render_cell(record: &PackageRecord, classification: Classification) -> String {
    let verdict = classification.verdict;
    let via = record
        .via
        .as_deref()
        .map(|via| format!(" (via {})", escape_html(via)))
        .unwrap_or_default();

    format!(
        "<td class=\"{}\" title=\"{}\">{}&nbsp;<sup>{}</sup>{}</td>",
        verdict.css_class(),
        cell_title(classification),
        escape_html(&record.version),
        verdict.glyph(),
        via
    )
}

fn cell_title(classification: Classification) -> String {
    match (classification.verdict, classification.newer_branches) {
        (Verdict::Unknown, _) => "support status unknown".to_string(),
        (verdict, 1) => format!("{}: 1 newer supported branch", verdict),
        (verdict, n) => format!("{}: {} newer supported branches", verdict, n),
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
