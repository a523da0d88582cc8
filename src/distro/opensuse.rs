//! openSUSE Leap and Tumbleweed (`zypper --xmlout`).
//!
//! openSUSE has no `python3` package of its own; the default interpreter is
//! a versioned package (e.g. `python311`) found with `what-provides`.

use std::collections::BTreeMap;

use super::chunk::{parse_chunks, unwrap_lines};
use super::Query;
use crate::error::{Result, ToolversError};
use crate::report::Results;
use crate::shell::CommandRunner;

/// Capability resolved to a concrete package before querying.
const PYTHON3: &str = "python3";

/// Indent zypper puts on wrapped value lines.
const CONTINUATION: &str = "\n    ";

/// Build the `zypper info` query, resolving `python3` first.
pub fn query(packages: &[String], runner: &mut dyn CommandRunner) -> Result<Query> {
    let mut aliases = BTreeMap::new();
    let mut names = Vec::with_capacity(packages.len());

    for package in packages {
        if package == PYTHON3 {
            let xml = runner.run(&format!("zypper --xmlout what-provides {}", PYTHON3))?;
            let provider = first_provider(&xml)?;
            aliases.insert(provider.clone(), PYTHON3.to_string());
            names.push(provider);
        } else {
            names.push(package.clone());
        }
    }

    Ok(Query::new(format!("zypper --xmlout info {}", names.join(" "))).with_aliases(aliases))
}

/// Parse `zypper --xmlout info` output.
///
/// Every `<message type="info">` whose text contains a `Key: Value` line
/// describes one package. Indented continuation lines are folded onto the
/// field they wrap.
pub fn parse(output: &str, query: &Query) -> Result<Results> {
    let output = output.replace('\r', "");
    let doc = roxmltree::Document::parse(&output).map_err(|e| parse_error(e.to_string()))?;

    let messages: Vec<String> = doc
        .root_element()
        .children()
        .filter(|node| node.has_tag_name("message") && node.attribute("type") == Some("info"))
        .filter_map(|node| node.text())
        .filter(|text| text.contains(':'))
        .map(|text| unwrap_lines(text, CONTINUATION))
        .collect();

    Ok(parse_chunks(messages.iter().map(String::as_str), &query.aliases))
}

/// Name of the first solvable in a `what-provides` search result.
fn first_provider(xml: &str) -> Result<String> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| parse_error(e.to_string()))?;

    doc.root_element()
        .children()
        .filter(|node| node.has_tag_name("search-result"))
        .flat_map(|node| node.children())
        .filter(|node| node.has_tag_name("solvable-list"))
        .flat_map(|node| node.children())
        .find(|node| node.has_tag_name("solvable"))
        .and_then(|node| node.attribute("name"))
        .map(String::from)
        .ok_or_else(|| parse_error(format!("nothing provides {}", PYTHON3)))
}

fn parse_error(message: String) -> ToolversError {
    ToolversError::Parse {
        format: "zypper".to_string(),
        message,
    }
}
