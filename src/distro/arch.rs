//! Arch Linux and derivatives (`pacman`).

use std::collections::BTreeMap;

use super::chunk::{parse_chunks, split_chunks, unwrap_lines};
use super::Query;
use crate::report::Results;

/// Arch ships Python 3 as `python`.
const PYTHON: (&str, &str) = ("python", "python3");

/// Wrapped values are indented to line up with the value column.
const CONTINUATION: &str = "\n                  ";

/// Build the `pacman -Syi` query.
pub fn query(packages: &[String]) -> Query {
    let mut aliases = BTreeMap::new();
    let names: Vec<String> = packages
        .iter()
        .map(|package| {
            if package == PYTHON.1 {
                aliases.insert(PYTHON.0.to_string(), PYTHON.1.to_string());
                PYTHON.0.to_string()
            } else {
                package.clone()
            }
        })
        .collect();

    Query::new(format!("pacman -Syi --noprogressbar {}", names.join(" "))).with_aliases(aliases)
}

/// Parse `pacman -Si` output.
///
/// `python` is reported as `python3` whether or not the query renamed it.
pub fn parse(output: &str, query: &Query) -> Results {
    let output = unwrap_lines(output, CONTINUATION);
    let output: String = output
        .lines()
        .filter(|line| !line.starts_with(":: ") && !line.starts_with("downloading "))
        .collect::<Vec<_>>()
        .join("\n");

    let mut aliases = query.aliases.clone();
    aliases.insert(PYTHON.0.to_string(), PYTHON.1.to_string());

    parse_chunks(split_chunks(&output), &aliases)
}
