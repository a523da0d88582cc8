//! `Key: Value` chunk parsing shared by the text-based package managers.
//!
//! apt, dnf, pacman and zypper all describe a package as a block of
//! `Key: Value` lines. The identifier is `Package` (apt) or `Name`
//! (everything else) and the version is `Version`.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::report::{PackageRecord, Results};
use crate::version::components;

/// Strip epoch, release and qualifier suffixes from a package version.
///
/// The first occurrence of each of `:`, `-`, `+` and `,` is handled, in
/// that order: `"2:1.2.3-4+deb1"` becomes `"1.2.3"`.
pub fn normalize_version(version: &str) -> String {
    let mut version = version.trim();
    if let Some(after_epoch) = version.split(':').nth(1) {
        version = after_epoch;
    }
    for separator in ['-', '+', ','] {
        if let Some((head, _)) = version.split_once(separator) {
            version = head;
        }
    }
    version.to_string()
}

/// Remove carriage returns and fold wrapped lines back onto their key.
pub fn unwrap_lines(output: &str, continuation: &str) -> String {
    let output = output.replace('\r', "");
    if continuation.is_empty() {
        output
    } else {
        output.replace(continuation, " ")
    }
}

/// Split output into blank-line separated chunks.
pub fn split_chunks(output: &str) -> impl Iterator<Item = &str> {
    output
        .trim()
        .split("\n\n")
        .filter(|chunk| !chunk.trim().is_empty())
}

/// Parse the `Key: Value` lines of one chunk.
///
/// Lines without a colon are ignored; later duplicates win.
pub fn parse_fields(chunk: &str) -> BTreeMap<&str, &str> {
    chunk
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect()
}

/// Name and normalized record described by one chunk.
///
/// `aliases` maps distro-specific package names back to tracked names.
pub fn parse_chunk(
    chunk: &str,
    aliases: &BTreeMap<String, String>,
) -> Option<(String, PackageRecord)> {
    let fields = parse_fields(chunk);

    let Some(name) = fields.get("Package").or_else(|| fields.get("Name")) else {
        warn!("Skipping chunk without a package name: {:?}", first_line(chunk));
        return None;
    };
    let Some(version) = fields.get("Version") else {
        warn!("Skipping {} without a Version field", name);
        return None;
    };

    let name = aliases
        .get(*name)
        .cloned()
        .unwrap_or_else(|| name.to_string());
    let version = normalize_version(version);

    debug!("{:20} {}", name, version);
    Some((name, PackageRecord::new(version)))
}

/// Parse every chunk into a result map.
///
/// A package described by several chunks keeps its highest version.
pub fn parse_chunks<'a>(
    chunks: impl IntoIterator<Item = &'a str>,
    aliases: &BTreeMap<String, String>,
) -> Results {
    let mut results = Results::new();
    for chunk in chunks {
        if let Some((name, record)) = parse_chunk(chunk, aliases) {
            insert_newest(&mut results, name, record);
        }
    }
    results
}

/// Insert `record` unless an equal or newer version is already present.
pub fn insert_newest(results: &mut Results, name: String, record: PackageRecord) {
    match results.get(&name) {
        Some(existing) if components(&existing.version) >= components(&record.version) => {}
        _ => {
            results.insert(name, record);
        }
    }
}

fn first_line(chunk: &str) -> &str {
    chunk.lines().next().unwrap_or_default()
}
