//! Debian, Ubuntu and derivatives (`apt-cache`).

use super::chunk::{parse_chunks, split_chunks, unwrap_lines};
use super::Query;
use crate::report::Results;

/// Build the `apt-cache show` query.
///
/// Fresh containers ship without package lists, so `apt-get update` runs
/// first when the query is executed in one.
pub fn query(packages: &[String]) -> Query {
    Query::new(format!("apt-cache show {}", packages.join(" "))).with_setup("apt-get update")
}

/// Parse `apt-cache show` output.
pub fn parse(output: &str, query: &Query) -> Results {
    let output = unwrap_lines(output, "\n ");
    parse_chunks(split_chunks(&output), &query.aliases)
}
