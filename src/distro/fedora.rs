//! Fedora (`dnf`).

use super::chunk::{parse_chunks, split_chunks, unwrap_lines};
use super::Query;
use crate::report::Results;

/// Only the native architecture is of interest; without the suffix dnf
/// also lists i686 builds.
const ARCH_SUFFIX: &str = ".x86_64";

/// Wrapped values continue under an empty key column.
const CONTINUATION: &str = "\n             : ";

/// Build the `dnf info` query.
pub fn query(packages: &[String]) -> Query {
    let names: Vec<String> = packages
        .iter()
        .map(|package| format!("{}{}", package, ARCH_SUFFIX))
        .collect();
    Query::new(format!("dnf info --color=false {}", names.join(" ")))
}

/// Parse `dnf info` output.
pub fn parse(output: &str, query: &Query) -> Results {
    let output = unwrap_lines(output, CONTINUATION);
    parse_chunks(split_chunks(&output), &query.aliases)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: &str = "Last metadata expiration check: 0:00:12 ago on Tue 14 May 2024 09:12:01 AM UTC.
Available Packages
Name         : python3
Version      : 3.12.3
Release      : 2.fc40
Architecture : x86_64
Summary      : Python 3.12 interpreter
Description  : Python 3.12 is an accessible, high-level, dynamically typed,
             : interpreted programming language.

Name         : gcc
Version      : 14.0.1
Release      : 0.15.fc40
Architecture : x86_64
";

    #[test]
    fn query_appends_architecture() {
        let query = query(&["ruby".into(), "gcc".into()]);
        assert_eq!(query.command, "dnf info --color=false ruby.x86_64 gcc.x86_64");
        assert!(query.setup.is_none());
    }

    #[test]
    fn parse_reads_name_and_version() {
        let results = parse(OUTPUT, &query(&["python3".into(), "gcc".into()]));

        assert_eq!(results.len(), 2);
        assert_eq!(results["python3"].version, "3.12.3");
        assert_eq!(results["gcc"].version, "14.0.1");
    }

    #[test]
    fn parse_keeps_newest_of_installed_and_available() {
        let output = "Installed Packages
Name         : ruby
Version      : 3.3.0

Available Packages
Name         : ruby
Version      : 3.3.5
";
        let results = parse(output, &query(&["ruby".into()]));
        assert_eq!(results["ruby"].version, "3.3.5");
    }
}
