//! FreeBSD (`pkg rquery`).
//!
//! Clang is not a package on FreeBSD; it ships inside `llvm`, which is a
//! metapackage depending on a versioned `llvmNN` package. The real version
//! is therefore read from the dependency side of each query line.

use std::collections::BTreeSet;

use tracing::warn;

use super::chunk::normalize_version;
use super::Query;
use crate::report::{PackageRecord, Results};

/// Tracked packages provided by another package: `(tracked, provider)`.
pub const PROVIDERS: &[(&str, &str)] = &[("clang", "llvm")];

/// Build the `pkg rquery` query.
///
/// Prints one `name version depname=depversion` line per dependency.
pub fn query(packages: &[String]) -> Query {
    let names: Vec<&str> = packages
        .iter()
        .map(|package| provider_of(package).unwrap_or(package.as_str()))
        .collect();

    Query::new(format!(
        "sudo pkg rquery \"%n %v %dn=%dv\" {}",
        names.join(" ")
    ))
    .with_setup("sudo pkg update --quiet")
}

/// Parse `pkg rquery "%n %v %dn=%dv"` output.
pub fn parse(output: &str, _query: &Query) -> Results {
    let mut results = Results::new();
    // Packages whose version came from a matching dependency line.
    let mut pinned = BTreeSet::new();

    for line in output.trim().lines() {
        let mut fields = line.split_whitespace();
        let (Some(package), Some(version)) = (fields.next(), fields.next()) else {
            warn!("Skipping malformed pkg line: {:?}", line);
            continue;
        };

        let dependency = fields.next().and_then(|dep| dep.split_once('='));
        let (version, from_dependency) = match dependency {
            Some((dep_name, dep_version)) if dep_name.starts_with(package) => (dep_version, true),
            _ => (version, false),
        };

        if pinned.contains(package) && !from_dependency {
            continue;
        }
        if from_dependency {
            pinned.insert(package.to_string());
        }

        let version = strip_port_revision(version);
        results.insert(package.to_string(), PackageRecord::new(version.clone()));

        for (tracked, provider) in PROVIDERS {
            if package == *provider {
                results.insert(tracked.to_string(), PackageRecord::via(version.clone(), package));
            }
        }
    }

    results
}

/// Provider queried in place of a tracked package, if any.
fn provider_of(package: &str) -> Option<&'static str> {
    PROVIDERS
        .iter()
        .find(|(tracked, _)| *tracked == package)
        .map(|(_, provider)| *provider)
}

/// Drop the ports revision (`_1`) and any remaining qualifiers.
fn strip_port_revision(version: &str) -> String {
    normalize_version(version.split('_').next().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::Package;

    #[test]
    fn query_replaces_clang_with_llvm() {
        let query = query(&Package::query_names());
        assert_eq!(
            query.command,
            "sudo pkg rquery \"%n %v %dn=%dv\" python3 ruby llvm gcc"
        );
        assert_eq!(query.setup.as_deref(), Some("sudo pkg update --quiet"));
    }

    #[test]
    fn provider_line_reports_llvm_and_clang() {
        let results = parse("llvm 14.0.0 llvm=14.0.0", &Query::new(""));

        assert_eq!(results.len(), 2);
        assert_eq!(results["llvm"], PackageRecord::new("14.0.0"));
        assert_eq!(results["clang"], PackageRecord::via("14.0.0", "llvm"));
    }

    #[test]
    fn version_comes_from_matching_dependency() {
        let output = "llvm 17,1 llvm17=17.0.6_8\nruby 3.2.4,1 libedit=3.1.20230828,1\n";

        let results = parse(output, &Query::new(""));

        assert_eq!(results["llvm"].version, "17.0.6");
        assert_eq!(results["clang"], PackageRecord::via("17.0.6", "llvm"));
        assert_eq!(results["ruby"].version, "3.2.4");
    }

    #[test]
    fn unrelated_dependency_does_not_override_pinned_version() {
        let output = "llvm 17,1 llvm17=17.0.6_8\nllvm 17,1 lua54=5.4.6\n";

        let results = parse(output, &Query::new(""));

        assert_eq!(results["llvm"].version, "17.0.6");
    }

    #[test]
    fn port_revision_is_stripped() {
        let results = parse("python3 3_4 python311=3.11.9_1\ngcc 13_4 gcc13=13.2.0_4", &Query::new(""));
        assert_eq!(results["gcc"].version, "13.2.0");
        assert_eq!(results["python3"].version, "3.11.9");
    }

    #[test]
    fn line_without_dependency_uses_own_version() {
        let results = parse("ruby 3.2.4,1", &Query::new(""));
        assert_eq!(results["ruby"].version, "3.2.4");
    }

    #[test]
    fn malformed_line_is_skipped() {
        let results = parse("garbage\nruby 3.2.4,1", &Query::new(""));
        assert_eq!(results.len(), 1);
    }
}
