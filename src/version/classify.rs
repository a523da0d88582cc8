//! Support-window classification of an observed version.

use std::fmt;

use super::compare::{components, loose_ge, loose_gt, sort_descending};

/// Maintenance status of an observed version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// At or beyond the newest supported branch.
    Latest,
    /// Still within the support window, but newer branches exist.
    Outdated,
    /// Older than every supported branch.
    Unsupported,
    /// No support data was available.
    Unknown,
}

impl Verdict {
    /// Class name used on table cells.
    pub fn css_class(self) -> &'static str {
        match self {
            Verdict::Latest => "latest",
            Verdict::Outdated => "outdated",
            Verdict::Unsupported => "unsupported",
            Verdict::Unknown => "unknown",
        }
    }

    /// Footnote marker shown next to the version.
    pub fn glyph(self) -> &'static str {
        match self {
            Verdict::Latest => "*",
            Verdict::Outdated => "&dagger;",
            Verdict::Unsupported => "&ddagger;",
            Verdict::Unknown => "?",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Verdict plus how many supported branches are newer than the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Verdict,
    pub newer_branches: usize,
}

/// Classify `version` against the branches a project currently supports.
///
/// - no supported branches, or a version without components:
///   [`Verdict::Unknown`]
/// - at least the newest branch: [`Verdict::Latest`]
/// - older than every branch: [`Verdict::Unsupported`]
/// - otherwise: [`Verdict::Outdated`]
pub fn classify(version: &str, supported: &[String]) -> Classification {
    if supported.is_empty() || components(version).is_empty() {
        return Classification {
            verdict: Verdict::Unknown,
            newer_branches: 0,
        };
    }

    let mut branches = supported.to_vec();
    sort_descending(&mut branches);

    let newer_branches = number_newer(version, &branches);

    let verdict = if loose_ge(version, &branches[0]) {
        Verdict::Latest
    } else if !branches.iter().any(|branch| loose_ge(version, branch)) {
        Verdict::Unsupported
    } else {
        Verdict::Outdated
    };

    Classification {
        verdict,
        newer_branches,
    }
}

/// Count the leading branches (newest first) that are newer than `version`.
fn number_newer(version: &str, branches_desc: &[String]) -> usize {
    branches_desc
        .iter()
        .take_while(|branch| loose_gt(branch, version))
        .count()
}
