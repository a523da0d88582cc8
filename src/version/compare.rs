//! Truncated positional version comparison.

use std::cmp::Ordering;

/// Numeric components of a dotted version.
///
/// Anything after a `~` is dropped first (`"3.0~exp1"` is `3.0`). Each
/// component contributes its leading digits; a component without any
/// counts as 0.
pub fn components(version: &str) -> Vec<u64> {
    let version = version.split('~').next().unwrap_or_default().trim();
    if version.is_empty() {
        return Vec::new();
    }

    version
        .split('.')
        .map(|part| {
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().unwrap_or(0)
        })
        .collect()
}

/// Compare two versions using only as many components as the shorter has.
///
/// `"3.10.4"` and `"3.10"` compare equal; `"3.9.18"` is less than `"3.10"`.
pub fn loose_cmp(a: &str, b: &str) -> Ordering {
    let a = components(a);
    let b = components(b);
    let keep = a.len().min(b.len());
    a[..keep].cmp(&b[..keep])
}

/// `a >= b` under truncated comparison.
pub fn loose_ge(a: &str, b: &str) -> bool {
    loose_cmp(a, b) != Ordering::Less
}

/// `a > b` under truncated comparison.
pub fn loose_gt(a: &str, b: &str) -> bool {
    loose_cmp(a, b) == Ordering::Greater
}

/// Sort versions newest first by their full numeric components.
pub fn sort_descending(versions: &mut [String]) {
    versions.sort_by(|a, b| components(b).cmp(&components(a)));
}
