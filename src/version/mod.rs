//! Version comparison and support-window classification.
//!
//! Distro versions ("3.10.12") are always more granular than the branch
//! lists projects publish ("3.10"), so comparisons here are truncated to
//! the shorter of the two versions. See [`loose_cmp`].

pub mod classify;
pub mod compare;

pub use classify::{classify, Classification, Verdict};
pub use compare::{components, loose_cmp, loose_ge, loose_gt, sort_descending};
