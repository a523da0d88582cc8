//! Normalized per-OS package reports.
//!
//! An [`OsReport`] is produced once per collection run and persisted as
//! JSON by [`ReportStore`]; the site builder later reloads every report in
//! a directory to build the comparison table.

pub mod model;
pub mod store;

pub use model::{file_id, OsReport, PackageRecord, Results};
pub use store::ReportStore;
