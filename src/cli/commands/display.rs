//! Shared display helpers for collected reports.
//!
//! Used by `check` and `collect`, which both query a system and save what
//! they found.

use std::path::PathBuf;

use crate::distro::{self, OsIdentity};
use crate::error::Result;
use crate::package::Package;
use crate::report::{OsReport, ReportStore};
use crate::shell::CommandRunner;
use crate::ui::{Table, UserInterface};

/// Print a report as a Package / Version / Via table.
pub fn show_report(ui: &mut dyn UserInterface, report: &OsReport) {
    let mut table = Table::new(["Package", "Version", "Via"]);
    for (package, record) in &report.results {
        table.add_row([
            package.clone(),
            record.version.clone(),
            record.via.clone().unwrap_or_default(),
        ]);
    }
    ui.message(&table.render());

    for package in Package::QUERY_ORDER {
        if !report.results.contains_key(package.name()) {
            ui.warning(&format!("No version found for {}", package));
        }
    }
}

/// Query the tracked packages through `runner`, show and save the report.
pub fn collect_and_save(
    ui: &mut dyn UserInterface,
    identity: &OsIdentity,
    runner: &mut dyn CommandRunner,
    provisioned: bool,
    store: &ReportStore,
) -> Result<PathBuf> {
    ui.show_header(&identity.description);

    let report = distro::collect(identity, &Package::query_names(), runner, provisioned)?;
    show_report(ui, &report);

    let path = store.save(&report)?;
    ui.success(&format!("Saved {}", path.display()));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distro::DistroFamily;
    use crate::report::{PackageRecord, Results};
    use crate::shell::ScriptedRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn show_report_lists_packages_and_warns_on_missing() {
        let mut results = Results::new();
        results.insert("llvm".to_string(), PackageRecord::new("17.0.6"));
        results.insert("clang".to_string(), PackageRecord::via("17.0.6", "llvm"));
        let report = OsReport::new("FreeBSD", "FreeBSD 14.0-RELEASE", results);
        let mut ui = MockUI::new();

        show_report(&mut ui, &report);

        let table = &ui.messages()[0];
        assert!(table.contains("Package"));
        assert!(table.contains("llvm"));
        assert!(table.contains("17.0.6"));
        assert_eq!(ui.warnings().len(), 3);
        assert!(ui.warnings().iter().any(|w| w.contains("python3")));
    }

    #[test]
    fn collect_and_save_writes_report() {
        let temp = TempDir::new().unwrap();
        let store = ReportStore::new(temp.path());
        let identity = OsIdentity::new("Arch Linux", "Arch Linux", DistroFamily::Arch);
        let mut runner = ScriptedRunner::new();
        runner.respond(
            "pacman -Syi --noprogressbar python ruby clang gcc",
            "Name            : python\nVersion         : 3.12.3-1\n\nName            : ruby\nVersion         : 3.0.6-2\n\nName            : clang\nVersion         : 17.0.6-1\n\nName            : gcc\nVersion         : 13.2.1-6\n",
        );
        let mut ui = MockUI::new();

        let path = collect_and_save(&mut ui, &identity, &mut runner, false, &store).unwrap();

        assert_eq!(path, temp.path().join("arch_linux.json"));
        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("\"python3\""));
        assert_eq!(ui.headers(), ["Arch Linux"]);
        assert!(ui.warnings().is_empty());
        assert!(ui.successes()[0].contains("arch_linux.json"));
    }

    #[test]
    fn failed_query_saves_nothing() {
        let temp = TempDir::new().unwrap();
        let store = ReportStore::new(temp.path().join("source"));
        let identity = OsIdentity::new("Debian", "Debian 12", DistroFamily::Debian);
        let mut ui = MockUI::new();

        let result = collect_and_save(&mut ui, &identity, &mut ScriptedRunner::new(), false, &store);

        assert!(result.is_err());
        assert!(!temp.path().join("source").exists());
    }
}
