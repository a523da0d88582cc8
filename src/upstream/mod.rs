//! Upstream support windows.
//!
//! A [`SupportSource`] answers which release branches a project currently
//! maintains. [`WebSource`] scrapes them from the project's website;
//! [`StaticSource`] serves fixed lists.

pub mod fetch;
pub mod scrape;
pub mod web;

pub use fetch::{HttpFetcher, PageCache};
pub use scrape::{normalize_named_version, scrape};
pub use web::WebSource;

use std::collections::BTreeMap;

use crate::error::Result;
use crate::package::Package;

/// Where the supported branches of each package come from.
pub trait SupportSource {
    /// Page describing the support window of `package`.
    fn url(&self, package: Package) -> String;

    /// Branches of `package` currently maintained upstream.
    ///
    /// An empty list means the support status is unknown.
    fn supported(&mut self, package: Package) -> Result<Vec<String>>;
}

/// Fixed support windows, e.g. for rendering without network access.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    versions: BTreeMap<Package, Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the supported branches of `package`.
    pub fn with(mut self, package: Package, versions: &[&str]) -> Self {
        self.versions
            .insert(package, versions.iter().map(|v| v.to_string()).collect());
        self
    }
}

impl SupportSource for StaticSource {
    fn url(&self, package: Package) -> String {
        package.default_support_url().to_string()
    }

    fn supported(&mut self, package: Package) -> Result<Vec<String>> {
        Ok(self.versions.get(&package).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_serves_configured_lists() {
        let mut source = StaticSource::new().with(Package::Python3, &["3.12", "3.11"]);

        assert_eq!(source.supported(Package::Python3).unwrap(), ["3.12", "3.11"]);
        assert!(source.supported(Package::Ruby).unwrap().is_empty());
        assert_eq!(source.url(Package::Ruby), Package::Ruby.default_support_url());
    }
}
