//! Supported versions scraped from each project's website.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::fetch::{HttpFetcher, PageCache};
use super::scrape::scrape;
use super::SupportSource;
use crate::error::{Result, ToolversError};
use crate::package::Package;

/// Scrapes support windows from the web, one page per package.
pub struct WebSource<'a> {
    fetcher: &'a HttpFetcher,
    pages: &'a mut PageCache,
    urls: BTreeMap<Package, String>,
    exclude: BTreeMap<Package, Vec<String>>,
}

impl<'a> WebSource<'a> {
    /// Scrape the default project pages, memoizing them in `pages`.
    pub fn new(fetcher: &'a HttpFetcher, pages: &'a mut PageCache) -> Self {
        Self {
            fetcher,
            pages,
            urls: BTreeMap::new(),
            exclude: BTreeMap::new(),
        }
    }

    /// Override the page scraped for some packages.
    pub fn with_urls(mut self, urls: BTreeMap<Package, String>) -> Self {
        self.urls = urls;
        self
    }

    /// Branches to drop from scraped lists.
    pub fn with_exclusions(mut self, exclude: BTreeMap<Package, Vec<String>>) -> Self {
        self.exclude = exclude;
        self
    }
}

impl SupportSource for WebSource<'_> {
    fn url(&self, package: Package) -> String {
        self.urls
            .get(&package)
            .cloned()
            .unwrap_or_else(|| package.default_support_url().to_string())
    }

    fn supported(&mut self, package: Package) -> Result<Vec<String>> {
        let url = self.url(package);
        let html = self.pages.get(self.fetcher, &url)?;
        let mut versions = scrape(package, html)?;

        if versions.is_empty() {
            // An empty clang list means the llvm.org release links moved.
            if package == Package::Clang {
                return Err(ToolversError::UpstreamStructure {
                    package: package.to_string(),
                    url,
                });
            }
            warn!("No supported {} versions found at {}", package, url);
        }

        if let Some(excluded) = self.exclude.get(&package) {
            versions.retain(|version| !excluded.contains(version));
        }

        debug!("Supported {}: {}", package, versions.join(", "));
        Ok(versions)
    }
}
