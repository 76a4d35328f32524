// Package index client: fetches an index page and scrapes wheel filenames

use regex::Regex;
use reqwest::blocking::Client;

use crate::models::package::VersionedPackage;
use crate::models::version::Version;
use crate::utils::error::{PkgverError, Result};

/// Default package index base URL
const DEFAULT_INDEX_URL: &str = "https://pypi.org/simple";

/// Client for a simple-index style package listing.
///
/// One lookup is one blocking HTTP round trip; there is no retry policy
/// and no timeout beyond the transport defaults.
#[derive(Debug, Clone)]
pub struct IndexClient {
    /// HTTP client for index requests
    http: Client,
    /// Base URL of the package index (configurable for testing)
    index_url: String,
    /// User agent string for requests
    user_agent: String,
    /// Matches HTML text tokens naming a wheel file
    wheel_text_re: Regex,
    /// Captures the three-part version embedded after the first hyphen
    /// of a wheel filename
    wheel_version_re: Regex,
}

impl IndexClient {
    /// Create a client against the default index
    pub fn new() -> Self {
        Self::with_index_url(DEFAULT_INDEX_URL.to_string())
    }

    /// Create a client against a custom index base URL
    pub fn with_index_url(index_url: String) -> Self {
        Self {
            http: Client::new(),
            index_url: index_url.trim_end_matches('/').to_string(),
            user_agent: format!("pkgver/{}", env!("CARGO_PKG_VERSION")),
            wheel_text_re: Regex::new(r">\s*([^<>\s]+\.whl)\s*<").unwrap(),
            wheel_version_re: Regex::new(r"^[^-]+-([^-]+\.[^-]+\.[^-]+)").unwrap(),
        }
    }

    /// Fetch the raw HTML index page listing a package's release files.
    ///
    /// Transport failures surface as `RequestFailed`; a reachable index
    /// answering with a non-success status surfaces as `IndexStatus`.
    /// Both are distinct from any later parse failure.
    pub fn fetch_index_page(&self, package: &str) -> Result<String> {
        let url = format!("{}/{}/", self.index_url, package);

        let response = self
            .http
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(PkgverError::IndexStatus {
                status,
                package: package.to_string(),
            });
        }

        Ok(response.text()?)
    }

    /// Extract every HTML text token ending in `.whl` from an index page
    pub fn wheel_names(&self, html: &str) -> Vec<String> {
        self.wheel_text_re
            .captures_iter(html)
            .map(|captures| captures[1].to_string())
            .collect()
    }

    /// Version embedded in a wheel filename (`name-X.Y.Z-...`), or `None`
    /// when the filename carries no parseable three-part version. Entries
    /// that fail here are excluded from latest-version selection.
    pub fn wheel_version(&self, filename: &str) -> Option<Version> {
        let captures = self.wheel_version_re.captures(filename)?;
        captures[1].parse().ok()
    }

    /// Sort wheel filenames newest-first by embedded version.
    /// Names without a parseable version sort last.
    pub fn sort_by_version_desc(&self, names: &mut [String]) {
        names.sort_by(|a, b| {
            match (self.wheel_version(a), self.wheel_version(b)) {
                (Some(va), Some(vb)) => vb.cmp_fields(&va),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        });
    }

    /// Wheel filenames listed for a package, newest first
    pub fn available_wheels(&self, package: &str) -> Result<Vec<String>> {
        let html = self.fetch_index_page(package)?;
        let mut names = self.wheel_names(&html);
        self.sort_by_version_desc(&mut names);
        Ok(names)
    }

    /// Latest published version of a package.
    ///
    /// Filters the listed wheels down to those with a parseable version
    /// and takes the maximum; a page listing nothing parseable is
    /// `PackageNotFound`.
    pub fn latest_version(&self, package: &str) -> Result<Version> {
        let html = self.fetch_index_page(package)?;
        self.wheel_names(&html)
            .iter()
            .filter_map(|name| self.wheel_version(name))
            .max()
            .ok_or_else(|| PkgverError::PackageNotFound(package.to_string()))
    }

    /// Package paired with its latest remote version
    pub fn lookup(&self, package: &str) -> Result<VersionedPackage> {
        let latest = self.latest_version(package)?;
        Ok(VersionedPackage::new(package.to_string(), Some(latest)))
    }
}

impl Default for IndexClient {
    fn default() -> Self {
        Self::new()
    }
}
