// Local package registry built from installed distribution metadata

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::models::package::VersionedPackage;
use crate::utils::error::{PkgverError, Result};

/// Metadata directory suffix written by wheel-based installers
const DIST_INFO_SUFFIX: &str = ".dist-info";
/// Metadata directory suffix written by legacy egg-based installers
const EGG_INFO_SUFFIX: &str = ".egg-info";

/// The finite set of supported distribution finders.
///
/// Each kind maps directly to the scan function that handles it; picking
/// a finder is a plain enum dispatch, not a type-hierarchy walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinderKind {
    /// `*.dist-info` directories (PEP 376 style)
    DistInfo,
    /// `*.egg-info` directories (setuptools legacy)
    EggInfo,
}

impl FinderKind {
    /// Every finder kind, in the order scans run
    pub const ALL: [FinderKind; 2] = [FinderKind::DistInfo, FinderKind::EggInfo];

    /// Metadata directory suffix this finder recognizes
    pub fn suffix(self) -> &'static str {
        match self {
            FinderKind::DistInfo => DIST_INFO_SUFFIX,
            FinderKind::EggInfo => EGG_INFO_SUFFIX,
        }
    }

    /// Scan function handling this kind of metadata directory
    pub fn finder(self) -> fn(&Path) -> Result<HashMap<String, String>> {
        match self {
            FinderKind::DistInfo => scan_dist_info,
            FinderKind::EggInfo => scan_egg_info,
        }
    }
}

/// Find `*.dist-info` distributions under a search path
pub fn scan_dist_info(path: &Path) -> Result<HashMap<String, String>> {
    scan_metadata_dirs(path, DIST_INFO_SUFFIX)
}

/// Find `*.egg-info` distributions under a search path
pub fn scan_egg_info(path: &Path) -> Result<HashMap<String, String>> {
    scan_metadata_dirs(path, EGG_INFO_SUFFIX)
}

/// Collects name/version pairs from metadata directory names.
///
/// A matching entry looks like `<name>-<version><suffix>`; the name is
/// everything before the first hyphen and the version is the remainder.
/// Entries that do not fit the pattern are skipped. A search path that
/// is missing or unreadable contributes nothing rather than failing the
/// whole scan.
fn scan_metadata_dirs(path: &Path, suffix: &str) -> Result<HashMap<String, String>> {
    let mut distributions = HashMap::new();

    if !path.is_dir() {
        return Ok(distributions);
    }
    let Ok(entries) = fs::read_dir(path) else {
        return Ok(distributions);
    };

    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name();
        let item = file_name.to_string_lossy();

        let Some(stem) = strip_suffix_ignore_ascii_case(&item, suffix) else {
            continue;
        };

        if let Some((name, version)) = stem.split_once('-') {
            if !name.is_empty() && !version.is_empty() {
                distributions.insert(name.to_string(), version.to_string());
            }
        }
    }

    Ok(distributions)
}

/// Strip a suffix regardless of its ASCII case, if present
fn strip_suffix_ignore_ascii_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    if s.len() < suffix.len() {
        return None;
    }
    let split = s.len() - suffix.len();
    if !s.is_char_boundary(split) {
        return None;
    }
    let (stem, tail) = s.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(stem)
}

/// Extracts a package name from a module path of the shape
/// `.../<name>/__init__.py[c]`, using the platform's path separator.
pub fn package_name_from_path(path: &Path) -> Result<String> {
    let pattern = if cfg!(windows) {
        r"(.*\\)?(?P<pkg_name>[a-zA-Z-]+)\\__init__\.pyc?$"
    } else {
        r"(.*/)?(?P<pkg_name>[a-zA-Z-]+)/__init__\.pyc?$"
    };
    let regex = Regex::new(pattern).unwrap();

    let text = path.to_string_lossy();
    regex
        .captures(&text)
        .and_then(|captures| captures.name("pkg_name"))
        .map(|name| name.as_str().to_string())
        .ok_or_else(|| PkgverError::NameNotFound(path.to_path_buf()))
}

/// Registry of locally installed packages.
///
/// Built once from a list of search paths and read-only afterwards; the
/// loaded map is never invalidated for the lifetime of the process.
/// Construct one at startup and hand it to whatever needs lookups.
#[derive(Debug, Clone)]
pub struct PackageRegistry {
    /// Directories scanned for distribution metadata
    search_paths: Vec<PathBuf>,
    /// Name -> version-string map; `None` until `load()` has run
    distributions: Option<HashMap<String, String>>,
}

impl PackageRegistry {
    /// Create an unloaded registry over explicit search paths
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            distributions: None,
        }
    }

    /// Create an unloaded registry over the `PYTHONPATH` entries,
    /// the closest analogue to an interpreter's import search path
    pub fn from_env() -> Self {
        let search_paths = env::var_os("PYTHONPATH")
            .map(|raw| env::split_paths(&raw).collect())
            .unwrap_or_default();
        Self::new(search_paths)
    }

    /// Scan every search path with every finder kind and build the
    /// distribution map. Loading twice is a no-op; the first scan wins.
    pub fn load(&mut self) -> Result<()> {
        if self.distributions.is_some() {
            return Ok(());
        }

        let mut distributions = HashMap::new();
        for path in &self.search_paths {
            for kind in FinderKind::ALL {
                let found = kind.finder()(path)?;
                distributions.extend(found);
            }
        }
        self.distributions = Some(distributions);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.distributions.is_some()
    }

    /// Look up an installed package by name.
    ///
    /// A package absent from the registry resolves to the `0.0.0`
    /// sentinel rather than an error; a package recorded with an
    /// unparseable version resolves to one with no determinable version.
    pub fn lookup(&self, name: &str) -> Result<VersionedPackage> {
        let distributions = self.loaded()?;
        match distributions.get(name) {
            Some(version) => Ok(VersionedPackage::from_version_str(
                name.to_string(),
                version,
            )),
            None => Ok(VersionedPackage::unknown(name.to_string())),
        }
    }

    /// Iterate over (name, version-string) pairs of installed packages
    pub fn iter(&self) -> Result<impl Iterator<Item = (&str, &str)> + '_> {
        let distributions = self.loaded()?;
        Ok(distributions
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str())))
    }

    /// Number of installed distributions found
    pub fn len(&self) -> Result<usize> {
        Ok(self.loaded()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.loaded()?.is_empty())
    }

    fn loaded(&self) -> Result<&HashMap<String, String>> {
        self.distributions
            .as_ref()
            .ok_or(PkgverError::UninitializedState)
    }
}
