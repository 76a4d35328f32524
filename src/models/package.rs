// Package name paired with an optionally determinable version

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::version::Version;
use crate::utils::error::{PkgverError, Result};

/// A package name together with its version, when one could be determined.
///
/// `version` is `Some` for every package the registry or index could
/// resolve, including the `0.0.0` sentinel for packages that are simply
/// not installed. `None` means the recorded version string did not parse;
/// such a package can be listed but never compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionedPackage {
    /// Package name
    pub name: String,
    /// Parsed version, or `None` when it could not be determined
    pub version: Option<Version>,
}

impl VersionedPackage {
    pub fn new(name: String, version: Option<Version>) -> Self {
        Self { name, version }
    }

    /// Package with the unknown-version sentinel `0.0.0`
    pub fn unknown(name: String) -> Self {
        Self {
            name,
            version: Some(Version::ZERO),
        }
    }

    /// Pairs a name with a version string, parsing it on a best-effort
    /// basis. An unparseable string yields `version: None` rather than
    /// an error; the failure surfaces later if the package is compared.
    pub fn from_version_str(name: String, version: &str) -> Self {
        Self {
            version: version.parse().ok(),
            name,
        }
    }

    /// Three-way version comparison against another package.
    ///
    /// Fails with `InvalidComparison` when either side has no
    /// determinable version; the ordering is undefined in that case.
    pub fn compare(&self, other: &VersionedPackage) -> Result<Ordering> {
        let mine = self.version_or_invalid()?;
        let theirs = other.version_or_invalid()?;
        Ok(mine.cmp_fields(&theirs))
    }

    pub fn is_older_than(&self, other: &VersionedPackage) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn is_newer_than(&self, other: &VersionedPackage) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn same_version(&self, other: &VersionedPackage) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    fn version_or_invalid(&self) -> Result<Version> {
        self.version
            .ok_or_else(|| PkgverError::InvalidComparison(self.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(name: &str, version: &str) -> VersionedPackage {
        VersionedPackage::from_version_str(name.to_string(), version)
    }

    #[test]
    fn test_compare_known_versions() {
        let older = pkg("requests", "2.30.0");
        let newer = pkg("requests", "2.31.0");

        assert_eq!(older.compare(&newer).unwrap(), Ordering::Less);
        assert_eq!(newer.compare(&older).unwrap(), Ordering::Greater);
        assert_eq!(older.compare(&older).unwrap(), Ordering::Equal);

        assert!(older.is_older_than(&newer).unwrap());
        assert!(newer.is_newer_than(&older).unwrap());
        assert!(older.same_version(&older).unwrap());
        assert!(!older.same_version(&newer).unwrap());
    }

    #[test]
    fn test_compare_undeterminable_version_fails() {
        let known = pkg("flask", "2.3.2");
        let unparseable = pkg("flask", "2.3.2rc1");
        assert!(unparseable.version.is_none());

        let err = known.compare(&unparseable).unwrap_err();
        assert!(matches!(err, PkgverError::InvalidComparison(ref name) if name == "flask"));

        // Symmetric: the unknown side fails first
        assert!(unparseable.compare(&known).is_err());
        assert!(unparseable.compare(&unparseable).is_err());
    }

    #[test]
    fn test_unknown_sentinel_is_comparable() {
        let absent = VersionedPackage::unknown("leftpad".to_string());
        let published = pkg("leftpad", "1.3.0");

        assert_eq!(absent.version, Some(Version::ZERO));
        assert!(absent.is_older_than(&published).unwrap());
    }

    #[test]
    fn test_json_serialization() {
        let package = pkg("click", "8.1.3");
        let json = serde_json::to_value(&package).unwrap();
        assert_eq!(json["name"], "click");
        assert_eq!(json["version"]["major"], 8);
    }
}
