// Common error types for pkgver

use std::path::PathBuf;

/// Errors surfaced by registry scans, version parsing and index lookups.
///
/// None of these are recovered internally; callers get the original
/// condition. The one sanctioned fallback lives in the registry itself:
/// a package that is simply absent resolves to version `0.0.0` instead
/// of an error.
#[derive(Debug, thiserror::Error)]
pub enum PkgverError {
    /// A package name could not be extracted from a filesystem path
    #[error("no package name found in path '{}'", .0.display())]
    NameNotFound(PathBuf),

    /// A version string does not decompose into three numeric segments
    #[error("version '{0}' does not parse as major.minor.patch")]
    VersionParse(String),

    /// Comparison against a package whose version is unknown
    #[error("cannot compare versions: '{0}' has no determinable version")]
    InvalidComparison(String),

    /// The index request could not complete
    #[error("index request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The index answered with a non-success HTTP status
    #[error("index returned HTTP {status} for package '{package}'")]
    IndexStatus {
        status: reqwest::StatusCode,
        package: String,
    },

    /// No release with a parseable version was listed for the package
    #[error("no published version found for package '{0}'")]
    PackageNotFound(String),

    /// A registry accessor was used before the registry was loaded
    #[error("package registry has not been loaded; call load() first")]
    UninitializedState,

    /// Filesystem failure while scanning search paths
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PkgverError>;
