// Semantic version triple with strict major.minor.patch parsing

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::utils::error::PkgverError;

/// A strict `major.minor.patch` version triple.
///
/// Only three-part numeric versions are supported; pre-release tags,
/// build metadata and range operators are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Sentinel for a package whose installed version is unknown
    pub const ZERO: Version = Version {
        major: 0,
        minor: 0,
        patch: 0,
    };

    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Three-way comparison over the fields in order: major, minor, patch.
    ///
    /// The first unequal field decides the result. All relational
    /// operators on `Version` derive from this single function.
    pub fn cmp_fields(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_fields(other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_fields(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = PkgverError;

    /// Parses `"<major>.<minor>.<patch>"` into a triple.
    ///
    /// The string must have exactly two dot separators producing three
    /// non-empty numeric segments; anything else (including a numeric
    /// conversion failure) is a `VersionParse` error carrying the input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(PkgverError::VersionParse(s.to_string()));
        }

        let mut fields = [0u32; 3];
        for (field, part) in fields.iter_mut().zip(&parts) {
            *field = part
                .parse::<u32>()
                .map_err(|_| PkgverError::VersionParse(s.to_string()))?;
        }

        Ok(Version::new(fields[0], fields[1], fields[2]))
    }
}
