// Data models for pkgver

pub mod package;
pub mod version;

pub use package::VersionedPackage;
pub use version::Version;
