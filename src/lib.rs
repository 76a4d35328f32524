// pkgver - package version inspector
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::{Version, VersionedPackage};
pub use services::{IndexClient, PackageRegistry};
