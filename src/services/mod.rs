// Service layer for registry scanning and index lookups

pub mod index_client;
pub mod registry;

pub use index_client::IndexClient;
pub use registry::{FinderKind, PackageRegistry};
