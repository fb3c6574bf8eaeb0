//! Domain Services
//!
//! Business logic over domain entities. File access goes through the
//! `FileSystem` port so every service runs against an in-memory tree in tests.

mod descriptor_builder;
mod discovery;
mod package_finder;

pub use descriptor_builder::build_extensions;
pub use discovery::SourceDiscovery;
pub use package_finder::{find_packages, PACKAGE_MARKER};
