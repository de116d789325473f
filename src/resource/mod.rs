//! Resource Access
//!
//! The loader never reads the disk directly; it goes through accessor traits
//! so classpath-scoped and filesystem-scoped reads share one code path and
//! tests can substitute fixtures.

mod bundle;
mod filesystem;

use std::io;

pub use bundle::BundleAccessor;
pub use filesystem::{FilesystemAccessor, FilesystemLister};

/// Read access to one resource scope (filesystem or bundled resources)
pub trait ResourceAccessor {
    /// Whether a concrete, non-directory resource exists at this path
    fn exists(&self, path: &str) -> bool;

    /// Read the resource's bytes
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// Flat, non-recursive directory listing (filesystem only).
///
/// Returns file names, not paths; the caller joins them back onto the
/// directory. The order of the returned names defines the load order when a
/// directory is expanded without file-name filters.
pub trait DirectoryLister {
    fn list_files(&self, path: &str) -> io::Result<Vec<String>>;
}
