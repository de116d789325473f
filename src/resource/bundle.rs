//! Bundle Accessor
//!
//! A native binary has no classpath; `classpath:` resources resolve against
//! a resource root the host configures (typically a directory shipped next
//! to the binary). Classpath semantics are preserved: targets must exist,
//! and directories cannot be scanned without explicit file names.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::ResourceAccessor;

/// Reads classpath-scoped resources relative to a configured root
#[derive(Debug, Clone)]
pub struct BundleAccessor {
    root: PathBuf,
}

impl BundleAccessor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        // Classpath-style paths are root-relative even when they start with '/'
        self.root.join(path.strip_prefix('/').unwrap_or(path))
    }
}

impl ResourceAccessor for BundleAccessor {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_resolve_under_root() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir(root.path().join("conf")).unwrap();
        std::fs::write(root.path().join("conf/app.yml"), "a: 1\n").unwrap();

        let accessor = BundleAccessor::new(root.path());
        assert!(accessor.exists("conf/app.yml"));
        assert!(accessor.exists("/conf/app.yml"));
        assert!(!accessor.exists("app.yml"));
        assert_eq!(accessor.read("conf/app.yml").unwrap(), b"a: 1\n");
    }
}
