//! Filesystem Accessor & Lister
//!
//! Paths are used exactly as declared: relative paths resolve against the
//! process working directory, absolute paths stand alone.

use std::fs;
use std::io;
use std::path::Path;

use super::{DirectoryLister, ResourceAccessor};

/// Reads filesystem-scoped resources
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemAccessor;

impl ResourceAccessor for FilesystemAccessor {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// Lists regular files in one directory, sorted by name so expansion order
/// is deterministic across platforms
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemLister;

impl DirectoryLister for FilesystemLister {
    fn list_files(&self, path: &str) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists_only_for_files() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.yml");
        std::fs::write(&file, "a: 1\n").unwrap();

        let accessor = FilesystemAccessor;
        assert!(accessor.exists(file.to_str().unwrap()));
        assert!(!accessor.exists(dir.path().to_str().unwrap()));
        assert!(!accessor.exists(dir.path().join("missing.yml").to_str().unwrap()));
    }

    #[test]
    fn test_list_files_sorted_and_files_only() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.yml"), "").unwrap();
        std::fs::write(dir.path().join("a.properties"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let names = FilesystemLister
            .list_files(dir.path().to_str().unwrap())
            .unwrap();
        assert_eq!(names, vec!["a.properties", "b.yml"]);
    }

    #[test]
    fn test_list_files_missing_directory() {
        let err = FilesystemLister.list_files("/nonexistent/propchain").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
