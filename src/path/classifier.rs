//! Path Classifier
//!
//! Turns a raw declared path into `{scheme, normalized path}`. The classifier
//! is a pure function: it trims, normalizes separators, strips a recognized
//! scheme prefix, and probes that the remainder can be a path at all. It
//! never touches the filesystem.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::scheme::{CLASSPATH_PREFIX, FILE_PREFIX};
use crate::types::error::{PropError, Result};

/// Scope a declared path resolves against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Resource bundled with the application, addressed relative to the
    /// configured resource root
    Classpath,
    /// Plain filesystem resource (the default scope)
    Filesystem,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Classpath => write!(f, "classpath"),
            Scheme::Filesystem => write!(f, "filesystem"),
        }
    }
}

/// A classified declared path: scope plus normalized, prefix-free path.
///
/// The path uses forward slashes only and carries no scheme prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPath {
    pub scheme: Scheme,
    pub path: String,
}

impl ResolvedPath {
    pub fn new(scheme: Scheme, path: impl Into<String>) -> Self {
        Self {
            scheme,
            path: path.into(),
        }
    }

    /// Join a simple file name onto this path, treating it as a directory.
    /// A single leading separator on the name is dropped, mirroring the
    /// trailing-separator handling on the directory side.
    pub fn join_file_name(&self, name: &str) -> Self {
        let dir = self.path.strip_suffix('/').unwrap_or(&self.path);
        let name = name.strip_prefix('/').unwrap_or(name);
        Self {
            scheme: self.scheme,
            path: format!("{}/{}", dir, name),
        }
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.path)
    }
}

/// Classify a raw declared path into its scope and normalized form.
///
/// Backslashes are normalized to forward slashes before prefix matching, and
/// whitespace between a prefix and the value is ignored. Prefix matching is
/// case-sensitive: `Classpath:` is an ordinary (filesystem) path.
pub fn classify(raw: &str) -> Result<ResolvedPath> {
    let normalized = raw.trim().replace('\\', "/");

    let (scheme, remainder) = if let Some(rest) = normalized.strip_prefix(CLASSPATH_PREFIX) {
        (Scheme::Classpath, rest)
    } else if let Some(rest) = normalized.strip_prefix(FILE_PREFIX) {
        (Scheme::Filesystem, rest)
    } else {
        (Scheme::Filesystem, normalized.as_str())
    };

    let path = remainder.trim_start();
    if !is_path_like(path) {
        return Err(PropError::InvalidPath {
            value: raw.trim().to_string(),
        });
    }

    Ok(ResolvedPath::new(scheme, path))
}

/// Validity probe, not an existence check: the only byte the platform path
/// primitives reject outright is an embedded NUL.
pub fn is_path_like(value: &str) -> bool {
    !value.contains('\0')
}
