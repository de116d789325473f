//! Configuration Source Declarations
//!
//! The caller-provided specification of where configuration lives. Built
//! explicitly by the host at start-up (a static list or a manifest file) and
//! immutable afterwards. Two shapes exist:
//!
//! - a single path, optionally carrying an embedded runtime expression
//! - a list of locations with optional file-name filters (no expressions)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceDeclaration {
    /// Single-value shape: exactly one declared path
    Path { path: String },

    /// Multi-value shape: locations plus optional file-name filters
    Locations {
        locations: Vec<String>,
        #[serde(default)]
        file_names: Vec<String>,
    },
}

impl SourceDeclaration {
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path { path: path.into() }
    }

    pub fn locations<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Locations {
            locations: locations.into_iter().map(Into::into).collect(),
            file_names: Vec::new(),
        }
    }

    pub fn locations_with_file_names<I, J, S, T>(locations: I, file_names: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self::Locations {
            locations: locations.into_iter().map(Into::into).collect(),
            file_names: file_names.into_iter().map(Into::into).collect(),
        }
    }
}
