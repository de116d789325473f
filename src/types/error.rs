//! Unified Error Type System
//!
//! Every resolution failure is fail-fast and reported synchronously to the
//! caller of the resolution entry point. Nothing is retried and nothing is
//! silently swallowed except the single documented no-op: a single-path
//! expression that evaluates to an empty value resolves to nothing.
//!
//! Each variant names the declaration attribute or resolved value that
//! failed, so start-up aborts carry an actionable message.

use thiserror::Error;

use crate::path::Scheme;

/// Application error type covering the full resolution taxonomy
#[derive(Debug, Error)]
pub enum PropError {
    /// A required declaration attribute had no usable value
    #[error("declaration attribute '{attribute}' has no usable value")]
    MissingConfiguration { attribute: &'static str },

    /// A string could not be interpreted as a path at all
    #[error("'{value}' cannot be interpreted as a path")]
    InvalidPath { value: String },

    /// A target lacked a recognized extension
    #[error(
        "'{value}' has an unrecognized extension; extension matching is case-sensitive \
         and must be one of '.yml', '.json', or '.properties'"
    )]
    InvalidExtension { value: String },

    /// A file-name filter was unusable
    #[error("invalid file name '{value}': {reason}")]
    InvalidFileName { value: String, reason: String },

    /// Mutually-exclusive directory/file-mode mixing detected
    #[error("invalid declaration: {reason}")]
    InvalidDeclaration { reason: String },

    /// A classpath directory was declared without any file-name filter
    #[error(
        "classpath directory '{location}' cannot be scanned; declare at least one file name"
    )]
    MissingFileNames { location: String },

    /// A classified, validated target does not exist at its scope
    #[error("resource '{path}' does not exist on the {scope}")]
    ResourceNotFound { path: String, scope: Scheme },

    /// Extension recognized, but no loader registered for it.
    /// Unreachable through the resolvers given the fixed extension set.
    #[error("no loader registered for '{path}'")]
    UnsupportedFormat { path: String },

    /// The underlying reader or parser failed; path and cause preserved
    #[error("failed to load configuration from '{path}'")]
    LoadFailure {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// A declaration manifest could not be read or parsed (CLI)
    #[error("manifest error: {0}")]
    Manifest(String),
}

impl PropError {
    /// Missing required attribute
    pub fn missing(attribute: &'static str) -> Self {
        Self::MissingConfiguration { attribute }
    }

    /// Directory/file-mode mixing or other structurally invalid declaration
    pub fn invalid_declaration(reason: impl Into<String>) -> Self {
        Self::InvalidDeclaration {
            reason: reason.into(),
        }
    }

    /// Unusable file-name filter
    pub fn invalid_file_name(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFileName {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a read or parse failure with the path it occurred on
    pub fn load_failure(path: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::LoadFailure {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PropError>;
