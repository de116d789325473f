//! Global Constants
//!
//! Scheme prefixes, recognized file extensions, and expression markers.
//! All literal tokens used during resolution are defined here.

/// Scheme prefixes recognized in declared paths
pub mod scheme {
    /// Prefix marking a resource bundled with the application (classpath scope).
    /// Matching is case-sensitive.
    pub const CLASSPATH_PREFIX: &str = "classpath:";

    /// Prefix marking a filesystem resource. Optional, since the filesystem
    /// is the default scope. Matching is case-sensitive.
    pub const FILE_PREFIX: &str = "file:";
}

/// Recognized configuration file extensions
pub mod extension {
    /// YAML documents, loaded by the structured parser
    pub const YAML: &str = ".yml";

    /// JSON documents, loaded by the structured parser (JSON is valid YAML)
    pub const JSON: &str = ".json";

    /// Flat key/value files, loaded by the properties parser
    pub const PROPERTIES: &str = ".properties";

    /// Every extension the validator accepts, matched case-sensitively
    pub const RECOGNIZED: &[&str] = &[YAML, JSON, PROPERTIES];
}

/// Embedded expression syntax
pub mod expression {
    /// Opening marker of an embedded runtime expression (`${NAME}` / `${NAME:default}`)
    pub const OPEN: &str = "${";

    /// Closing marker of an embedded runtime expression
    pub const CLOSE: char = '}';

    /// Separates the variable name from its fallback value
    pub const DEFAULT_SEPARATOR: char = ':';
}
