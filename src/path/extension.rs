//! Extension Validator
//!
//! Recognized extensions are matched case-sensitively with no fallback:
//! `.YML` is not `.yml`. The same dot/separator positions also classify a
//! path string as file-like or directory-like, which drives the
//! multi-location expansion rules.

use crate::constants::extension::RECOGNIZED;

/// True iff the value ends with exactly one of the recognized extensions
pub fn has_valid_extension(value: &str) -> bool {
    RECOGNIZED.iter().any(|ext| value.ends_with(ext))
}

/// A path is directory-like when its last separator occurs at or after its
/// last dot, i.e. it has no trailing extension. A bare segment with neither
/// a dot nor a separator ("conf") counts as a directory.
pub fn is_directory_like(value: &str) -> bool {
    let dot = value.rfind('.').map(|i| i as isize).unwrap_or(-1);
    let slash = value.rfind('/').map(|i| i as isize).unwrap_or(-1);
    dot <= slash
}

/// The final path segment with its extension removed; names the property set
/// produced from the file. `"a/b/c.yml"` -> `"c"`.
pub fn base_name(path: &str) -> &str {
    let start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    let end = match path.rfind('.') {
        Some(i) if i >= start => i,
        _ => path.len(),
    };
    &path[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_extensions() {
        assert!(has_valid_extension("app.yml"));
        assert!(has_valid_extension("app.json"));
        assert!(has_valid_extension("app.properties"));
    }

    #[test]
    fn test_unrecognized_extensions() {
        assert!(!has_valid_extension("app.yaml"));
        assert!(!has_valid_extension("app.toml"));
        assert!(!has_valid_extension("app.xml"));
        assert!(!has_valid_extension("app"));
    }

    #[test]
    fn test_extension_matching_is_case_sensitive() {
        assert!(!has_valid_extension("app.YML"));
        assert!(!has_valid_extension("app.Json"));
        assert!(!has_valid_extension("app.PROPERTIES"));
    }

    #[test]
    fn test_directory_like() {
        assert!(is_directory_like("conf"));
        assert!(is_directory_like("conf/"));
        assert!(is_directory_like("a.b/c"));
        assert!(is_directory_like("/etc/app"));
    }

    #[test]
    fn test_file_like() {
        assert!(!is_directory_like("app.yml"));
        assert!(!is_directory_like("conf/app.yml"));
        assert!(!is_directory_like("a.b/c.json"));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("a/b/c.yml"), "c");
        assert_eq!(base_name("app.properties"), "app");
        assert_eq!(base_name("conf/db.app.json"), "db.app");
        assert_eq!(base_name("noext"), "noext");
    }
}
