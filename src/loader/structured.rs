//! Structured Parser (YAML family)
//!
//! Loads `.yml` and `.json` documents through serde_yaml (every JSON
//! document is valid YAML, so one reader covers both) and flattens the tree
//! into dotted property keys:
//!
//! - mapping keys joined with `.` (`server: { port: 8080 }` -> `server.port`)
//! - sequence elements indexed (`hosts: [a, b]` -> `hosts[0]`, `hosts[1]`)
//! - scalars rendered to strings; `null` becomes the empty string
//!
//! The top-level value must be a mapping.

use std::collections::BTreeMap;

use anyhow::{anyhow, Context};
use serde_yaml::Value;

/// Parse a structured document into flattened key/value entries
pub fn parse(bytes: &[u8]) -> anyhow::Result<BTreeMap<String, String>> {
    let value: Value = serde_yaml::from_slice(bytes).context("malformed document")?;

    let Value::Mapping(_) = value else {
        return Err(anyhow!("top-level value must be a mapping"));
    };

    let mut entries = BTreeMap::new();
    flatten("", &value, &mut entries);
    Ok(entries)
}

fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Mapping(map) => {
            for (key, nested) in map {
                let key = scalar_to_string(key);
                let child = if prefix.is_empty() {
                    key
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&child, nested, out);
            }
        }
        Value::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(&format!("{}[{}]", prefix, index), item, out);
            }
        }
        Value::Tagged(tagged) => flatten(prefix, &tagged.value, out),
        scalar => {
            out.insert(prefix.to_string(), scalar_to_string(scalar));
        }
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Composite keys are rare; fall back to their YAML rendering
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_mapping_flattens_to_dotted_keys() {
        let entries = parse(b"server:\n  port: 8080\n  host: localhost\n").unwrap();
        assert_eq!(entries.get("server.port").map(String::as_str), Some("8080"));
        assert_eq!(
            entries.get("server.host").map(String::as_str),
            Some("localhost")
        );
    }

    #[test]
    fn test_sequence_elements_indexed() {
        let entries = parse(b"hosts:\n  - alpha\n  - beta\n").unwrap();
        assert_eq!(entries.get("hosts[0]").map(String::as_str), Some("alpha"));
        assert_eq!(entries.get("hosts[1]").map(String::as_str), Some("beta"));
    }

    #[test]
    fn test_json_document_accepted() {
        let entries = parse(br#"{"app": {"name": "demo", "debug": true}}"#).unwrap();
        assert_eq!(entries.get("app.name").map(String::as_str), Some("demo"));
        assert_eq!(entries.get("app.debug").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_null_renders_as_empty_string() {
        let entries = parse(b"missing: null\n").unwrap();
        assert_eq!(entries.get("missing").map(String::as_str), Some(""));
    }

    #[test]
    fn test_top_level_scalar_rejected() {
        assert!(parse(b"just a string\n").is_err());
        assert!(parse(b"- a\n- b\n").is_err());
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(parse(b"key: [unclosed\n").is_err());
    }
}
