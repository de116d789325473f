//! Flat Parser (properties family)
//!
//! Minimal properties-style reader: one `key=value` or `key: value` entry per
//! line, `#`/`!` comment lines, blank lines skipped. A line without a
//! separator is a key with an empty value, and a repeated key keeps the last
//! occurrence. Escape sequences and line continuations are not interpreted.

use std::collections::BTreeMap;

/// Parse properties-style text into key/value entries
pub fn parse(bytes: &[u8]) -> anyhow::Result<BTreeMap<String, String>> {
    let text = String::from_utf8_lossy(bytes);
    let mut entries = BTreeMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let separator = line
            .char_indices()
            .find(|&(_, c)| c == '=' || c == ':')
            .map(|(i, _)| i);

        let (key, value) = match separator {
            Some(i) => (line[..i].trim_end(), line[i + 1..].trim_start()),
            None => (line, ""),
        };

        if key.is_empty() {
            anyhow::bail!("entry with empty key: '{}'", line);
        }
        entries.insert(key.to_string(), value.to_string());
    }

    Ok(entries)
}
