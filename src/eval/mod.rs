//! Expression Evaluation
//!
//! Single-path declarations may embed a runtime expression so the path can be
//! supplied through the environment instead of being hard-coded. Evaluation
//! is deliberately behind a narrow trait: the resolver only ever asks for a
//! string (or nothing) back.

use tracing::debug;

use crate::constants::expression::{CLOSE, DEFAULT_SEPARATOR, OPEN};
use crate::types::error::Result;

/// Evaluates an embedded runtime expression to a string.
///
/// Returning `Ok(None)` means "nothing to load": the declaration is skipped
/// without error. Blank results must map to `None`.
pub trait ExpressionEvaluator {
    fn evaluate(&self, raw: &str) -> Result<Option<String>>;
}

/// True when a value carries embedded expression syntax and must be
/// evaluated rather than taken literally
pub fn contains_expression(value: &str) -> bool {
    value.contains(OPEN)
}

/// Expands `${NAME}` and `${NAME:default}` from the process environment.
///
/// An unset variable with no default expands to the empty string, so a path
/// made entirely of one unset variable resolves to nothing rather than
/// failing. Unterminated markers are left as-is and surface later as an
/// extension or path error on the literal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvEvaluator;

impl ExpressionEvaluator for EnvEvaluator {
    fn evaluate(&self, raw: &str) -> Result<Option<String>> {
        let expanded = expand(raw);
        let trimmed = expanded.trim();
        if trimmed.is_empty() {
            debug!(expression = raw, "expression evaluated to an empty value");
            return Ok(None);
        }
        Ok(Some(trimmed.to_string()))
    }
}

/// Identity evaluator for hosts without any expression syntax
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvaluator;

impl ExpressionEvaluator for NoopEvaluator {
    fn evaluate(&self, raw: &str) -> Result<Option<String>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(Some(trimmed.to_string()))
    }
}

fn expand(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];
        match after_open.find(CLOSE) {
            Some(end) => {
                out.push_str(&lookup(&after_open[..end]));
                rest = &after_open[end + CLOSE.len_utf8()..];
            }
            None => {
                // Unterminated marker: keep the raw text
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

fn lookup(inner: &str) -> String {
    let (name, default) = match inner.find(DEFAULT_SEPARATOR) {
        Some(i) => (&inner[..i], Some(&inner[i + 1..])),
        None => (inner, None),
    };
    match std::env::var(name) {
        Ok(value) => value,
        Err(_) => default.unwrap_or("").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_expression() {
        assert!(contains_expression("${APP_CONFIG}"));
        assert!(contains_expression("conf/${NAME}.yml"));
        assert!(!contains_expression("conf/app.yml"));
    }

    #[test]
    fn test_env_evaluator_expands_set_variable() {
        // SAFETY: unique variable name, test-local
        unsafe {
            std::env::set_var("PROPCHAIN_TEST_EVAL_SET", "external/app.yml");
        }
        let result = EnvEvaluator.evaluate("${PROPCHAIN_TEST_EVAL_SET}").unwrap();
        assert_eq!(result.as_deref(), Some("external/app.yml"));
        unsafe {
            std::env::remove_var("PROPCHAIN_TEST_EVAL_SET");
        }
    }

    #[test]
    fn test_env_evaluator_unset_variable_resolves_to_nothing() {
        let result = EnvEvaluator
            .evaluate("${PROPCHAIN_TEST_EVAL_UNSET}")
            .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_env_evaluator_default_value() {
        let result = EnvEvaluator
            .evaluate("${PROPCHAIN_TEST_EVAL_MISSING:fallback/app.yml}")
            .unwrap();
        assert_eq!(result.as_deref(), Some("fallback/app.yml"));
    }

    #[test]
    fn test_env_evaluator_mixed_literal_and_expression() {
        // SAFETY: unique variable name, test-local
        unsafe {
            std::env::set_var("PROPCHAIN_TEST_EVAL_DIR", "external");
        }
        let result = EnvEvaluator
            .evaluate("${PROPCHAIN_TEST_EVAL_DIR}/app.yml")
            .unwrap();
        assert_eq!(result.as_deref(), Some("external/app.yml"));
        unsafe {
            std::env::remove_var("PROPCHAIN_TEST_EVAL_DIR");
        }
    }

    #[test]
    fn test_env_evaluator_unterminated_marker_kept_literal() {
        let result = EnvEvaluator.evaluate("conf/${BROKEN").unwrap();
        assert_eq!(result.as_deref(), Some("conf/${BROKEN"));
    }

    #[test]
    fn test_noop_evaluator_is_identity() {
        assert_eq!(
            NoopEvaluator.evaluate(" app.yml ").unwrap().as_deref(),
            Some("app.yml")
        );
        assert_eq!(NoopEvaluator.evaluate("   ").unwrap(), None);
    }
}
