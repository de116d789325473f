//! Single-Path Resolver
//!
//! Resolves one declared path (possibly expression-valued) into at most one
//! property set: evaluate, classify, validate the extension, load. A blank
//! declaration is a fatal configuration error; a blank *evaluation result*
//! is the documented no-op for optional, environment-conditioned paths.

use tracing::debug;

use crate::eval::{contains_expression, ExpressionEvaluator};
use crate::loader::FileLoader;
use crate::path::{classify, has_valid_extension, is_path_like, ResolvedPath};
use crate::types::error::{PropError, Result};
use crate::types::PropertySet;

/// Compute the target without loading it. `Ok(None)` means the declaration
/// resolves to nothing.
pub(crate) fn plan(
    evaluator: &dyn ExpressionEvaluator,
    declared: &str,
) -> Result<Option<ResolvedPath>> {
    let trimmed = declared.trim();
    if trimmed.is_empty() {
        return Err(PropError::missing("path"));
    }

    // A value is taken literally only when it is directly path-parseable and
    // carries no expression syntax; everything else goes to the evaluator.
    let value = if contains_expression(trimmed) || !is_path_like(trimmed) {
        match evaluator.evaluate(trimmed)? {
            Some(evaluated) => evaluated,
            None => {
                debug!(declared = trimmed, "declared path evaluated to nothing, skipping");
                return Ok(None);
            }
        }
    } else {
        trimmed.to_string()
    };

    let resolved = classify(&value)?;
    if !has_valid_extension(&resolved.path) {
        return Err(PropError::InvalidExtension {
            value: resolved.path,
        });
    }
    Ok(Some(resolved))
}

/// Resolve and load; exactly zero or one property set
pub(crate) fn resolve(
    evaluator: &dyn ExpressionEvaluator,
    loader: &FileLoader,
    declared: &str,
) -> Result<Option<PropertySet>> {
    match plan(evaluator, declared)? {
        Some(target) => loader.load(&target).map(Some),
        None => Ok(None),
    }
}
