//! Multi-Location Resolver
//!
//! Expands a list of declared locations (plus optional file-name filters)
//! into an ordered list of validated targets, then loads them in declaration
//! order. Directory mode and file mode are mutually exclusive: a declaration
//! either names exactly one directory to expand, or only literal files.
//! Mixing the two makes "which files came from where" ambiguous and risks
//! duplicate loads, so it is rejected outright.

use tracing::debug;

use crate::loader::FileLoader;
use crate::path::{classify, has_valid_extension, is_directory_like, ResolvedPath, Scheme};
use crate::resource::DirectoryLister;
use crate::types::error::{PropError, Result};
use crate::types::PropertyChain;

/// Compute the ordered target list without loading anything.
///
/// Directory expansion consults the lister, so planning a filesystem
/// directory with no file-name filters reads the directory listing.
pub(crate) fn plan(
    lister: &dyn DirectoryLister,
    locations: &[String],
    file_names: &[String],
) -> Result<Vec<ResolvedPath>> {
    let locations = normalize(locations);
    let file_names = normalize(file_names);

    if locations.is_empty() {
        return Err(PropError::missing("locations"));
    }

    let mut directories = Vec::new();
    let mut files = Vec::new();
    for location in &locations {
        let resolved = classify(location)?;
        if is_directory_like(&resolved.path) {
            directories.push(resolved);
        } else {
            files.push(resolved);
        }
    }

    if directories.len() > 1 {
        return Err(PropError::invalid_declaration(
            "multiple directory locations are not allowed; a directory must be declared alone",
        ));
    }
    if !directories.is_empty() && !files.is_empty() {
        return Err(PropError::invalid_declaration(
            "locations cannot mix directories and file paths",
        ));
    }

    match directories.into_iter().next() {
        Some(directory) => expand_directory(lister, &directory, &file_names),
        None => {
            if !file_names.is_empty() {
                return Err(PropError::invalid_declaration(
                    "file_names must not be given when every location is a file path",
                ));
            }
            for file in &files {
                if !has_valid_extension(&file.path) {
                    return Err(PropError::InvalidExtension {
                        value: file.path.clone(),
                    });
                }
            }
            Ok(files)
        }
    }
}

/// Resolve and load each target in order, appending each set to the chain
/// immediately. A failure on the Nth target aborts without appending the Nth
/// or later; prior appends remain (no rollback).
pub(crate) fn resolve(
    loader: &FileLoader,
    lister: &dyn DirectoryLister,
    locations: &[String],
    file_names: &[String],
    chain: &mut PropertyChain,
) -> Result<usize> {
    let targets = plan(lister, locations, file_names)?;
    debug!(targets = targets.len(), "resolved multi-location declaration");

    for target in &targets {
        let set = loader.load(target)?;
        chain.append(set);
    }
    Ok(targets.len())
}

fn expand_directory(
    lister: &dyn DirectoryLister,
    directory: &ResolvedPath,
    file_names: &[String],
) -> Result<Vec<ResolvedPath>> {
    if file_names.is_empty() {
        if directory.scheme == Scheme::Classpath {
            return Err(PropError::MissingFileNames {
                location: directory.path.clone(),
            });
        }
        let names = lister.list_files(&directory.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PropError::ResourceNotFound {
                    path: directory.path.clone(),
                    scope: directory.scheme,
                }
            } else {
                PropError::load_failure(&directory.path, e)
            }
        })?;
        return Ok(names
            .into_iter()
            .filter(|name| has_valid_extension(name))
            .map(|name| directory.join_file_name(&name))
            .collect());
    }

    let mut targets = Vec::with_capacity(file_names.len());
    for name in file_names {
        targets.push(directory.join_file_name(validate_file_name(name)?));
    }
    Ok(targets)
}

/// A file-name filter must be a simple name with a recognized extension.
/// One leading separator is tolerated and stripped.
fn validate_file_name(name: &str) -> Result<&str> {
    let cleaned = name.strip_prefix('/').unwrap_or(name);
    if cleaned.contains('/') || cleaned.contains('\\') {
        return Err(PropError::invalid_file_name(
            name,
            "must be a simple file name without path separators",
        ));
    }
    if !has_valid_extension(cleaned) {
        return Err(PropError::invalid_file_name(
            name,
            "must end in '.yml', '.json', or '.properties' (case-sensitive)",
        ));
    }
    Ok(cleaned)
}

fn normalize(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
