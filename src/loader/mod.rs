//! Loader Dispatch
//!
//! Given a classified, validated path the dispatcher checks the target
//! exists at its scope, selects the parser by extension (`.yml`/`.json` go
//! to the structured parser, `.properties` to the flat parser), and names
//! the resulting property set after the file's base name.

mod flat;
mod structured;

use std::collections::BTreeMap;

use tracing::debug;

use crate::constants::extension;
use crate::path::{base_name, ResolvedPath, Scheme};
use crate::resource::ResourceAccessor;
use crate::types::error::{PropError, Result};
use crate::types::PropertySet;

pub struct FileLoader {
    filesystem: Box<dyn ResourceAccessor>,
    classpath: Box<dyn ResourceAccessor>,
}

impl FileLoader {
    pub fn new(
        filesystem: Box<dyn ResourceAccessor>,
        classpath: Box<dyn ResourceAccessor>,
    ) -> Self {
        Self {
            filesystem,
            classpath,
        }
    }

    /// Load one validated target into a named property set
    pub fn load(&self, target: &ResolvedPath) -> Result<PropertySet> {
        let accessor = self.accessor(target.scheme);

        if !accessor.exists(&target.path) {
            return Err(PropError::ResourceNotFound {
                path: target.path.clone(),
                scope: target.scheme,
            });
        }

        let bytes = accessor
            .read(&target.path)
            .map_err(|e| PropError::load_failure(&target.path, e))?;
        let entries = self.dispatch(&target.path, &bytes)?;

        let name = base_name(&target.path);
        debug!(
            path = %target,
            name,
            entries = entries.len(),
            "loaded configuration file"
        );
        Ok(PropertySet::new(name, entries))
    }

    fn accessor(&self, scheme: Scheme) -> &dyn ResourceAccessor {
        match scheme {
            Scheme::Filesystem => self.filesystem.as_ref(),
            Scheme::Classpath => self.classpath.as_ref(),
        }
    }

    fn dispatch(&self, path: &str, bytes: &[u8]) -> Result<BTreeMap<String, String>> {
        let parsed = if path.ends_with(extension::YAML) || path.ends_with(extension::JSON) {
            structured::parse(bytes)
        } else if path.ends_with(extension::PROPERTIES) {
            flat::parse(bytes)
        } else {
            return Err(PropError::UnsupportedFormat {
                path: path.to_string(),
            });
        };
        parsed.map_err(|e| PropError::load_failure(path, e))
    }
}
