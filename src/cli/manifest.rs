//! Declaration Manifest
//!
//! A TOML file standing in for the host application's declared configuration
//! sources, one `[[source]]` table per declaration:
//!
//! ```toml
//! [[source]]
//! path = "config/app.yml"
//!
//! [[source]]
//! locations = ["classpath:conf"]
//! file_names = ["db.properties"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::types::error::{PropError, Result};
use crate::types::SourceDeclaration;

#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(default, rename = "source")]
    pub sources: Vec<SourceDeclaration>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            PropError::Manifest(format!("failed to read '{}': {}", path.display(), e))
        })?;
        let manifest: Manifest = toml::from_str(&text).map_err(|e| {
            PropError::Manifest(format!("failed to parse '{}': {}", path.display(), e))
        })?;

        if manifest.sources.is_empty() {
            return Err(PropError::Manifest(format!(
                "'{}' declares no [[source]] entries",
                path.display()
            )));
        }
        Ok(manifest)
    }
}
