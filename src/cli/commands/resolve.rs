//! Resolve Command
//!
//! Resolve every declaration in a manifest into a fresh chain and print the
//! result, either as a styled summary or as JSON.

use std::path::Path;

use console::style;

use crate::cli::Manifest;
use crate::resolver::Resolver;
use crate::types::error::{PropError, Result};
use crate::types::PropertyChain;

pub fn run(manifest_path: &Path, resource_root: &Path, format: &str) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    let resolver = Resolver::standard(resource_root);

    let mut chain = PropertyChain::new();
    let appended = resolver.resolve_all(&manifest.sources, &mut chain)?;

    if format == "json" {
        let json = serde_json::to_string_pretty(&chain)
            .map_err(|e| PropError::Manifest(format!("failed to render chain: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    println!(
        "{} {} declaration(s) resolved, {} property set(s) appended",
        style("✓").green(),
        manifest.sources.len(),
        appended
    );
    println!();

    for (index, set) in chain.iter().enumerate() {
        println!(
            "{:>3}. {} ({} entries)",
            index + 1,
            style(set.name()).bold(),
            set.len()
        );
        for (key, value) in set.iter() {
            println!("       {} = {}", key, style(value).dim());
        }
    }

    Ok(())
}
