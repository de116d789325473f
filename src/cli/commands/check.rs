//! Check Command
//!
//! Dry run: plan every declaration and print the ordered target list
//! without loading any file. Directory declarations still consult the
//! directory listing, since expansion is part of planning.

use std::path::Path;

use console::style;

use crate::cli::Manifest;
use crate::resolver::Resolver;
use crate::types::error::Result;

pub fn run(manifest_path: &Path, resource_root: &Path) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    let resolver = Resolver::standard(resource_root);

    for (index, declaration) in manifest.sources.iter().enumerate() {
        println!("{}", style(format!("source #{}", index + 1)).bold());

        let targets = resolver.plan(declaration)?;
        if targets.is_empty() {
            println!("  {} resolves to nothing (skipped)", style("·").dim());
            continue;
        }
        for target in &targets {
            println!("  {} {}", style("→").cyan(), target);
        }
    }

    println!();
    println!("{} every declaration is valid", style("✓").green());
    Ok(())
}
