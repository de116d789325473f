//! Declaration Resolution
//!
//! `Resolver` bundles the collaborators (expression evaluator, resource
//! accessors behind the file loader, directory lister) and dispatches each
//! declaration to the matching strategy: the single-path resolver for the
//! `path` shape, the multi-location resolver for the `locations` shape.
//! Declarations are processed in order and fail fast.

mod multi;
mod single;

use std::path::PathBuf;

use tracing::info;

use crate::eval::{EnvEvaluator, ExpressionEvaluator};
use crate::loader::FileLoader;
use crate::path::ResolvedPath;
use crate::resource::{
    BundleAccessor, DirectoryLister, FilesystemAccessor, FilesystemLister, ResourceAccessor,
};
use crate::types::error::Result;
use crate::types::{PropertyChain, SourceDeclaration};

pub struct Resolver {
    evaluator: Box<dyn ExpressionEvaluator>,
    loader: FileLoader,
    lister: Box<dyn DirectoryLister>,
}

impl Resolver {
    /// Resolver with explicit accessors and default collaborators
    /// (environment-variable evaluator, filesystem lister)
    pub fn new(
        filesystem: Box<dyn ResourceAccessor>,
        classpath: Box<dyn ResourceAccessor>,
    ) -> Self {
        Self {
            evaluator: Box::new(EnvEvaluator),
            loader: FileLoader::new(filesystem, classpath),
            lister: Box::new(FilesystemLister),
        }
    }

    /// Standard wiring: plain filesystem access plus a bundle accessor
    /// rooted at `resource_root` for `classpath:` declarations
    pub fn standard(resource_root: impl Into<PathBuf>) -> Self {
        Self::new(
            Box::new(FilesystemAccessor),
            Box::new(BundleAccessor::new(resource_root)),
        )
    }

    pub fn with_evaluator(mut self, evaluator: Box<dyn ExpressionEvaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_lister(mut self, lister: Box<dyn DirectoryLister>) -> Self {
        self.lister = lister;
        self
    }

    /// Compute the ordered target list for one declaration without loading.
    /// A single-path declaration that resolves to nothing yields an empty
    /// list.
    pub fn plan(&self, declaration: &SourceDeclaration) -> Result<Vec<ResolvedPath>> {
        match declaration {
            SourceDeclaration::Path { path } => {
                Ok(single::plan(self.evaluator.as_ref(), path)?
                    .into_iter()
                    .collect())
            }
            SourceDeclaration::Locations {
                locations,
                file_names,
            } => multi::plan(self.lister.as_ref(), locations, file_names),
        }
    }

    /// Resolve one declaration, appending every produced property set to the
    /// tail of the chain. Returns the number of sets appended.
    pub fn resolve(
        &self,
        declaration: &SourceDeclaration,
        chain: &mut PropertyChain,
    ) -> Result<usize> {
        match declaration {
            SourceDeclaration::Path { path } => {
                match single::resolve(self.evaluator.as_ref(), &self.loader, path)? {
                    Some(set) => {
                        chain.append(set);
                        Ok(1)
                    }
                    None => Ok(0),
                }
            }
            SourceDeclaration::Locations {
                locations,
                file_names,
            } => multi::resolve(
                &self.loader,
                self.lister.as_ref(),
                locations,
                file_names,
                chain,
            ),
        }
    }

    /// Resolve a declaration list in order, failing fast. Sets appended
    /// before a failure stay in the chain.
    pub fn resolve_all(
        &self,
        declarations: &[SourceDeclaration],
        chain: &mut PropertyChain,
    ) -> Result<usize> {
        let mut appended = 0;
        for declaration in declarations {
            appended += self.resolve(declaration, chain)?;
        }
        info!(
            declarations = declarations.len(),
            appended, "configuration resolution complete"
        );
        Ok(appended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::NoopEvaluator;
    use crate::types::PropError;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        std::fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_resolve_all_in_declaration_order() {
        let root = TempDir::new().unwrap();
        write(&root, "base.yml", "port: 8080\nname: base\n");
        write(&root, "override.properties", "port=9090\n");

        let resolver = Resolver::standard(root.path());
        let mut chain = PropertyChain::new();
        let appended = resolver
            .resolve_all(
                &[
                    SourceDeclaration::locations(["classpath:override.properties"]),
                    SourceDeclaration::path("classpath:base.yml"),
                ],
                &mut chain,
            )
            .unwrap();

        assert_eq!(appended, 2);
        assert_eq!(chain.names(), vec!["override", "base"]);
        // Earlier declaration wins lookups
        assert_eq!(chain.get("port"), Some("9090"));
        assert_eq!(chain.get("name"), Some("base"));
    }

    #[test]
    fn test_resolving_twice_appends_twice() {
        let root = TempDir::new().unwrap();
        write(&root, "app.yml", "k: v\n");

        let resolver = Resolver::standard(root.path());
        let declaration = SourceDeclaration::path("classpath:app.yml");
        let mut chain = PropertyChain::new();
        resolver.resolve(&declaration, &mut chain).unwrap();
        resolver.resolve(&declaration, &mut chain).unwrap();

        assert_eq!(chain.names(), vec!["app", "app"]);
        assert_eq!(chain.sets()[0], chain.sets()[1]);
    }

    #[test]
    fn test_plan_directory_declaration() {
        // The default `.tmpXXXXXX` name would classify as file-like (dot after
        // the last slash), so use a dot-free prefix.
        let root = tempfile::Builder::new()
            .prefix("propchain-test")
            .tempdir()
            .unwrap();
        write(&root, "a.yml", "a: 1\n");
        write(&root, "b.properties", "b=1\n");

        let resolver = Resolver::standard(root.path());
        let targets = resolver
            .plan(&SourceDeclaration::locations([root
                .path()
                .to_str()
                .unwrap()]))
            .unwrap();
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn test_plan_skipped_single_path_is_empty() {
        let root = TempDir::new().unwrap();
        let resolver = Resolver::standard(root.path());
        let targets = resolver
            .plan(&SourceDeclaration::path("${PROPCHAIN_TEST_FACADE_UNSET}"))
            .unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn test_failure_stops_later_declarations() {
        let root = TempDir::new().unwrap();
        write(&root, "first.yml", "first: 1\n");
        write(&root, "last.yml", "last: 1\n");

        let resolver = Resolver::standard(root.path());
        let mut chain = PropertyChain::new();
        let err = resolver
            .resolve_all(
                &[
                    SourceDeclaration::path("classpath:first.yml"),
                    SourceDeclaration::path("classpath:missing.yml"),
                    SourceDeclaration::path("classpath:last.yml"),
                ],
                &mut chain,
            )
            .unwrap_err();

        assert!(matches!(err, PropError::ResourceNotFound { .. }));
        assert_eq!(chain.names(), vec!["first"]);
    }

    #[test]
    fn test_custom_evaluator_injection() {
        let root = TempDir::new().unwrap();
        write(&root, "app.yml", "k: v\n");

        let resolver =
            Resolver::standard(root.path()).with_evaluator(Box::new(NoopEvaluator));
        let mut chain = PropertyChain::new();
        // NoopEvaluator returns the expression text itself, which then fails
        // extension validation instead of silently expanding.
        let err = resolver
            .resolve(&SourceDeclaration::path("${ANYTHING}"), &mut chain)
            .unwrap_err();
        assert!(matches!(err, PropError::InvalidExtension { .. }));
    }
}
