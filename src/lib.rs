//! propchain - External Configuration Resolution
//!
//! Resolves declared external configuration sources (YAML, JSON, or
//! properties-style files, on the filesystem or under a bundled resource
//! root) into an ordered property chain before the rest of the application
//! initializes.
//!
//! ## Core Pieces
//!
//! - **Path classification**: `classpath:` vs `file:` vs bare paths,
//!   separator normalization, case-sensitive prefix matching
//! - **Extension validation**: `.yml` / `.json` / `.properties`, exact match
//! - **Loader dispatch**: structured (YAML family) and flat (properties)
//!   parsers, property sets named by file base name
//! - **Two resolvers**: a single-path resolver with injected expression
//!   evaluation, and a multi-location resolver with strict directory/file
//!   mode exclusivity
//!
//! ## Quick Start
//!
//! ```ignore
//! use propchain::{PropertyChain, Resolver, SourceDeclaration};
//!
//! let resolver = Resolver::standard("resources");
//! let mut chain = PropertyChain::new();
//! resolver.resolve_all(
//!     &[
//!         SourceDeclaration::path("${APP_CONFIG:config/app.yml}"),
//!         SourceDeclaration::locations_with_file_names(
//!             ["classpath:conf"],
//!             ["db.properties"],
//!         ),
//!     ],
//!     &mut chain,
//! )?;
//! assert_eq!(chain.get("db.url"), Some("jdbc:demo"));
//! ```
//!
//! ## Modules
//!
//! - [`path`]: classification and validation primitives (pure)
//! - [`eval`]: expression evaluator trait plus env/noop implementations
//! - [`resource`]: accessor and lister traits with filesystem/bundle impls
//! - [`loader`]: extension-dispatched file loading
//! - [`resolver`]: the two resolution strategies and the facade

pub mod cli;
pub mod constants;
pub mod eval;
pub mod loader;
pub mod path;
pub mod resolver;
pub mod resource;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Resolution
pub use resolver::Resolver;

// Declarations & Results
pub use types::{PropError, PropertyChain, PropertySet, Result, SourceDeclaration};

// Path Primitives
pub use path::{ResolvedPath, Scheme, base_name, classify, has_valid_extension, is_directory_like};

// Collaborator Seams
pub use eval::{EnvEvaluator, ExpressionEvaluator, NoopEvaluator};
pub use loader::FileLoader;
pub use resource::{
    BundleAccessor, DirectoryLister, FilesystemAccessor, FilesystemLister, ResourceAccessor,
};
