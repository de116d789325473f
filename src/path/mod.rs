//! Path Classification & Validation
//!
//! Pure primitives shared by both resolvers: scheme detection and prefix
//! stripping, extension validation, and file/directory classification.
//! Nothing in this module touches the filesystem.

mod classifier;
mod extension;

pub use classifier::{Scheme, ResolvedPath, classify, is_path_like};
pub use extension::{base_name, has_valid_extension, is_directory_like};
