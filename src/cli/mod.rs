//! Command-Line Interface
//!
//! Inspection tooling around the resolver: parse a declaration manifest,
//! resolve (or dry-run) it, and show what would end up in the chain.

pub mod commands;
mod manifest;

pub use manifest::Manifest;
