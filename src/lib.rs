//! pkgtree - print the import graph of a Go package
//!
//! The graph is loaded through a [`resolver::PackageResolver`], walked
//! depth-first by [`core::Walker`] and written as an indented text tree or a
//! JSON document by [`output::render`].

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod resolver;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{VisitRegistry, WalkPolicy, Walker};
pub use error::{ErrorSeverity, OptionExt, PkgTreeError, Result, ResultExt};
pub use models::{
    config::{OutputFormat, Settings},
    package::{ImportGraph, PackageNode},
    tree::DependencyTree,
};
pub use resolver::{GoListResolver, PackageResolver, SnapshotResolver};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
