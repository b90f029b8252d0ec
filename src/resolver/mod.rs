//! Package resolvers
//!
//! A resolver turns a package identifier into a fully loaded
//! [`ImportGraph`]. The walker only ever sees the graph.

pub mod go_list;
pub mod guess;
pub mod snapshot;

pub use go_list::GoListResolver;
pub use guess::{SourceRoots, guess_package};
pub use snapshot::SnapshotResolver;

use crate::error::Result;
use crate::models::{ImportGraph, Settings};

/// Source of resolved import graphs
pub trait PackageResolver {
    /// Load the transitive import graph of `package`
    fn resolve(&self, package: &str) -> Result<ImportGraph>;

    /// Name of this resolver for diagnostics
    fn name(&self) -> &str;
}

/// Create the resolver selected by the settings
pub fn create_resolver(settings: &Settings) -> Box<dyn PackageResolver> {
    match &settings.from_file {
        Some(path) => Box::new(SnapshotResolver::new(path)),
        None => Box::new(GoListResolver::new(&settings.go_command)),
    }
}
