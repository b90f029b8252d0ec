//! Import graphs from a saved `go list -json -deps` listing

use crate::error::{Result, ResultExt};
use crate::models::ImportGraph;
use crate::resolver::go_list::{build_graph, parse_packages};
use crate::resolver::PackageResolver;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve packages from a file captured with `go list -json -deps PKG > FILE`
#[derive(Debug, Clone)]
pub struct SnapshotResolver {
    path: PathBuf,
}

impl SnapshotResolver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PackageResolver for SnapshotResolver {
    fn resolve(&self, package: &str) -> Result<ImportGraph> {
        tracing::info!(file = %self.path.display(), package, "reading package listing");
        let content = fs::read_to_string(&self.path)
            .with_context(package, || format!("read {}", self.path.display()))?;
        build_graph(package, &parse_packages(&content)?)
    }

    fn name(&self) -> &str {
        "snapshot"
    }
}
