//! Package and import graph data structures
//!
//! An [`ImportGraph`] owns every [`PackageNode`] the resolver produced. The
//! walker only ever borrows from it.

use crate::error::{PkgTreeError, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Path fragment marking a package importable only from its parent tree
pub const INTERNAL_MARKER: &str = "/internal/";

/// One package in a resolved import graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageNode {
    /// Canonical import path, unique within a graph
    pub path: String,
    /// Short package name as declared in source (`util` for `app/util`)
    pub name: String,
    /// Directory holding the package sources, if the resolver reported one
    pub dir: Option<PathBuf>,
    /// Whether the package is part of the Go standard library
    pub standard: bool,
}

impl PackageNode {
    /// Create a non-standard package with no known directory
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            dir: None,
            standard: false,
        }
    }

    /// Set the standard-library flag
    pub fn with_standard(mut self, standard: bool) -> Self {
        self.standard = standard;
        self
    }

    /// Set the source directory
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Name used to order sibling imports.
    ///
    /// Falls back to the last path segment when the resolver did not report
    /// a declared name.
    pub fn short_name(&self) -> &str {
        if self.name.is_empty() {
            self.path.rsplit('/').next().unwrap_or(&self.path)
        } else {
            &self.name
        }
    }

    pub fn is_standard_library(&self) -> bool {
        self.standard
    }

    /// Whether the import path has an `internal` element between two others.
    ///
    /// Toolchain packages such as `internal/cpu` and paths ending in
    /// `/internal` do not count.
    pub fn is_internal(&self) -> bool {
        self.path.contains(INTERNAL_MARKER)
    }
}

/// A resolved import graph with a designated root package
#[derive(Debug, Clone)]
pub struct ImportGraph {
    graph: DiGraph<PackageNode, ()>,
    index: HashMap<String, NodeIndex>,
    root: NodeIndex,
}

impl ImportGraph {
    /// Start building a graph
    pub fn builder() -> ImportGraphBuilder {
        ImportGraphBuilder::new()
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Get the package stored at `index`
    pub fn package(&self, index: NodeIndex) -> &PackageNode {
        &self.graph[index]
    }

    /// Look up a package by import path
    pub fn find(&self, path: &str) -> Option<NodeIndex> {
        self.index.get(path).copied()
    }

    /// Direct imports of a package, in no particular order
    pub fn imports(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(index, Direction::Outgoing)
    }

    /// Number of packages in the graph
    pub fn package_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of import edges in the graph
    pub fn import_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Incremental builder for [`ImportGraph`]
///
/// Imports may be declared before the imported package is added; edges are
/// only wired up in [`ImportGraphBuilder::build`].
#[derive(Debug, Default)]
pub struct ImportGraphBuilder {
    graph: DiGraph<PackageNode, ()>,
    index: HashMap<String, NodeIndex>,
    imports: Vec<(String, String)>,
}

impl ImportGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package. A second package with the same path replaces the first.
    pub fn add_package(&mut self, package: PackageNode) -> &mut Self {
        match self.index.get(&package.path) {
            Some(&existing) => self.graph[existing] = package,
            None => {
                let path = package.path.clone();
                let index = self.graph.add_node(package);
                self.index.insert(path, index);
            }
        }
        self
    }

    /// Declare that `from` imports `to`
    pub fn add_import(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.imports.push((from.into(), to.into()));
        self
    }

    /// Wire up imports and fix the root.
    ///
    /// Duplicate imports collapse into one edge. Imports naming a package that
    /// was never added are dropped.
    pub fn build(self, root: &str) -> Result<ImportGraph> {
        let ImportGraphBuilder {
            mut graph,
            index,
            imports,
        } = self;

        let root = *index
            .get(root)
            .ok_or_else(|| PkgTreeError::load(root, "package not present in resolved graph"))?;

        let mut seen = HashSet::new();
        for (from, to) in imports {
            let (Some(&a), Some(&b)) = (index.get(&from), index.get(&to)) else {
                tracing::warn!(from = %from, to = %to, "dropping import of unresolved package");
                continue;
            };
            if seen.insert((a, b)) {
                graph.add_edge(a, b, ());
            }
        }

        Ok(ImportGraph { graph, index, root })
    }
}
