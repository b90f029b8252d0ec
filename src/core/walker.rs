//! Depth-first traversal of an import graph
//!
//! The walker visits the root package, then each direct import in ascending
//! short-name order. A package is expanded only the first time it is reached;
//! later arrivals are reported as leaves. This bounds the walk on shared
//! dependencies and import cycles alike.

use crate::core::registry::VisitRegistry;
use crate::core::sink::{TraversalSink, Visit};
use crate::error::Result;
use crate::models::{ImportGraph, PackageNode, Settings};
use petgraph::graph::NodeIndex;

/// Which packages are shown and how
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkPolicy {
    /// Hide standard-library packages
    pub ignore_std_pkg: bool,
    /// Hide packages whose path contains `/internal/`
    pub ignore_internal_pkg: bool,
    /// Leave visitation identifiers out of the output
    pub disable_show_id: bool,
}

impl WalkPolicy {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            ignore_std_pkg: settings.ignore_std_pkg,
            ignore_internal_pkg: settings.ignore_internal_pkg,
            disable_show_id: settings.disable_show_id,
        }
    }

    /// Whether `package` survives the ignore flags
    pub fn is_visible(&self, package: &PackageNode) -> bool {
        !(self.ignore_std_pkg && package.is_standard_library())
            && !(self.ignore_internal_pkg && package.is_internal())
    }

    /// The identifier to print, if ids are shown at all
    pub fn display_id(&self, id: usize) -> Option<usize> {
        if self.disable_show_id {
            None
        } else {
            Some(id)
        }
    }
}

/// Walks an [`ImportGraph`] from its root and feeds a [`TraversalSink`]
pub struct Walker<'g> {
    graph: &'g ImportGraph,
    policy: WalkPolicy,
}

impl<'g> Walker<'g> {
    pub fn new(graph: &'g ImportGraph, policy: WalkPolicy) -> Self {
        Self { graph, policy }
    }

    pub fn policy(&self) -> &WalkPolicy {
        &self.policy
    }

    /// Walk the whole graph with a fresh registry.
    ///
    /// Returns what the sink produced for the root, or `None` if the sink
    /// dropped it.
    pub fn walk<S: TraversalSink>(&self, sink: &mut S) -> Result<Option<S::Node>> {
        let mut registry = VisitRegistry::new();
        self.walk_with(sink, &mut registry)
    }

    /// Walk the graph, recording identifiers in a caller-owned registry
    pub fn walk_with<S: TraversalSink>(
        &self,
        sink: &mut S,
        registry: &mut VisitRegistry,
    ) -> Result<Option<S::Node>> {
        self.visit(self.graph.root(), 0, registry, sink)
    }

    fn visit<S: TraversalSink>(
        &self,
        index: NodeIndex,
        depth: usize,
        registry: &mut VisitRegistry,
        sink: &mut S,
    ) -> Result<Option<S::Node>> {
        let package = self.graph.package(index);
        let arrival = registry.register(&package.path);
        let visit = Visit {
            package,
            id: arrival.id(),
            depth,
            revisit: arrival.is_revisit(),
            visible: self.policy.is_visible(package),
        };

        let node = sink.visit(&visit)?;

        let mut children = Vec::new();
        if !visit.revisit {
            for import in self.sorted_imports(index) {
                if let Some(child) = self.visit(import, depth + 1, registry, sink)? {
                    children.push(child);
                }
            }
        }

        Ok(sink.finish(&visit, node, children))
    }

    /// Direct imports of `index` ordered by short name, then by path
    pub fn sorted_imports(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut imports: Vec<NodeIndex> = self.graph.imports(index).collect();
        imports.sort_by(|&a, &b| {
            let (a, b) = (self.graph.package(a), self.graph.package(b));
            a.short_name()
                .cmp(b.short_name())
                .then_with(|| a.path.cmp(&b.path))
        });
        imports
    }
}
