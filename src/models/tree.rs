//! Materialized dependency tree for JSON output

use serde::{Deserialize, Serialize};

/// One node of the JSON dependency tree
///
/// Mirrors a single visit of the traversal. A package reached a second time
/// appears again as a leaf carrying the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyTree {
    /// Visitation identifier, absent when ids are disabled
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<usize>,
    /// Import path of the package
    pub pkg: String,
    /// Child trees in sibling order
    pub dependencies: Vec<DependencyTree>,
    /// Depth of this node below the root
    #[serde(skip)]
    pub depth: usize,
}

impl DependencyTree {
    /// Create a leaf node
    pub fn new(id: Option<usize>, pkg: impl Into<String>, depth: usize) -> Self {
        Self {
            id,
            pkg: pkg.into(),
            dependencies: Vec::new(),
            depth,
        }
    }

    /// Iterate over this node and all of its descendants in pre-order
    pub fn iter(&self) -> impl Iterator<Item = &DependencyTree> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.dependencies.iter().rev());
            Some(node)
        })
    }
}
