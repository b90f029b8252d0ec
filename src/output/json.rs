//! JSON tree rendering

use crate::core::{TraversalSink, Visit, WalkPolicy};
use crate::error::Result;
use crate::models::DependencyTree;

/// Builds a [`DependencyTree`], pruning hidden packages with their subtrees
#[derive(Debug, Clone)]
pub struct JsonTreeSink {
    policy: WalkPolicy,
}

impl JsonTreeSink {
    pub fn new(policy: WalkPolicy) -> Self {
        Self { policy }
    }
}

impl TraversalSink for JsonTreeSink {
    type Node = DependencyTree;

    fn visit(&mut self, visit: &Visit<'_>) -> Result<DependencyTree> {
        Ok(DependencyTree::new(
            self.policy.display_id(visit.id),
            visit.package.path.clone(),
            visit.depth,
        ))
    }

    fn finish(
        &mut self,
        visit: &Visit<'_>,
        mut node: DependencyTree,
        children: Vec<DependencyTree>,
    ) -> Option<DependencyTree> {
        // Visible descendants of a hidden package go with it.
        if !visit.visible {
            return None;
        }
        node.dependencies = children;
        Some(node)
    }
}

/// Serialize a tree the way it is printed: two-space indent, trailing newline
pub fn to_json_document(tree: &DependencyTree) -> Result<String> {
    let mut json = serde_json::to_string_pretty(tree)?;
    json.push('\n');
    Ok(json)
}
