//! The seam between the traversal and its output

use crate::error::Result;
use crate::models::PackageNode;

/// A single arrival of the traversal at a package
#[derive(Debug, Clone, Copy)]
pub struct Visit<'g> {
    pub package: &'g PackageNode,
    /// Visitation identifier of the package
    pub id: usize,
    /// Distance from the root
    pub depth: usize,
    /// The package was reached before; its imports are not walked again
    pub revisit: bool,
    /// The package passes the filtering policy
    pub visible: bool,
}

/// Receives the traversal's visits.
///
/// `visit` is called in pre-order on every arrival, first or repeated.
/// `finish` is called once the arrival's imports have been walked (none, for
/// a revisit) and gets the nodes its children produced. Returning `None`
/// from `finish` removes the node from its parent's children.
pub trait TraversalSink {
    type Node;

    fn visit(&mut self, visit: &Visit<'_>) -> Result<Self::Node>;

    fn finish(
        &mut self,
        visit: &Visit<'_>,
        node: Self::Node,
        children: Vec<Self::Node>,
    ) -> Option<Self::Node>;
}
