//! Import graph traversal

pub mod registry;
pub mod sink;
pub mod walker;

pub use registry::{Arrival, VisitRegistry};
pub use sink::{TraversalSink, Visit};
pub use walker::{WalkPolicy, Walker};
