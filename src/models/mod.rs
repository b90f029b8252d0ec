//! Data models and structures for pkgtree

pub mod config;
pub mod package;
pub mod tree;

pub use config::{OutputFormat, PartialSettings, Settings};
pub use package::{ImportGraph, ImportGraphBuilder, PackageNode};
pub use tree::DependencyTree;
