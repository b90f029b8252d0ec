//! Error handling for pkgtree
//!
//! This module provides the error type shared by every stage of a run, the
//! result alias, and helpers for attaching package context to foreign errors.

pub mod context;
pub mod types;

pub use context::{OptionExt, ResultExt};
pub use types::{ErrorSeverity, PkgTreeError, Result};
