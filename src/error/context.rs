//! Error context utilities
//!
//! Helpers for turning foreign errors into [`PkgTreeError`] values that name
//! the package being processed.

use crate::error::{PkgTreeError, Result};

/// Extension trait for Result to add package context to errors
pub trait ResultExt<T> {
    /// Wrap an error as a load failure of `package`
    fn with_load_context<P: Into<String>>(self, package: P) -> Result<T>;

    /// Wrap an error as a load failure with a custom message prefix
    fn with_context<C, F>(self, package: &str, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_load_context<P: Into<String>>(self, package: P) -> Result<T> {
        self.map_err(|err| PkgTreeError::load(package, err.to_string()))
    }

    fn with_context<C, F>(self, package: &str, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| PkgTreeError::load(package, format!("{}: {}", context(), err)))
    }
}

/// Extension trait for Option to convert to Result with a custom error
pub trait OptionExt<T> {
    /// Convert Option to Result with a custom error
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> PkgTreeError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> PkgTreeError,
    {
        self.ok_or_else(err_fn)
    }
}
