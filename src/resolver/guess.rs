//! Inferring the package name from the working directory
//!
//! A directory below `$GOROOT/src` or `<gopath entry>/src` names the package
//! at its relative path, the way GOPATH-mode tooling lays out sources.

use crate::error::{PkgTreeError, Result};
use std::env;
use std::path::{Component, Path, PathBuf};
use std::process::Command;

/// Directories under which package sources live
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRoots {
    roots: Vec<PathBuf>,
}

impl SourceRoots {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Source roots of the current Go environment.
    ///
    /// `GOROOT` and `GOPATH` are read from the environment, then asked of
    /// `go env`. GOPATH falls back to `~/go`.
    pub fn from_go_env(go_command: &str) -> Self {
        let mut roots = Vec::new();

        let goroot = env::var("GOROOT")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| go_env(go_command, "GOROOT"));
        if let Some(goroot) = goroot {
            roots.push(PathBuf::from(goroot).join("src"));
        }

        let gopath = env::var("GOPATH")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| go_env(go_command, "GOPATH"));
        match gopath {
            Some(gopath) => {
                roots.extend(env::split_paths(&gopath).map(|entry| entry.join("src")));
            }
            None => {
                if let Some(home) = dirs::home_dir() {
                    roots.push(home.join("go").join("src"));
                }
            }
        }

        tracing::debug!(?roots, "source roots");
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Package path of `dir` relative to the first root containing it
    pub fn package_for(&self, dir: &Path) -> Result<String> {
        for root in &self.roots {
            let Ok(relative) = dir.strip_prefix(root) else {
                continue;
            };
            let segments: Vec<String> = relative
                .components()
                .filter_map(|component| match component {
                    Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect();
            if !segments.is_empty() {
                return Ok(segments.join("/"));
            }
        }

        Err(PkgTreeError::usage(format!(
            "{:?} is not subdir of srcdirs({:?})",
            dir, self.roots
        )))
    }
}

/// Infer the package for the current working directory
pub fn guess_package(roots: &SourceRoots) -> Result<String> {
    let cwd = env::current_dir()
        .map_err(|e| PkgTreeError::usage(format!("cannot determine working directory: {}", e)))?;
    let package = roots.package_for(&cwd)?;
    tracing::warn!(package = %package, "guess pkg name");
    Ok(package)
}

fn go_env(go_command: &str, key: &str) -> Option<String> {
    let output = Command::new(go_command).args(["env", key]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!value.is_empty()).then_some(value)
}
