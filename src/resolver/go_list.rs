//! Import graphs from `go list -json -deps`
//!
//! `go list -json` prints one JSON object per package, back to back, with no
//! enclosing array. With `-deps` every transitive dependency is listed before
//! the packages that import it, and the requested packages come last.

use crate::error::{PkgTreeError, Result, ResultExt};
use crate::models::{ImportGraph, PackageNode};
use crate::resolver::PackageResolver;
use serde::Deserialize;
use std::path::PathBuf;
use std::process::Command;

/// The subset of `go list -json` output the graph needs
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GoListPackage {
    pub import_path: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default)]
    pub goroot: bool,
    #[serde(default)]
    pub standard: bool,
    #[serde(default)]
    pub dep_only: bool,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub error: Option<GoListError>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GoListError {
    #[serde(default)]
    pub import_stack: Vec<String>,
    #[serde(default)]
    pub pos: String,
    pub err: String,
}

impl GoListError {
    fn describe(&self) -> String {
        if self.pos.is_empty() {
            self.err.clone()
        } else {
            format!("{}: {}", self.pos, self.err)
        }
    }
}

impl GoListPackage {
    /// Packages without sources (`unsafe` in old toolchains, `C`) count as
    /// part of the toolchain.
    pub fn is_standard_library(&self) -> bool {
        self.standard || self.goroot || self.dir.is_none()
    }

    fn to_node(&self) -> PackageNode {
        let node = PackageNode::new(&self.import_path, &self.name)
            .with_standard(self.is_standard_library());
        match &self.dir {
            Some(dir) => node.with_dir(dir),
            None => node,
        }
    }
}

/// Parse a `go list -json -deps` object stream
pub fn parse_packages(input: &str) -> Result<Vec<GoListPackage>> {
    serde_json::Deserializer::from_str(input)
        .into_iter::<GoListPackage>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|source| PkgTreeError::GoListParse { source })
}

/// Build the import graph rooted at `package` from `go list` output.
///
/// `package` is matched against import paths first. Directory arguments such
/// as `.` or `./cmd/tool` do not appear in the output; for those the single
/// package that was not listed only as a dependency is taken as the root.
pub fn build_graph(package: &str, packages: &[GoListPackage]) -> Result<ImportGraph> {
    if let Some(failed) = packages.iter().find(|p| p.error.is_some()) {
        let message = failed
            .error
            .as_ref()
            .map(GoListError::describe)
            .unwrap_or_default();
        return Err(PkgTreeError::load(&failed.import_path, message));
    }

    let root = match packages.iter().find(|p| p.import_path == package) {
        Some(root) => root.import_path.as_str(),
        None if !is_filesystem_pattern(package) => {
            return Err(PkgTreeError::load(package, "package missing from go list output"));
        }
        None => {
            let requested: Vec<&str> = packages
                .iter()
                .filter(|p| !p.dep_only)
                .map(|p| p.import_path.as_str())
                .collect();
            match requested.as_slice() {
                [root] => *root,
                [] => {
                    return Err(PkgTreeError::load(package, "go list returned no matching package"));
                }
                many => {
                    return Err(PkgTreeError::load(
                        package,
                        format!("pattern matched {} packages, expected one", many.len()),
                    ));
                }
            }
        }
    };

    let mut builder = ImportGraph::builder();
    for listed in packages {
        builder.add_package(listed.to_node());
        for import in &listed.imports {
            builder.add_import(&listed.import_path, import);
        }
    }
    let graph = builder.build(root)?;

    tracing::info!(
        root = root,
        packages = graph.package_count(),
        imports = graph.import_count(),
        "resolved import graph"
    );
    Ok(graph)
}

/// Whether `package` names directories rather than an import path
fn is_filesystem_pattern(package: &str) -> bool {
    package == "."
        || package == ".."
        || package.starts_with("./")
        || package.starts_with("../")
        || package.starts_with('/')
        || package.contains("...")
}

/// Resolve packages by running the go tool
#[derive(Debug, Clone)]
pub struct GoListResolver {
    program: String,
    work_dir: Option<PathBuf>,
}

impl GoListResolver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            work_dir: None,
        }
    }

    /// Run go in `dir` instead of the current directory
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    fn command(&self, package: &str) -> Command {
        let mut command = Command::new(&self.program);
        command.args(["list", "-json", "-deps", "--", package]);
        if let Some(dir) = &self.work_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl PackageResolver for GoListResolver {
    fn resolve(&self, package: &str) -> Result<ImportGraph> {
        tracing::info!(program = %self.program, package, "running go list");
        let output = self
            .command(package)
            .output()
            .map_err(|source| PkgTreeError::ResolverSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("go list exited with {}", output.status),
                detail => detail.to_string(),
            };
            return Err(PkgTreeError::load(package, message));
        }

        let stdout = String::from_utf8(output.stdout).with_load_context(package)?;
        build_graph(package, &parse_packages(&stdout)?)
    }

    fn name(&self) -> &str {
        "go list"
    }
}
