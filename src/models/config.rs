//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default go binary used by the `go list` resolver
pub const DEFAULT_GO_COMMAND: &str = "go";

/// Main configuration settings for pkgtree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Import path of the root package; empty or "." means infer from the
    /// working directory
    pub package: String,

    /// Output format (text, json)
    pub output_format: OutputFormat,

    /// Hide standard-library packages
    pub ignore_std_pkg: bool,

    /// Hide packages whose path contains `/internal/`
    pub ignore_internal_pkg: bool,

    /// Omit visitation identifiers
    pub disable_show_id: bool,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Read `go list -json -deps` output from this file instead of running go
    pub from_file: Option<PathBuf>,

    /// go binary to invoke
    pub go_command: String,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to suppress diagnostics below error level
    pub quiet: bool,

    /// Whether to log informational diagnostics
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            package: String::new(),
            output_format: OutputFormat::Text,
            ignore_std_pkg: false,
            ignore_internal_pkg: false,
            disable_show_id: false,
            output_file: None,
            from_file: None,
            go_command: DEFAULT_GO_COMMAND.to_string(),
            use_colors: false,
            quiet: false,
            verbose: false,
        }
    }
}

impl Settings {
    /// Whether the root package has to be inferred from the working directory
    pub fn needs_package_inference(&self) -> bool {
        self.package.is_empty() || self.package == "."
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented text tree, streamed line by line
    Text,
    /// Single JSON document
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub package: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub ignore_std_pkg: Option<bool>,
    pub ignore_internal_pkg: Option<bool>,
    pub disable_show_id: Option<bool>,
    pub output_file: Option<PathBuf>,
    pub from_file: Option<PathBuf>,
    pub go_command: Option<String>,
    pub use_colors: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.package.is_some() {
            self.package = other.package;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.ignore_std_pkg.is_some() {
            self.ignore_std_pkg = other.ignore_std_pkg;
        }
        if other.ignore_internal_pkg.is_some() {
            self.ignore_internal_pkg = other.ignore_internal_pkg;
        }
        if other.disable_show_id.is_some() {
            self.disable_show_id = other.disable_show_id;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.from_file.is_some() {
            self.from_file = other.from_file;
        }
        if other.go_command.is_some() {
            self.go_command = other.go_command;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(package) = &self.package {
            settings.package = package.clone();
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(ignore_std_pkg) = self.ignore_std_pkg {
            settings.ignore_std_pkg = ignore_std_pkg;
        }
        if let Some(ignore_internal_pkg) = self.ignore_internal_pkg {
            settings.ignore_internal_pkg = ignore_internal_pkg;
        }
        if let Some(disable_show_id) = self.disable_show_id {
            settings.disable_show_id = disable_show_id;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(from_file) = &self.from_file {
            settings.from_file = Some(from_file.clone());
        }
        if let Some(go_command) = &self.go_command {
            settings.go_command = go_command.clone();
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }

        settings
    }
}
