//! Error types and definitions for pkgtree

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels, mapped onto process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The run failed while loading or rendering the graph
    Error,
    /// The run could not start: bad arguments or configuration
    Critical,
}

impl ErrorSeverity {
    /// Exit code the process terminates with for this severity
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Error => 1,
            ErrorSeverity::Critical => 2,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for pkgtree operations
#[derive(Debug, Error)]
pub enum PkgTreeError {
    /// Bad command-line input or a package that could not be inferred
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// The package resolver could not load the import graph
    #[error("load {package}: {message}")]
    Load { package: String, message: String },

    /// The graph loaded but the root was filtered out of the JSON tree
    #[error("not found: {package}")]
    NotFound { package: String },

    /// The go tool could not be started
    #[error("Failed to run {program}: {source}")]
    ResolverSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Output of `go list -json` was not a valid object stream
    #[error("Invalid go list output: {source}")]
    GoListParse {
        #[source]
        source: serde_json::Error,
    },

    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },
}

impl PkgTreeError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PkgTreeError::Usage { .. } => ErrorSeverity::Critical,
            PkgTreeError::Config { .. } => ErrorSeverity::Critical,
            PkgTreeError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            PkgTreeError::ConfigRead { .. } => ErrorSeverity::Critical,
            PkgTreeError::ConfigParse { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            PkgTreeError::Usage { message } => message.clone(),
            PkgTreeError::ResolverSpawn { program, source } => {
                format!("Could not run '{}': {}. Is the Go toolchain installed and on PATH? Use --go to point at it.", program, source)
            }
            PkgTreeError::NotFound { package } => {
                format!("Nothing to print for '{}': the root package itself is filtered out.", package)
            }
            PkgTreeError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'.", path.display())
            }
            _ => self.to_string(),
        }
    }

    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        PkgTreeError::Usage {
            message: message.into(),
        }
    }

    /// Create a load error for a package
    pub fn load(package: impl Into<String>, message: impl Into<String>) -> Self {
        PkgTreeError::Load {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        PkgTreeError::Config {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        PkgTreeError::Io { source }
    }
}

impl From<std::io::Error> for PkgTreeError {
    fn from(err: std::io::Error) -> Self {
        PkgTreeError::io_error(err)
    }
}

impl From<serde_json::Error> for PkgTreeError {
    fn from(err: serde_json::Error) -> Self {
        PkgTreeError::JsonSerialize { source: err }
    }
}

/// Result type alias for pkgtree operations
pub type Result<T> = std::result::Result<T, PkgTreeError>;
