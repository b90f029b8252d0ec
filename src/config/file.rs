//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::Result;
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".pkgtree.toml";

/// Default prefix of configuration environment variables
pub const ENV_PREFIX: &str = "PKGTREE";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
        }
    }

    fn var(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key)
    }

    /// Load settings through an arbitrary variable lookup
    pub fn load_with<F>(&self, lookup: F) -> PartialSettings
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| {
            let name = self.var(key);
            let value = lookup(&name)?;
            match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Some(true),
                "0" | "false" | "no" | "off" | "" => Some(false),
                other => {
                    tracing::warn!(variable = %name, value = other, "ignoring non-boolean value");
                    None
                }
            }
        };

        let mut settings = PartialSettings {
            ignore_std_pkg: flag("IGNORE_STD_PKG"),
            ignore_internal_pkg: flag("IGNORE_INTERNAL_PKG"),
            disable_show_id: flag("DISABLE_SHOW_ID"),
            use_colors: flag("COLOR"),
            ..Default::default()
        };

        if let Some(go) = lookup(&self.var("GO")).filter(|v| !v.is_empty()) {
            settings.go_command = Some(go);
        }

        if let Some(format) = lookup(&self.var("OUTPUT_FORMAT")) {
            match format.parse() {
                Ok(output_format) => settings.output_format = Some(output_format),
                Err(message) => tracing::warn!(%message, "ignoring {}", self.var("OUTPUT_FORMAT")),
            }
        }

        settings
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        Ok(self.load_with(|key| std::env::var(key).ok()))
    }

    fn is_available(&self) -> bool {
        let prefix = format!("{}_", self.prefix);
        std::env::vars().any(|(key, _)| key.starts_with(&prefix))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
