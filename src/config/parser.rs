//! Configuration file parsing utilities

use std::fs;
use std::path::Path;

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{PkgTreeError, Result};
use crate::models::config::PartialSettings;

/// Contents written by `pkgtree --init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# pkgtree configuration
#
# Every key is optional. Command-line flags and PKGTREE_* environment
# variables take precedence over this file.

# Output format: "text" or "json"
output_format = "text"

# Hide standard-library packages
ignore_std_pkg = false

# Hide packages whose path contains "/internal/"
ignore_internal_pkg = false

# Leave the " #=<id>" suffix and the JSON "id" field out
disable_show_id = false

# go binary used to load packages
go_command = "go"

# Colorize text output
use_colors = false
"#;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PkgTreeError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| PkgTreeError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| PkgTreeError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(go) = &settings.go_command {
        if go.trim().is_empty() {
            return Err(PkgTreeError::config_error(format!(
                "Invalid empty go_command in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(PkgTreeError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(from_file) = &settings.from_file {
        if from_file.as_os_str().is_empty() {
            return Err(PkgTreeError::config_error(format!(
                "Invalid empty from_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Look for the default configuration file in the current directory
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if path.is_file() {
        parse_config_file(path).map(Some)
    } else {
        Ok(None)
    }
}

/// Write the default configuration template to `path`
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| PkgTreeError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
