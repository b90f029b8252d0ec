//! Settings validation

use crate::error::{PkgTreeError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.go_command.trim().is_empty() {
            return Err(PkgTreeError::config_error("go command must not be empty"));
        }

        if let Some(path) = &settings.output_file {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.is_dir() {
                    return Err(PkgTreeError::config_error(format!(
                        "Output directory '{}' does not exist",
                        parent.display()
                    )));
                }
            }
        }

        if settings.quiet && settings.verbose {
            return Err(PkgTreeError::config_error("--quiet and --verbose cannot be combined"));
        }

        Ok(())
    }
}
