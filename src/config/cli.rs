//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::Args;
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: Args,
    name: String,
}

impl CliConfig {
    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self {
            args: args.clone(),
            name: "command-line arguments".to_string(),
        }
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(pkg) = &self.args.pkg {
            settings.package = Some(pkg.clone());
        }

        if let Some(output_file) = &self.args.output_file {
            settings.output_file = Some(output_file.clone());
        }

        if let Some(from_file) = &self.args.from_file {
            settings.from_file = Some(from_file.clone());
        }

        if let Some(go) = &self.args.go {
            settings.go_command = Some(go.clone());
        }

        // Switches only ever turn behavior on
        if self.args.json {
            settings.output_format = Some(OutputFormat::Json);
        }

        if self.args.ignore_std_pkg {
            settings.ignore_std_pkg = Some(true);
        }

        if self.args.ignore_internal_pkg {
            settings.ignore_internal_pkg = Some(true);
        }

        if self.args.disable_show_id {
            settings.disable_show_id = Some(true);
        }

        if self.args.color {
            settings.use_colors = Some(true);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}
