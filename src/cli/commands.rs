//! Command implementations

use super::Args;
use crate::config::{self, file::DEFAULT_CONFIG_FILE, parser};
use crate::core::WalkPolicy;
use crate::error::{PkgTreeError, Result};
use crate::models::Settings;
use crate::output::{self, create_writer};
use crate::resolver::{self, SourceRoots};
use crate::utils::logging;
use std::path::PathBuf;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Print the import tree of a package
    Dump(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }
        Command::Dump(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Init => {
                logging::init(false, false);
                init(PathBuf::from(DEFAULT_CONFIG_FILE))
            }
            Command::Dump(args) => {
                let settings =
                    logging::scoped(args.quiet, args.verbose, || config::load_config(args))?;
                // Verbosity may come from the config file, not just the flags
                logging::init(settings.quiet, settings.verbose);
                dump(settings)
            }
        }
    }
}

fn init(path: PathBuf) -> Result<()> {
    if path.exists() {
        return Err(PkgTreeError::config_error(format!(
            "{} already exists; delete it first to regenerate it",
            path.display()
        )));
    }
    parser::create_default_config(&path)?;
    println!("Created default configuration file at: {}", path.display());
    Ok(())
}

/// Resolve the root package, load its graph and print it
pub fn dump(mut settings: Settings) -> Result<()> {
    if settings.needs_package_inference() {
        let roots = SourceRoots::from_go_env(&settings.go_command);
        settings.package = resolver::guess_package(&roots)?;
    }

    let resolver = resolver::create_resolver(&settings);
    tracing::debug!(resolver = resolver.name(), package = %settings.package, "loading");
    let graph = resolver.resolve(&settings.package)?;

    let writer = create_writer(settings.output_file.as_ref());
    let mut out = writer.open()?;
    output::render(
        &graph,
        WalkPolicy::from_settings(&settings),
        settings.output_format,
        settings.use_colors,
        &mut out,
    )
    .map_err(|err| match err {
        PkgTreeError::Io { source } => writer.write_error(source),
        other => other,
    })
}
