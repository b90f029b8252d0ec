//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// pkgtree - dump pkg dependencies
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pkgtree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "dump pkg dependencies")]
#[command(long_about = "Print the import graph of a Go package as an indented tree or as JSON. \
Every distinct package gets an id (#=<n>) in depth-first order; a package reached again is printed \
as a leaf with the same id.")]
#[command(after_help = "EXAMPLES:
    # Tree of the package in the current directory (inferred from GOPATH)
    pkgtree

    # Tree of a named package, without the standard library
    pkgtree --ignore-std-pkg github.com/acme/tool

    # JSON without ids
    pkgtree --json --disable-show-id github.com/acme/tool

    # Offline, from a saved listing
    go list -json -deps github.com/acme/tool > deps.json
    pkgtree --from-file deps.json github.com/acme/tool
")]
pub struct Args {
    /// Package to inspect; empty or "." infers it from the working directory
    #[arg(value_name = "PKG")]
    pub pkg: Option<String>,

    /// Print a JSON tree instead of indented text
    #[arg(long)]
    pub json: bool,

    /// Hide standard-library packages
    #[arg(long)]
    pub ignore_std_pkg: bool,

    /// Hide packages whose path contains "/internal/"
    #[arg(long)]
    pub ignore_internal_pkg: bool,

    /// Leave package ids out of the output
    #[arg(long)]
    pub disable_show_id: bool,

    /// Write output to FILE instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Read `go list -json -deps` output from FILE instead of running go
    #[arg(long, value_name = "FILE")]
    pub from_file: Option<PathBuf>,

    /// go binary used to load packages
    #[arg(long, value_name = "PATH")]
    pub go: Option<String>,

    /// Colorize text output
    #[arg(long)]
    pub color: bool,

    /// Configuration file (defaults to .pkgtree.toml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log what pkgtree is doing
    #[arg(short, long)]
    pub verbose: bool,

    /// Create a default .pkgtree.toml in the current directory
    #[arg(long)]
    pub init: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
