//! Output writing functionality
//!
//! This module provides writers for the two output destinations.

use crate::error::{PkgTreeError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Trait for output destinations
pub trait OutputWriter {
    /// Open a stream to the destination
    fn open(&self) -> Result<Box<dyn Write>>;

    /// Attribute an IO failure to this destination
    fn write_error(&self, source: io::Error) -> PkgTreeError;
}

/// Writer for stdout output
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn open(&self) -> Result<Box<dyn Write>> {
        Ok(Box::new(io::stdout()))
    }

    fn write_error(&self, source: io::Error) -> PkgTreeError {
        PkgTreeError::StdoutWrite { source }
    }
}

/// Writer for file output
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    /// Create a new file writer
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for FileWriter {
    fn open(&self) -> Result<Box<dyn Write>> {
        let file = File::create(&self.path).map_err(|e| self.write_error(e))?;
        Ok(Box::new(BufWriter::new(file)))
    }

    fn write_error(&self, source: io::Error) -> PkgTreeError {
        PkgTreeError::OutputWrite {
            path: self.path.clone(),
            source,
        }
    }
}

/// Create an output writer based on the output file option
pub fn create_writer(output_file: Option<impl AsRef<Path>>) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StdoutWriter),
    }
}
