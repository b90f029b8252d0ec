//! Rendering of a walked import graph
//!
//! Text output is streamed while the graph is walked. JSON output is built
//! into a [`DependencyTree`](crate::models::DependencyTree) and written once.

mod json;
mod text;
mod writers;

pub use self::json::{JsonTreeSink, to_json_document};
pub use self::text::{INDENT, TextSink};
pub use self::writers::{FileWriter, OutputWriter, StdoutWriter, create_writer};

use crate::core::{WalkPolicy, Walker};
use crate::error::{OptionExt, PkgTreeError, Result};
use crate::models::{ImportGraph, OutputFormat};
use std::io::Write;

/// Walk `graph` and write it to `out` in the requested format.
///
/// Returns `NotFound` in JSON mode when the root package itself is hidden.
/// Text mode never fails that way: a hidden root just prints nothing for it.
pub fn render<W: Write>(
    graph: &ImportGraph,
    policy: WalkPolicy,
    format: OutputFormat,
    use_colors: bool,
    out: &mut W,
) -> Result<()> {
    let walker = Walker::new(graph, policy);
    match format {
        OutputFormat::Text => {
            let mut sink = TextSink::new(&mut *out, policy, use_colors);
            walker.walk(&mut sink)?;
            tracing::debug!(lines = sink.lines_written(), "text tree written");
        }
        OutputFormat::Json => {
            let mut sink = JsonTreeSink::new(policy);
            let tree = walker.walk(&mut sink)?.ok_or_error(|| PkgTreeError::NotFound {
                package: graph.package(graph.root()).path.clone(),
            })?;
            out.write_all(to_json_document(&tree)?.as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Render into a string, mainly for tests and embedding
pub fn render_to_string(
    graph: &ImportGraph,
    policy: WalkPolicy,
    format: OutputFormat,
    use_colors: bool,
) -> Result<String> {
    let mut buffer = Vec::new();
    render(graph, policy, format, use_colors, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| PkgTreeError::io_error(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
