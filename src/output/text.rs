//! Indented text rendering, streamed one line per visit

use crate::core::{TraversalSink, Visit, WalkPolicy};
use crate::error::Result;
use ansi_term::Colour::Blue;
use ansi_term::Style;
use std::io::Write;

/// Indentation for one level of depth
pub const INDENT: &str = "  ";

/// Writes `<indent><path> #=<id>` for every visible visit as it happens
pub struct TextSink<W: Write> {
    out: W,
    policy: WalkPolicy,
    use_colors: bool,
    lines: usize,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W, policy: WalkPolicy, use_colors: bool) -> Self {
        Self {
            out,
            policy,
            use_colors,
            lines: 0,
        }
    }

    /// Number of lines written so far
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    fn format_line(&self, visit: &Visit<'_>) -> String {
        let path = &visit.package.path;
        let path = if !self.use_colors {
            path.to_string()
        } else if visit.revisit {
            Style::new().dimmed().paint(path.as_str()).to_string()
        } else if visit.package.is_standard_library() {
            Blue.paint(path.as_str()).to_string()
        } else {
            path.to_string()
        };

        let mut line = INDENT.repeat(visit.depth);
        line.push_str(&path);
        if let Some(id) = self.policy.display_id(visit.id) {
            line.push_str(&format!(" #={}", id));
        }
        line
    }
}

impl<W: Write> TraversalSink for TextSink<W> {
    type Node = ();

    fn visit(&mut self, visit: &Visit<'_>) -> Result<()> {
        if visit.visible {
            let line = self.format_line(visit);
            writeln!(self.out, "{}", line)?;
            self.lines += 1;
        }
        Ok(())
    }

    fn finish(&mut self, _visit: &Visit<'_>, _node: (), _children: Vec<()>) -> Option<()> {
        Some(())
    }
}
