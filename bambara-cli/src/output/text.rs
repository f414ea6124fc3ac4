//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - one item per line.
///
/// Writing a token sequence through this formatter into a file is the
/// newline-joined token export consumed by downstream tools.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_items(&mut self, items: &[String]) -> Result<()> {
        for item in items {
            writeln!(self.writer, "{item}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_counts(&mut self, counts: &[(String, usize)]) -> Result<()> {
        for (token, count) in counts {
            writeln!(self.writer, "{token}\t{count}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
