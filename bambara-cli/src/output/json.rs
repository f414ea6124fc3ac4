//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - items as a JSON array, counts as an array of objects
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

/// Data structure for frequency output
#[derive(Debug, Serialize)]
struct CountEntry<'a> {
    /// The token text
    token: &'a str,
    /// Number of occurrences
    count: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_items(&mut self, items: &[String]) -> Result<()> {
        self.write_value(&items)
    }

    fn write_counts(&mut self, counts: &[(String, usize)]) -> Result<()> {
        let entries: Vec<CountEntry> = counts
            .iter()
            .map(|(token, count)| CountEntry {
                token,
                count: *count,
            })
            .collect();
        self.write_value(&entries)
    }
}
