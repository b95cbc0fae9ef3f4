//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use strtr_core::{Metadata, OccurrenceRecord, Output};

/// JSON formatter - outputs one report per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    results: Vec<ResultData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct ResultData {
    /// File path, or `<stdin>`
    pub source: String,
    /// Replaced text
    pub text: String,
    /// Accepted occurrences in source order
    pub occurrences: Vec<OccurrenceRecord>,
    /// Call statistics
    pub metadata: Metadata,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            results: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, source: &str, output: &Output) -> Result<()> {
        self.results.push(ResultData {
            source: source.to_string(),
            text: output.text.clone(),
            occurrences: output.occurrences.clone(),
            metadata: output.metadata.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.results)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.results)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
