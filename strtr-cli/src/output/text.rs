//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use strtr_core::Output;

/// Plain text formatter - writes the replaced text of each input verbatim
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, _source: &str, output: &Output) -> Result<()> {
        self.writer.write_all(output.text.as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strtr_core::{ReplacementTable, Replacer};

    #[test]
    fn test_writes_text_verbatim() {
        let table: ReplacementTable = [("cat", "dog")].into_iter().collect();
        let output = Replacer::new()
            .replace_with_report("a cat\n", &table)
            .unwrap();

        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        formatter.format_result("input.txt", &output).unwrap();
        formatter.format_result("input.txt", &output).unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "a dog\na dog\n");
    }
}
