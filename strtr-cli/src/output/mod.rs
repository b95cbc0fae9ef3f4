//! Output formatting module

use anyhow::Result;
use strtr_core::Output;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output the result of one input
    fn format_result(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
