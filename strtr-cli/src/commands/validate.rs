//! Validate command implementation

use crate::table_source::load_table_file;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use strtr_core::ordering::order_needles;
use strtr_core::OrderingMode;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the replacement table to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub table: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating replacement table: {}", self.table.display());

        let table = load_table_file(&self.table)?;
        match order_needles(&table, OrderingMode::default()) {
            Ok(needles) => {
                println!("✓ Table is valid!");
                println!("  Needles: {}", needles.len());
                let ignored = table.len() - needles.len();
                if ignored > 0 {
                    println!("  Ignored empty needles: {ignored}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Table is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_validate_valid_table() {
        let temp_file = table_file(
            r#"
[[replacements]]
needle = "cat"
replacement = "dog"

[[replacements]]
needle = ""
replacement = "ignored"
"#,
        );

        let args = ValidateArgs {
            table: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_unmapped_needle() {
        let temp_file = table_file(
            r#"
[[replacements]]
needle = "cat"
"#,
        );

        let args = ValidateArgs {
            table: temp_file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("no replacement for needle 'cat'"));
    }

    #[test]
    fn test_validate_malformed_table() {
        let temp_file = table_file("[[replacements]]\nneedle = 5\n");

        let args = ValidateArgs {
            table: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }
}
