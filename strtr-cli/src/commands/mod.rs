//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

pub mod replace;
pub mod validate;

use replace::{Order, OutputFormat};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace needles in text files or stdin
    Replace(replace::ReplaceArgs),

    /// Check a replacement table file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Replace(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List needle ordering modes
    Modes,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Render the listing
    pub fn render(&self) -> String {
        match self {
            ListCommands::Modes => {
                let mut out = String::from("Ordering modes:\n");
                for order in Order::value_variants() {
                    let mode = order.mode();
                    out.push_str(&format!("  {:<10} {}\n", mode.as_str(), mode.description()));
                }
                out
            }
            ListCommands::Formats => {
                let mut out = String::from("Output formats:\n");
                for format in OutputFormat::value_variants() {
                    out.push_str(&format!(
                        "  {:<10} {}\n",
                        format.as_str(),
                        format.description()
                    ));
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_modes() {
        let listing = ListCommands::Modes.render();
        assert!(listing.contains("longest"));
        assert!(listing.contains("insertion"));
    }

    #[test]
    fn test_list_formats() {
        let listing = ListCommands::Formats.render();
        assert!(listing.contains("text"));
        assert!(listing.contains("json"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Modes,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Modes"));
    }
}
