//! Replace command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use crate::table_source::{build_table, parse_pair, TableSource};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use strtr_core::{OrderingMode, Output, ReplacementTable, Replacer};

/// Arguments for the replace command
#[derive(Debug, Args)]
pub struct ReplaceArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Replacement table file (TOML, or JSON with a .json extension)
    #[arg(short, long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Replacement pair, split at the first '='
    #[arg(short, long, value_name = "NEEDLE=REPLACEMENT", value_parser = parse_pair)]
    pub map: Vec<(String, String)>,

    /// Characters to replace, paired with --to by position
    #[arg(long, value_name = "CHARS", requires = "to")]
    pub from: Option<String>,

    /// Replacement characters, paired with --from by position
    #[arg(long, value_name = "CHARS", requires = "from")]
    pub to: Option<String>,

    /// Needle ordering used to resolve overlaps
    #[arg(long, value_enum)]
    pub order: Option<Order>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Needle ordering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Longest needles first, ties in lexicographic order
    Longest,
    /// Needles in table order
    Insertion,
}

impl Order {
    /// Engine ordering mode
    pub fn mode(&self) -> OrderingMode {
        match self {
            Order::Longest => OrderingMode::LengthDescendingThenLexicographic,
            Order::Insertion => OrderingMode::InsertionOrder,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Replaced text only
    Text,
    /// JSON report with occurrences and metadata
    Json,
}

impl OutputFormat {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "replaced text only",
            OutputFormat::Json => "report with occurrences and metadata",
        }
    }
}

impl ReplaceArgs {
    /// Execute the replace command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting replacement");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let ordering = match self.order {
            Some(order) => order.mode(),
            None => config.replace.ordering()?,
        };
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.default_format, true)
                .map_err(CliError::ConfigError)?,
        };
        log::info!("Ordering: {ordering}, format: {}", format.as_str());

        let table = build_table(&self.table_sources())?;
        let replacer = Replacer::with_ordering(ordering);

        // Every input is read and replaced before the output is opened, so a
        // failure writes nothing and `-o` may name one of the inputs
        let mut results = Vec::new();
        if self.input.is_empty() {
            let text = FileReader::read_stdin()?;
            results.push(replace_one(&replacer, &table, "<stdin>", &text)?);
        } else {
            let files = resolve_patterns(&self.input)?;
            log::info!("Found {} files to process", files.len());

            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64)?;

            for path in &files {
                let text = FileReader::read_text(path)?;
                let source = path.display().to_string();
                results.push(replace_one(&replacer, &table, &source, &text)?);
                progress.file_completed(&source);
            }
            progress.finish();
        }

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        for (source, output) in &results {
            formatter.format_result(source, output)?;
        }
        formatter.finish()
    }

    /// Table sources in the order they are applied
    pub fn table_sources(&self) -> Vec<TableSource> {
        let mut sources = Vec::new();
        if let Some(path) = &self.table {
            sources.push(TableSource::File(path.clone()));
        }
        if !self.map.is_empty() {
            sources.push(TableSource::Pairs(self.map.clone()));
        }
        if let (Some(from), Some(to)) = (&self.from, &self.to) {
            sources.push(TableSource::CharMap {
                from: from.clone(),
                to: to.clone(),
            });
        }
        sources
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            if let Err(e) = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init()
            {
                log::debug!("Keeping existing logger: {e}");
            }
        }
    }
}

fn replace_one(
    replacer: &Replacer,
    table: &ReplacementTable,
    source: &str,
    text: &str,
) -> Result<(String, Output)> {
    let output = replacer
        .replace_with_report(text, table)
        .map_err(|e| CliError::ReplaceError(format!("{source}: {e}")))?;

    log::debug!(
        "{source}: {} replaced, {} overlapping candidates skipped",
        output.metadata.accepted,
        output.metadata.rejected
    );

    Ok((source.to_string(), output))
}
