use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sheetscout_core::{FailureKind, InspectOptions, ScoutConfig, inspect_path};
use std::path::PathBuf;

mod formatter;
mod logging;

#[derive(Parser)]
#[command(name = "sheetscout")]
#[command(about = "Inspect spreadsheet structure and spot vehicle/sequence number columns", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS file to inspect
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Number of data rows to preview per sheet
    #[arg(short = 'n', long, value_name = "ROWS", value_parser = clap::value_parser!(u16).range(1..))]
    preview_rows: Option<u16>,

    /// Exit with a non-zero code when the file is missing (2) or unreadable (1)
    #[arg(long)]
    strict: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON output
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        ScoutConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        // Try to load default config from current directory if it exists
        let default_config_path = PathBuf::from("sheetscout.toml");
        if default_config_path.exists() {
            ScoutConfig::from_file(&default_config_path).with_context(|| {
                format!(
                    "Failed to load config from {}",
                    default_config_path.display()
                )
            })?
        } else {
            ScoutConfig::default()
        }
    };
    config.validate().context("Invalid configuration")?;

    logging::init(cli.debug, config.log_level());

    let mut options = InspectOptions::new(config);
    if let Some(rows) = cli.preview_rows {
        options = options.with_preview_rows(rows as usize);
    }

    let outcome = inspect_path(&cli.file, &options);

    let failure = match &outcome {
        Ok(report) => {
            match cli.format {
                OutputFormat::Human => print!("{}", formatter::format_human(report)),
                OutputFormat::Json => println!("{}", formatter::format_json(report)?),
            }
            None
        }
        Err(error) => {
            match cli.format {
                OutputFormat::Human => print!(
                    "{}",
                    formatter::format_human_error(&cli.file.display().to_string(), error)
                ),
                OutputFormat::Json => println!("{}", formatter::format_json_error(error)?),
            }
            Some(error.kind())
        }
    };

    // Failures are reported, not escalated, unless asked to
    let exit_code = match (cli.strict, failure) {
        (true, Some(FailureKind::NotFound)) => 2,
        (true, Some(FailureKind::Unreadable)) => 1,
        _ => 0,
    };

    std::process::exit(exit_code);
}
