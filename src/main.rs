//! Command-line interface for it-job-demands
//!
//! # Usage Examples
//!
//! ```bash
//! # Default run: 2000 rows, seed 42, reference date 2025-04-19
//! it-job-demands
//!
//! # Write the workbook bytes to stdout
//! it-job-demands generate --output - > jobs.xlsx
//!
//! # Only Data Scientist postings
//! it-job-demands generate --title "Data Scientist" --rows 100
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use it_job_demands::{run_generate, GenerateArgs};
use job_core::CatalogSource;
use job_export::ExportOutput;
use std::io::Write;
use std::path::PathBuf;

const BIN_NAME: &str = "it-job-demands";

#[derive(Parser)]
#[command(name = BIN_NAME)]
#[command(about = "Generate a synthetic IT job postings spreadsheet")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate postings and export them (the default command)
    Generate(GenerateArgs),

    /// Print the built-in catalog as YAML
    Catalog {
        /// Write the catalog to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Logs go to stderr so `--output -` can stream the workbook on stdout
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let command = match cli.command {
        Some(command) => command,
        // A bare invocation runs `generate`, still reading IT_JOBS_* from the environment
        None => Cli::try_parse_from([BIN_NAME, "generate"])
            .unwrap_or_else(|e| e.exit())
            .command
            .context("Failed to build the default generate command")?,
    };

    match command {
        Commands::Generate(args) => {
            let (output, _metrics) = run_generate(&args)?;
            match output {
                ExportOutput::File(path) => println!("File saved to: {}", path.display()),
                ExportOutput::Bytes(bytes) => {
                    let mut stdout = std::io::stdout().lock();
                    stdout
                        .write_all(&bytes)
                        .context("Failed to write dataset to stdout")?;
                    stdout.flush()?;
                }
            }
        }
        Commands::Catalog { output } => {
            let yaml = CatalogSource::builtin().to_yaml()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, yaml)
                        .with_context(|| format!("Failed to write catalog to {path:?}"))?;
                    println!("Catalog saved to: {}", path.display());
                }
                None => print!("{yaml}"),
            }
        }
    }

    Ok(())
}
