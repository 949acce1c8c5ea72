//! Configuration for the generate command.

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use job_core::Catalog;
use job_export::ExportArgs;
use std::path::{Path, PathBuf};

/// Rows generated when `--rows` is not given.
pub const DEFAULT_ROWS: u64 = 2000;

/// Most data rows a single XLSX sheet can hold (one row is the header).
pub const MAX_ROWS: u64 = 1_048_575;

/// Seed used when `--seed` is not given.
pub const DEFAULT_SEED: u64 = 42;

/// Reference date used when `--reference-date` is not given.
pub const DEFAULT_REFERENCE_DATE: &str = "2025-04-19";

/// Arguments of the generate command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of job postings to generate
    #[arg(
        long,
        short = 'n',
        env = "IT_JOBS_ROWS",
        default_value_t = DEFAULT_ROWS,
        value_parser = clap::value_parser!(u64).range(0..=MAX_ROWS)
    )]
    pub rows: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "IT_JOBS_SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Post dates fall between 365 days and 1 day before this date (YYYY-MM-DD)
    #[arg(long, env = "IT_JOBS_REFERENCE_DATE", default_value = DEFAULT_REFERENCE_DATE)]
    pub reference_date: NaiveDate,

    /// YAML catalog replacing the built-in reference data
    #[arg(long, env = "IT_JOBS_CATALOG", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Generate every row for this job title only
    #[arg(long, env = "IT_JOBS_TITLE")]
    pub title: Option<String>,

    #[command(flatten)]
    pub export: ExportArgs,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seed: DEFAULT_SEED,
            reference_date: default_reference_date(),
            catalog: None,
            title: None,
            export: ExportArgs {
                output: PathBuf::from(job_export::DEFAULT_OUTPUT),
                format: job_export::ExportFormat::Xlsx,
            },
        }
    }
}

/// The fixed reference date, 2025-04-19.
pub fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 19).unwrap_or_default()
}

/// Load the catalog from a file, or fall back to the built-in reference data.
///
/// Either way the catalog is validated here, so a title missing from one of
/// the lookup tables stops the run before any row is generated.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("Failed to load catalog from {path:?}")),
        None => Catalog::builtin().context("Built-in catalog is invalid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reference_date_matches_constant() {
        let parsed: NaiveDate = DEFAULT_REFERENCE_DATE.parse().unwrap();
        assert_eq!(parsed, default_reference_date());
    }

    #[test]
    fn test_load_builtin_catalog() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.titles().len(), 16);
    }

    #[test]
    fn test_load_missing_catalog_file() {
        let err = load_catalog(Some(Path::new("/nonexistent/catalog.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load catalog"));
    }
}
