//! CLI argument definitions for exporting.

use crate::Destination;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Default output file when none is given.
pub const DEFAULT_OUTPUT: &str = "IT_Job_Demands.xlsx";

/// Output file format.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Single-sheet Excel workbook
    #[default]
    Xlsx,
    /// Comma-separated values with a header row
    Csv,
}

/// Export arguments shared by every command that writes a dataset.
#[derive(Args, Clone, Debug)]
pub struct ExportArgs {
    /// Output file path, or "-" to write the bytes to stdout
    #[arg(long, short = 'o', env = "IT_JOBS_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format
    #[arg(long, value_enum, env = "IT_JOBS_FORMAT", default_value_t = ExportFormat::Xlsx)]
    pub format: ExportFormat,
}

impl ExportArgs {
    /// Map the output argument to a destination; "-" means an in-memory buffer.
    pub fn destination(&self) -> Destination {
        if self.output.as_os_str() == "-" {
            Destination::Buffer
        } else {
            Destination::File(self.output.clone())
        }
    }
}
