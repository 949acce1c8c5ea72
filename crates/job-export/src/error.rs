//! Error types for the exporters.

use thiserror::Error;

/// Errors that can occur while exporting a dataset.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Spreadsheet serialization error.
    #[error("XLSX error")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV error.
    #[error("CSV error")]
    Csv(#[from] csv::Error),
}
