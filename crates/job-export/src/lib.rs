//! Exporters for the IT job demands dataset.
//!
//! Both exporters write the same table: a header row with
//! [`job_core::COLUMNS`] followed by one row per posting.
//!
//! # Example
//!
//! ```ignore
//! use job_export::{Destination, Exporter, XlsxExporter};
//!
//! let (output, metrics) = XlsxExporter::new()
//!     .export(&dataset, &Destination::File("IT_Job_Demands.xlsx".into()))?;
//! ```

pub mod args;
mod csv_file;
mod error;
mod exporter;
mod xlsx;

pub use args::{ExportArgs, ExportFormat, DEFAULT_OUTPUT};
pub use csv_file::CsvExporter;
pub use error::ExportError;
pub use exporter::{Destination, ExportMetrics, ExportOutput, Exporter};
pub use xlsx::{XlsxExporter, SHEET_NAME};

/// Pick the exporter for a format.
pub fn exporter_for(format: ExportFormat) -> Box<dyn Exporter> {
    match format {
        ExportFormat::Xlsx => Box::new(XlsxExporter::new()),
        ExportFormat::Csv => Box::new(CsvExporter::new()),
    }
}
