//! CSV exporter.

use crate::error::ExportError;
use crate::exporter::Exporter;
use csv::Writer;
use job_core::{Dataset, COLUMNS};

/// Writes a dataset as CSV: a header row, then one record per posting.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for CsvExporter {
    fn format_name(&self) -> &'static str {
        "CSV"
    }

    fn to_bytes(&self, dataset: &Dataset) -> Result<Vec<u8>, ExportError> {
        let mut buffer = Vec::new();
        let mut writer = Writer::from_writer(&mut buffer);
        writer.write_record(COLUMNS)?;

        for posting in dataset.iter() {
            let record: Vec<String> = Dataset::record(posting)
                .iter()
                .map(|cell| cell.to_text())
                .collect();
            writer.write_record(&record)?;
        }

        writer.flush()?;
        drop(writer);
        Ok(buffer)
    }
}
