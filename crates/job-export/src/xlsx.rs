//! Single-sheet XLSX exporter.

use crate::error::ExportError;
use crate::exporter::Exporter;
use job_core::{Cell, Dataset, COLUMNS};
use rust_xlsxwriter::{Format, Workbook};

/// Sheet name used for the dataset.
pub const SHEET_NAME: &str = "IT_Job_Demands";

const COLUMN_WIDTHS: [f64; 8] = [38.0, 30.0, 24.0, 18.0, 12.0, 40.0, 12.0, 110.0];

/// Writes a dataset as a workbook with one sheet, a header row and one row per posting.
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    sheet_name: String,
    freeze_header: bool,
}

impl XlsxExporter {
    pub fn new() -> Self {
        Self {
            sheet_name: SHEET_NAME.to_string(),
            freeze_header: true,
        }
    }

    /// Keep the header row visible while scrolling.
    pub fn with_frozen_header(mut self, freeze_header: bool) -> Self {
        self.freeze_header = freeze_header;
        self
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }
}

impl Default for XlsxExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for XlsxExporter {
    fn format_name(&self) -> &'static str {
        "XLSX"
    }

    fn to_bytes(&self, dataset: &Dataset) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let salary_format = Format::new().set_num_format("0.00");

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, (name, width)) in COLUMNS.iter().zip(COLUMN_WIDTHS).enumerate() {
            let col = col as u16;
            worksheet.write_string_with_format(0, col, *name, &header_format)?;
            worksheet.set_column_width(col, width)?;
        }

        if self.freeze_header {
            worksheet.set_freeze_panes(1, 0)?;
        }

        for (i, posting) in dataset.iter().enumerate() {
            let row = (i + 1) as u32;
            for (col, cell) in Dataset::record(posting).into_iter().enumerate() {
                let col = col as u16;
                match cell {
                    Cell::Text(value) => {
                        worksheet.write_string(row, col, value)?;
                    }
                    Cell::Number(value) => {
                        worksheet.write_number_with_format(row, col, value, &salary_format)?;
                    }
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}
