//! Shared export plumbing: destinations, outputs and metrics.

use crate::error::ExportError;
use job_core::Dataset;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Where an export goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Return the serialized bytes to the caller
    Buffer,
    /// Write to this path, overwriting any existing file
    File(PathBuf),
}

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutput {
    Bytes(Vec<u8>),
    File(PathBuf),
}

/// Metrics from an export operation.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Size of the serialized output in bytes.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl ExportMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// A serializer for a whole dataset.
pub trait Exporter {
    /// Short format name used in log lines.
    fn format_name(&self) -> &'static str;

    /// Serialize the dataset into an in-memory buffer.
    fn to_bytes(&self, dataset: &Dataset) -> Result<Vec<u8>, ExportError>;

    /// Serialize the dataset to the given destination.
    fn export(
        &self,
        dataset: &Dataset,
        destination: &Destination,
    ) -> Result<(ExportOutput, ExportMetrics), ExportError> {
        let start_time = Instant::now();
        let bytes = self.to_bytes(dataset)?;

        let mut metrics = ExportMetrics {
            rows_written: dataset.len() as u64,
            bytes_written: bytes.len() as u64,
            total_duration: Duration::ZERO,
        };

        let output = match destination {
            Destination::Buffer => ExportOutput::Bytes(bytes),
            Destination::File(path) => {
                fs::write(path, &bytes)?;
                ExportOutput::File(path.clone())
            }
        };

        metrics.total_duration = start_time.elapsed();

        info!(
            "{} export complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            self.format_name(),
            metrics.rows_written,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok((output, metrics))
    }
}
