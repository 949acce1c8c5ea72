//! Generate command handler.

use crate::config::{load_catalog, GenerateArgs, MAX_ROWS};
use anyhow::Context;
use job_core::Dataset;
use job_export::{exporter_for, ExportMetrics, ExportOutput};
use job_generator::JobGenerator;

/// Synthesize the dataset described by `args`.
pub fn build_dataset(args: &GenerateArgs) -> anyhow::Result<Dataset> {
    anyhow::ensure!(
        args.rows <= MAX_ROWS,
        "Row count {} exceeds the maximum of {} rows per sheet",
        args.rows,
        MAX_ROWS
    );

    let catalog = load_catalog(args.catalog.as_deref())?;

    tracing::info!(
        "Generating {} job postings (seed={}, reference_date={})",
        args.rows,
        args.seed,
        args.reference_date
    );

    let mut generator = JobGenerator::new(catalog, args.reference_date, args.seed)?;
    if let Some(title) = &args.title {
        tracing::info!("Restricting postings to title '{}'", title);
        generator = generator.with_fixed_title(title)?;
    }

    let postings = generator.generate(args.rows)?;
    Ok(Dataset::assemble(postings))
}

/// Run the generate command: synthesize, assemble, export.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<(ExportOutput, ExportMetrics)> {
    let dataset = build_dataset(args)?;
    let destination = args.export.destination();

    exporter_for(args.export.format)
        .export(&dataset, &destination)
        .with_context(|| format!("Failed to export dataset to {:?}", args.export.output))
}
