//! IT job demands dataset generator.
//!
//! Synthesizes fake IT job postings from a catalog of titles, companies,
//! locations, salary ranges, skills and description templates, and exports
//! them as a single-sheet spreadsheet.
//!
//! # CLI Usage
//!
//! ```bash
//! # 2000 rows into IT_Job_Demands.xlsx
//! it-job-demands
//!
//! # Reproducible CSV with a different seed
//! it-job-demands generate --rows 500 --seed 7 --format csv --output jobs.csv
//!
//! # Dump the built-in catalog, edit it, and use it
//! it-job-demands catalog --output catalog.yaml
//! it-job-demands generate --catalog catalog.yaml
//! ```

pub mod config;
pub mod generate;

pub use config::{load_catalog, GenerateArgs};
pub use generate::{build_dataset, run_generate};
