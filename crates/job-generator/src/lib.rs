//! Job posting generator for the IT job demands dataset.
//!
//! The `JobGenerator` draws rows from a validated [`job_core::Catalog`]
//! using a seeded RNG, so runs with the same seed are reproducible.
//!
//! ```text
//! Catalog + reference date + seed
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  JobGenerator   │
//! │                 │
//! │  - rng (StdRng) │
//! │  - index        │
//! └────────┬────────┘
//!          │
//!          ▼
//!    JobPosting { id, title, company, location, salary, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use job_core::Catalog;
//! use job_generator::JobGenerator;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let reference = NaiveDate::from_ymd_opt(2025, 4, 19).unwrap();
//! let mut generator = JobGenerator::new(catalog, reference, 42).unwrap();
//! let posting = generator.next_posting().unwrap();
//! assert!(posting.post_date < reference);
//! ```
//!
//! Per row, in order: title, company, location, salary, skills, days ago
//! and the UUID bytes are drawn from the same stream.

pub mod generator;
pub mod generators;

pub use generator::{GeneratorError, JobGenerator, PostingIterator};
