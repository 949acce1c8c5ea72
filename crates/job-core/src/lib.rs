//! Core types for the IT job demands generator.
//!
//! - [`Catalog`] - validated reference data (titles, companies, locations,
//!   salary ranges, skill options, description templates)
//! - [`JobPosting`] - one synthesized row
//! - [`Dataset`] - ordered rows with a fixed column layout
//!
//! ```text
//! job-core (this crate)
//!    │
//!    ├─── job-generator  (draws JobPostings from a Catalog)
//!    └─── job-export     (writes a Dataset as XLSX or CSV)
//! ```

pub mod catalog;
pub mod dataset;
pub mod posting;

pub use catalog::{
    Catalog, CatalogError, CatalogSource, JobCatalogEntry, SalaryRange, SKILLS_PLACEHOLDER,
};
pub use dataset::{Cell, Dataset, COLUMNS, SALARY_COLUMN};
pub use posting::{round_cents, JobPosting, POST_DATE_FORMAT};
