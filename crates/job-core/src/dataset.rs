//! Table assembly with a fixed column layout.

use crate::posting::JobPosting;

/// Column names in export order.
pub const COLUMNS: [&str; 8] = [
    "Job ID",
    "Job Title",
    "Company",
    "Location",
    "Salary",
    "Skills",
    "Post Date",
    "Job Description",
];

/// Index of the numeric salary column in [`COLUMNS`].
pub const SALARY_COLUMN: usize = 4;

/// A typed cell value as it should land in a spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    /// Plain-text rendering, as used by CSV output.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => format!("{n:.2}"),
        }
    }
}

/// Ordered collection of postings. Built once, consumed once by an exporter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<JobPosting>,
}

impl Dataset {
    /// Collect rows in the order given. No filtering or deduplication.
    pub fn assemble<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = JobPosting>,
    {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[JobPosting] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobPosting> {
        self.rows.iter()
    }

    /// Typed cells for one posting, in [`COLUMNS`] order.
    pub fn record(posting: &JobPosting) -> Vec<Cell> {
        vec![
            Cell::Text(posting.id.to_string()),
            Cell::Text(posting.title.clone()),
            Cell::Text(posting.company.clone()),
            Cell::Text(posting.location.clone()),
            Cell::Number(posting.salary),
            Cell::Text(posting.skills.clone()),
            Cell::Text(posting.post_date_string()),
            Cell::Text(posting.description.clone()),
        ]
    }

    pub fn into_rows(self) -> Vec<JobPosting> {
        self.rows
    }
}
