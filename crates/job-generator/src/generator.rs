//! Main generator for producing job postings.

use crate::generators::{choose, date, numeric, uuid};
use chrono::NaiveDate;
use job_core::{Catalog, CatalogError, JobCatalogEntry, JobPosting};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Title is not part of the catalog
    #[error("Unknown job title: {0}")]
    UnknownTitle(String),

    /// Reference date leaves no room for a full post-date window
    #[error("Reference date {0} is too early to draw post dates from")]
    ReferenceDateOutOfRange(NaiveDate),

    /// Catalog error
    #[error("Catalog error")]
    Catalog(#[from] CatalogError),
}

/// Upper bound on up-front allocation when generating many rows.
const MAX_PREALLOCATED_ROWS: u64 = 1 << 16;

/// Generator that produces deterministic job postings.
///
/// All draws for a row come from one seeded RNG stream, so the same catalog,
/// reference date and seed always yield the same rows, ids included.
pub struct JobGenerator {
    /// Validated reference data
    catalog: Catalog,
    /// Post dates are drawn relative to this date
    reference_date: NaiveDate,
    /// Base seed
    seed: u64,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Index of the next row
    index: u64,
    /// When set, every row uses this catalog entry
    fixed_title: Option<usize>,
}

impl JobGenerator {
    /// Create a new generator with the given catalog, reference date and seed.
    ///
    /// Fails if the reference date is within 365 days of the earliest
    /// representable date.
    pub fn new(
        catalog: Catalog,
        reference_date: NaiveDate,
        seed: u64,
    ) -> Result<Self, GeneratorError> {
        if date::earliest_post_date(reference_date).is_none() {
            return Err(GeneratorError::ReferenceDateOutOfRange(reference_date));
        }

        Ok(Self {
            catalog,
            reference_date,
            seed,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
            fixed_title: None,
        })
    }

    /// Set the starting index for row generation.
    ///
    /// Re-seeds the RNG from the base seed and the index, so a generator
    /// started at N always produces the same row N.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self.rng = StdRng::seed_from_u64(self.seed_for_index(index));
        self
    }

    /// Restrict every generated row to a single title.
    pub fn with_fixed_title(mut self, title: &str) -> Result<Self, GeneratorError> {
        let position = self
            .catalog
            .entries()
            .iter()
            .position(|e| e.title == title)
            .ok_or_else(|| GeneratorError::UnknownTitle(title.to_string()))?;
        self.fixed_title = Some(position);
        Ok(self)
    }

    fn seed_for_index(&self, index: u64) -> u64 {
        self.seed
            .wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Get the current row index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generate the next posting.
    pub fn next_posting(&mut self) -> Result<JobPosting, GeneratorError> {
        let entry = match self.fixed_title {
            Some(i) => &self.catalog.entries()[i],
            None => choose(&mut self.rng, self.catalog.entries())
                .ok_or(CatalogError::EmptyList("titles"))?,
        };

        let posting = synthesize(
            entry,
            &self.catalog,
            self.reference_date,
            &mut self.rng,
        )?;

        self.index += 1;
        Ok(posting)
    }

    /// Generate `count` postings lazily.
    pub fn postings(&mut self, count: u64) -> PostingIterator<'_> {
        PostingIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Generate `count` postings eagerly, stopping at the first error.
    pub fn generate(&mut self, count: u64) -> Result<Vec<JobPosting>, GeneratorError> {
        let mut postings = Vec::with_capacity(count.min(MAX_PREALLOCATED_ROWS) as usize);
        for _ in 0..count {
            postings.push(self.next_posting()?);
        }
        tracing::debug!(
            "Generated {} postings, next index {}",
            postings.len(),
            self.index
        );
        Ok(postings)
    }
}

/// Draw the remaining fields of a row for an already-chosen title.
fn synthesize(
    entry: &JobCatalogEntry,
    catalog: &Catalog,
    reference_date: NaiveDate,
    rng: &mut StdRng,
) -> Result<JobPosting, GeneratorError> {
    let company = choose(rng, catalog.companies()).ok_or(CatalogError::EmptyList("companies"))?;
    let location = choose(rng, catalog.locations()).ok_or(CatalogError::EmptyList("locations"))?;
    let salary = numeric::generate_salary(rng, &entry.salary_range);
    let skills = choose(rng, &entry.skill_options)
        .ok_or_else(|| CatalogError::EmptySkillOptions(entry.title.clone()))?;
    let post_date = date::generate_post_date(rng, reference_date)
        .ok_or(GeneratorError::ReferenceDateOutOfRange(reference_date))?;
    let id = uuid::generate_uuid_v4(rng);

    Ok(JobPosting {
        id,
        title: entry.title.clone(),
        company: company.clone(),
        location: location.clone(),
        salary,
        skills: skills.clone(),
        post_date,
        description: entry.describe(skills),
    })
}

/// Iterator that lazily generates postings.
pub struct PostingIterator<'a> {
    generator: &'a mut JobGenerator,
    remaining: u64,
}

impl Iterator for PostingIterator<'_> {
    type Item = JobPosting;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        // Cannot fail with a validated catalog
        self.generator.next_posting().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Lower bound is capped so collecting never preallocates the full count
        let lower = self.remaining.min(MAX_PREALLOCATED_ROWS) as usize;
        (lower, usize::try_from(self.remaining).ok())
    }
}
