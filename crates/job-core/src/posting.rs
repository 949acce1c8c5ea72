//! A single synthesized job posting.

use chrono::NaiveDate;
use uuid::Uuid;

/// Format used for post dates in every export.
pub const POST_DATE_FORMAT: &str = "%Y-%m-%d";

/// One generated row. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Rounded to 2 decimal places.
    pub salary: f64,
    pub skills: String,
    pub post_date: NaiveDate,
    pub description: String,
}

impl JobPosting {
    /// Post date as `YYYY-MM-DD`.
    pub fn post_date_string(&self) -> String {
        self.post_date.format(POST_DATE_FORMAT).to_string()
    }
}

/// Round to 2 decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(123456.789), 123456.79);
        assert_eq!(round_cents(100000.0), 100000.0);
        assert_eq!(round_cents(0.004), 0.0);
    }

    #[test]
    fn test_post_date_string_is_zero_padded() {
        let posting = JobPosting {
            id: Uuid::nil(),
            title: "Web Developer".to_string(),
            company: "WebWorks".to_string(),
            location: "Remote".to_string(),
            salary: 80000.0,
            skills: "MongoDB, Django".to_string(),
            post_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            description: "Build responsive web applications with MongoDB, Django.".to_string(),
        };
        assert_eq!(posting.post_date_string(), "2024-05-03");
    }
}
