//! Post date generator.

use chrono::{Days, NaiveDate};
use rand::Rng;

/// Oldest post date, in days before the reference date.
pub const MAX_DAYS_AGO: u64 = 365;

/// Earliest possible post date for `reference`, or `None` if it falls
/// before the first representable date.
pub fn earliest_post_date(reference: NaiveDate) -> Option<NaiveDate> {
    reference.checked_sub_days(Days::new(MAX_DAYS_AGO))
}

/// Draw a post date between 1 and [`MAX_DAYS_AGO`] days before `reference`.
///
/// Returns `None` when the date would not be representable.
pub fn generate_post_date<R: Rng>(rng: &mut R, reference: NaiveDate) -> Option<NaiveDate> {
    let days_ago = rng.gen_range(1..=MAX_DAYS_AGO);
    reference.checked_sub_days(Days::new(days_ago))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_post_date_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let reference = NaiveDate::from_ymd_opt(2025, 4, 19).unwrap();
        let earliest = earliest_post_date(reference).unwrap();
        assert_eq!(earliest, NaiveDate::from_ymd_opt(2024, 4, 19).unwrap());

        for _ in 0..1000 {
            let date = generate_post_date(&mut rng, reference).unwrap();
            assert!(date < reference);
            assert!(date >= earliest, "{date} older than 365 days");
        }
    }

    #[test]
    fn test_reference_date_at_min() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(earliest_post_date(NaiveDate::MIN).is_none());
        assert!(generate_post_date(&mut rng, NaiveDate::MIN).is_none());
    }

    #[test]
    fn test_deterministic_generation() {
        let reference = NaiveDate::from_ymd_opt(2025, 4, 19).unwrap();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_post_date(&mut rng1, reference),
            generate_post_date(&mut rng2, reference)
        );
    }
}
