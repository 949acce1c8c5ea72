//! Salary generator.

use job_core::{round_cents, SalaryRange};
use rand::Rng;

/// Draw a salary uniformly from the closed range and round it to cents.
///
/// Rounding can never leave the range as long as both bounds are whole cents.
pub fn generate_salary<R: Rng>(rng: &mut R, range: &SalaryRange) -> f64 {
    let value = rng.gen_range(range.min..=range.max);
    round_cents(value).clamp(range.min, range.max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_salary_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let range = SalaryRange::new(50000.0, 80000.0);

        for _ in 0..1000 {
            let salary = generate_salary(&mut rng, &range);
            assert!(range.contains(salary), "{salary} outside range");
            assert_eq!(salary, (salary * 100.0).round() / 100.0);
        }
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let range = SalaryRange::new(90000.0, 90000.0);
        assert_eq!(generate_salary(&mut rng, &range), 90000.0);
    }
}
