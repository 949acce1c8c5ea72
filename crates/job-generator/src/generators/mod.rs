//! Individual value generators for the fields of a posting.

pub mod date;
pub mod numeric;
pub mod uuid;

use rand::Rng;

/// Pick one element uniformly at random. Returns `None` for an empty slice.
pub fn choose<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.gen_range(0..items.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_choose_from_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let empty: [u8; 0] = [];
        assert!(choose(&mut rng, &empty).is_none());
    }

    #[test]
    fn test_choose_covers_all_items() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c"];
        let mut seen = [false; 3];

        for _ in 0..200 {
            let picked = choose(&mut rng, &items).unwrap();
            let pos = items.iter().position(|i| i == picked).unwrap();
            seen[pos] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }
}
