//! Weighted random choice over `(item, weight)` pairs

use rand::Rng;

/// Pick one item with probability proportional to its weight
///
/// Each entry owns an interval of length `weight`; a uniform draw in
/// `[0, total)` selects the containing interval. Zero weights are never
/// picked. Returns `None` when the total weight is zero.
pub fn weighted_pick<T: Copy, R: Rng + ?Sized>(entries: &[(T, u32)], rng: &mut R) -> Option<T> {
    let total: u64 = entries.iter().map(|&(_, w)| w as u64).sum();
    if total == 0 {
        return None;
    }

    let mut roll = rng.gen_range(0..total);
    for &(item, weight) in entries {
        let weight = weight as u64;
        if roll < weight {
            return Some(item);
        }
        roll -= weight;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_and_zero_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(weighted_pick::<u8, _>(&[], &mut rng), None);
        assert_eq!(weighted_pick(&[('a', 0), ('b', 0)], &mut rng), None);
    }

    #[test]
    fn test_zero_weight_never_chosen() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            assert_eq!(weighted_pick(&[('a', 0), ('b', 3), ('c', 0)], &mut rng), Some('b'));
        }
    }

    #[test]
    fn test_roughly_proportional() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let entries = [('a', 1), ('b', 3)];
        let b = (0..4000)
            .filter(|_| weighted_pick(&entries, &mut rng) == Some('b'))
            .count();
        assert!((2700..3300).contains(&b), "b picked {} times", b);
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let entries = [(1, 2), (2, 5), (3, 1)];
        let draw = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..20)
                .map(|_| weighted_pick(&entries, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(9), draw(9));
    }
}
