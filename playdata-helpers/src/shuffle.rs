use rand::Rng;

/// Shuffles a slice in place with the Fisher-Yates walk.
///
/// Iterates from the back, swapping each position with a uniformly chosen
/// index at or before it. Given a uniform random source every permutation
/// is equally likely. The slice length and element multiset are preserved.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::seed_rng;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = seed_rng(9);
        let mut items: Vec<u32> = (0..100).collect();
        shuffle(&mut items, &mut rng);
        assert_eq!(items.len(), 100);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_preserves_duplicates() {
        let mut rng = seed_rng(10);
        let mut items = vec![1, 1, 2, 2, 2, 3];
        shuffle(&mut items, &mut rng);
        items.sort_unstable();
        assert_eq!(items, vec![1, 1, 2, 2, 2, 3]);
    }

    #[test]
    fn test_shuffle_handles_tiny_inputs() {
        let mut rng = seed_rng(11);
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![42];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_shuffle_eventually_moves_something() {
        // Statistically certain for 100 elements; a no-op shuffle would be a bug.
        let mut rng = seed_rng(12);
        let original: Vec<u32> = (0..100).collect();
        let mut items = original.clone();
        shuffle(&mut items, &mut rng);
        assert_ne!(items, original);
    }
}
