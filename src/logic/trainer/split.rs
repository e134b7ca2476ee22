//! Seeded Train/Test Split
//!
//! Deterministic 80/20 split: same row count and seed → same partition,
//! which keeps training reproducible across runs and machines.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Fixed seed for reproducible splits
pub const SPLIT_SEED: u64 = 42;

/// Held-out fraction
pub const TEST_FRACTION: f32 = 0.2;

/// Shuffle 0..n and partition into (train, test) index sets.
/// With n >= 2, both sides get at least one index.
pub fn train_test_split(n: usize, test_fraction: f32, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_len = if n < 2 {
        0
    } else {
        (((n as f32) * test_fraction).round() as usize).clamp(1, n - 1)
    };

    let test = indices[..test_len].to_vec();
    let train = indices[test_len..].to_vec();
    (train, test)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_is_deterministic() {
        let (train_a, test_a) = train_test_split(100, TEST_FRACTION, SPLIT_SEED);
        let (train_b, test_b) = train_test_split(100, TEST_FRACTION, SPLIT_SEED);
        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }

    #[test]
    fn test_split_sizes() {
        let (train, test) = train_test_split(100, 0.2, SPLIT_SEED);
        assert_eq!(test.len(), 20);
        assert_eq!(train.len(), 80);
    }

    #[test]
    fn test_split_covers_all_indices_once() {
        let (mut train, test) = train_test_split(50, 0.2, SPLIT_SEED);
        train.extend(test);
        train.sort_unstable();
        assert_eq!(train, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_tiny_inputs_keep_both_sides_nonempty() {
        for n in 2..10 {
            let (train, test) = train_test_split(n, 0.2, SPLIT_SEED);
            assert!(!train.is_empty(), "n={}", n);
            assert!(!test.is_empty(), "n={}", n);
        }
    }

    #[test]
    fn test_different_seed_different_order() {
        let (train_a, _) = train_test_split(100, 0.2, 42);
        let (train_b, _) = train_test_split(100, 0.2, 43);
        assert_ne!(train_a, train_b);
    }
}
