//! Random Test-Array Generation
//!
//! This module produces the input fixtures for the property checks: a batch
//! of independently generated `i32` arrays with random lengths and random
//! contents. The randomness source is passed in explicitly so a run can be
//! reproduced from its seed.

use rand::Rng;
use thiserror::Error;

/// Number of arrays in every property-check batch
pub const NUM_TEST_ARRAYS: usize = 150;
/// Upper length bound (exclusive) used by most property checks
pub const MAX_ARRAY_LEN: usize = 1_000_000;
/// Reduced upper length bound (exclusive) for the element-containment check,
/// whose per-array verification is quadratic
pub const CONTAINMENT_MAX_LEN: usize = 10_000;

/// Errors from batch generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// A batch must contain at least one array.
    #[error("batch size must be at least 1, got {0}")]
    InvalidBatchSize(usize),
}

/// Generate a batch of `batch_size` random arrays.
///
/// Each array's length is drawn uniformly from `[0, max_len)`. The upper
/// bound is exclusive, so an array of exactly `max_len` elements never
/// occurs; this keeps check runtime bounded and is intentional. Elements
/// are drawn uniformly from the full `i32` range, negatives included.
///
/// A `max_len` of zero yields a batch of empty arrays, not an error.
///
/// # Arguments
/// * `rng` - Seedable randomness source, threaded in by the caller
/// * `batch_size` - Number of arrays to generate; must be at least 1
/// * `max_len` - Exclusive upper bound on array length
pub fn generate_arrays<R: Rng>(
    rng: &mut R,
    batch_size: usize,
    max_len: usize,
) -> Result<Vec<Vec<i32>>, GeneratorError> {
    if batch_size == 0 {
        return Err(GeneratorError::InvalidBatchSize(batch_size));
    }

    let mut batch = Vec::with_capacity(batch_size);
    for _ in 0..batch_size {
        let len = if max_len == 0 {
            0
        } else {
            rng.gen_range(0..max_len)
        };
        let array: Vec<i32> = (0..len).map(|_| rng.gen()).collect();
        batch.push(array);
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_batch_has_requested_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let batch = generate_arrays(&mut rng, 37, 100).unwrap();
        assert_eq!(batch.len(), 37);
    }

    #[test]
    fn test_lengths_below_exclusive_bound() {
        let mut rng = StdRng::seed_from_u64(2);
        let batch = generate_arrays(&mut rng, 200, 50).unwrap();
        assert!(batch.iter().all(|a| a.len() < 50));
    }

    #[test]
    fn test_zero_max_len_yields_empty_arrays() {
        let mut rng = StdRng::seed_from_u64(3);
        let batch = generate_arrays(&mut rng, 10, 0).unwrap();
        assert!(batch.iter().all(|a| a.is_empty()));
    }

    #[test]
    fn test_zero_batch_size_is_an_error() {
        let mut rng = StdRng::seed_from_u64(4);
        let err = generate_arrays(&mut rng, 0, 100).unwrap_err();
        assert_eq!(err, GeneratorError::InvalidBatchSize(0));
    }

    #[test]
    fn test_same_seed_same_batch() {
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        assert_eq!(
            generate_arrays(&mut a, 20, 1000).unwrap(),
            generate_arrays(&mut b, 20, 1000).unwrap()
        );
    }

    #[test]
    fn test_elements_span_the_signed_range() {
        // Negative values are part of the coverage; never narrow the
        // element domain to non-negative integers.
        let mut rng = StdRng::seed_from_u64(6);
        let batch = generate_arrays(&mut rng, 50, 1000).unwrap();
        let values: Vec<i32> = batch.into_iter().flatten().collect();
        assert!(values.iter().any(|&v| v < 0));
        assert!(values.iter().any(|&v| v > 0));
    }
}
