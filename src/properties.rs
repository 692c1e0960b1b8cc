//! Property Checks
//!
//! Six independent checks, each following the same pattern: generate a
//! fresh batch of random arrays, run the sort under test on each, and
//! verify one property. No batch is shared between checks; a violation
//! fails only the check that observed it and carries the offending batch
//! index plus the expected/actual detail.

use rand::Rng;
use thiserror::Error;

use crate::generator::{
    generate_arrays, GeneratorError, CONTAINMENT_MAX_LEN, MAX_ARRAY_LEN, NUM_TEST_ARRAYS,
};
use crate::sorter::Sorter;

/// A property that did not hold for some generated array.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyViolation {
    /// Sorted output has a different length than its input.
    #[error("array {index}: sorted length {actual} differs from input length {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
    /// Adjacent elements of the sorted output are out of order.
    #[error("array {index}: output[{position}] = {left} exceeds output[{}] = {right}", .position + 1)]
    OrderInversion {
        index: usize,
        position: usize,
        left: i32,
        right: i32,
    },
    /// An input element never shows up in the sorted output.
    #[error("array {index}: input element {value} is missing from the sorted output")]
    MissingElement { index: usize, value: i32 },
    /// Sorting an already-sorted array changed it.
    #[error("array {index}: re-sorting diverged from the first sort at position {position}")]
    NotIdempotent { index: usize, position: usize },
    /// Two independently sorted clones of the same array disagree.
    #[error("array {index}: independently sorted clones diverged at position {position}")]
    NotPure { index: usize, position: usize },
}

/// Why a check did not pass: either its input batch could not be built, or
/// a property was violated.
#[derive(Debug, Error)]
pub enum CheckFailure {
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    Violation(#[from] PropertyViolation),
}

/// Check if a slice is ordered non-decreasingly.
#[inline]
pub fn is_non_decreasing(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Position of the first difference between two vectors, or where the
/// shorter one ends if one is a prefix of the other.
fn first_divergence(a: &[i32], b: &[i32]) -> usize {
    a.iter()
        .zip(b.iter())
        .position(|(x, y)| x != y)
        .unwrap_or_else(|| a.len().min(b.len()))
}

/// Sorted output must be exactly as long as its input.
pub fn check_length_preservation<S: Sorter, R: Rng>(
    sorter: &S,
    rng: &mut R,
) -> Result<(), CheckFailure> {
    run_length_preservation(sorter, rng, NUM_TEST_ARRAYS, MAX_ARRAY_LEN)
}

fn run_length_preservation<S: Sorter, R: Rng>(
    sorter: &S,
    rng: &mut R,
    batch_size: usize,
    max_len: usize,
) -> Result<(), CheckFailure> {
    let batch = generate_arrays(rng, batch_size, max_len)?;
    for (index, array) in batch.iter().enumerate() {
        let sorted = sorter.sort(array);
        if sorted.len() != array.len() {
            return Err(PropertyViolation::LengthMismatch {
                index,
                expected: array.len(),
                actual: sorted.len(),
            }
            .into());
        }
    }
    Ok(())
}

/// Every adjacent pair of the sorted output satisfies `left <= right`.
pub fn check_non_decreasing<S: Sorter, R: Rng>(
    sorter: &S,
    rng: &mut R,
) -> Result<(), CheckFailure> {
    run_non_decreasing(sorter, rng, NUM_TEST_ARRAYS, MAX_ARRAY_LEN)
}

fn run_non_decreasing<S: Sorter, R: Rng>(
    sorter: &S,
    rng: &mut R,
    batch_size: usize,
    max_len: usize,
) -> Result<(), CheckFailure> {
    let batch = generate_arrays(rng, batch_size, max_len)?;
    for (index, array) in batch.iter().enumerate() {
        let sorted = sorter.sort(array);
        for position in 0..sorted.len().saturating_sub(1) {
            if !(sorted[position] <= sorted[position + 1]) {
                return Err(PropertyViolation::OrderInversion {
                    index,
                    position,
                    left: sorted[position],
                    right: sorted[position + 1],
                }
                .into());
            }
        }
    }
    Ok(())
}

/// No adjacent pair of the sorted output satisfies `left > right`.
///
/// Logically the same invariant as [`check_non_decreasing`], stated in its
/// negated form; both named checks run so the invariant is asserted both
/// ways.
pub fn check_never_decreasing<S: Sorter, R: Rng>(
    sorter: &S,
    rng: &mut R,
) -> Result<(), CheckFailure> {
    run_never_decreasing(sorter, rng, NUM_TEST_ARRAYS, MAX_ARRAY_LEN)
}

fn run_never_decreasing<S: Sorter, R: Rng>(
    sorter: &S,
    rng: &mut R,
    batch_size: usize,
    max_len: usize,
) -> Result<(), CheckFailure> {
    let batch = generate_arrays(rng, batch_size, max_len)?;
    for (index, array) in batch.iter().enumerate() {
        let sorted = sorter.sort(array);
        for position in 0..sorted.len().saturating_sub(1) {
            if sorted[position] > sorted[position + 1] {
                return Err(PropertyViolation::OrderInversion {
                    index,
                    position,
                    left: sorted[position],
                    right: sorted[position + 1],
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Every input element occurs somewhere in the sorted output.
///
/// Verified by a linear scan per element, so this check runs on a smaller
/// length bound than the others. It deliberately checks only the one
/// direction, without multiplicities; the proptest suite covers full
/// multiset equality.
pub fn check_contains_all_elements<S: Sorter, R: Rng>(
    sorter: &S,
    rng: &mut R,
) -> Result<(), CheckFailure> {
    run_contains_all_elements(sorter, rng, NUM_TEST_ARRAYS, CONTAINMENT_MAX_LEN)
}

fn run_contains_all_elements<S: Sorter, R: Rng>(
    sorter: &S,
    rng: &mut R,
    batch_size: usize,
    max_len: usize,
) -> Result<(), CheckFailure> {
    let batch = generate_arrays(rng, batch_size, max_len)?;
    for (index, array) in batch.iter().enumerate() {
        let sorted = sorter.sort(array);
        for &value in array {
            if !sorted.iter().any(|&s| s == value) {
                return Err(PropertyViolation::MissingElement { index, value }.into());
            }
        }
    }
    Ok(())
}

/// Sorting a second time leaves the first sort's output unchanged.
pub fn check_idempotence<S: Sorter, R: Rng>(
    sorter: &S,
    rng: &mut R,
) -> Result<(), CheckFailure> {
    run_idempotence(sorter, rng, NUM_TEST_ARRAYS, MAX_ARRAY_LEN)
}

fn run_idempotence<S: Sorter, R: Rng>(
    sorter: &S,
    rng: &mut R,
    batch_size: usize,
    max_len: usize,
) -> Result<(), CheckFailure> {
    let batch = generate_arrays(rng, batch_size, max_len)?;
    for (index, array) in batch.iter().enumerate() {
        let once = sorter.sort(array);
        let twice = sorter.sort(&once);
        if twice != once {
            return Err(PropertyViolation::NotIdempotent {
                index,
                position: first_divergence(&once, &twice),
            }
            .into());
        }
    }
    Ok(())
}

/// Two independently cloned copies of the same array sort to equal results.
pub fn check_purity<S: Sorter, R: Rng>(sorter: &S, rng: &mut R) -> Result<(), CheckFailure> {
    run_purity(sorter, rng, NUM_TEST_ARRAYS, MAX_ARRAY_LEN)
}

fn run_purity<S: Sorter, R: Rng>(
    sorter: &S,
    rng: &mut R,
    batch_size: usize,
    max_len: usize,
) -> Result<(), CheckFailure> {
    let batch = generate_arrays(rng, batch_size, max_len)?;
    for (index, array) in batch.iter().enumerate() {
        let a = array.clone();
        let b = array.clone();
        debug_assert_eq!(a, b);

        let sorted_a = sorter.sort(&a);
        let sorted_b = sorter.sort(&b);
        if sorted_a != sorted_b {
            return Err(PropertyViolation::NotPure {
                index,
                position: first_divergence(&sorted_a, &sorted_b),
            }
            .into());
        }
    }
    Ok(())
}
