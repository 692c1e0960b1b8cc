//! Sort Capability Under Test
//!
//! The suite treats the sort as an external black box: a sequence of signed
//! integers goes in, a sequence comes out. The [`Sorter`] trait is that
//! boundary; the two implementations here wrap Rust's standard library
//! sorts so the suite has something real to exercise.

/// The sort operation under test.
///
/// Contract: the returned vector has the same length and the same multiset
/// of elements as the input, ordered non-decreasingly, and the call has no
/// effect on any other data. The property checks exist to verify exactly
/// that, so implementations get no benefit of the doubt.
pub trait Sorter {
    /// Return a sorted copy of `input`.
    fn sort(&self, input: &[i32]) -> Vec<i32>;
}

/// Rust's built-in unstable sort (pattern-defeating quicksort).
pub struct StdSorter;

impl Sorter for StdSorter {
    fn sort(&self, input: &[i32]) -> Vec<i32> {
        let mut output = input.to_vec();
        output.sort_unstable();
        output
    }
}

/// Rust's built-in stable sort.
pub struct StableSorter;

impl Sorter for StableSorter {
    fn sort(&self, input: &[i32]) -> Vec<i32> {
        let mut output = input.to_vec();
        output.sort();
        output
    }
}
