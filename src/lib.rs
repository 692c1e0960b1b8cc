//! Property-based test suite for integer-array sorting.
//!
//! The sort under test is a black box behind the [`sorter::Sorter`] trait:
//! it takes a sequence of `i32` and returns a sequence of `i32` that is
//! contractually non-decreasing, the same length, and the same multiset.
//! This crate supplies the rest:
//!
//! - [`generator`]: batches of random test arrays with explicitly seeded
//!   randomness, so any failing run can be reproduced.
//! - [`properties`]: six independent property checks (length preservation,
//!   two phrasings of non-decreasing order, element containment,
//!   idempotence, purity), each driven by its own fresh batch.
//! - [`report`]: per-check results and an aggregate pass/fail summary.
//!
//! The `sort-props` binary runs all six checks against the standard library
//! sort and exits non-zero if any property is violated.

pub mod generator;
pub mod properties;
pub mod report;
pub mod sorter;
