//! The six property checks at their full batch parameters (150 arrays,
//! lengths up to 1,000,000 — 10,000 for the containment check), plus the
//! concrete boundary scenarios. Seeds are fixed so every run sees the same
//! batches.

use rand::rngs::StdRng;
use rand::SeedableRng;

use sort_props::properties::{
    check_contains_all_elements, check_idempotence, check_length_preservation,
    check_never_decreasing, check_non_decreasing, check_purity,
};
use sort_props::sorter::{Sorter, StableSorter, StdSorter};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn length_is_preserved() {
    check_length_preservation(&StdSorter, &mut rng(0xA11CE)).unwrap();
}

#[test]
fn output_is_same_or_increasing() {
    check_non_decreasing(&StdSorter, &mut rng(0xB0B)).unwrap();
}

#[test]
fn output_never_decreases() {
    check_never_decreasing(&StdSorter, &mut rng(0xCAFE)).unwrap();
}

#[test]
fn output_contains_all_input_elements() {
    check_contains_all_elements(&StdSorter, &mut rng(0xD00D)).unwrap();
}

#[test]
fn sorting_is_idempotent() {
    check_idempotence(&StdSorter, &mut rng(0xE99)).unwrap();
}

#[test]
fn sorting_is_pure() {
    check_purity(&StdSorter, &mut rng(0xF00)).unwrap();
}

#[test]
fn stable_sort_passes_the_same_checks() {
    // The suite is a black box over the sorter; the stable sort must pass
    // the same battery as the unstable one.
    let sorter = StableSorter;
    check_length_preservation(&sorter, &mut rng(1)).unwrap();
    check_non_decreasing(&sorter, &mut rng(2)).unwrap();
    check_idempotence(&sorter, &mut rng(3)).unwrap();
    check_purity(&sorter, &mut rng(4)).unwrap();
}

#[test]
fn concrete_mixed_sign_scenario() {
    assert_eq!(StdSorter.sort(&[3, -1, 2, -1]), vec![-1, -1, 2, 3]);
}

#[test]
fn concrete_empty_scenario() {
    assert_eq!(StdSorter.sort(&[]), Vec::<i32>::new());
}

#[test]
fn concrete_single_element_scenario() {
    assert_eq!(StdSorter.sort(&[5]), vec![5]);
}

#[test]
fn concrete_extreme_values_scenario() {
    // A comparison implemented as a subtraction would overflow here.
    assert_eq!(
        StdSorter.sort(&[i32::MAX, 0, i32::MIN]),
        vec![i32::MIN, 0, i32::MAX]
    );
}
