//! Property-based tests for the successor implementations.
//!
//! The primary algorithm is checked against the reference implementation over random
//! sequences, and against the brute-force oracle wherever the sequence is short enough.

use nextperm::{
    brute_force_next, is_last_permutation, next_permutation, next_permutation_in_place,
    next_permutation_in_place_by, next_permutation_or_wrap, reference_next_permutation,
    MAX_BRUTE_FORCE_LEN,
};
use proptest::prelude::*;

// ============================================================================
//  Strategies
// ============================================================================

/// Sequences of length 0..=max_len whose values are drawn from a range no wider than the
/// length, so that repeated values are common.
fn sequence(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    (0..=max_len).prop_flat_map(|len| {
        let width = (len as i32).max(1);
        prop::collection::vec(0..width, len)
    })
}

/// Sequences drawn from a wide value range, where repeats are rare.
fn wide_sequence(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..=max_len)
}

fn sorted<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut values = values.to_vec();
    values.sort();
    values
}

// ============================================================================
//  Oracle Agreement
// ============================================================================

proptest! {
    /// The primary and reference implementations always agree.
    #[test]
    fn agrees_with_reference(p in sequence(10)) {
        prop_assert_eq!(next_permutation(&p), reference_next_permutation(&p));
    }

    /// Agreement also holds when values rarely repeat.
    #[test]
    fn agrees_with_reference_on_wide_values(p in wide_sequence(12)) {
        prop_assert_eq!(next_permutation(&p), reference_next_permutation(&p));
    }

    /// The result is the immediate successor among all arrangements.
    #[test]
    fn agrees_with_brute_force(p in sequence(MAX_BRUTE_FORCE_LEN - 2)) {
        prop_assert_eq!(Ok(next_permutation(&p)), brute_force_next(&p));
    }

    /// The pure and in-place variants give the same answer.
    #[test]
    fn in_place_matches_pure(p in sequence(12)) {
        let mut q = p.clone();
        let advanced = next_permutation_in_place(&mut q);
        match next_permutation(&p) {
            Some(next) => {
                prop_assert!(advanced);
                prop_assert_eq!(q, next);
            }
            None => {
                prop_assert!(!advanced);
                prop_assert_eq!(q, p);
            }
        }
    }
}

// ============================================================================
//  Successor Properties
// ============================================================================

proptest! {
    /// A successor is a strictly greater rearrangement of the same multiset.
    #[test]
    fn successor_is_greater_rearrangement(p in sequence(12)) {
        if let Some(next) = next_permutation(&p) {
            prop_assert!(next > p);
            prop_assert_eq!(sorted(&next), sorted(&p));
        }
    }

    /// There is no successor exactly when the sequence is non-increasing.
    #[test]
    fn none_iff_non_increasing(p in sequence(12)) {
        let non_increasing = p.windows(2).all(|pair| pair[0] >= pair[1]);
        prop_assert_eq!(next_permutation(&p).is_none(), non_increasing);
        prop_assert_eq!(is_last_permutation(&p), non_increasing);
    }

    /// Stepping forward and then backward under the reversed order returns to the start.
    #[test]
    fn reversed_order_steps_back(p in sequence(12)) {
        let mut q = p.clone();
        if next_permutation_in_place(&mut q) {
            prop_assert!(next_permutation_in_place_by(&mut q, |a, b| b.cmp(a)));
            prop_assert_eq!(q, p);
        }
    }

    /// Wrapping from the last permutation lands on the first one.
    #[test]
    fn wrap_lands_on_ascending(p in sequence(12)) {
        let mut q = p.clone();
        if !next_permutation_or_wrap(&mut q) {
            prop_assert_eq!(q, sorted(&p));
        }
    }

    /// Works for any totally ordered element type, not only integers.
    #[test]
    fn strings_agree_with_reference(p in prop::collection::vec("[a-c]{0,2}", 0..8)) {
        prop_assert_eq!(next_permutation(&p), reference_next_permutation(&p));
    }
}

// ============================================================================
//  Cycle Closure
// ============================================================================

/// Starting from the ascending arrangement, every step is strictly increasing, the number of
/// steps matches the number of distinct arrangements, and the last step reports no successor.
fn walk_cycle(start: &[u8]) -> usize {
    let mut p = start.to_vec();
    let mut visited = 1;
    loop {
        let previous = p.clone();
        if !next_permutation_in_place(&mut p) {
            assert!(is_last_permutation(&p));
            return visited;
        }
        assert!(p > previous);
        visited += 1;
    }
}

#[test]
fn cycle_visits_every_arrangement() {
    let factorials = [1, 1, 2, 6, 24, 120, 720, 5040];
    for n in 0..factorials.len() {
        let start: Vec<u8> = (0..n as u8).collect();
        assert_eq!(walk_cycle(&start), factorials[n]);
    }
}

#[test]
fn cycle_with_repeats_visits_distinct_arrangements() {
    // 6! / (2! * 3!) = 60
    assert_eq!(walk_cycle(&[0, 1, 1, 2, 2, 2]), 60);
    assert_eq!(walk_cycle(&[4, 4, 4, 4]), 1);
}

#[test]
fn known_cases() {
    assert_eq!(next_permutation(&[1, 2, 3]), Some(vec![1, 3, 2]));
    assert_eq!(next_permutation(&[3, 2, 1]), None);
    assert_eq!(next_permutation(&[1, 1, 5]), Some(vec![1, 5, 1]));
    assert_eq!(next_permutation(&[1, 3, 2]), Some(vec![2, 1, 3]));
    assert_eq!(next_permutation::<i32>(&[]), None);
    assert_eq!(next_permutation(&[5]), None);
}
