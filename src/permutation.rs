use std::cmp::Ordering;

/// Rewrites `p` into its lexicographic successor under the ordering given by `cmp`.
///
/// Returns `false` without touching `p` when no successor exists, which is the case for empty
/// and single element slices, and for any slice that is already non-increasing. Elements that
/// compare equal are interchangeable, so slices with repeated values need no special handling.
///
/// Runs in O(n) time and performs no allocation.
pub fn next_permutation_in_place_by<T, F>(p: &mut [T], mut cmp: F) -> bool
    where F: FnMut(&T, &T) -> Ordering
{
    if p.len() < 2 { return false }

    // The rightmost position where the slice still ascends. Everything after it is
    // non-increasing, so `k` is the last position whose value can be raised.
    let k = match (0..p.len() - 1).rev().find(|&i| cmp(&p[i], &p[i + 1]) == Ordering::Less) {
        Some(k) => k,
        None    => return false
    };

    // Scanning the non-increasing suffix from the right, the first value exceeding `p[k]` is
    // also the smallest one. Under a consistent order `p[k + 1]` always qualifies; a comparator
    // that contradicts itself finds nothing, and `p` is left as it was.
    let swap_with = match (k + 1..p.len()).rev().find(|&i| cmp(&p[i], &p[k]) == Ordering::Greater) {
        Some(index) => index,
        None        => return false
    };
    p.swap(k, swap_with);

    // The suffix is still non-increasing after the swap; reversing it yields its smallest
    // arrangement, which makes the result the immediate successor.
    p[k + 1..].reverse();
    true
}

/// Rewrites `p` into its lexicographic successor, returning `false` and leaving `p` untouched
/// if `p` is already the last permutation of its elements.
pub fn next_permutation_in_place<T: Ord>(p: &mut [T]) -> bool {
    next_permutation_in_place_by(p, |a, b| a.cmp(b))
}

/// Returns the lexicographic successor of `p` as a new vector, or `None` if `p` is already the
/// last permutation of its elements. The input is never modified.
pub fn next_permutation<T: Ord + Clone>(p: &[T]) -> Option<Vec<T>> {
    let mut next = p.to_vec();
    if next_permutation_in_place(&mut next) { Some(next) } else { None }
}

/// Advances `p` like `next_permutation_in_place`, but wraps around to the first (ascending)
/// permutation when `p` was the last one. Returns `false` when a wrap occurred.
pub fn next_permutation_or_wrap<T: Ord>(p: &mut [T]) -> bool {
    if next_permutation_in_place(p) { return true }
    p.reverse();
    false
}

/// True if `p` is non-increasing, meaning it has no lexicographic successor.
pub fn is_last_permutation<T: Ord>(p: &[T]) -> bool {
    p.windows(2).all(|pair| pair[0] >= pair[1])
}
