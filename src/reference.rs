//! A second implementation of the successor contract, written independently of
//! `permutation` so that the two can be compared against each other over random inputs.

/// Returns the successor of `p` as a new vector, or `None` when there is no greater
/// permutation. `p` itself is never modified.
pub fn reference_next_permutation<T: Ord + Clone>(p: &[T]) -> Option<Vec<T>> {
    let mut first = first_descent(p)?;
    let mut result = p.to_vec();

    // Last index whose value exceeds `p[first]`. `p[first + 1]` qualifies, so this terminates.
    let mut to_swap = p.len() - 1;
    while p[first] >= p[to_swap] {
        to_swap -= 1;
    }

    result.swap(first, to_swap);
    first += 1;

    // Reverse `result[first..]` by swapping inwards from both ends.
    let mut last = result.len() - 1;
    while first < last {
        result.swap(first, last);
        first += 1;
        last -= 1;
    }

    Some(result)
}

/// Finds the largest `k` such that `p[k] < p[k + 1]`, or `None` if `p` never ascends.
fn first_descent<T: Ord>(p: &[T]) -> Option<usize> {
    let mut index = p.len();
    while index > 1 {
        index -= 1;
        if p[index - 1] < p[index] {
            return Some(index - 1);
        }
    }
    None
}
