//! Brute-force successor oracle.
//!
//! Every index tuple of the input is generated with a `Permutator`, the tuples which are
//! bijections are mapped onto the input's elements, and the resulting arrangements are sorted.
//! The successor is whatever follows the input in that sorted list. The cost is `n^n`, so the
//! oracle refuses inputs longer than `MAX_BRUTE_FORCE_LEN`.

use permutate::Permutator;
use smallvec::SmallVec;
use std::error::Error;
use std::fmt;
use std::mem;

/// The longest input the brute-force oracle will accept (7^7 index tuples).
pub const MAX_BRUTE_FORCE_LEN: usize = 7;

/// The error type for the brute-force oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleErr {
    /// The input is longer than `MAX_BRUTE_FORCE_LEN`.
    TooLong(usize),
}

impl fmt::Display for OracleErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            OracleErr::TooLong(len) => write!(f, "sequence of length {} exceeds the brute force limit of {}",
                len, MAX_BRUTE_FORCE_LEN),
        }
    }
}

impl Error for OracleErr {}

/// Computes the successor of `p` by enumerating and sorting all of its distinct arrangements.
pub fn brute_force_next<T: Ord + Clone>(p: &[T]) -> Result<Option<Vec<T>>, OracleErr> {
    if p.len() > MAX_BRUTE_FORCE_LEN { return Err(OracleErr::TooLong(p.len())) }
    if p.is_empty() { return Ok(None) }

    let mut sorted = arrangements(p);
    sorted.sort();
    sorted.dedup();

    // The identity tuple guarantees that `p` is present, but a miss would still point at the
    // first greater arrangement, which is the successor all the same.
    let next = match sorted.binary_search_by(|arrangement| arrangement[..].cmp(p)) {
        Ok(position)  => position + 1,
        Err(position) => position
    };

    Ok(sorted.get(next).cloned())
}

/// Collects every arrangement of `p`, including repeats caused by equal elements.
fn arrangements<T: Clone>(p: &[T]) -> Vec<Vec<T>> {
    let indexes: Vec<usize> = (0..p.len()).collect();
    let index_refs: Vec<&usize> = indexes.iter().collect();
    let lists = [&index_refs[..]];

    let mut output = Vec::new();
    let mut seen: SmallVec<[bool; MAX_BRUTE_FORCE_LEN]> = SmallVec::from_elem(false, p.len());
    for tuple in Permutator::new(&lists[..]) {
        for flag in seen.iter_mut() { *flag = false; }

        // A tuple is a bijection when no index appears in it twice.
        let is_bijection = tuple.iter().all(|&&index| !mem::replace(&mut seen[index], true));
        if is_bijection {
            output.push(tuple.iter().map(|&&index| p[index].clone()).collect());
        }
    }

    output
}
