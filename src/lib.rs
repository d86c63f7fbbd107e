//! # Nextperm
//!
//! Computes the lexicographically next permutation of a slice, in place, without generating
//! or storing any other permutation. Elements only need a total order; repeated values are
//! handled without any special casing, so `[1, 1, 5]` advances to `[1, 5, 1]`.
//!
//! Two independently written oracles live alongside the primary algorithm. They exist so the
//! `nextperm` binary and the test suite can cross-check it:
//!
//! - [`reference_next_permutation`] is a second, differently structured implementation of the
//!   same contract.
//! - [`brute_force_next`] sorts every distinct arrangement of the input and picks the one after
//!   it, which is only practical for very short inputs.
//!
//! ## Examples
//!
//! ### Pure successor
//!
//! ```rust
//! use nextperm::next_permutation;
//!
//! assert_eq!(next_permutation(&[1, 2, 3]), Some(vec![1, 3, 2]));
//! assert_eq!(next_permutation(&[3, 2, 1]), None);
//! ```
//!
//! ### Enumerating in place
//!
//! ```rust
//! use nextperm::next_permutation_in_place;
//!
//! let mut p = ['a', 'b', 'c'];
//! let mut seen = 1;
//! while next_permutation_in_place(&mut p) { seen += 1; }
//! assert_eq!(seen, 6);
//! assert_eq!(p, ['c', 'b', 'a']);
//! ```

pub mod brute;
pub mod permutation;
pub mod reference;

pub use brute::{brute_force_next, OracleErr, MAX_BRUTE_FORCE_LEN};
pub use permutation::{
    is_last_permutation, next_permutation, next_permutation_in_place,
    next_permutation_in_place_by, next_permutation_or_wrap,
};
pub use reference::reference_next_permutation;
