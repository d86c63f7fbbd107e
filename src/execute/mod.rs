pub mod random;

use crate::misc::{write_answer, write_sequence};
use nextperm::{brute_force_next, next_permutation, next_permutation_in_place, reference_next_permutation};
use smallvec::SmallVec;

use std::io::{self, Write};

/// Sequences up to this length are advanced in place without touching the heap.
pub type Sequence = SmallVec<[i64; 32]>;

/// The answers that every implementation gave for a single input sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Answers {
    /// The pure, allocating successor.
    pub primary:     Option<Vec<i64>>,
    /// The in-place successor, taken from a copy of the input.
    pub in_place:    Option<Vec<i64>>,
    /// Whether the in-place variant left its copy untouched when reporting no successor.
    pub left_intact: bool,
    /// The reference implementation's successor.
    pub reference:   Option<Vec<i64>>,
    /// The brute-force successor, or `None` if that oracle was skipped.
    pub brute:       Option<Option<Vec<i64>>>,
}

impl Answers {
    /// Runs every implementation against `input`. The brute-force oracle is only consulted
    /// when `brute_force` is set and the input is short enough for it.
    pub fn collect(input: &[i64], brute_force: bool) -> Answers {
        let mut copy = Sequence::from_slice(input);
        let advanced = next_permutation_in_place(&mut copy);

        Answers {
            primary:     next_permutation(input),
            in_place:    if advanced { Some(copy.to_vec()) } else { None },
            left_intact: advanced || &copy[..] == input,
            reference:   reference_next_permutation(input),
            brute:       if brute_force { brute_force_next(input).ok() } else { None },
        }
    }

    /// True if every consulted implementation gave the same answer.
    pub fn agree(&self) -> bool {
        self.left_intact
            && self.primary == self.in_place
            && self.primary == self.reference
            && self.brute.as_ref().map_or(true, |brute| *brute == self.primary)
    }
}

/// Describes a sequence on which the implementations disagreed.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// The one-based trial number, or zero for a sequence given on the command line.
    pub trial:   usize,
    /// The seed that regenerates this trial's sequence.
    pub seed:    u64,
    pub input:   Vec<i64>,
    pub answers: Answers,
}

impl Mismatch {
    /// Writes a report of every implementation's answer to `out`.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(b"nextperm: mismatch")?;
        if self.trial != 0 {
            write!(out, " on trial #{} (seed {})", self.trial, self.seed)?;
        }
        out.write_all(b"\n    input:     ")?;
        write_sequence(out, &self.input)?;
        out.write_all(b"\n    primary:   ")?;
        write_answer(out, self.answers.primary.as_deref())?;
        out.write_all(b"\n    in place:  ")?;
        write_answer(out, self.answers.in_place.as_deref())?;
        if !self.answers.left_intact {
            out.write_all(b" (input was modified)")?;
        }
        out.write_all(b"\n    reference: ")?;
        write_answer(out, self.answers.reference.as_deref())?;
        if let Some(ref brute) = self.answers.brute {
            out.write_all(b"\n    brute:     ")?;
            write_answer(out, brute.as_deref())?;
        }
        out.write_all(b"\n")
    }
}

/// Checks a single sequence, returning the agreed answers or the disagreement.
pub fn check(trial: usize, seed: u64, input: &[i64], brute_force: bool) -> Result<Answers, Mismatch> {
    let answers = Answers::collect(input, brute_force);
    if answers.agree() {
        Ok(answers)
    } else {
        Err(Mismatch { trial, seed, input: input.to_vec(), answers })
    }
}
