use super::Sequence;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

/// The longest sequence generated when no length was requested.
pub const MAX_RANDOM_LENGTH: usize = 100;

/// Fills `buffer` with the sequence for the trial seeded by `seed`. Values are drawn from
/// `[0, length)` so that repeated values show up often. When `length` is `None`, it is drawn
/// from `[1, MAX_RANDOM_LENGTH]` first.
pub fn sequence(seed: u64, length: Option<usize>, buffer: &mut Sequence) {
    let mut rng = StdRng::seed_from_u64(seed);
    let length = length.unwrap_or_else(|| rng.gen_range(1..=MAX_RANDOM_LENGTH));

    buffer.clear();
    for _ in 0..length {
        buffer.push(rng.gen_range(0..length as i64));
    }
}
