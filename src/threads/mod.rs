use crate::arguments::{Args, BRUTE_FORCE, VERBOSE_MODE};
use crate::execute::{self, Mismatch, Sequence};
use crate::execute::random;
use crate::verbose;

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};

/// Tallies of the trials a worker, or the whole run, completed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Trials on which every implementation agreed.
    pub trials:        usize,
    /// Trials whose sequence had a successor.
    pub successors:    usize,
    /// Trials whose sequence was already the last permutation.
    pub last:          usize,
    /// Trials that the brute-force oracle also confirmed.
    pub brute_checked: usize,
}

impl Summary {
    fn merge(&mut self, other: Summary) {
        self.trials        += other.trials;
        self.successors    += other.successors;
        self.last          += other.last;
        self.brute_checked += other.brute_checked;
    }
}

/// Runs `args.trials` random trials spread across `args.ncores` threads. Every thread takes the
/// next trial number from a shared counter until none remain, or until any thread has found a
/// mismatch. When several mismatches are found, the one from the earliest trial is returned.
pub fn run_trials(args: &Args) -> Result<Summary, Mismatch> {
    let num_trials = args.trials;
    let nthreads   = args.ncores.min(num_trials).max(1);

    // Stores the next trial to be processed
    let shared_counter = Arc::new(AtomicUsize::new(0));
    // Signals every thread to stop once a mismatch has been found.
    let shared_failed  = Arc::new(AtomicBool::new(false));

    let mut threads: Vec<JoinHandle<Result<Summary, Mismatch>>> = Vec::with_capacity(nthreads);
    for _ in 0..nthreads {
        let counter = shared_counter.clone();
        let failed  = shared_failed.clone();
        let (seed, length, flags) = (args.seed, args.length, args.flags);

        let handle = thread::spawn(move || {
            let stdout = io::stdout();
            let mut summary = Summary::default();
            let mut buffer = Sequence::new();
            loop {
                // Atomically claim the next trial.
                let trial = counter.fetch_add(1, Ordering::SeqCst);
                if trial >= num_trials || failed.load(Ordering::SeqCst) { break }

                let trial_seed = seed.wrapping_add(trial as u64);
                random::sequence(trial_seed, length, &mut buffer);

                let answers = match execute::check(trial + 1, trial_seed, &buffer, flags & BRUTE_FORCE != 0) {
                    Ok(answers) => answers,
                    Err(mismatch) => {
                        failed.store(true, Ordering::SeqCst);
                        return Err(mismatch);
                    }
                };

                if flags & VERBOSE_MODE != 0 {
                    verbose::trial(&stdout, trial + 1, num_trials, &buffer, answers.primary.as_deref());
                }

                summary.trials += 1;
                if answers.primary.is_some() { summary.successors += 1 } else { summary.last += 1 }
                if answers.brute.is_some() { summary.brute_checked += 1 }
            }
            Ok(summary)
        });

        threads.push(handle);
    }

    let mut total = Summary::default();
    let mut first_mismatch: Option<Mismatch> = None;
    for thread in threads {
        match thread.join().expect("trial thread panicked") {
            Ok(summary) => total.merge(summary),
            Err(mismatch) => {
                let earlier = first_mismatch.as_ref().map_or(true, |first| mismatch.trial < first.trial);
                if earlier { first_mismatch = Some(mismatch); }
            }
        }
    }

    match first_mismatch {
        Some(mismatch) => Err(mismatch),
        None           => Ok(total)
    }
}
