use crate::misc::{write_answer, write_sequence};
use crate::threads::Summary;
use numtoa::NumToA;
use std::io::{Stdout, Write};

pub fn total_trials(stdout: &Stdout, trials: usize, threads: usize, seed: u64) {
    let mut buffer = [0u8; 20];
    let mut stdout = stdout.lock();
    let _ = stdout.write(b"nextperm: running ");
    let _ = stdout.write(trials.numtoa(10, &mut buffer));
    let _ = stdout.write(b" trials on ");
    let _ = stdout.write(threads.numtoa(10, &mut buffer));
    let _ = stdout.write(b" threads with seed ");
    let _ = stdout.write(seed.numtoa(10, &mut buffer));
    let _ = stdout.write(b"\n");
}

pub fn trial(stdout: &Stdout, job: usize, total: usize, input: &[i64], answer: Option<&[i64]>) {
    let mut buffer = [0u8; 20];
    let mut stdout = stdout.lock();
    let _ = stdout.write(b"nextperm: trial #");
    let _ = stdout.write(job.numtoa(10, &mut buffer));
    let _ = stdout.write(b" of ");
    let _ = stdout.write(total.numtoa(10, &mut buffer));
    let _ = stdout.write(b": ");
    let _ = write_sequence(&mut stdout, input);
    let _ = stdout.write(b" -> ");
    let _ = write_answer(&mut stdout, answer);
    let _ = stdout.write(b"\n");
}

pub fn summary(stdout: &Stdout, summary: &Summary, runtime: u64) {
    let mut buffer = [0u8; 20];
    let mut stdout = stdout.lock();
    let _ = stdout.write(b"nextperm: ");
    let _ = stdout.write(summary.trials.numtoa(10, &mut buffer));
    let _ = stdout.write(b" trials agreed (");
    let _ = stdout.write(summary.successors.numtoa(10, &mut buffer));
    let _ = stdout.write(b" successors, ");
    let _ = stdout.write(summary.last.numtoa(10, &mut buffer));
    let _ = stdout.write(b" last permutations, ");
    let _ = stdout.write(summary.brute_checked.numtoa(10, &mut buffer));
    let _ = stdout.write(b" brute-force checked) in ");

    // Runtime in seconds, with three decimal places.
    let _ = stdout.write((runtime / 1_000_000_000).numtoa(10, &mut buffer));
    let _ = write!(stdout, ".{:03}s\n", (runtime % 1_000_000_000) / 1_000_000);
}
