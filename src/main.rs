mod arguments;
mod execute;
mod misc;
mod threads;
mod verbose;

use arguments::{Args, QUIET_MODE, BRUTE_FORCE, VERBOSE_MODE};
use execute::Mismatch;

use std::env;
use std::io::{self, Write};
use std::process::exit;

/// Exit status used when the implementations disagree.
const MISMATCH_STATUS: i32 = 2;

fn main() {
    // Let's collect all parameters that we need from the program's arguments.
    // If an error is returned, this will handle that error and exit.
    let mut args = Args::default();
    if let Err(why) = args.parse(env::args().skip(1)) {
        why.handle();
    }

    let stdout = io::stdout();

    // A sequence given on the command line is checked once and its successor printed.
    if let Some(ref elements) = args.elements {
        match execute::check(0, args.seed, elements, args.flags & BRUTE_FORCE != 0) {
            Ok(answers) => {
                let mut stdout = stdout.lock();
                let _ = misc::write_answer(&mut stdout, answers.primary.as_deref());
                let _ = stdout.write(b"\n");
            },
            Err(mismatch) => report_and_exit(mismatch)
        }
        return
    }

    if args.flags & VERBOSE_MODE != 0 {
        let nthreads = args.ncores.min(args.trials).max(1);
        verbose::total_trials(&stdout, args.trials, nthreads, args.seed);
    }

    let start = time::precise_time_ns();
    match threads::run_trials(&args) {
        Ok(summary) => if args.flags & QUIET_MODE == 0 {
            verbose::summary(&stdout, &summary, time::precise_time_ns() - start);
        },
        Err(mismatch) => report_and_exit(mismatch)
    }
}

fn report_and_exit(mismatch: Mismatch) -> ! {
    let stderr = io::stderr();
    let _ = mismatch.report(&mut stderr.lock());
    exit(MISMATCH_STATUS);
}
