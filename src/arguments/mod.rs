pub mod errors;
mod jobs;
mod man;

pub use self::errors::ParseErr;

use std::io::{self, Write};
use std::iter::Peekable;
use std::process::exit;
use std::str::FromStr;

// Bit flags for the boolean options.
pub const VERBOSE_MODE: u16 = 1;
pub const QUIET_MODE:   u16 = 2;
pub const BRUTE_FORCE:  u16 = 4;

/// The number of random trials run when `--trials` is not given.
pub const DEFAULT_TRIALS: usize = 1000;

/// `Args` is a collection of critical options and arguments that were collected at
/// startup of the application.
#[derive(Debug, PartialEq)]
pub struct Args {
    /// The number of threads that random trials are spread across.
    pub ncores:   usize,
    /// The number of random trials to run.
    pub trials:   usize,
    /// A fixed length for every random sequence, or `None` to pick one per trial.
    pub length:   Option<usize>,
    /// The base seed; trial `i` is generated from `seed + i`.
    pub seed:     u64,
    /// Boolean options, stored as `VERBOSE_MODE`, `QUIET_MODE` and `BRUTE_FORCE` bits.
    pub flags:    u16,
    /// The sequence supplied after `:::`, if any. Random trials are skipped when it is set.
    pub elements: Option<Vec<i64>>,
}

impl Default for Args {
    fn default() -> Args {
        Args {
            ncores:   num_cpus::get(),
            trials:   DEFAULT_TRIALS,
            length:   None,
            seed:     default_seed(),
            flags:    0,
            elements: None,
        }
    }
}

impl Args {
    /// Collects options and elements from the given arguments, which should not include the
    /// program name.
    pub fn parse<I: Iterator<Item = String>>(&mut self, raw_args: I) -> Result<(), ParseErr> {
        let mut raw_args = raw_args.peekable();
        while let Some(argument) = raw_args.next() {
            let argument = argument.as_str();

            // Everything after `:::` is an element, including values that begin with `-`.
            if let Some(ref mut elements) = self.elements {
                let element = argument.parse::<i64>()
                    .map_err(|_| ParseErr::ElementNaN(argument.to_owned()))?;
                elements.push(element);
                continue
            }

            if argument == ":::" {
                self.elements = Some(Vec::new());
            } else if argument.starts_with("--") {
                self.parse_long(argument, &mut raw_args)?;
            } else if argument.starts_with('-') && argument.len() > 1 {
                self.parse_short(argument, &mut raw_args)?;
            } else {
                return Err(ParseErr::InvalidArgument(argument.to_owned()));
            }
        }

        Ok(())
    }

    /// These are all the long mode versions of the arguments.
    fn parse_long<I>(&mut self, argument: &str, raw_args: &mut Peekable<I>) -> Result<(), ParseErr>
        where I: Iterator<Item = String>
    {
        match &argument[2..] {
            "brute-force" => self.flags |= BRUTE_FORCE,
            "help" => print_and_exit(man::MAN_PAGE),
            "jobs" => self.set_value('j', raw_args.next())?,
            "length" => self.set_value('n', raw_args.next())?,
            "num-cpu-cores" => print_and_exit(&format!("{}\n", num_cpus::get())),
            "quiet" => self.flags |= QUIET_MODE,
            "seed" => self.set_value('s', raw_args.next())?,
            "trials" => self.set_value('t', raw_args.next())?,
            "verbose" => self.flags |= VERBOSE_MODE,
            _ => return Err(ParseErr::InvalidArgument(argument.to_owned()))
        }
        Ok(())
    }

    /// All characters following a single `-` are their own argument, so `-bv` sets both flags.
    /// Options that take a value consume the rest of the argument (`-t500`), or the following
    /// argument when nothing is left (`-t 500`).
    fn parse_short<I>(&mut self, argument: &str, raw_args: &mut Peekable<I>) -> Result<(), ParseErr>
        where I: Iterator<Item = String>
    {
        for (index, character) in argument.char_indices().skip(1) {
            match character {
                'b' => self.flags |= BRUTE_FORCE,
                'h' => print_and_exit(man::MAN_PAGE),
                'q' => self.flags |= QUIET_MODE,
                'v' => self.flags |= VERBOSE_MODE,
                'j' | 'n' | 's' | 't' => {
                    let attached = &argument[index + 1..];
                    let value = if attached.is_empty() { raw_args.next() } else { Some(attached.to_owned()) };
                    return self.set_value(character, value);
                },
                _ => return Err(ParseErr::InvalidArgument(argument.to_owned()))
            }
        }
        Ok(())
    }

    fn set_value(&mut self, option: char, value: Option<String>) -> Result<(), ParseErr> {
        match option {
            'j' => self.ncores = jobs::parse(&value.ok_or(ParseErr::JobsNoValue)?)?,
            'n' => self.length = Some(number(value, ParseErr::LengthNoValue, ParseErr::LengthNaN)?),
            's' => self.seed = number(value, ParseErr::SeedNoValue, ParseErr::SeedNaN)?,
            't' => self.trials = number(value, ParseErr::TrialsNoValue, ParseErr::TrialsNaN)?,
            _ => unreachable!()
        }
        Ok(())
    }
}

/// Parses an option's value, mapping a missing value and an unparseable one to their errors.
fn number<T: FromStr>(value: Option<String>, missing: ParseErr, nan: fn(String) -> ParseErr)
    -> Result<T, ParseErr>
{
    let value = value.ok_or(missing)?;
    value.parse::<T>().map_err(|_| nan(value))
}

fn print_and_exit(message: &str) -> ! {
    let stdout = io::stdout();
    let _ = stdout.lock().write_all(message.as_bytes());
    exit(0);
}

/// Derives a seed from the wall clock, for runs where none was given.
fn default_seed() -> u64 {
    let now = time::get_time();
    (now.sec as u64).wrapping_mul(1_000_000_000).wrapping_add(now.nsec as u64)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(arguments: &[&str]) -> Result<Args, ParseErr> {
        let mut args = Args { seed: 0, ncores: 2, .. Args::default() };
        args.parse(arguments.iter().map(|&argument| argument.to_owned()))?;
        Ok(args)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.trials, DEFAULT_TRIALS);
        assert_eq!(args.length, None);
        assert_eq!(args.flags, 0);
        assert_eq!(args.elements, None);
    }

    #[test]
    fn test_explicit_elements() {
        let args = parse(&["-v", ":::", "3", "-1", "2"]).unwrap();
        assert_eq!(args.elements, Some(vec![3, -1, 2]));
        assert_eq!(args.flags, VERBOSE_MODE);

        // An empty sequence is still an explicit sequence.
        assert_eq!(parse(&[":::"]).unwrap().elements, Some(Vec::new()));
    }

    #[test]
    fn test_short_options() {
        let args = parse(&["-bq", "-t500", "-n", "6", "-s", "42", "-j3"]).unwrap();
        assert_eq!(args.flags, BRUTE_FORCE | QUIET_MODE);
        assert_eq!(args.trials, 500);
        assert_eq!(args.length, Some(6));
        assert_eq!(args.seed, 42);
        assert_eq!(args.ncores, 3);
    }

    #[test]
    fn test_long_options() {
        let args = parse(&["--verbose", "--brute-force", "--trials", "7", "--length", "0",
            "--seed", "9", "--jobs", "5"]).unwrap();
        assert_eq!(args.flags, VERBOSE_MODE | BRUTE_FORCE);
        assert_eq!(args.trials, 7);
        assert_eq!(args.length, Some(0));
        assert_eq!(args.seed, 9);
        assert_eq!(args.ncores, 5);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse(&["-t"]), Err(ParseErr::TrialsNoValue));
        assert_eq!(parse(&["--length", "many"]), Err(ParseErr::LengthNaN("many".to_owned())));
        assert_eq!(parse(&["-s", "-4"]), Err(ParseErr::SeedNaN("-4".to_owned())));
        assert_eq!(parse(&["--jobs"]), Err(ParseErr::JobsNoValue));
        assert_eq!(parse(&["-x"]), Err(ParseErr::InvalidArgument("-x".to_owned())));
        assert_eq!(parse(&["-"]), Err(ParseErr::InvalidArgument("-".to_owned())));
        assert_eq!(parse(&["--frobnicate"]), Err(ParseErr::InvalidArgument("--frobnicate".to_owned())));
        assert_eq!(parse(&["1", "2"]), Err(ParseErr::InvalidArgument("1".to_owned())));
        assert_eq!(parse(&[":::", "1", "two"]), Err(ParseErr::ElementNaN("two".to_owned())));
    }
}
