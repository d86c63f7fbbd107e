use std::fmt;
use std::io::{Write, stderr, stdout};
use std::process::exit;

/// The error type for the argument module.
#[derive(Debug, PartialEq)]
pub enum ParseErr {
    /// An element given after `:::` is not an integer.
    ElementNaN(String),
    /// An invalid argument flag was provided.
    InvalidArgument(String),
    /// The jobs number parameter was not set to a number.
    JobsNaN(String),
    /// The jobs number parameter was not set.
    JobsNoValue,
    /// The length parameter was not set to a number.
    LengthNaN(String),
    /// The length parameter was not set.
    LengthNoValue,
    /// The seed parameter was not set to a number.
    SeedNaN(String),
    /// The seed parameter was not set.
    SeedNoValue,
    /// The trials parameter was not set to a number.
    TrialsNaN(String),
    /// The trials parameter was not set.
    TrialsNoValue,
}

impl fmt::Display for ParseErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseErr::ElementNaN(ref value)      => write!(f, "element, '{}', is not an integer.", value),
            ParseErr::InvalidArgument(ref value) => write!(f, "invalid argument: {}", value),
            ParseErr::JobsNaN(ref value)         => write!(f, "jobs parameter, '{}', is not a number.", value),
            ParseErr::JobsNoValue                => f.write_str("no jobs parameter was defined."),
            ParseErr::LengthNaN(ref value)       => write!(f, "length parameter, '{}', is not a number.", value),
            ParseErr::LengthNoValue              => f.write_str("no length parameter was defined."),
            ParseErr::SeedNaN(ref value)         => write!(f, "seed parameter, '{}', is not a number.", value),
            ParseErr::SeedNoValue                => f.write_str("no seed parameter was defined."),
            ParseErr::TrialsNaN(ref value)       => write!(f, "trials parameter, '{}', is not a number.", value),
            ParseErr::TrialsNoValue              => f.write_str("no trials parameter was defined."),
        }
    }
}

impl ParseErr {
    pub fn handle(self) -> ! {
        // Always lock an output buffer before using it.
        let stderr = stderr();
        let stdout = stdout();
        let mut stderr = stderr.lock();
        let mut stdout = stdout.lock();
        let _ = stderr.write(b"nextperm: parsing error: ");
        let _ = writeln!(stderr, "{}", self);
        let _ = stdout.write(b"For help on command-line usage, execute `nextperm -h`\n");
        exit(1);
    }
}
