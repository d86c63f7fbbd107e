use super::errors::ParseErr;

/// Receives an input that is either an integer, or percent. If the string ends with `%`, it will
/// be calculated as a percent of the total number of CPU cores. Otherwise, the number provided
/// will be considered the number of threads to spread trials across. At least one thread is
/// always used.
pub fn parse(value: &str) -> Result<usize, ParseErr> {
    let ncores = if value.ends_with('%') {
        // If the last character is `%`, then all but the last character are the value.
        value[..value.len() - 1].parse::<usize>()
            .map(|percent| num_cpus::get().saturating_mul(percent) / 100)
            .map_err(|_| ParseErr::JobsNaN(value.to_owned()))?
    } else {
        value.parse::<usize>().map_err(|_| ParseErr::JobsNaN(value.to_owned()))?
    };

    Ok(if ncores == 0 { 1 } else { ncores })
}

#[test]
fn test_parse() {
    let ncores = num_cpus::get();
    assert_eq!(((ncores * 50) / 100).max(1), parse("50%" ).unwrap());
    assert_eq!((ncores * 100) / 100,         parse("100%").unwrap());
    assert_eq!((ncores * 150) / 100,         parse("150%").unwrap());
    assert_eq!(4,                            parse("4"   ).unwrap());
    assert_eq!(1,                            parse("0"   ).unwrap());
    assert_eq!(Err(ParseErr::JobsNaN("x%".to_owned())), parse("x%"));
    assert_eq!(Err(ParseErr::JobsNaN("%".to_owned())),  parse("%"));

    // Oversized percentages saturate instead of overflowing.
    assert_eq!(usize::MAX / 100, parse(&format!("{}%", usize::MAX)).unwrap());
}
