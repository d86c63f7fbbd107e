use std::io::{self, Write};

/// Writes the elements of `sequence` separated by single spaces, without a trailing newline.
pub fn write_sequence<W: Write>(out: &mut W, sequence: &[i64]) -> io::Result<()> {
    let mut elements = sequence.iter();
    if let Some(&first) = elements.next() {
        itoa::write(&mut *out, first)?;
        for &element in elements {
            out.write_all(b" ")?;
            itoa::write(&mut *out, element)?;
        }
    }
    Ok(())
}

/// Writes a successor, or `none` when there is no successor.
pub fn write_answer<W: Write>(out: &mut W, answer: Option<&[i64]>) -> io::Result<()> {
    match answer {
        Some(sequence) => write_sequence(out, sequence),
        None           => out.write_all(b"none")
    }
}
