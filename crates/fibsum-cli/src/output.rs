//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use num_bigint::BigInt;

/// Sequences longer than this are elided unless verbose.
pub const SEQUENCE_ELIDE_THRESHOLD: usize = 25;

/// Terms kept at each end of an elided sequence.
pub const SEQUENCE_ELIDE_KEEP: usize = 10;

/// Format an integer with thousand separators, keeping any sign.
#[must_use]
pub fn format_number(n: &BigInt) -> String {
    let s = n.magnitude().to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3 + 1);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n.sign() == num_bigint::Sign::Minus {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Format a sequence of terms, eliding the middle of long sequences.
#[must_use]
pub fn format_sequence(terms: &[BigInt], verbose: bool) -> String {
    if !verbose && terms.len() > SEQUENCE_ELIDE_THRESHOLD {
        let head: Vec<String> = terms[..SEQUENCE_ELIDE_KEEP]
            .iter()
            .map(ToString::to_string)
            .collect();
        let tail: Vec<String> = terms[terms.len() - SEQUENCE_ELIDE_KEEP..]
            .iter()
            .map(ToString::to_string)
            .collect();
        format!(
            "{}, ..., {} ({} terms)",
            head.join(", "),
            tail.join(", "),
            terms.len()
        )
    } else {
        terms
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Write rendered output to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: impl AsRef<Path>, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{contents}")?;
    Ok(())
}
