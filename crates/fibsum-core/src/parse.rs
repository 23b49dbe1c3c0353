//! Validation of untyped (text) construction arguments.
//!
//! Typed callers construct a summer directly; these parsers serve callers
//! that receive limits and parity flags as text, such as the CLI.

use num_bigint::BigInt;

use crate::error::SumError;

/// Parse an integer limit: an optional sign followed by decimal digits.
pub fn parse_limit(raw: &str) -> Result<BigInt, SumError> {
    let s = raw.trim();
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SumError::InvalidBoundType(raw.to_string()));
    }
    s.parse::<BigInt>()
        .map_err(|_| SumError::InvalidBoundType(raw.to_string()))
}

/// Parse a parity flag: `true` or `false`, ignoring ASCII case.
pub fn parse_parity(raw: &str) -> Result<bool, SumError> {
    let s = raw.trim();
    if s.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if s.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(SumError::InvalidParityType(raw.to_string()))
    }
}
