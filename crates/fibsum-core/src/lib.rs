//! # fibsum-core
//!
//! Sums and sequences of Fibonacci terms (the 1, 2, 3, 5, … variant)
//! filtered by an inclusive range and by parity.

pub mod constants;
pub mod error;
pub mod iterator;
pub mod options;
pub mod parity;
pub mod parse;
pub mod report;
pub mod summer;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_INCLUDE_EVEN, DEFAULT_INCLUDE_ODD, DEFAULT_LOWER_LIMIT,
    DEFAULT_UPPER_LIMIT,
};
pub use error::SumError;
pub use iterator::{BoundedTerms, TermIterator};
pub use options::RangeConfig;
pub use parity::ParitySelection;
pub use report::SumReport;
pub use summer::FibonacciRangeSummer;

use num_bigint::BigInt;

/// Sum the qualifying terms within `[lower_limit, upper_limit]`.
///
/// Convenience wrapper around [`FibonacciRangeSummer`] for one-shot use.
///
/// # Example
/// ```
/// assert_eq!(fibsum_core::range_sum(100, 1000, true, true).to_string(), "2351");
/// assert_eq!(fibsum_core::range_sum(900, 5, true, true).to_string(), "0");
/// ```
#[must_use]
pub fn range_sum(
    lower_limit: impl Into<BigInt>,
    upper_limit: impl Into<BigInt>,
    include_even: bool,
    include_odd: bool,
) -> BigInt {
    FibonacciRangeSummer::new(lower_limit, upper_limit, include_even, include_odd).sum()
}
