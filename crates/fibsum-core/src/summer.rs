//! The range- and parity-filtered Fibonacci summer.
//!
//! Terms follow the 1, 2, 3, 5, … sequence. A term qualifies when its parity
//! is selected and it lies within the inclusive `[lower_limit, upper_limit]`
//! range. Configurations that can never admit a term (no parity selected,
//! non-positive upper limit, or `lower_limit >= upper_limit`) short-circuit
//! to an empty result.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use tracing::debug;

use crate::error::SumError;
use crate::iterator::TermIterator;
use crate::options::RangeConfig;
use crate::parity::ParitySelection;
use crate::parse::{parse_limit, parse_parity};
use crate::report::SumReport;

/// Computes sums and sequences of qualifying Fibonacci terms.
///
/// The configuration is fixed at construction; every query derives its
/// result freshly from it.
///
/// # Example
/// ```
/// use fibsum_core::FibonacciRangeSummer;
/// let summer = FibonacciRangeSummer::default();
/// assert_eq!(summer.sum().to_string(), "4613732");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FibonacciRangeSummer {
    config: RangeConfig,
}

impl FibonacciRangeSummer {
    #[must_use]
    pub fn new(
        lower_limit: impl Into<BigInt>,
        upper_limit: impl Into<BigInt>,
        include_even: bool,
        include_odd: bool,
    ) -> Self {
        Self::from_config(RangeConfig {
            lower_limit: lower_limit.into(),
            upper_limit: upper_limit.into(),
            include_even,
            include_odd,
        })
    }

    #[must_use]
    pub fn from_config(config: RangeConfig) -> Self {
        Self { config }
    }

    /// Build a summer from text arguments.
    ///
    /// Limits are validated before parity flags, so a call with both kinds
    /// of bad input reports [`SumError::InvalidBoundType`].
    pub fn from_raw(
        lower_limit: &str,
        upper_limit: &str,
        include_even: &str,
        include_odd: &str,
    ) -> Result<Self, SumError> {
        let lower_limit = parse_limit(lower_limit)?;
        let upper_limit = parse_limit(upper_limit)?;
        let include_even = parse_parity(include_even)?;
        let include_odd = parse_parity(include_odd)?;
        Ok(Self::new(lower_limit, upper_limit, include_even, include_odd))
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    pub fn lower_limit(&self) -> &BigInt {
        &self.config.lower_limit
    }

    pub fn upper_limit(&self) -> &BigInt {
        &self.config.upper_limit
    }

    pub fn include_even(&self) -> bool {
        self.config.include_even
    }

    pub fn include_odd(&self) -> bool {
        self.config.include_odd
    }

    pub fn parity(&self) -> ParitySelection {
        ParitySelection::from_flags(self.config.include_even, self.config.include_odd)
    }

    /// True when no term can ever qualify.
    pub fn is_degenerate(&self) -> bool {
        let RangeConfig {
            lower_limit,
            upper_limit,
            ..
        } = &self.config;
        self.parity() == ParitySelection::Neither
            || !upper_limit.is_positive()
            || lower_limit >= upper_limit
    }

    /// Whether `term` passes both the parity and the inclusive range filter.
    pub fn valid_term(&self, term: &BigInt) -> bool {
        self.parity().admits(term)
            && term <= &self.config.upper_limit
            && term >= &self.config.lower_limit
    }

    fn qualifying_terms(&self) -> impl Iterator<Item = BigInt> + '_ {
        TermIterator::new()
            .bounded(&self.config.upper_limit)
            .filter(move |term| self.valid_term(term))
    }

    /// Sum of all qualifying terms, or zero for a degenerate configuration.
    pub fn sum(&self) -> BigInt {
        if self.is_degenerate() {
            debug!(summer = %self, "degenerate range, sum is zero");
            return BigInt::zero();
        }
        let sum: BigInt = self.qualifying_terms().sum();
        debug!(summer = %self, %sum, "summed qualifying terms");
        sum
    }

    /// Qualifying terms in ascending order.
    pub fn sequence(&self) -> Vec<BigInt> {
        if self.is_degenerate() {
            debug!(summer = %self, "degenerate range, sequence is empty");
            return Vec::new();
        }
        let terms: Vec<BigInt> = self.qualifying_terms().collect();
        debug!(summer = %self, terms = terms.len(), "collected qualifying terms");
        terms
    }

    pub fn describe(&self) -> String {
        format!(
            "The sum of fibonacci numbers, including {} numbers, within {} and {}.",
            self.parity(),
            self.config.lower_limit,
            self.config.upper_limit
        )
    }

    /// Snapshot of the configuration together with the computed results.
    pub fn report(&self) -> SumReport {
        SumReport::new(self.config.clone(), self.describe(), self.sequence())
    }
}

impl fmt::Display for FibonacciRangeSummer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(lower: i64, upper: i64, even: bool, odd: bool) -> BigInt {
        FibonacciRangeSummer::new(lower, upper, even, odd).sum()
    }

    #[test]
    fn sums_bounded_range() {
        assert_eq!(sum(100, 1000, true, true), BigInt::from(2_351));
    }

    #[test]
    fn sums_large_range() {
        assert_eq!(
            sum(0, 10_000_000_000, true, true),
            BigInt::from(20_365_011_072i64)
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        // 34 and 5702887 are both terms.
        assert_eq!(sum(34, 5_702_887, true, true), BigInt::from(14_930_297));
    }

    #[test]
    fn default_solves_euler_two() {
        assert_eq!(FibonacciRangeSummer::default().sum(), BigInt::from(4_613_732));
        assert_eq!(sum(0, 4_000_000, true, false), BigInt::from(4_613_732));
    }

    #[test]
    fn inverted_range_is_zero() {
        let summer = FibonacciRangeSummer::new(900, 5, true, true);
        assert!(summer.is_degenerate());
        assert_eq!(summer.sum(), BigInt::zero());
        assert!(summer.sequence().is_empty());
    }

    #[test]
    fn no_parity_is_zero() {
        let summer = FibonacciRangeSummer::new(0, 200, false, false);
        assert!(summer.is_degenerate());
        assert_eq!(summer.sum(), BigInt::zero());
        assert!(summer.sequence().is_empty());
    }

    #[test]
    fn non_positive_upper_is_zero() {
        assert_eq!(sum(-10, 0, true, true), BigInt::zero());
        assert_eq!(sum(-100, -5, true, true), BigInt::zero());
    }

    #[test]
    fn equal_limits_are_degenerate() {
        // 8 is a term, but an equal lower and upper limit trips the guard.
        assert!(FibonacciRangeSummer::new(8, 8, true, true).is_degenerate());
        assert_eq!(sum(8, 8, true, true), BigInt::zero());
    }

    #[test]
    fn negative_lower_limit() {
        assert_eq!(sum(-50, 10, true, true), BigInt::from(19));
    }

    #[test]
    fn sequence_by_parity() {
        let as_i64 = |s: Vec<BigInt>| -> Vec<i64> {
            s.into_iter().map(|t| i64::try_from(t).unwrap()).collect()
        };
        let seq = |even, odd| as_i64(FibonacciRangeSummer::new(0, 100, even, odd).sequence());
        assert_eq!(seq(true, true), [1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
        assert_eq!(seq(true, false), [2, 8, 34]);
        assert_eq!(seq(false, true), [1, 3, 5, 13, 21, 55, 89]);
    }

    #[test]
    fn sequence_sums_to_sum() {
        let summer = FibonacciRangeSummer::new(100, 1000, true, true);
        let seq = summer.sequence();
        assert_eq!(
            seq,
            [144, 233, 377, 610, 987].map(BigInt::from).to_vec()
        );
        assert_eq!(seq.iter().sum::<BigInt>(), summer.sum());
    }

    #[test]
    fn overshoot_term_is_filtered() {
        // 13 is offered by the generator but lies above the limit.
        let summer = FibonacciRangeSummer::new(0, 10, true, true);
        assert!(!summer.valid_term(&BigInt::from(13)));
        assert_eq!(summer.sum(), BigInt::from(19));
    }

    #[test]
    fn valid_term_checks_every_condition() {
        let summer = FibonacciRangeSummer::new(10, 100, true, false);
        assert!(summer.valid_term(&BigInt::from(34)));
        assert!(summer.valid_term(&BigInt::from(10)));
        assert!(summer.valid_term(&BigInt::from(100)));
        assert!(!summer.valid_term(&BigInt::from(21)));
        assert!(!summer.valid_term(&BigInt::from(8)));
        assert!(!summer.valid_term(&BigInt::from(144)));
    }

    #[test]
    fn describe_four_way() {
        let describe = |even, odd| FibonacciRangeSummer::new(0, 200, even, odd).describe();
        assert_eq!(
            describe(true, true),
            "The sum of fibonacci numbers, including both even and odd numbers, within 0 and 200."
        );
        assert!(describe(true, false).contains("including only even numbers"));
        assert!(describe(false, true).contains("including only odd numbers"));
        assert!(describe(false, false).contains("including neither even nor odd numbers"));
    }

    #[test]
    fn describe_ignores_degenerate_guard() {
        let summer = FibonacciRangeSummer::new(900, 5, true, true);
        assert_eq!(
            summer.describe(),
            "The sum of fibonacci numbers, including both even and odd numbers, within 900 and 5."
        );
        assert_eq!(summer.to_string(), summer.describe());
    }

    #[test]
    fn from_raw_parses_text() {
        let summer = FibonacciRangeSummer::from_raw("100", "1000", "true", "true").unwrap();
        assert_eq!(summer, FibonacciRangeSummer::new(100, 1000, true, true));
        assert_eq!(summer.sum(), BigInt::from(2_351));
    }

    #[test]
    fn from_raw_rejects_bad_bounds_first() {
        assert_eq!(
            FibonacciRangeSummer::from_raw("yes", "0", "ok", "true"),
            Err(SumError::InvalidBoundType("yes".into()))
        );
        assert_eq!(
            FibonacciRangeSummer::from_raw("2", "1.5", "true", "true"),
            Err(SumError::InvalidBoundType("1.5".into()))
        );
    }

    #[test]
    fn from_raw_rejects_bad_parity() {
        assert_eq!(
            FibonacciRangeSummer::from_raw("2", "0", "ok", "true"),
            Err(SumError::InvalidParityType("ok".into()))
        );
        assert_eq!(
            FibonacciRangeSummer::from_raw("2", "0", "true", "1"),
            Err(SumError::InvalidParityType("1".into()))
        );
    }

    #[test]
    fn summer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FibonacciRangeSummer>();

        let summer = FibonacciRangeSummer::default();
        let sums: Vec<BigInt> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| summer.sum())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(sums.iter().all(|s| *s == BigInt::from(4_613_732)));
    }

    #[test]
    fn accessors_expose_config() {
        let summer = FibonacciRangeSummer::new(-3, 42, false, true);
        assert_eq!(summer.lower_limit(), &BigInt::from(-3));
        assert_eq!(summer.upper_limit(), &BigInt::from(42));
        assert!(!summer.include_even());
        assert!(summer.include_odd());
        assert_eq!(summer.parity(), ParitySelection::OddOnly);
        assert_eq!(summer.config().upper_limit, BigInt::from(42));
    }
}
