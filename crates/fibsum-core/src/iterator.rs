//! Lazy term iterators over the doubled-start Fibonacci sequence.

use num_bigint::BigInt;

use crate::constants::SEED_TERMS;

/// Lazy, unbounded iterator over the sequence 1, 2, 3, 5, 8, …
///
/// # Example
/// ```
/// use fibsum_core::iterator::TermIterator;
/// let terms: Vec<_> = TermIterator::new().take(6).map(|t| t.to_string()).collect();
/// assert_eq!(terms, ["1", "2", "3", "5", "8", "13"]);
/// ```
pub struct TermIterator {
    a: BigInt,
    b: BigInt,
}

impl TermIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: BigInt::from(SEED_TERMS[0]),
            b: BigInt::from(SEED_TERMS[1]),
        }
    }

    /// Bound the iteration by `upper_limit`.
    ///
    /// See [`BoundedTerms`] for the exact stopping rule.
    #[must_use]
    pub fn bounded(self, upper_limit: &BigInt) -> BoundedTerms<'_> {
        BoundedTerms {
            terms: self,
            upper_limit,
            offered: 0,
            done: false,
        }
    }
}

impl Default for TermIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for TermIterator {
    type Item = BigInt;

    fn next(&mut self) -> Option<Self::Item> {
        let next = &self.a + &self.b;
        let val = std::mem::replace(&mut self.a, std::mem::replace(&mut self.b, next));
        Some(val)
    }
}

/// Terms offered to the filter for a given upper limit.
///
/// Both seeds are always offered. After that, iteration continues while the
/// previously offered term is `<= upper_limit`, so exactly one term above
/// the limit is offered before stopping. Consumers must still apply their
/// own upper bound check.
pub struct BoundedTerms<'a> {
    terms: TermIterator,
    upper_limit: &'a BigInt,
    offered: usize,
    done: bool,
}

impl Iterator for BoundedTerms<'_> {
    type Item = BigInt;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let term = self.terms.next()?;
        self.offered += 1;
        if self.offered >= SEED_TERMS.len() && term > *self.upper_limit {
            self.done = true;
        }
        Some(term)
    }
}
