//! Parity selection derived from the even/odd inclusion flags.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;

/// Which parity classes of terms qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParitySelection {
    Both,
    EvenOnly,
    OddOnly,
    Neither,
}

impl ParitySelection {
    #[must_use]
    pub fn from_flags(include_even: bool, include_odd: bool) -> Self {
        match (include_even, include_odd) {
            (true, true) => Self::Both,
            (true, false) => Self::EvenOnly,
            (false, true) => Self::OddOnly,
            (false, false) => Self::Neither,
        }
    }

    /// Whether `term` has an admitted parity. Range is not considered.
    #[must_use]
    pub fn admits(self, term: &BigInt) -> bool {
        match self {
            Self::Both => true,
            Self::EvenOnly => term.is_even(),
            Self::OddOnly => term.is_odd(),
            Self::Neither => false,
        }
    }

    /// Human-readable phrase used in summer descriptions.
    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Both => "both even and odd",
            Self::EvenOnly => "only even",
            Self::OddOnly => "only odd",
            Self::Neither => "neither even nor odd",
        }
    }
}

impl fmt::Display for ParitySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}
