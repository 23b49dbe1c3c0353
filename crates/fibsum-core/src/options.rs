//! Summer configuration.

use num_bigint::BigInt;
use serde::{Serialize, Serializer};

use crate::constants::{
    DEFAULT_INCLUDE_EVEN, DEFAULT_INCLUDE_ODD, DEFAULT_LOWER_LIMIT, DEFAULT_UPPER_LIMIT,
};

/// Range and parity configuration for a [`FibonacciRangeSummer`].
///
/// Both limits are inclusive. An inverted or non-positive range is a valid
/// configuration that simply admits no terms.
///
/// [`FibonacciRangeSummer`]: crate::summer::FibonacciRangeSummer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeConfig {
    /// Inclusive lower bound.
    #[serde(serialize_with = "serialize_decimal")]
    pub lower_limit: BigInt,
    /// Inclusive upper bound.
    #[serde(serialize_with = "serialize_decimal")]
    pub upper_limit: BigInt,
    /// Whether even terms qualify.
    pub include_even: bool,
    /// Whether odd terms qualify.
    pub include_odd: bool,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            lower_limit: BigInt::from(DEFAULT_LOWER_LIMIT),
            upper_limit: BigInt::from(DEFAULT_UPPER_LIMIT),
            include_even: DEFAULT_INCLUDE_EVEN,
            include_odd: DEFAULT_INCLUDE_ODD,
        }
    }
}

/// Serialize a `BigInt` as a decimal string so no precision is lost in JSON.
pub(crate) fn serialize_decimal<S: Serializer>(value: &BigInt, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

/// Serialize a slice of `BigInt` as decimal strings.
pub(crate) fn serialize_decimals<S: Serializer>(
    values: &[BigInt],
    s: S,
) -> Result<S::Ok, S::Error> {
    s.collect_seq(values.iter().map(ToString::to_string))
}
