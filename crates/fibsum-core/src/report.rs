//! Serializable snapshot of a summer's configuration and results.

use num_bigint::BigInt;
use serde::Serialize;

use crate::options::{serialize_decimal, serialize_decimals, RangeConfig};

/// Configuration, description and computed results of one summer.
///
/// Integers serialize as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SumReport {
    #[serde(flatten)]
    pub config: RangeConfig,
    pub description: String,
    #[serde(serialize_with = "serialize_decimal")]
    pub sum: BigInt,
    pub terms: usize,
    #[serde(serialize_with = "serialize_decimals")]
    pub sequence: Vec<BigInt>,
}

impl SumReport {
    #[must_use]
    pub fn new(config: RangeConfig, description: String, sequence: Vec<BigInt>) -> Self {
        let sum = sequence.iter().sum();
        Self {
            config,
            description,
            sum,
            terms: sequence.len(),
            sequence,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
