//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;
use fibsum_cli::OutputMode;
use fibsum_core::{
    FibonacciRangeSummer, SumError, DEFAULT_INCLUDE_EVEN, DEFAULT_INCLUDE_ODD,
    DEFAULT_LOWER_LIMIT, DEFAULT_UPPER_LIMIT,
};

/// FibSum: sums of Fibonacci numbers (1, 2, 3, 5, ...) filtered by an
/// inclusive range and by parity.
///
/// Limits and parity flags are taken as text and validated, so
/// non-integer limits or non-boolean flags are reported as errors.
#[derive(Parser, Debug)]
#[command(name = "fibsum", version, about)]
pub struct AppConfig {
    /// Inclusive lower limit.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LOWER_LIMIT.to_string(),
        env = "FIBSUM_LOWER",
        allow_hyphen_values = true
    )]
    pub lower: String,

    /// Inclusive upper limit.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_UPPER_LIMIT.to_string(),
        env = "FIBSUM_UPPER",
        allow_hyphen_values = true
    )]
    pub upper: String,

    /// Include even terms (true or false).
    #[arg(long, default_value_t = DEFAULT_INCLUDE_EVEN.to_string(), env = "FIBSUM_EVEN")]
    pub even: String,

    /// Include odd terms (true or false).
    #[arg(long, default_value_t = DEFAULT_INCLUDE_ODD.to_string(), env = "FIBSUM_ODD")]
    pub odd: String,

    /// What to show.
    #[arg(short, long, value_enum, default_value_t = OutputMode::Sum)]
    pub mode: OutputMode,

    /// Quiet mode (only raw values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (full sequences, term count, timing).
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit a JSON report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validate the limit and parity arguments and build the summer.
    pub fn summer(&self) -> Result<FibonacciRangeSummer, SumError> {
        FibonacciRangeSummer::from_raw(&self.lower, &self.upper, &self.even, &self.odd)
    }
}
