//! Default configuration values and process exit codes.

/// Default inclusive lower bound.
pub const DEFAULT_LOWER_LIMIT: i64 = 0;

/// Default inclusive upper bound (Project Euler problem 2).
pub const DEFAULT_UPPER_LIMIT: i64 = 4_000_000;

/// Even terms qualify by default.
pub const DEFAULT_INCLUDE_EVEN: bool = true;

/// Odd terms are excluded by default.
pub const DEFAULT_INCLUDE_ODD: bool = false;

/// Seed pair of the generated sequence: F(1) = 1, F(2) = 2.
pub const SEED_TERMS: [u32; 2] = [1, 2];

/// Exit codes reported by the `fibsum` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A limit argument was not an integer.
    pub const ERROR_INVALID_BOUND: i32 = 2;
    /// A parity argument was not a boolean.
    pub const ERROR_INVALID_PARITY: i32 = 3;
    /// Writing the output failed.
    pub const ERROR_IO: i32 = 4;
}
