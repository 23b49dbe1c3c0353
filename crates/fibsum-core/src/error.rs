//! Construction errors.

/// Error raised when building a summer from untyped (text) input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SumError {
    /// A limit value is not an integer.
    #[error("please use numerical type arguments for limit values (got {0:?})")]
    InvalidBoundType(String),

    /// A parity setting is not a boolean.
    #[error("please use boolean type arguments for parity settings (got {0:?})")]
    InvalidParityType(String),
}
