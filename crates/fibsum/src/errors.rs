//! Error handling and exit codes.

use fibsum_core::constants::exit_codes;
use fibsum_core::SumError;

/// Map a validation error to its exit code.
pub fn handle_error(err: &SumError) -> i32 {
    match err {
        SumError::InvalidBoundType(_) => exit_codes::ERROR_INVALID_BOUND,
        SumError::InvalidParityType(_) => exit_codes::ERROR_INVALID_PARITY,
    }
}

/// Map any application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(sum_err) = err.downcast_ref::<SumError>() {
        handle_error(sum_err)
    } else if err.downcast_ref::<std::io::Error>().is_some() {
        exit_codes::ERROR_IO
    } else {
        exit_codes::ERROR_GENERIC
    }
}
